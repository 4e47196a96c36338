use std::sync::Arc;
use async_trait::async_trait;
use tracing::{error, debug};
use crate::clients::HttpClient;
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::models::{
    DashboardStats, Envelope, FileUpload, Ping, Product, ProductDraft, ProductFilter,
    RequestDescriptor, User,
};

/// Where search results come from. `ApiService` is the real source; tests
/// plug in a counting fake.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn search_products(&self, query: &str) -> Result<Option<Vec<Product>>>;
}

/// Where dashboard counters come from.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn dashboard_stats(&self) -> Result<Option<DashboardStats>>;
}

#[derive(Clone)]
pub struct ApiService {
    client: Arc<HttpClient>,
}

impl ApiService {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpClient::new(api)?)))
    }

    /// Performs exactly one exchange and decodes the body as an envelope.
    /// Any failure is logged before it is handed back.
    pub async fn request(&self, descriptor: &RequestDescriptor) -> Result<Envelope> {
        let result = self.exchange(descriptor).await;

        if let Err(e) = &result {
            error!(
                error = %e,
                kind = e.kind(),
                resource = descriptor.resource(),
                method = ?descriptor.method(),
                "API request failed"
            );
        }

        result
    }

    async fn exchange(&self, descriptor: &RequestDescriptor) -> Result<Envelope> {
        let request = self.client.build(descriptor)?;
        let response = self.client.send(request).await?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|e| {
            let body_str = String::from_utf8_lossy(&body);
            debug!(
                error = %e,
                body = %body_str,
                "Invalid JSON response"
            );
            Error::from(e)
        })
    }

    pub async fn ping(&self) -> Result<Option<Ping>> {
        let envelope = self.request(&RequestDescriptor::get("/api/ping")?).await?;
        if !envelope.success {
            return Ok(None);
        }

        let authenticated = envelope
            .field("authenticated")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        Ok(Some(Ping {
            message: envelope.message.unwrap_or_default(),
            authenticated,
        }))
    }

    pub async fn dashboard_stats(&self) -> Result<Option<DashboardStats>> {
        self.request(&RequestDescriptor::get("/api/stats/dashboard")?)
            .await?
            .into_payload("stats")
    }

    pub async fn search_products(&self, query: &str) -> Result<Option<Vec<Product>>> {
        self.list_products(&ProductFilter::search(query)).await
    }

    pub async fn list_products(&self, filter: &ProductFilter) -> Result<Option<Vec<Product>>> {
        let descriptor = filter
            .to_query()
            .into_iter()
            .fold(RequestDescriptor::get("/api/products")?, |d, (k, v)| d.query(k, v));

        self.request(&descriptor).await?.into_payload("products")
    }

    pub async fn get_product(&self, id: i64) -> Result<Option<Product>> {
        self.request(&RequestDescriptor::get(format!("/api/products/{}", id))?)
            .await?
            .into_payload("product")
    }

    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Option<Product>> {
        let descriptor = RequestDescriptor::post("/api/products")?.payload(draft)?;
        self.request(&descriptor).await?.into_payload("product")
    }

    pub async fn update_product(&self, id: i64, draft: &ProductDraft) -> Result<Option<Product>> {
        let descriptor = RequestDescriptor::put(format!("/api/products/{}", id))?.payload(draft)?;
        self.request(&descriptor).await?.into_payload("product")
    }

    /// `true` when the server confirmed the deletion.
    pub async fn delete_product(&self, id: i64) -> Result<bool> {
        let envelope = self
            .request(&RequestDescriptor::delete(format!("/api/products/{}", id))?)
            .await?;
        Ok(envelope.success)
    }

    /// Admin only; other accounts get a 403 and therefore an error.
    pub async fn list_users(&self) -> Result<Option<Vec<User>>> {
        self.request(&RequestDescriptor::get("/api/users")?)
            .await?
            .into_payload("users")
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<User>> {
        self.request(&RequestDescriptor::get(format!("/api/users/{}", id))?)
            .await?
            .into_payload("user")
    }

    pub async fn list_uploads(&self) -> Result<Option<Vec<FileUpload>>> {
        self.request(&RequestDescriptor::get("/api/uploads")?)
            .await?
            .into_payload("uploads")
    }
}

#[async_trait]
impl ProductSource for ApiService {
    async fn search_products(&self, query: &str) -> Result<Option<Vec<Product>>> {
        ApiService::search_products(self, query).await
    }
}

#[async_trait]
impl StatsSource for ApiService {
    async fn dashboard_stats(&self) -> Result<Option<DashboardStats>> {
        ApiService::dashboard_stats(self).await
    }
}
