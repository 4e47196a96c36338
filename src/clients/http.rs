use rquest::{Client, Response, RequestBuilder};
use rquest_util::Emulation;
use http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::models::RequestDescriptor;
use tracing::{error, debug};

pub fn parse_emulation(name: &str) -> Result<Emulation> {
    match name {
        "Chrome133" => Ok(Emulation::Chrome133),
        "Firefox136" => Ok(Emulation::Firefox136),
        "Safari18_3" => Ok(Emulation::Safari18_3),
        "Edge134" => Ok(Emulation::Edge134),
        other => Err(Error::InvalidEmulation(other.to_string())),
    }
}

pub struct HttpClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl HttpClient {
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        for (key, value) in api.headers.iter() {
            if let (Ok(header_name), Ok(header_value)) = (
                HeaderName::from_bytes(key.as_bytes()),
                HeaderValue::from_str(value)
            ) {
                headers.insert(header_name, header_value);
                debug!(
                    header_key = key,
                    header_value = value,
                    "Adding header"
                );
            } else {
                error!(
                    header_key = key,
                    header_value = value,
                    "Invalid header value"
                );
            }
        }

        let emulation = parse_emulation(&api.emulation)?;

        debug!(
            emulation = ?emulation,
            base_url = %api.base_url,
            "Creating client with emulation"
        );

        let client = Client::builder()
            .emulation(emulation)
            .build()?;

        Ok(Self {
            client,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            headers,
        })
    }

    pub fn url(&self, resource: &str) -> String {
        format!("{}{}", self.base_url, resource)
    }

    pub fn build(&self, descriptor: &RequestDescriptor) -> Result<RequestBuilder> {
        let url = self.url(descriptor.resource());
        let mut request = self.client.request(descriptor.method().into(), &url);

        for (key, value) in self.headers.iter() {
            request = request.header(key, value);
        }

        if !descriptor.query_pairs().is_empty() {
            request = request.query(descriptor.query_pairs());
        }

        if let Some(payload) = descriptor.body() {
            let body = serde_json::to_vec(payload)?;
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body);
        }

        debug!(
            url = %url,
            method = ?descriptor.method(),
            has_payload = descriptor.body().is_some(),
            "Creating request"
        );

        Ok(request)
    }

    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;

        debug!(
            status = response.status().as_u16(),
            url = %response.url(),
            "Response received"
        );

        let status = response.status();
        if !status.is_success() {
            debug!(
                status = status.as_u16(),
                url = %response.url(),
                "Non-success status"
            );
            return Err(Error::Status(status));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn api_config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            emulation: "Firefox136".to_string(),
            headers: HashMap::from([("x-requested-with".to_string(), "XMLHttpRequest".to_string())]),
        }
    }

    #[test]
    fn unknown_emulation_is_rejected() {
        assert!(matches!(parse_emulation("Netscape4"), Err(Error::InvalidEmulation(_))));
        assert!(parse_emulation("Safari18_3").is_ok());
    }

    #[tokio::test]
    async fn joins_resource_without_double_slash() {
        let client = HttpClient::new(&api_config("http://shop.local/")).unwrap();
        assert_eq!(client.url("/api/ping"), "http://shop.local/api/ping");
    }

    #[tokio::test]
    async fn payload_request_is_marked_as_json() {
        let client = HttpClient::new(&api_config("http://shop.local")).unwrap();
        let descriptor = RequestDescriptor::put("/api/products/3")
            .unwrap()
            .payload(&serde_json::json!({ "price": 12.0 }))
            .unwrap();

        let request = client.build(&descriptor).unwrap().build().unwrap();

        assert_eq!(request.method(), http::Method::PUT);
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(request.headers()["x-requested-with"], "XMLHttpRequest");
    }

    #[tokio::test]
    async fn query_is_percent_encoded() {
        let client = HttpClient::new(&api_config("http://shop.local")).unwrap();
        let descriptor = RequestDescriptor::get("/api/products")
            .unwrap()
            .query("search", "thé & café");

        let request = client.build(&descriptor).unwrap().build().unwrap();

        assert_eq!(
            request.url().as_str(),
            "http://shop.local/api/products?search=th%C3%A9+%26+caf%C3%A9"
        );
    }
}
