use serde::Serialize;
use serde_json::Value;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Put => http::Method::PUT,
            Method::Delete => http::Method::DELETE,
        }
    }
}

/// A single API call: a path under the configured base URL, a verb and an
/// optional JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    resource: String,
    method: Method,
    query: Vec<(String, String)>,
    payload: Option<Value>,
}

impl RequestDescriptor {
    pub fn new(resource: impl Into<String>, method: Method) -> Result<Self> {
        let resource = resource.into();
        if resource.trim().is_empty() || !resource.starts_with('/') {
            return Err(Error::InvalidResource(resource));
        }

        Ok(Self {
            resource,
            method,
            query: Vec::new(),
            payload: None,
        })
    }

    pub fn get(resource: impl Into<String>) -> Result<Self> {
        Self::new(resource, Method::Get)
    }

    pub fn post(resource: impl Into<String>) -> Result<Self> {
        Self::new(resource, Method::Post)
    }

    pub fn put(resource: impl Into<String>) -> Result<Self> {
        Self::new(resource, Method::Put)
    }

    pub fn delete(resource: impl Into<String>) -> Result<Self> {
        Self::new(resource, Method::Delete)
    }

    /// Query parameters are percent-encoded when the request is built.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn payload<T: Serialize>(mut self, payload: &T) -> Result<Self> {
        if self.method == Method::Get {
            return Err(Error::PayloadNotAllowed);
        }
        self.payload = Some(serde_json::to_value(payload)?);
        Ok(self)
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.payload.as_ref()
    }
}
