use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use crate::error::{Error, Result};

/// `{ "success": bool, ... }` as returned by every `/api` endpoint. The
/// payload lives under an endpoint-specific key (`products`, `stats`, ...).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Envelope {
    /// Decodes the payload stored under `key`.
    ///
    /// Returns `Ok(None)` when the server reported `success: false`, so a
    /// caller cannot apply data from a failed envelope by accident.
    pub fn into_payload<T: DeserializeOwned>(mut self, key: &str) -> Result<Option<T>> {
        if !self.success {
            return Ok(None);
        }

        let value = self
            .fields
            .remove(key)
            .ok_or_else(|| Error::MissingField(key.to_string()))?;

        Ok(Some(serde_json::from_value(value)?))
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}
