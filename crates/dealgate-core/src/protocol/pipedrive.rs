//! Pipedrive deal envelopes.

use serde::Deserialize;
use serde_json::Value;

/// Failure envelope returned alongside a non-2xx status.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    /// Usually a string, but passed through untouched.
    #[serde(default)]
    pub error: Option<Value>,
}

impl ErrorEnvelope {
    /// Best-effort decode; a non-JSON or differently shaped body yields an
    /// empty envelope rather than an error.
    pub fn from_slice(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Result of listing deals, after unwrapping the `data` field.
#[derive(Debug, PartialEq)]
pub enum DealList {
    Found(Value),
    Empty,
}

impl DealList {
    /// Unwrap `data` from a list response. `null`, a missing field and an
    /// empty array all mean there is nothing to return.
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut map) => match map.remove("data") {
                None | Some(Value::Null) => DealList::Empty,
                Some(Value::Array(items)) if items.is_empty() => DealList::Empty,
                Some(data) => DealList::Found(data),
            },
            _ => DealList::Empty,
        }
    }
}
