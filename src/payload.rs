//! Submission payload
//!
//! The single JSON object sent over the wire: `{"url": ..., "code": ...}`.

use serde::{Deserialize, Serialize};

use crate::error::SendResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Payload {
    pub url: String,
    pub code: String,
}

impl Payload {
    pub fn new(url: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            code: code.into(),
        }
    }

    /// Encode as compact JSON text, `url` first.
    pub fn to_json(&self) -> SendResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> SendResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
