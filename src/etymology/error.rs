//! Etymology error model
//!
//! Callers see a single error code for every failure; validation and
//! internal failures differ only in their message.

use serde_json::{json, Value};

/// Error code carried by every error envelope
pub const ERROR_CODE: &str = "ETYMOLOGY_ERROR";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EtymologyError {
    /// Street name missing, or empty after trimming
    #[error("Street name is required")]
    InvalidInput,

    /// Any unexpected failure while building the response
    #[error("{0}")]
    Internal(String),
}

impl EtymologyError {
    pub fn code(&self) -> &'static str {
        ERROR_CODE
    }

    /// `{ "error": { "code": "ETYMOLOGY_ERROR", "message": ... } }`
    pub fn to_envelope(&self) -> Value {
        json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        })
    }
}
