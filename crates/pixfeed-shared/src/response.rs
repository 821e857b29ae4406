//! Error body returned by every failing endpoint.

use serde::{Deserialize, Serialize};

/// `{"error": "..."}` - a single human-readable message, no internals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
