use serde::{Deserialize, Serialize};

/// Success body of the signup and unregister endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Failure body of the signup and unregister endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        ErrorResponse {
            detail: Some(detail.into()),
        }
    }
}
