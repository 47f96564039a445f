use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// The server-supplied `detail` of a non-success response, if it carried a
    /// non-empty one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }

    /// Whether the request never produced a usable response.
    pub fn is_transport(&self) -> bool {
        !matches!(self, ApiError::Status { .. })
    }
}
