use crate::model::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound(String),

    #[error("Student is already signed up")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Student is not signed up for this activity")]
    NotSignedUp { activity: String, email: String },

    #[error("Activity is full")]
    ActivityFull(String),
}

impl SignupError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SignupError::ActivityNotFound(_) => StatusCode::NOT_FOUND,
            SignupError::AlreadySignedUp { .. }
            | SignupError::NotSignedUp { .. }
            | SignupError::ActivityFull(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Renders as `{"detail": "..."}` with the matching status code.
impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
