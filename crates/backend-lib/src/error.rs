// crates/backend-lib/src/error.rs

//! Central error type + Axum integration.
//!
//! One variant per failure class the API can surface. The 401 variants render
//! a fixed `message` body; prediction-side failures expose the underlying
//! description under `error`; internal failures are sanitized.

use arbor_common::{ErrorBody, MessageBody};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Application error kinds
#[derive(Error, Debug)]
pub enum AppError {
    /// Login failed; never says which field was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bearer token missing, malformed, tampered with, or expired.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The model artifact failed to load at startup.
    #[error("model is not available")]
    ModelUnavailable,

    /// Anything that went wrong between payload and label.
    #[error("{0}")]
    Prediction(String),

    /// Unexpected server-side failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::ModelUnavailable | AppError::Prediction(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            AppError::InvalidCredentials | AppError::InvalidToken => {
                let body = MessageBody {
                    message: self.to_string(),
                };
                (status, Json(body)).into_response()
            }
            AppError::ModelUnavailable | AppError::Prediction(_) => {
                let body = ErrorBody {
                    error: self.to_string(),
                };
                (status, Json(body)).into_response()
            }
            AppError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                let body = ErrorBody {
                    error: "internal server error".to_string(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
