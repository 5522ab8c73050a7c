//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    /// No row matched the identifier. Carries the resource name used in the response message.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    /// Request body could not be read as the expected JSON shape.
    #[error("malformed body: {0}")]
    MalformedBody(String),
}

/// Failure body shared by every route: `{"error": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(_) => {
                tracing::debug!(error = %self, "not found");
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::StoreUnavailable(_) | AppError::Db(_) | AppError::MalformedBody(_) => {
                tracing::error!(error = %self, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE.to_string())
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
