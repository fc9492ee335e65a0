//! Error types for algoviz-server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type for algoviz-server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while starting or running the server.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration variable could not be parsed
    #[error("invalid configuration {name}={value:?}: {reason}")]
    Config {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// Remote delegate error
    #[error("remote engine error: {0}")]
    Remote(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A rejected `/api/steps` request.
///
/// Always answered with `400` and `{"error": message}`; no partial step
/// list is ever returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The body is not a JSON request object
    #[error("Invalid JSON")]
    InvalidJson,

    /// Array length, element type, order or target failed validation
    #[error("{0}")]
    InvalidInput(String),

    /// The algorithm id is not one of the eight supported
    #[error("Unknown algorithm")]
    UnknownAlgorithm(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

impl From<algoviz_steps::Error> for ApiError {
    fn from(e: algoviz_steps::Error) -> Self {
        match e {
            algoviz_steps::Error::UnknownAlgorithm(id) => ApiError::UnknownAlgorithm(id),
            algoviz_steps::Error::InvalidOrder(order) => {
                ApiError::InvalidInput(format!("Order must be \"asc\" or \"desc\", got {order:?}"))
            }
        }
    }
}
