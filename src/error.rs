use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Transport failure or non-success status from an upstream provider.
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream response did not have the expected shape.
    #[error("Unexpected response data: {0}")]
    Data(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A newer query was started before this one finished.
    #[error("Query {0} was superseded by a newer query")]
    Superseded(u64),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Network(ref e) => {
                tracing::error!("Network error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Routing or place search service unavailable".to_string(),
                )
            }
            AppError::Data(ref e) => {
                tracing::error!("Upstream data error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Unexpected response from upstream service".to_string(),
                )
            }
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.clone()),
            AppError::Superseded(sequence) => {
                tracing::info!(sequence, "Discarding stale query result");
                (StatusCode::CONFLICT, self.to_string())
            }
            AppError::NotFound(ref e) => (StatusCode::NOT_FOUND, e.clone()),
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
