/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use songscope_core::SongscopeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Body of every 5xx caused by the catalog; details only go to the log
pub const DATA_SOURCE_UNAVAILABLE: &str = "Data source unavailable";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Data source error: {0}")]
    DataSource(#[from] SongscopeError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<songscope_storage::StorageError> for ServerError {
    fn from(err: songscope_storage::StorageError) -> Self {
        // Convert StorageError -> SongscopeError -> ServerError
        ServerError::DataSource(err.into())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::DataSource(SongscopeError::NotFound { entity, .. }) => {
                (StatusCode::NOT_FOUND, format!("{entity} not found"))
            }
            ServerError::DataSource(SongscopeError::InvalidInput(msg)) => {
                (StatusCode::BAD_REQUEST, msg)
            }
            ServerError::DataSource(ref e) => {
                tracing::error!("Data source error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    DATA_SOURCE_UNAVAILABLE.to_string(),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
