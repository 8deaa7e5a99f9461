/// API route modules
pub mod artists;
pub mod health;
pub mod query;
pub mod songs;
pub mod stats;

use crate::error::ServerError;

/// Unmatched `/api/*` paths
pub async fn not_found() -> ServerError {
    ServerError::NotFound("Not found".to_string())
}
