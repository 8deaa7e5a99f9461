/// Core error types for Songscope
use thiserror::Error;

/// Result type alias using `SongscopeError`
pub type Result<T> = std::result::Result<T, SongscopeError>;

/// Core error type for Songscope
#[derive(Error, Debug)]
pub enum SongscopeError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl SongscopeError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether this error means the backing data source could not serve the
    /// request (as opposed to a problem with the request itself)
    pub fn is_data_source_failure(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Database(_) | Self::Io(_))
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for SongscopeError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
