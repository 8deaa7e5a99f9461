//! Songscope Storage
//!
//! `SQLite` database layer for Songscope.
//!
//! This crate stores the song collection in a single `songs` table and
//! answers the dashboard's list, aggregate and statistics queries over it.
//!
//! # Architecture
//!
//! - **Read-Only Queries**: every query runs inside one read transaction, so
//!   the count and the page it describes see the same snapshot
//! - **Vertical Slicing**: each feature owns its own queries and logic
//! - **Allow-Listed SQL**: predicates are assembled with `sqlx::QueryBuilder`;
//!   caller values are always bound, never spliced into the query text
//!
//! # Example
//!
//! ```rust,no_run
//! use songscope_storage::{SqliteCatalog, create_pool, run_migrations};
//! use songscope_core::{SongCatalog, query::{Pagination, SongQuery}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create database connection
//! let pool = create_pool("sqlite://songscope.db", 5).await?;
//! run_migrations(&pool).await?;
//!
//! let catalog = SqliteCatalog::new(pool);
//!
//! // First page of songs, most streamed first
//! let page = catalog.list_songs(&SongQuery::new(Pagination::new(1, 10))).await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod artists;
pub mod import;
pub mod songs;
pub mod stats;

pub use context::SqliteCatalog;
pub use error::{Result, StorageError};

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))?;
    tracing::debug!("Database migrations applied");
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://songscope.db>`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        // WAL gives each read transaction a stable snapshot
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    tracing::info!(max_connections, "SQLite pool created");

    Ok(pool)
}
