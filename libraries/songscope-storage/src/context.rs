//! `SQLite` implementation of `SongCatalog`

use async_trait::async_trait;
use songscope_core::{
    error::Result,
    query::{ArtistQuery, SongQuery},
    types::{ArtistAggregate, ArtistDetail, DashboardStats, Page, Song, SongListing},
    SongCatalog,
};
use sqlx::SqlitePool;

/// Catalog backed by a local `SQLite` database
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the underlying pool, for imports and tests
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl SongCatalog for SqliteCatalog {
    async fn list_songs(&self, query: &SongQuery) -> Result<Page<Song>> {
        crate::songs::list(&self.pool, query).await
    }

    async fn browse_songs(&self, query: &SongQuery) -> Result<SongListing> {
        crate::songs::browse(&self.pool, query).await
    }

    async fn list_artists(&self, query: &ArtistQuery) -> Result<Page<ArtistAggregate>> {
        crate::artists::list(&self.pool, query).await
    }

    async fn get_artist(&self, name: &str) -> Result<Option<ArtistDetail>> {
        crate::artists::get_by_name(&self.pool, name).await
    }

    async fn dashboard_stats(&self, top_n: u64) -> Result<DashboardStats> {
        crate::stats::dashboard(&self.pool, top_n).await
    }
}
