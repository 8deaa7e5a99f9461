//! Read-only catalog trait implemented by storage backends

use crate::error::Result;
use crate::query::{ArtistQuery, SongQuery};
use crate::types::{ArtistAggregate, ArtistDetail, DashboardStats, Page, Song, SongListing};
use async_trait::async_trait;

/// Query access to the song collection
///
/// Every method is a pure read. Implementations must release any connection
/// they acquire before returning, including on error.
#[async_trait]
pub trait SongCatalog: Send + Sync {
    // ========================================================================
    // Songs
    // ========================================================================

    /// Get one page of songs matching the normalized query
    async fn list_songs(&self, query: &SongQuery) -> Result<Page<Song>>;

    /// Get one page of songs together with the distinct artists and album
    /// types for populating filters
    ///
    /// Both parts must come from a single consistent read.
    async fn browse_songs(&self, query: &SongQuery) -> Result<SongListing>;

    // ========================================================================
    // Artists
    // ========================================================================

    /// Get one page of per-artist aggregates
    async fn list_artists(&self, query: &ArtistQuery) -> Result<Page<ArtistAggregate>>;

    /// Get an artist's aggregate, songs and album-type breakdown
    ///
    /// Returns `None` when no song is credited to `name`.
    async fn get_artist(&self, name: &str) -> Result<Option<ArtistDetail>>;

    // ========================================================================
    // Dashboard
    // ========================================================================

    /// Get collection-wide totals plus the top `top_n` artists and tracks
    async fn dashboard_stats(&self, top_n: u64) -> Result<DashboardStats>;
}
