//! Songscope Core
//!
//! Platform-agnostic domain types, query normalization, and error handling
//! for the Songscope analytics backend.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `ArtistAggregate`, `DashboardStats`, `Page`
//! - **Query Normalization**: allow-listed sort keys, range bounds, pagination
//!   and time windows built from untrusted request parameters
//! - **Core Traits**: `SongCatalog`, implemented by storage backends
//! - **Error Handling**: Unified `SongscopeError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use songscope_core::query::{PageLimits, SongFilterParams, SongSort};
//!
//! let params = SongFilterParams {
//!     sort: Some("DROP TABLE songs".to_string()),
//!     min_danceability: Some("0.7".to_string()),
//!     ..Default::default()
//! };
//! let query = params.into_query(PageLimits::new(10, 100));
//!
//! // Unknown sort keys fall back to the default column
//! assert_eq!(query.sort, SongSort::Stream);
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod query;
pub mod types;

// Re-export commonly used types
pub use catalog::SongCatalog;
pub use error::{Result, SongscopeError};

pub use types::{
    AlbumTypeBreakdown, AlbumTypeStats, ArtistAggregate, ArtistDetail, DashboardStats,
    FilterOptions, NewSong, Page, PlatformStat, Song, SongId, SongListing, SummaryStats,
};
