//! Dashboard statistics types

use crate::types::{ArtistAggregate, Page, Song, SongId};
use serde::{Deserialize, Serialize};

/// Collection-wide totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_songs: i64,
    pub unique_artists: i64,
    pub total_streams: i64,
    pub total_views: i64,
}

/// Popularity averages per album type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct AlbumTypeStats {
    pub album_type: String,
    pub track_count: i64,
    pub avg_streams: Option<f64>,
    pub avg_views: Option<f64>,
}

/// Stream and view counts of one track, for platform comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct PlatformStat {
    pub id: SongId,
    pub track: String,
    pub artist: String,
    pub stream: Option<i64>,
    pub views: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub stats: SummaryStats,
    pub top_artists: Vec<ArtistAggregate>,
    pub genre_stats: Vec<AlbumTypeStats>,
    pub platform_stats: Vec<PlatformStat>,
}

/// Distinct values available to the filter controls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub artists: Vec<String>,
    pub album_types: Vec<String>,
}

/// One page of songs plus the filter options, read from the same snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct SongListing {
    pub page: Page<Song>,
    pub filters: FilterOptions,
}
