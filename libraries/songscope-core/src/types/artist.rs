//! Artist types

use crate::types::Song;
use serde::{Deserialize, Serialize};

/// Per-artist aggregate, recomputed on every query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct ArtistAggregate {
    pub artist: String,
    pub track_count: i64,
    /// Sum over non-null stream counts; 0 when none are known
    pub total_streams: i64,
    pub total_views: i64,
    /// Average over non-null values; `None` when none are known
    pub avg_danceability: Option<f64>,
    pub avg_energy: Option<f64>,
    pub avg_valence: Option<f64>,
    pub avg_acousticness: Option<f64>,
    pub avg_instrumentalness: Option<f64>,
}

/// Song count and popularity totals for one album type of one artist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct AlbumTypeBreakdown {
    pub album_type: String,
    pub count: i64,
    pub total_streams: i64,
    pub total_views: i64,
}

/// Everything the artist page shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDetail {
    pub artist: ArtistAggregate,
    pub songs: Vec<Song>,
    pub album_types: Vec<AlbumTypeBreakdown>,
}
