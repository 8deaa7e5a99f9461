//! Song domain type
use crate::error::{Result, SongscopeError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type SongId = i64;

/// Lowest valid `song_key`; marks a key the analyzer could not detect
pub const UNDETECTED_KEY: i64 = -1;

/// Highest valid `song_key` (pitch class B)
pub const MAX_KEY: i64 = 11;

/// One track with its popularity metrics and audio features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct Song {
    /// Surrogate key, also the final tie-break for ordering
    pub id: SongId,

    pub track: String,
    pub artist: String,
    pub album: String,

    /// `single`, `album`, `compilation`, ...
    pub album_type: String,

    /// Spotify stream count
    pub stream: Option<i64>,
    /// YouTube view count
    pub views: Option<i64>,
    pub likes: Option<i64>,
    pub comments: Option<i64>,

    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub valence: Option<f64>,
    pub acousticness: Option<f64>,
    pub instrumentalness: Option<f64>,

    /// Beats per minute
    pub tempo: Option<f64>,

    /// Pitch class in `-1..=11`
    pub song_key: Option<i64>,

    pub duration_ms: Option<i64>,

    pub url_spotify: Option<String>,
    pub url_youtube: Option<String>,

    /// Only used by time-window filtering; most datasets leave it empty
    pub release_date: Option<NaiveDate>,
}

/// Data for inserting a new song
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewSong {
    pub track: String,
    pub artist: String,
    pub album: String,
    pub album_type: String,
    pub stream: Option<i64>,
    pub views: Option<i64>,
    pub likes: Option<i64>,
    pub comments: Option<i64>,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub valence: Option<f64>,
    pub acousticness: Option<f64>,
    pub instrumentalness: Option<f64>,
    pub tempo: Option<f64>,
    pub song_key: Option<i64>,
    pub duration_ms: Option<i64>,
    pub url_spotify: Option<String>,
    pub url_youtube: Option<String>,
    pub release_date: Option<NaiveDate>,
}

impl NewSong {
    /// Create a song with only the required text fields set
    pub fn new(
        track: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        album_type: impl Into<String>,
    ) -> Self {
        Self {
            track: track.into(),
            artist: artist.into(),
            album: album.into(),
            album_type: album_type.into(),
            ..Self::default()
        }
    }

    /// Check the record invariants the `songs` table enforces
    pub fn validate(&self) -> Result<()> {
        if self.track.trim().is_empty() {
            return Err(SongscopeError::invalid_input("track must not be empty"));
        }
        if self.artist.trim().is_empty() {
            return Err(SongscopeError::invalid_input("artist must not be empty"));
        }

        let features = [
            ("danceability", self.danceability),
            ("energy", self.energy),
            ("valence", self.valence),
            ("acousticness", self.acousticness),
            ("instrumentalness", self.instrumentalness),
        ];
        for (name, value) in features {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(SongscopeError::invalid_input(format!(
                        "{name} must be within [0, 1], got {v}"
                    )));
                }
            }
        }

        let counts = [
            ("stream", self.stream),
            ("views", self.views),
            ("likes", self.likes),
            ("comments", self.comments),
            ("duration_ms", self.duration_ms),
        ];
        for (name, value) in counts {
            if let Some(v) = value {
                if v < 0 {
                    return Err(SongscopeError::invalid_input(format!(
                        "{name} must not be negative, got {v}"
                    )));
                }
            }
        }

        if let Some(key) = self.song_key {
            if !(UNDETECTED_KEY..=MAX_KEY).contains(&key) {
                return Err(SongscopeError::invalid_input(format!(
                    "song_key must be within [-1, 11], got {key}"
                )));
            }
        }

        if let Some(tempo) = self.tempo {
            if !tempo.is_finite() || tempo < 0.0 {
                return Err(SongscopeError::invalid_input(format!(
                    "tempo must be a non-negative number, got {tempo}"
                )));
            }
        }

        Ok(())
    }
}
