//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use songscope_core::{
    query::{ArtistQuery, SongQuery},
    types::{ArtistAggregate, ArtistDetail, DashboardStats, NewSong, Page, Song, SongListing},
    SongCatalog, SongscopeError,
};
use songscope_server::{config::QuerySettings, create_router, state::AppState};
use songscope_storage::SqliteCatalog;
use std::sync::Arc;
use tempfile::TempDir;

/// Router over a seeded real SQLite database; keep the `TempDir` alive
pub async fn create_test_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

    let pool = songscope_storage::create_pool(&db_url, 5).await.unwrap();
    songscope_storage::run_migrations(&pool).await.unwrap();
    songscope_storage::songs::create_many(&pool, &fixtures::songs())
        .await
        .unwrap();

    let state = AppState::new(
        Arc::new(SqliteCatalog::new(pool)),
        QuerySettings::default(),
    );

    (create_router(state, None), temp_dir)
}

/// Router whose catalog fails every call
pub fn create_failing_app() -> Router {
    let state = AppState::new(Arc::new(FailingCatalog), QuerySettings::default());
    create_router(state, None)
}

/// Stands in for an unreachable database
pub struct FailingCatalog;

impl FailingCatalog {
    pub const DETAIL: &'static str = "unable to open database file: /var/lib/songscope/secret.db";

    fn error() -> SongscopeError {
        SongscopeError::Database(Self::DETAIL.to_string())
    }
}

#[async_trait]
impl SongCatalog for FailingCatalog {
    async fn list_songs(&self, _query: &SongQuery) -> songscope_core::Result<Page<Song>> {
        Err(Self::error())
    }

    async fn browse_songs(&self, _query: &SongQuery) -> songscope_core::Result<SongListing> {
        Err(Self::error())
    }

    async fn list_artists(
        &self,
        _query: &ArtistQuery,
    ) -> songscope_core::Result<Page<ArtistAggregate>> {
        Err(Self::error())
    }

    async fn get_artist(&self, _name: &str) -> songscope_core::Result<Option<ArtistDetail>> {
        Err(Self::error())
    }

    async fn dashboard_stats(&self, _top_n: u64) -> songscope_core::Result<DashboardStats> {
        Err(Self::error())
    }
}

/// Seed data
pub mod fixtures {
    use super::NewSong;

    /// 25 songs; song `i` has `(i + 1)` million streams
    ///
    /// Songs 3, 11 and 20 are the only ones with danceability >= 0.7.
    /// Song 0 is by "ABBA", the rest rotate through `Artist 1..=4`.
    pub fn songs() -> Vec<NewSong> {
        (0..25i64)
            .map(|i| {
                let artist = if i == 0 {
                    "ABBA".to_string()
                } else {
                    format!("Artist {}", i % 4 + 1)
                };
                let album_type = if i % 2 == 0 { "album" } else { "single" };
                NewSong {
                    stream: Some((i + 1) * 1_000_000),
                    views: Some((i + 1) * 500_000),
                    danceability: Some(match i {
                        3 => 0.8,
                        11 => 0.75,
                        20 => 0.7,
                        _ => 0.4,
                    }),
                    energy: Some(0.6),
                    valence: Some(0.5),
                    ..NewSong::new(format!("Track {i:02}"), artist, "Album", album_type)
                }
            })
            .collect()
    }
}
