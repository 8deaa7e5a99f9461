//! Songscope Server Library
//!
//! Read-only HTTP API over the song collection: filtered song listings,
//! per-artist aggregates and dashboard statistics.
//!
//! This library exposes the router and its components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;

use axum::{routing::get, Router};
use std::path::Path;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// API routes live under `/api`. When `web_dir` is given, every other path
/// is served from it, falling back to its `index.html` for client-side routes.
pub fn create_router(app_state: AppState, web_dir: Option<&Path>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        // Songs
        .route("/songs", get(api::songs::list_songs))
        .route("/songs/filter", get(api::songs::filter_songs))
        // Artists
        .route("/artists", get(api::artists::list_artists))
        .route("/artists/:name", get(api::artists::get_artist))
        // Dashboard
        .route("/stats", get(api::stats::dashboard))
        .fallback(api::not_found);

    let mut router = Router::new().nest("/api", api_routes);

    if let Some(web_dir) = web_dir {
        let spa = ServeDir::new(web_dir).fallback(ServeFile::new(web_dir.join("index.html")));
        router = router.fallback_service(spa);
    }

    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
