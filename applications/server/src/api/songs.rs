/// Song listing API routes
use crate::{api::query::LenientQuery, error::Result, state::AppState};
use axum::{extract::State, Json};
use serde::Serialize;
use songscope_core::{
    query::{SongFilterParams, SongListParams},
    types::{FilterOptions, Page, Song, SongListing},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongsResponse {
    pub songs: Vec<Song>,
    pub total_count: u64,
    pub current_page: u64,
    pub total_pages: u64,
    /// Only sent by the basic listing, to populate its filter controls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterOptions>,
}

impl SongsResponse {
    fn from_page(page: Page<Song>, filters: Option<FilterOptions>) -> Self {
        Self {
            songs: page.items,
            total_count: page.total_count,
            current_page: page.page,
            total_pages: page.total_pages,
            filters,
        }
    }
}

/// GET /api/songs
/// Search, sort and page through every song
pub async fn list_songs(
    State(app_state): State<AppState>,
    LenientQuery(params): LenientQuery<SongListParams>,
) -> Result<Json<SongsResponse>> {
    let query = params.into_query(app_state.query.songs());

    let SongListing { page, filters } = app_state.catalog.browse_songs(&query).await?;

    Ok(Json(SongsResponse::from_page(page, Some(filters))))
}

/// GET /api/songs/filter
/// Range, album type and release window filters on top of search and sort
pub async fn filter_songs(
    State(app_state): State<AppState>,
    LenientQuery(params): LenientQuery<SongFilterParams>,
) -> Result<Json<SongsResponse>> {
    let query = params.into_query(app_state.query.filter());
    tracing::debug!(?query, "Filtering songs");

    let page = app_state.catalog.list_songs(&query).await?;

    Ok(Json(SongsResponse::from_page(page, None)))
}
