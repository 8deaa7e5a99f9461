/// Artist API routes
use crate::{
    api::query::LenientQuery,
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use songscope_core::{
    query::ArtistListParams,
    types::{ArtistAggregate, ArtistDetail},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistsResponse {
    pub artists: Vec<ArtistAggregate>,
    pub total_count: u64,
    pub current_page: u64,
    pub total_pages: u64,
}

/// GET /api/artists
pub async fn list_artists(
    State(app_state): State<AppState>,
    LenientQuery(params): LenientQuery<ArtistListParams>,
) -> Result<Json<ArtistsResponse>> {
    let query = params.into_query(app_state.query.artists());
    let page = app_state.catalog.list_artists(&query).await?;

    Ok(Json(ArtistsResponse {
        artists: page.items,
        total_count: page.total_count,
        current_page: page.page,
        total_pages: page.total_pages,
    }))
}

/// GET /api/artists/:name
pub async fn get_artist(
    Path(name): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<ArtistDetail>> {
    let detail = app_state
        .catalog
        .get_artist(&name)
        .await?
        .ok_or_else(|| ServerError::NotFound("Artist not found".to_string()))?;
    Ok(Json(detail))
}
