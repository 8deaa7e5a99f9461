/// Dashboard statistics API routes
use crate::{api::query::LenientQuery, error::Result, state::AppState};
use axum::{extract::State, Json};
use serde::Deserialize;
use songscope_core::{
    query::{PageLimits, Pagination},
    types::DashboardStats,
};

/// Length of the top artist and top track lists when `limit` is absent
pub const DEFAULT_TOP_N: u64 = 10;

#[derive(Debug, Default, Deserialize)]
pub struct StatsQuery {
    pub limit: Option<String>,
}

/// GET /api/stats
pub async fn dashboard(
    State(app_state): State<AppState>,
    LenientQuery(params): LenientQuery<StatsQuery>,
) -> Result<Json<DashboardStats>> {
    // Same fallback and clamping as a page size
    let limits = PageLimits::new(DEFAULT_TOP_N, app_state.query.max_page_size);
    let top_n = Pagination::from_params(None, params.limit.as_deref(), limits).limit();

    let stats = app_state.catalog.dashboard_stats(top_n).await?;
    Ok(Json(stats))
}
