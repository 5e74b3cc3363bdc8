//! Handler for the public dashboard statistics.

use axum::extract::State;
use axum::Json;
use huntbase_db::models::stats::Statistics;
use huntbase_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /statistics
// ---------------------------------------------------------------------------

/// Aggregate counts across the catalog and user directory.
pub async fn statistics(State(state): State<AppState>) -> AppResult<Json<Statistics>> {
    let stats = StatsRepo::compute(&state.db).await?;
    Ok(Json(stats))
}
