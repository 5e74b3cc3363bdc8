//! Route definition for dashboard statistics.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/statistics", get(stats::statistics))
}
