//! Route definitions for abuse reports.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reported-content", post(reports::file_report))
        .route("/get-report/{email}", get(reports::list_by_reporter))
        .route("/report-details/{id}", get(reports::get_by_id))
        .route("/delete-content/{id}", delete(reports::resolve_by_deletion))
}
