//! Route definitions for session establishment and teardown.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

/// ```text
/// POST /jwt     -> issue session cookie
/// GET  /logout  -> clear session cookie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(session::issue_token))
        .route("/logout", get(session::logout))
}
