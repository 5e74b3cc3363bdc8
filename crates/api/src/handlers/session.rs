//! Handlers for session establishment and teardown.
//!
//! Sign-in signs the supplied identity into a long-lived JWT and sets it as
//! an `HttpOnly` cookie; sign-out clears the cookie with matching flags.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::IntoResponse;
use axum::Json;

use crate::auth::cookie::{clear_session_cookie, session_cookie};
use crate::auth::jwt::{generate_token, SignInPayload};
use crate::error::{AppError, AppResult};
use crate::response::Ack;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /jwt
// ---------------------------------------------------------------------------

/// Issue a session cookie for the supplied identity payload.
pub async fn issue_token(
    State(state): State<AppState>,
    Json(identity): Json<SignInPayload>,
) -> AppResult<impl IntoResponse> {
    if identity.email.trim().is_empty() {
        return Err(AppError::BadRequest("email must not be empty".into()));
    }

    let token = generate_token(&identity, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Failed to sign token: {e}")))?;

    let cookie = session_cookie(
        &token,
        state.config.production,
        state.config.jwt.expiry_secs(),
    );

    tracing::info!(email = %identity.email, "Session issued");

    Ok(([(SET_COOKIE, cookie)], Json(Ack::ok())))
}

// ---------------------------------------------------------------------------
// GET /logout
// ---------------------------------------------------------------------------

/// Clear the session cookie.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let cookie = clear_session_cookie(state.config.production);
    ([(SET_COOKIE, cookie)], Json(Ack::ok()))
}
