//! Cookie-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use huntbase_core::error::CoreError;

use crate::auth::cookie::token_from_cookie_header;
use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated identity extracted from the JWT session cookie.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(email = %user.email, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// A missing cookie rejects with 401; a tampered or expired token rejects
/// with 403. The bodies reproduce the messages the frontend matches on.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The signed-in user's email (from `claims.sub`).
    pub email: String,
    /// Display name carried in the token, if any.
    pub name: Option<String>,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(token_from_cookie_header)
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("unAuthorized Access".into()))
            })?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| AppError::Core(CoreError::Forbidden("Forbidden access".into())))?;

        Ok(AuthUser {
            email: claims.sub,
            name: claims.name,
        })
    }
}
