//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does
//! not meet the minimum requirement. Roles are looked up from the users
//! collection at check time rather than trusted from the token, so a role
//! change takes effect without re-issuing the session.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use huntbase_core::error::CoreError;
use huntbase_core::roles::Role;
use huntbase_db::repositories::UserRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Look up the caller's stored role. Accounts that have a valid session but
/// no user document (or no role privilege) are rejected with 403.
async fn lookup_role(state: &AppState, email: &str) -> Result<Role, AppError> {
    let user = UserRepo::find_by_email(&state.db, email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Forbidden("No account for this session".into()))
        })?;
    Ok(user.role)
}

/// Requires any authenticated user (any valid role).
///
/// Functionally equivalent to [`AuthUser`] but named explicitly for use in
/// handlers where the intent "this route requires authentication" should be
/// self-documenting.
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}

/// Requires the `Moderator` or `Admin` role. Rejects with 403 otherwise.
///
/// ```ignore
/// async fn approve(RequireModerator(user): RequireModerator) -> AppResult<Json<()>> {
///     // user is guaranteed to hold moderation capability here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireModerator(pub AuthUser);

impl FromRequestParts<AppState> for RequireModerator {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        let role = lookup_role(state, &user.email).await?;
        if !role.can_moderate() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Moderator or Admin role required".into(),
            )));
        }
        Ok(RequireModerator(user))
    }
}

/// Requires the `Admin` role. Rejects with 403 Forbidden otherwise.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        let role = lookup_role(state, &user.email).await?;
        if !role.is_admin() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
