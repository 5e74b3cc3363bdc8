//! Handlers for the user directory.
//!
//! Registration is an idempotent upsert keyed on email; role mutation and
//! account deletion are admin-only.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use huntbase_core::roles::Role;
use huntbase_db::models::outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use huntbase_db::models::user::{RegisterUser, User};
use huntbase_db::repositories::UserRepo;

use super::parse_object_id;
use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::RoleResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /users/{email}
// ---------------------------------------------------------------------------

/// Register a user on first authenticated contact.
///
/// If an account with this email already exists, it is returned unchanged --
/// profile fields from repeat logins are not merged. Otherwise the account
/// is created with the default `Customer` role.
pub async fn register(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(profile): Json<RegisterUser>,
) -> AppResult<Response> {
    if let Some(existing) = UserRepo::find_by_email(&state.db, &email).await? {
        return Ok(Json(existing).into_response());
    }

    let user = User::new(&email, profile);
    let result = UserRepo::insert(&state.db, &user).await?;

    tracing::info!(email = %email, "User registered");

    Ok(Json(InsertOutcome::from(result)).into_response())
}

// ---------------------------------------------------------------------------
// GET /users/role/{email}
// ---------------------------------------------------------------------------

/// Look up the stored role for an email. Unknown emails yield `null`.
pub async fn get_role(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<RoleResponse>> {
    let user = UserRepo::find_by_email(&state.db, &email).await?;
    Ok(Json(RoleResponse {
        role: user.map(|u| u.role),
    }))
}

// ---------------------------------------------------------------------------
// GET /get-users/{email}
// ---------------------------------------------------------------------------

/// List every account except the caller's own.
pub async fn list_others(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list_excluding(&state.db, &email).await?;
    Ok(Json(users))
}

// ---------------------------------------------------------------------------
// PATCH /users/admin/{id}
// ---------------------------------------------------------------------------

/// Promote an account to Admin.
pub async fn make_admin(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UpdateOutcome>> {
    set_role(&state, &admin.email, &id, Role::Admin).await
}

// ---------------------------------------------------------------------------
// PATCH /users/moderator/{id}
// ---------------------------------------------------------------------------

/// Promote an account to Moderator.
pub async fn make_moderator(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UpdateOutcome>> {
    set_role(&state, &admin.email, &id, Role::Moderator).await
}

async fn set_role(
    state: &AppState,
    caller: &str,
    id: &str,
    role: Role,
) -> AppResult<Json<UpdateOutcome>> {
    let id = parse_object_id(id)?;
    let result = UserRepo::set_role(&state.db, id, role).await?;

    tracing::info!(user_id = %id, %role, caller = %caller, "Role updated");

    Ok(Json(UpdateOutcome::from(result)))
}

// ---------------------------------------------------------------------------
// DELETE /users/delete/{id}
// ---------------------------------------------------------------------------

/// Remove an account.
pub async fn delete_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteOutcome>> {
    let id = parse_object_id(&id)?;
    let result = UserRepo::delete(&state.db, id).await?;

    tracing::info!(user_id = %id, caller = %admin.email, "User deleted");

    Ok(Json(DeleteOutcome::from(result)))
}
