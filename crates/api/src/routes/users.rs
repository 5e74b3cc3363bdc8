//! Route definitions for the user directory.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/{email}", post(users::register))
        .route("/users/role/{email}", get(users::get_role))
        .route("/get-users/{email}", get(users::list_others))
        .route("/users/admin/{id}", patch(users::make_admin))
        .route("/users/moderator/{id}", patch(users::make_moderator))
        .route("/users/delete/{id}", delete(users::delete_user))
}
