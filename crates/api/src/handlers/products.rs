//! Handlers for the product catalog.
//!
//! Submission requires authentication, moderation requires the Moderator
//! role, and the public browse/search/trending queries are open.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use huntbase_core::error::CoreError;
use huntbase_core::product::{validate_transition, ProductStatus};
use huntbase_db::models::outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use huntbase_db::models::product::{CreateProduct, Product, UpdateProduct};
use huntbase_db::repositories::product_repo::build_update_document;
use huntbase_db::repositories::ProductRepo;
use serde::Deserialize;

use super::parse_object_id;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireModerator};
use crate::state::AppState;

/// Query parameters for the catalog search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: String,
}

// ---------------------------------------------------------------------------
// POST /add-product
// ---------------------------------------------------------------------------

/// Submit a product for review.
///
/// The listing always starts pending with zero votes; client-supplied
/// status or vote fields are ignored.
pub async fn create(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    let product = Product::new(input);
    let result = ProductRepo::create(&state.db, &product).await?;

    tracing::info!(name = %product.name, owner = %user.email, "Product submitted");

    Ok((StatusCode::CREATED, Json(InsertOutcome::from(result))))
}

// ---------------------------------------------------------------------------
// GET /get-product
// ---------------------------------------------------------------------------

/// Full catalog, newest first.
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list_all(&state.db).await?;
    Ok(Json(products))
}

// ---------------------------------------------------------------------------
// GET /get-product/{id}  and  GET /review-products/{id}
// ---------------------------------------------------------------------------

/// Fetch a single product.
pub async fn get_by_id(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let oid = parse_object_id(&id)?;
    let product = ProductRepo::find_by_id(&state.db, oid)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(product))
}

// ---------------------------------------------------------------------------
// DELETE /get-product/{id}
// ---------------------------------------------------------------------------

/// Delete a product listing.
pub async fn delete(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteOutcome>> {
    let id = parse_object_id(&id)?;
    let result = ProductRepo::delete(&state.db, id).await?;

    tracing::info!(product_id = %id, caller = %user.email, "Product deleted");

    Ok(Json(DeleteOutcome::from(result)))
}

// ---------------------------------------------------------------------------
// GET /my-products/{email}
// ---------------------------------------------------------------------------

/// Products submitted by the given owner email.
pub async fn list_by_owner(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list_by_owner(&state.db, &email).await?;
    Ok(Json(products))
}

// ---------------------------------------------------------------------------
// PATCH /update-product/{id}
// ---------------------------------------------------------------------------

/// Apply an allow-listed partial update to a listing.
pub async fn update(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<UpdateOutcome>> {
    let id = parse_object_id(&id)?;

    let set = build_update_document(&input);
    if set.is_empty() {
        return Err(AppError::BadRequest("No updatable fields provided".into()));
    }

    let result = ProductRepo::update_fields(&state.db, id, set).await?;
    Ok(Json(UpdateOutcome::from(result)))
}

// ---------------------------------------------------------------------------
// GET /approve-products
// ---------------------------------------------------------------------------

/// Accepted products, newest first.
pub async fn list_approved(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list_by_status(&state.db, ProductStatus::Accepted).await?;
    Ok(Json(products))
}

// ---------------------------------------------------------------------------
// PATCH /approve-products/{id}
// ---------------------------------------------------------------------------

/// Accept a pending product.
pub async fn approve(
    moderator: RequireModerator,
    state: State<AppState>,
    id: Path<String>,
) -> AppResult<Json<UpdateOutcome>> {
    moderate(moderator, state, id, ProductStatus::Accepted).await
}

// ---------------------------------------------------------------------------
// PATCH /rejected-products/{id}
// ---------------------------------------------------------------------------

/// Reject a pending product.
pub async fn reject(
    moderator: RequireModerator,
    state: State<AppState>,
    id: Path<String>,
) -> AppResult<Json<UpdateOutcome>> {
    moderate(moderator, state, id, ProductStatus::Rejected).await
}

/// Shared moderation flow: fetch the current state, validate the
/// transition, then persist the decision.
async fn moderate(
    RequireModerator(moderator): RequireModerator,
    State(state): State<AppState>,
    Path(id): Path<String>,
    to: ProductStatus,
) -> AppResult<Json<UpdateOutcome>> {
    let oid = parse_object_id(&id)?;

    let current = ProductRepo::find_by_id(&state.db, oid)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    validate_transition(current.status, to)?;

    let result = ProductRepo::set_status(&state.db, oid, to).await?;

    tracing::info!(
        product_id = %oid,
        from = %current.status,
        to = %to,
        moderator = %moderator.email,
        "Product moderated",
    );

    Ok(Json(UpdateOutcome::from(result)))
}

// ---------------------------------------------------------------------------
// PATCH /vote/{id}
// ---------------------------------------------------------------------------

/// Add one vote to a product.
///
/// There is no per-user vote ledger; repeated votes from the same caller
/// each count.
pub async fn vote(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UpdateOutcome>> {
    let id = parse_object_id(&id)?;
    let result = ProductRepo::increment_votes(&state.db, id).await?;
    Ok(Json(UpdateOutcome::from(result)))
}

// ---------------------------------------------------------------------------
// GET /trending
// ---------------------------------------------------------------------------

/// Top accepted products by votes, capped at six.
pub async fn trending(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::trending(&state.db).await?;
    Ok(Json(products))
}

// ---------------------------------------------------------------------------
// GET /all-products?search=
// ---------------------------------------------------------------------------

/// Tag search over the catalog. An empty term returns everything.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::search_by_tag(&state.db, &params.search).await?;
    Ok(Json(products))
}
