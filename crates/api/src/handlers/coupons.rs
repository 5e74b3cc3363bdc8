//! Handlers for discount coupons. Mutations are admin-only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use huntbase_core::coupon::validate_code;
use huntbase_core::error::CoreError;
use huntbase_db::models::coupon::{Coupon, CreateCoupon, UpdateCoupon};
use huntbase_db::models::outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use huntbase_db::repositories::coupon_repo::build_update_document;
use huntbase_db::repositories::CouponRepo;

use super::parse_object_id;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// Conflict message for an already-taken code. The frontend matches on it.
const DUPLICATE_MESSAGE: &str = "Coupon already exists";

// ---------------------------------------------------------------------------
// POST /add-coupon/{code}
// ---------------------------------------------------------------------------

/// Create a coupon with a unique code.
///
/// The existence pre-check produces the friendly conflict message; the
/// unique index on `code` closes the remaining race window, and a
/// duplicate-key write error is mapped to the same response.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(input): Json<CreateCoupon>,
) -> AppResult<impl IntoResponse> {
    validate_code(&code)?;

    if CouponRepo::exists_by_code(&state.db, &code).await? {
        return Err(AppError::Core(CoreError::Conflict(DUPLICATE_MESSAGE.into())));
    }

    let coupon = Coupon::new(&code, input);
    let result = match CouponRepo::create(&state.db, &coupon).await {
        Ok(result) => result,
        Err(err) if huntbase_db::is_duplicate_key(&err) => {
            // Lost the race to a concurrent create with the same code.
            return Err(AppError::Core(CoreError::Conflict(DUPLICATE_MESSAGE.into())));
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(code = %code, caller = %admin.email, "Coupon created");

    Ok((StatusCode::CREATED, Json(InsertOutcome::from(result))))
}

// ---------------------------------------------------------------------------
// GET /get-coupon
// ---------------------------------------------------------------------------

/// All coupons.
pub async fn list_all(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Coupon>>> {
    let coupons = CouponRepo::list_all(&state.db).await?;
    Ok(Json(coupons))
}

// ---------------------------------------------------------------------------
// GET /get-coupon/{id}
// ---------------------------------------------------------------------------

/// Fetch a single coupon.
pub async fn get_by_id(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Coupon>> {
    let oid = parse_object_id(&id)?;
    let coupon = CouponRepo::find_by_id(&state.db, oid)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Coupon",
            id,
        }))?;
    Ok(Json(coupon))
}

// ---------------------------------------------------------------------------
// PATCH /update-coupon/{id}
// ---------------------------------------------------------------------------

/// Apply an allow-listed partial update to a coupon.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateCoupon>,
) -> AppResult<Json<UpdateOutcome>> {
    let id = parse_object_id(&id)?;

    if let Some(code) = &input.code {
        validate_code(code)?;
    }

    let set = build_update_document(&input);
    if set.is_empty() {
        return Err(AppError::BadRequest("No updatable fields provided".into()));
    }

    let result = CouponRepo::update_fields(&state.db, id, set).await?;
    Ok(Json(UpdateOutcome::from(result)))
}

// ---------------------------------------------------------------------------
// DELETE /coupon/delete/{id}
// ---------------------------------------------------------------------------

/// Remove a coupon.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteOutcome>> {
    let id = parse_object_id(&id)?;
    let result = CouponRepo::delete(&state.db, id).await?;

    tracing::info!(coupon_id = %id, caller = %admin.email, "Coupon deleted");

    Ok(Json(DeleteOutcome::from(result)))
}
