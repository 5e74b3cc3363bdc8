//! Route definitions for discount coupons.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::coupons;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add-coupon/{code}", post(coupons::create))
        .route("/get-coupon", get(coupons::list_all))
        .route("/get-coupon/{id}", get(coupons::get_by_id))
        .route("/update-coupon/{id}", patch(coupons::update))
        .route("/coupon/delete/{id}", delete(coupons::delete))
}
