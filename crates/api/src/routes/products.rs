//! Route definitions for the product catalog.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add-product", post(products::create))
        .route("/get-product", get(products::list_all))
        .route(
            "/get-product/{id}",
            get(products::get_by_id).delete(products::delete),
        )
        .route("/my-products/{email}", get(products::list_by_owner))
        .route("/update-product/{id}", patch(products::update))
        .route("/approve-products", get(products::list_approved))
        .route("/approve-products/{id}", patch(products::approve))
        .route("/rejected-products/{id}", patch(products::reject))
        .route("/review-products/{id}", get(products::get_by_id))
        .route("/vote/{id}", patch(products::vote))
        .route("/trending", get(products::trending))
        .route("/all-products", get(products::search))
}
