//! Route definitions.
//!
//! The paths are mounted flat at the root, matching the surface the
//! frontend was built against.

pub mod coupons;
pub mod health;
pub mod products;
pub mod reports;
pub mod session;
pub mod stats;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the full application route tree (health routes excluded).
///
/// Route hierarchy:
///
/// ```text
/// POST   /jwt                       issue session cookie (public)
/// GET    /logout                    clear session cookie (public)
///
/// POST   /users/{email}             register-if-absent (public)
/// GET    /users/role/{email}        role lookup (public)
/// GET    /get-users/{email}         list other users (auth)
/// PATCH  /users/admin/{id}          promote to Admin (admin)
/// PATCH  /users/moderator/{id}      promote to Moderator (admin)
/// DELETE /users/delete/{id}         delete user (admin)
///
/// POST   /add-product               submit product (auth)
/// GET    /get-product               full catalog (public)
/// GET    /get-product/{id}          product detail (auth)
/// DELETE /get-product/{id}          delete product (auth)
/// GET    /my-products/{email}       owner's products (auth)
/// PATCH  /update-product/{id}       partial update (auth)
/// GET    /approve-products          accepted catalog (public)
/// PATCH  /approve-products/{id}     accept (moderator)
/// PATCH  /rejected-products/{id}    reject (moderator)
/// GET    /review-products/{id}      review detail (auth)
/// PATCH  /vote/{id}                 upvote (auth)
/// GET    /trending                  top 6 accepted by votes (public)
/// GET    /all-products?search=      tag search (public)
///
/// POST   /reported-content          file report (public)
/// GET    /get-report/{email}        reporter's reports (public)
/// GET    /report-details/{id}       report detail (auth)
/// DELETE /delete-content/{id}       delete product + report (moderator)
///
/// GET    /statistics                dashboard counts (public)
///
/// POST   /add-coupon/{code}         create coupon (admin)
/// GET    /get-coupon                list coupons (auth)
/// GET    /get-coupon/{id}           coupon detail (auth)
/// PATCH  /update-coupon/{id}        partial update (admin)
/// DELETE /coupon/delete/{id}        delete coupon (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(session::router())
        .merge(users::router())
        .merge(products::router())
        .merge(reports::router())
        .merge(coupons::router())
        .merge(stats::router())
}
