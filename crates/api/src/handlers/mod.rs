//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `huntbase_db` and
//! map errors via [`AppError`].

use mongodb::bson::oid::ObjectId;

use crate::error::AppError;

pub mod coupons;
pub mod products;
pub mod reports;
pub mod session;
pub mod stats;
pub mod users;

/// Parse a path segment as a MongoDB object id, rejecting with 400 on
/// malformed input.
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::BadRequest(format!("Invalid id: {id}")))
}
