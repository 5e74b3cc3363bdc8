//! Discount coupon document and DTOs.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A document from the `coupons` collection.
///
/// `code` carries a unique index (see `ensure_indexes`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    /// MongoDB document ID. `None` only before insertion.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub code: String,
    pub discount: i64,
    pub expiry: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Coupon {
    pub fn new(code: &str, input: CreateCoupon) -> Self {
        Self {
            id: None,
            code: code.to_string(),
            discount: input.discount,
            expiry: input.expiry,
            description: input.description,
        }
    }
}

/// Fields accepted when creating a coupon (the code comes from the path).
#[derive(Debug, Deserialize)]
pub struct CreateCoupon {
    pub discount: i64,
    pub expiry: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Allow-listed fields for a partial coupon update.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCoupon {
    pub code: Option<String>,
    pub discount: Option<i64>,
    pub expiry: Option<String>,
    pub description: Option<String>,
}
