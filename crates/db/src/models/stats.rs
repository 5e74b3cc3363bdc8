//! Dashboard statistics payload.

use serde::Serialize;

/// Aggregate counts across the products and users collections.
///
/// `total_review` is the sum of all moderation states and should equal
/// `total_products` unless documents carry an unknown status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_products: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub pending: u64,
    pub total_review: u64,
    pub total_users: u64,
}
