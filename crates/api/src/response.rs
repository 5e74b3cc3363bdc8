//! Shared response payload types for API handlers.
//!
//! Most endpoints return raw documents or write outcomes; the types here
//! cover the small envelopes the frontend expects beyond those.

use huntbase_core::roles::Role;
use huntbase_db::models::outcome::DeleteOutcome;
use serde::Serialize;

/// `{ "success": true }` acknowledgement for session operations.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Role lookup payload. `role` is `null` for unknown emails.
#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub role: Option<Role>,
}

/// Outcome of the combined product-and-report deletion.
///
/// Both sides are always present; a `deletedCount` of zero on the report
/// side means no report referenced the product.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOutcome {
    pub product_delete: DeleteOutcome,
    pub report_delete: DeleteOutcome,
    pub message: &'static str,
}
