//! Product moderation states and the transition rules between them.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Maximum number of products returned by the trending query.
pub const TRENDING_LIMIT: i64 = 6;

/// Moderation state of a product listing.
///
/// The stored strings are `"pending"`, `"Accepted"`, and `"Rejected"` --
/// the casing is part of the wire format consumed by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    #[serde(rename = "pending")]
    Pending,
    Accepted,
    Rejected,
}

impl ProductStatus {
    /// The stored string form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Pending => "pending",
            ProductStatus::Accepted => "Accepted",
            ProductStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a moderation transition.
///
/// Allowed moves:
/// - `pending -> Accepted` and `pending -> Rejected` (review decision)
/// - `Accepted -> pending` and `Rejected -> pending` (re-review)
/// - any state to itself (repeated decisions are idempotent)
///
/// Jumping directly between `Accepted` and `Rejected` must go back through
/// review and is rejected with [`CoreError::Conflict`].
pub fn validate_transition(from: ProductStatus, to: ProductStatus) -> Result<(), CoreError> {
    use ProductStatus::{Accepted, Pending, Rejected};

    let allowed = from == to
        || matches!(
            (from, to),
            (Pending, Accepted) | (Pending, Rejected) | (Accepted, Pending) | (Rejected, Pending)
        );

    if allowed {
        Ok(())
    } else {
        Err(CoreError::Conflict(format!(
            "Invalid status transition: {from} -> {to}"
        )))
    }
}
