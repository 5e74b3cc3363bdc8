//! User roles and the capability checks built on them.
//!
//! Role strings are stored verbatim in the users collection. Older documents
//! may carry the legacy `"User"` value, which reads back as [`Role::Customer`].

use serde::{Deserialize, Serialize};

/// Authorization tier of a user.
///
/// Serialized as `"Customer"`, `"Moderator"`, or `"Admin"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Regular user. Legacy documents stored this as `"User"`.
    #[serde(alias = "User")]
    Customer,
    Moderator,
    Admin,
}

impl Role {
    /// The stored string form of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Moderator => "Moderator",
            Role::Admin => "Admin",
        }
    }

    /// Whether this role may moderate the catalog (approve/reject products,
    /// resolve reports). Admins implicitly hold moderator capability.
    pub fn can_moderate(&self) -> bool {
        matches!(self, Role::Moderator | Role::Admin)
    }

    /// Whether this role may manage users and coupons.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
