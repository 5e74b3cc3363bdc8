//! User account document and registration DTO.

use huntbase_core::roles::Role;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// A document from the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// MongoDB document ID. `None` only before insertion.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL", default)]
    pub photo_url: Option<String>,
    pub role: Role,
    pub created_at: DateTime,
}

impl User {
    /// Build a new account from the profile supplied on first login.
    ///
    /// Every registration path defaults to [`Role::Customer`].
    pub fn new(email: &str, profile: RegisterUser) -> Self {
        Self {
            id: None,
            email: email.to_string(),
            display_name: profile.display_name,
            photo_url: profile.photo_url,
            role: Role::Customer,
            created_at: DateTime::now(),
        }
    }
}

/// Profile fields accepted when registering a user.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL", default)]
    pub photo_url: Option<String>,
}
