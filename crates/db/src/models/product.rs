//! Product listing document and DTOs.

use huntbase_core::product::ProductStatus;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// Owner snapshot embedded in a product at creation time.
///
/// Denormalized from the submitting user; it is not updated if the user's
/// profile later changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOwner {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A document from the `products` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// MongoDB document ID. `None` only before insertion.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub external_links: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub owner: ProductOwner,
    pub status: ProductStatus,
    #[serde(default)]
    pub votes: i64,
    pub created_at: DateTime,
}

impl Product {
    /// Build a new listing from a submission.
    ///
    /// Status and vote count are server-assigned: every new product starts
    /// pending with zero votes regardless of what the client sent.
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: None,
            name: input.name,
            description: input.description,
            image: input.image,
            external_links: input.external_links,
            tags: input.tags,
            owner: input.owner,
            status: ProductStatus::Pending,
            votes: 0,
            created_at: DateTime::now(),
        }
    }
}

/// Fields accepted when submitting a product.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub external_links: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub owner: ProductOwner,
}

/// Allow-listed fields for a partial product update.
///
/// Status, votes, and owner are deliberately absent: status changes go
/// through the moderation endpoints and votes through the vote endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub external_links: Option<String>,
    pub tags: Option<Vec<String>>,
}
