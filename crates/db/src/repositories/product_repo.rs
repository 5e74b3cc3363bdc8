//! Repository for the `products` collection.

use futures::TryStreamExt;
use huntbase_core::product::{ProductStatus, TRENDING_LIMIT};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::Collection;

use crate::models::product::{Product, UpdateProduct};
use crate::Db;

/// Collection name for product documents.
pub const COLLECTION: &str = "products";

fn collection(db: &Db) -> Collection<Product> {
    db.collection(COLLECTION)
}

/// Build the `$set` payload for a partial product update.
///
/// Only fields present in the DTO enter the document, so absent fields are
/// left untouched. Returns an empty document when nothing was provided.
pub fn build_update_document(input: &UpdateProduct) -> Document {
    let mut set = Document::new();
    if let Some(name) = &input.name {
        set.insert("name", name);
    }
    if let Some(description) = &input.description {
        set.insert("description", description);
    }
    if let Some(image) = &input.image {
        set.insert("image", image);
    }
    if let Some(external_links) = &input.external_links {
        set.insert("externalLinks", external_links);
    }
    if let Some(tags) = &input.tags {
        set.insert("tags", tags.clone());
    }
    set
}

/// Build the find filter for a tag search, or `None` for a blank term.
///
/// The term is trimmed and regex-escaped so metacharacters match literally;
/// matching is a case-insensitive substring over the tags array.
pub fn tag_search_filter(term: &str) -> Option<Document> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    let pattern = regex::escape(term);
    Some(doc! { "tags": { "$regex": pattern, "$options": "i" } })
}

/// Provides catalog CRUD, moderation updates, voting, and the public queries.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new listing.
    pub async fn create(db: &Db, product: &Product) -> Result<InsertOneResult, mongodb::error::Error> {
        collection(db).insert_one(product).await
    }

    /// All products, newest first (`_id` descending).
    pub async fn list_all(db: &Db) -> Result<Vec<Product>, mongodb::error::Error> {
        collection(db)
            .find(doc! {})
            .sort(doc! { "_id": -1 })
            .await?
            .try_collect()
            .await
    }

    /// Products in a given moderation state, newest first.
    pub async fn list_by_status(
        db: &Db,
        status: ProductStatus,
    ) -> Result<Vec<Product>, mongodb::error::Error> {
        collection(db)
            .find(doc! { "status": status.as_str() })
            .sort(doc! { "_id": -1 })
            .await?
            .try_collect()
            .await
    }

    /// Products owned by the given email, newest first.
    pub async fn list_by_owner(db: &Db, email: &str) -> Result<Vec<Product>, mongodb::error::Error> {
        collection(db)
            .find(doc! { "owner.email": email })
            .sort(doc! { "_id": -1 })
            .await?
            .try_collect()
            .await
    }

    pub async fn find_by_id(db: &Db, id: ObjectId) -> Result<Option<Product>, mongodb::error::Error> {
        collection(db).find_one(doc! { "_id": id }).await
    }

    /// Apply an allow-listed partial update. The caller must ensure the
    /// update document is non-empty.
    pub async fn update_fields(
        db: &Db,
        id: ObjectId,
        set: Document,
    ) -> Result<UpdateResult, mongodb::error::Error> {
        collection(db)
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .await
    }

    /// Set the moderation status.
    pub async fn set_status(
        db: &Db,
        id: ObjectId,
        status: ProductStatus,
    ) -> Result<UpdateResult, mongodb::error::Error> {
        collection(db)
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "status": status.as_str() } },
            )
            .await
    }

    /// Atomically add one vote.
    pub async fn increment_votes(db: &Db, id: ObjectId) -> Result<UpdateResult, mongodb::error::Error> {
        collection(db)
            .update_one(doc! { "_id": id }, doc! { "$inc": { "votes": 1 } })
            .await
    }

    /// Top accepted products by vote count, capped at [`TRENDING_LIMIT`].
    pub async fn trending(db: &Db) -> Result<Vec<Product>, mongodb::error::Error> {
        collection(db)
            .find(doc! { "status": ProductStatus::Accepted.as_str() })
            .sort(doc! { "votes": -1 })
            .limit(TRENDING_LIMIT)
            .await?
            .try_collect()
            .await
    }

    /// Case-insensitive literal substring search over product tags.
    ///
    /// An empty or whitespace-only term returns the full catalog.
    pub async fn search_by_tag(db: &Db, term: &str) -> Result<Vec<Product>, mongodb::error::Error> {
        let Some(filter) = tag_search_filter(term) else {
            return Self::list_all(db).await;
        };

        collection(db)
            .find(filter)
            .sort(doc! { "_id": -1 })
            .await?
            .try_collect()
            .await
    }

    pub async fn delete(db: &Db, id: ObjectId) -> Result<DeleteResult, mongodb::error::Error> {
        collection(db).delete_one(doc! { "_id": id }).await
    }

    /// Total number of products.
    pub async fn count(db: &Db) -> Result<u64, mongodb::error::Error> {
        collection(db).count_documents(doc! {}).await
    }

    /// Number of products in a given moderation state.
    pub async fn count_by_status(
        db: &Db,
        status: ProductStatus,
    ) -> Result<u64, mongodb::error::Error> {
        collection(db)
            .count_documents(doc! { "status": status.as_str() })
            .await
    }
}
