//! Repository for the `coupons` collection.

use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::Collection;

use crate::models::coupon::{Coupon, UpdateCoupon};
use crate::Db;

/// Collection name for coupon documents.
pub const COLLECTION: &str = "coupons";

fn collection(db: &Db) -> Collection<Coupon> {
    db.collection(COLLECTION)
}

/// Build the `$set` payload for a partial coupon update.
pub fn build_update_document(input: &UpdateCoupon) -> Document {
    let mut set = Document::new();
    if let Some(code) = &input.code {
        set.insert("code", code);
    }
    if let Some(discount) = input.discount {
        set.insert("discount", discount);
    }
    if let Some(expiry) = &input.expiry {
        set.insert("expiry", expiry);
    }
    if let Some(description) = &input.description {
        set.insert("description", description);
    }
    set
}

/// Provides coupon CRUD with code-uniqueness support.
pub struct CouponRepo;

impl CouponRepo {
    /// Whether a coupon with this code already exists.
    ///
    /// Pre-check only; the unique index on `code` is the authoritative
    /// signal under concurrency.
    pub async fn exists_by_code(db: &Db, code: &str) -> Result<bool, mongodb::error::Error> {
        Ok(collection(db).find_one(doc! { "code": code }).await?.is_some())
    }

    pub async fn create(db: &Db, coupon: &Coupon) -> Result<InsertOneResult, mongodb::error::Error> {
        collection(db).insert_one(coupon).await
    }

    pub async fn list_all(db: &Db) -> Result<Vec<Coupon>, mongodb::error::Error> {
        collection(db).find(doc! {}).await?.try_collect().await
    }

    pub async fn find_by_id(db: &Db, id: ObjectId) -> Result<Option<Coupon>, mongodb::error::Error> {
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

    pub async fn delete(db: &Db, id: ObjectId) -> Result<DeleteResult, mongodb::error::Error> {
        collection(db).delete_one(doc! { "_id": id }).await
    }
}
