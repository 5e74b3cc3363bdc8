//! Repository for the `reports` collection.

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::results::{DeleteResult, InsertOneResult};
use mongodb::Collection;

use crate::models::report::Report;
use crate::Db;

/// Collection name for report documents.
pub const COLLECTION: &str = "reports";

fn collection(db: &Db) -> Collection<Report> {
    db.collection(COLLECTION)
}

/// Provides report filing, per-reporter lookup, and resolution cleanup.
pub struct ReportRepo;

impl ReportRepo {
    pub async fn create(db: &Db, report: &Report) -> Result<InsertOneResult, mongodb::error::Error> {
        collection(db).insert_one(report).await
    }

    /// Reports filed by the given email, newest first.
    pub async fn list_by_reporter(
        db: &Db,
        email: &str,
    ) -> Result<Vec<Report>, mongodb::error::Error> {
        collection(db)
            .find(doc! { "owner.email": email })
            .sort(doc! { "_id": -1 })
            .await?
            .try_collect()
            .await
    }

    pub async fn find_by_id(db: &Db, id: ObjectId) -> Result<Option<Report>, mongodb::error::Error> {
        collection(db).find_one(doc! { "_id": id }).await
    }

    /// Delete the report whose `reportId` field references the given product.
    ///
    /// A zero `deleted_count` means no report was tagged with that product,
    /// which the combined-deletion endpoint reports rather than treats as an
    /// error.
    pub async fn delete_by_product_id(
        db: &Db,
        product_hex_id: &str,
    ) -> Result<DeleteResult, mongodb::error::Error> {
        collection(db)
            .delete_one(doc! { "reportId": product_hex_id })
            .await
    }
}
