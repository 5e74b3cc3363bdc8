//! Repository for the `users` collection.

use futures::TryStreamExt;
use huntbase_core::roles::Role;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::Collection;

use crate::models::user::User;
use crate::Db;

/// Collection name for user documents.
pub const COLLECTION: &str = "users";

fn collection(db: &Db) -> Collection<User> {
    db.collection(COLLECTION)
}

/// Provides account lookup, registration, role mutation, and deletion.
pub struct UserRepo;

impl UserRepo {
    /// Find an account by email. Emails are matched case-sensitively.
    pub async fn find_by_email(db: &Db, email: &str) -> Result<Option<User>, mongodb::error::Error> {
        collection(db).find_one(doc! { "email": email }).await
    }

    /// Insert a new account document.
    pub async fn insert(db: &Db, user: &User) -> Result<InsertOneResult, mongodb::error::Error> {
        collection(db).insert_one(user).await
    }

    /// List every account except the one with the given email.
    pub async fn list_excluding(db: &Db, email: &str) -> Result<Vec<User>, mongodb::error::Error> {
        collection(db)
            .find(doc! { "email": { "$ne": email } })
            .await?
            .try_collect()
            .await
    }

    /// Set the role of an account by document id.
    pub async fn set_role(
        db: &Db,
        id: ObjectId,
        role: Role,
    ) -> Result<UpdateResult, mongodb::error::Error> {
        collection(db)
            .update_one(doc! { "_id": id }, doc! { "$set": { "role": role.as_str() } })
            .await
    }

    /// Delete an account by document id.
    pub async fn delete(db: &Db, id: ObjectId) -> Result<DeleteResult, mongodb::error::Error> {
        collection(db).delete_one(doc! { "_id": id }).await
    }

    /// Total number of accounts.
    pub async fn count(db: &Db) -> Result<u64, mongodb::error::Error> {
        collection(db).count_documents(doc! {}).await
    }
}
