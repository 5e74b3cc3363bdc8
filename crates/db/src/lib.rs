//! MongoDB access layer for huntbase.
//!
//! Exposes a connection helper, a ping-based health check, index bootstrap,
//! the serde document models, and one repository per collection.

use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, IndexModel};

pub mod models;
pub mod repositories;

/// Handle to the application database. Cheaply cloneable.
pub type Db = mongodb::Database;

/// Connect to MongoDB and select the application database.
///
/// The client connects lazily; the first operation establishes the actual
/// connection. Use [`health_check`] at startup to fail fast on a bad URI.
pub async fn connect(uri: &str, db_name: &str) -> Result<Db, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;
    Ok(client.database(db_name))
}

/// Verify the database is reachable with a `ping` command.
pub async fn health_check(db: &Db) -> Result<(), mongodb::error::Error> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}

/// Create the unique indexes the application relies on.
///
/// - `users.email`: one account per email address.
/// - `coupons.code`: the authoritative uniqueness signal for coupon codes;
///   the handler-level existence pre-check only produces a friendlier
///   message, concurrent duplicates surface here as error code 11000.
pub async fn ensure_indexes(db: &Db) -> Result<(), mongodb::error::Error> {
    let unique = IndexOptions::builder().unique(true).build();

    db.collection::<models::user::User>(repositories::user_repo::COLLECTION)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(unique.clone())
                .build(),
        )
        .await?;

    db.collection::<models::coupon::Coupon>(repositories::coupon_repo::COLLECTION)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "code": 1 })
                .options(unique)
                .build(),
        )
        .await?;

    tracing::debug!("Unique indexes ensured on users.email and coupons.code");
    Ok(())
}

/// Whether an error is a duplicate-key write error (MongoDB code 11000).
pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    matches!(
        &*err.kind,
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == 11000
    )
}
