//! Read-only aggregation for the dashboard.

use huntbase_core::product::ProductStatus;

use crate::models::stats::Statistics;
use crate::repositories::{ProductRepo, UserRepo};
use crate::Db;

/// Computes the dashboard counts across products and users.
pub struct StatsRepo;

impl StatsRepo {
    /// Count products per moderation state plus total users.
    ///
    /// Issues independent count queries; the counts are not a consistent
    /// snapshot under concurrent writes, which is acceptable for a
    /// dashboard display.
    pub async fn compute(db: &Db) -> Result<Statistics, mongodb::error::Error> {
        let total_products = ProductRepo::count(db).await?;
        let accepted = ProductRepo::count_by_status(db, ProductStatus::Accepted).await?;
        let rejected = ProductRepo::count_by_status(db, ProductStatus::Rejected).await?;
        let pending = ProductRepo::count_by_status(db, ProductStatus::Pending).await?;
        let total_users = UserRepo::count(db).await?;

        Ok(Statistics {
            total_products,
            accepted,
            rejected,
            pending,
            total_review: accepted + rejected + pending,
            total_users,
        })
    }
}
