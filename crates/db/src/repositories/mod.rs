//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async collection
//! operations that accept the [`crate::Db`] handle as the first argument.

pub mod coupon_repo;
pub mod product_repo;
pub mod report_repo;
pub mod stats_repo;
pub mod user_repo;

pub use coupon_repo::CouponRepo;
pub use product_repo::ProductRepo;
pub use report_repo::ReportRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;
