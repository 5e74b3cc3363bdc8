//! Document models and DTOs.
//!
//! Each submodule defines the stored document shape for one collection plus
//! the create/update DTOs accepted from handlers. Field names serialize in
//! the camelCase wire format the frontend consumes.

pub mod coupon;
pub mod outcome;
pub mod product;
pub mod report;
pub mod stats;
pub mod user;
