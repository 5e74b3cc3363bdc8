//! Domain logic for the huntbase product-discovery platform.
//!
//! Pure types and rules shared by the database and API crates: the error
//! taxonomy, user roles, the product moderation state machine, and coupon
//! code validation. No I/O lives here.

pub mod coupon;
pub mod error;
pub mod product;
pub mod roles;
