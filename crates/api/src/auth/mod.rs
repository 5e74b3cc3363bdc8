//! Session token signing and cookie handling.

pub mod cookie;
pub mod jwt;
