//! Till
//!
//! Till is an in-memory point-of-sale core: an immutable product catalog, a mutable order with snapshotted line prices, pure catalog filtering, and receipt rendering.

pub mod catalog;
pub mod filter;
pub mod fixtures;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod register;
pub mod utils;
