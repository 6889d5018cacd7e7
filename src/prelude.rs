//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, CatalogError},
    filter::{CategoryFilter, filter_catalog},
    fixtures::{Fixture, FixtureError},
    orders::{LineItem, Order, OrderError},
    pricing::{TotalPriceError, line_total, order_total},
    products::{Product, ProductId},
    receipt::{Receipt, ReceiptError, ReceiptLine},
    register::Register,
};
