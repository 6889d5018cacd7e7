//! Register
//!
//! The inbound action surface for a single checkout session. Every method
//! corresponds to one user gesture, runs to completion synchronously, and
//! leaves the derived views (`total`, `filtered_products`) consistent with
//! the order before it returns.

use rusty_money::{Money, iso::Currency};

use crate::{
    catalog::Catalog,
    filter::{CategoryFilter, filter_catalog},
    orders::{LineItem, Order, OrderError},
    pricing::TotalPriceError,
    products::{Product, ProductId},
    receipt::{Receipt, ReceiptError},
};

/// A single point-of-sale session: one catalog, one open order, and the
/// current product-view selection state.
#[derive(Debug)]
pub struct Register<'a> {
    catalog: &'a Catalog<'a>,
    order: Order<'a>,
    search_text: String,
    category: CategoryFilter,
}

impl<'a> Register<'a> {
    /// Open a session against the given catalog with an empty order and an
    /// unfiltered product view.
    pub fn new(catalog: &'a Catalog<'a>) -> Self {
        Register {
            catalog,
            order: Order::new(catalog.currency()),
            search_text: String::new(),
            category: CategoryFilter::All,
        }
    }

    /// Ring up one unit of a product.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::UnknownProduct` if the id is not in the
    /// catalog.
    pub fn select_product(&mut self, id: ProductId) -> Result<(), OrderError> {
        self.order.add_item(self.catalog, id)
    }

    /// Adjust a line's quantity. Silently ignored for products with no
    /// line.
    pub fn change_quantity(&mut self, id: ProductId, delta: i64) {
        self.order.adjust_quantity(id, delta);
    }

    /// Remove a product's line entirely.
    pub fn remove_line(&mut self, id: ProductId) {
        self.order.remove_all(id);
    }

    /// Replace the free-text search filter.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Replace the category filter.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Abandon the open order.
    pub fn clear_order(&mut self) {
        self.order.clear();
    }

    /// Complete payment: snapshot the order into a receipt, then start a
    /// fresh empty order.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if the order total cannot be calculated.
    pub fn complete_order(&mut self) -> Result<Receipt<'a>, ReceiptError> {
        let receipt = Receipt::from_order(&self.order)?;

        self.order.clear();

        Ok(receipt)
    }

    /// The open order's lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &LineItem<'a>> {
        self.order.lines()
    }

    /// The open order's running total.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` on a money arithmetic error;
    /// unreachable for orders built through this register.
    pub fn total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        self.order.total()
    }

    /// The catalog subset matching the current search text and category.
    pub fn filtered_products(&self) -> Vec<&'a Product<'a>> {
        filter_catalog(self.catalog, &self.search_text, &self.category)
    }

    /// The open order.
    pub fn order(&self) -> &Order<'a> {
        &self.order
    }

    /// The current search text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The current category filter.
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// The catalog this session sells from.
    pub fn catalog(&self) -> &'a Catalog<'a> {
        self.catalog
    }
}
