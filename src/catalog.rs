//! Catalog

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::products::{Product, ProductId};

/// Errors related to catalog construction or lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A product's currency differs from the catalog currency (id, product currency, catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// Two products share the same id.
    #[error("Duplicate product id {0}")]
    DuplicateId(ProductId),

    /// A product has an empty display name.
    #[error("Product {0} has an empty name")]
    EmptyName(ProductId),

    /// No product has this id.
    #[error("Product {0} not found")]
    NotFound(ProductId),
}

/// The read-only set of purchasable products.
///
/// Built once at startup and never mutated afterwards. Products keep their
/// source order, so iteration is stable across calls.
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    products: Vec<Product<'a>>,
    index: FxHashMap<ProductId, usize>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create a catalog from the given products.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if two products share an id, a product has
    /// an empty name, or a product's currency differs from the catalog
    /// currency.
    pub fn with_products(
        products: impl Into<Vec<Product<'a>>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let products = products.into();
        let mut index = FxHashMap::default();

        for (i, product) in products.iter().enumerate() {
            if product.name.is_empty() {
                return Err(CatalogError::EmptyName(product.id));
            }

            let product_currency = product.price.currency();
            if product_currency != currency {
                return Err(CatalogError::CurrencyMismatch(
                    product.id,
                    product_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            if index.insert(product.id, i).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Catalog {
            products,
            index,
            currency,
        })
    }

    /// Iterate over all products in stable source order.
    pub fn products(&self) -> impl Iterator<Item = &Product<'a>> {
        self.products.iter()
    }

    /// Look up a product by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no product has this id. This is
    /// unreachable for ids sourced from [`Catalog::products`] and is treated
    /// as a caller bug, not a business condition.
    pub fn find(&self, id: ProductId) -> Result<&Product<'a>, CatalogError> {
        self.get(id).ok_or(CatalogError::NotFound(id))
    }

    /// Look up a product by id, returning `None` on a miss.
    pub fn get(&self, id: ProductId) -> Option<&Product<'a>> {
        self.index
            .get(&id)
            .and_then(|&i| self.products.get(i))
    }

    /// Distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();

        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }

        categories
    }

    /// Get the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get the currency of the catalog.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
