//! Products

use std::fmt;

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

/// Stable integer identity for a product.
///
/// Ids come from the catalog source data and are never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product id
    pub id: ProductId,

    /// Product display name (non-empty)
    pub name: String,

    /// Unit price in minor currency units
    pub price: Money<'a, Currency>,

    /// Category label (e.g. "Beverages", "Pastries")
    pub category: String,
}

impl<'a> Product<'a> {
    /// Creates a new product with the given identity, name, price and category.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money<'a, Currency>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}
