//! View Filter
//!
//! Pure derivation of a catalog subset from search text and category
//! selection. Safe to recompute on every keystroke; never mutates the
//! catalog or the order.

use crate::{catalog::Catalog, products::Product};

/// Category selection for the product view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Match every category.
    #[default]
    All,

    /// Match only products with this exact category label.
    Category(String),
}

impl CategoryFilter {
    /// Parse a UI label, treating `"All"` as the match-everything sentinel.
    pub fn from_label(label: &str) -> Self {
        if label == "All" {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(label.to_string())
        }
    }

    /// Check whether a product category passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(label) => label == category,
        }
    }
}

/// Filter the catalog by search text and category.
///
/// A product passes when its name contains `search_text` as a
/// case-insensitive substring and its category passes `category`. Empty
/// search text matches everything. Returns a fresh `Vec` each call;
/// callers recompute rather than cache when inputs change.
pub fn filter_catalog<'c, 'a>(
    catalog: &'c Catalog<'a>,
    search_text: &str,
    category: &CategoryFilter,
) -> Vec<&'c Product<'a>> {
    let needle = search_text.to_lowercase();

    catalog
        .products()
        .filter(|product| {
            product.name.to_lowercase().contains(&needle) && category.matches(&product.category)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use crate::{
        catalog::CatalogError,
        products::{Product, ProductId},
    };

    use super::*;

    fn test_catalog<'a>() -> Result<Catalog<'a>, CatalogError> {
        Catalog::with_products(
            [
                Product::new(
                    ProductId(1),
                    "Espresso",
                    Money::from_minor(350, USD),
                    "Beverages",
                ),
                Product::new(
                    ProductId(2),
                    "Croissant",
                    Money::from_minor(300, USD),
                    "Pastries",
                ),
            ],
            USD,
        )
    }

    fn ids(products: &[&Product<'_>]) -> Vec<ProductId> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn search_is_a_case_insensitive_substring_match() -> TestResult {
        let catalog = test_catalog()?;

        let matches = filter_catalog(&catalog, "cro", &CategoryFilter::All);

        assert_eq!(ids(&matches), [ProductId(2)]);

        Ok(())
    }

    #[test]
    fn empty_search_matches_everything() -> TestResult {
        let catalog = test_catalog()?;

        let matches = filter_catalog(&catalog, "", &CategoryFilter::All);

        assert_eq!(ids(&matches), [ProductId(1), ProductId(2)]);

        Ok(())
    }

    #[test]
    fn category_filter_narrows_to_one_label() -> TestResult {
        let catalog = test_catalog()?;

        let matches = filter_catalog(
            &catalog,
            "",
            &CategoryFilter::Category("Beverages".to_string()),
        );

        assert_eq!(ids(&matches), [ProductId(1)]);

        Ok(())
    }

    #[test]
    fn search_and_category_compose() -> TestResult {
        let catalog = test_catalog()?;

        let matches = filter_catalog(
            &catalog,
            "cro",
            &CategoryFilter::Category("Beverages".to_string()),
        );

        assert!(matches.is_empty());

        Ok(())
    }

    #[test]
    fn no_match_returns_an_empty_fresh_vec() -> TestResult {
        let catalog = test_catalog()?;

        let matches = filter_catalog(&catalog, "zzz", &CategoryFilter::All);

        assert!(matches.is_empty());

        Ok(())
    }

    #[test]
    fn from_label_treats_all_as_sentinel() {
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_label("Pastries"),
            CategoryFilter::Category("Pastries".to_string())
        );
    }
}
