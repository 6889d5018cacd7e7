//! Orders

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    catalog::Catalog,
    pricing::{TotalPriceError, order_total},
    products::ProductId,
};

/// Errors related to order mutation.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The id could not be resolved against the catalog.
    #[error("Product {0} is not in the catalog")]
    UnknownProduct(ProductId),
}

/// One product's accumulated quantity within an order.
///
/// `name` and `unit_price` are snapshotted from the product at the time the
/// line was created. Later catalog price changes must not retroactively
/// change an open order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem<'a> {
    product_id: ProductId,
    name: String,
    unit_price: Money<'a, Currency>,
    quantity: u32,
}

impl<'a> LineItem<'a> {
    /// Creates a line item with quantity 1.
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        unit_price: Money<'a, Currency>,
    ) -> Self {
        Self::with_quantity(product_id, name, unit_price, 1)
    }

    /// Creates a line item with the given quantity, clamped to at least 1.
    pub fn with_quantity(
        product_id: ProductId,
        name: impl Into<String>,
        unit_price: Money<'a, Currency>,
        quantity: u32,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            unit_price,
            quantity: quantity.max(1),
        }
    }

    /// Returns the id of the product this line refers to.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the display name snapshotted when the line was created.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price snapshotted when the line was created.
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.unit_price
    }

    /// Returns the quantity. Strictly positive while the line exists.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns unit price times quantity for this line.
    pub fn line_total(&self) -> Money<'a, Currency> {
        crate::pricing::line_total(self)
    }

}

/// The mutable cart for the active checkout session.
///
/// Lines keep insertion order; re-adding an existing product increments its
/// quantity without moving it. At most one line exists per product, and no
/// line ever has quantity zero.
#[derive(Debug)]
pub struct Order<'a> {
    lines: Vec<LineItem<'a>>,
    currency: &'static Currency,
}

impl<'a> Order<'a> {
    /// Create a new empty order in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Order {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product to the order.
    ///
    /// If a line for this product already exists, its quantity is
    /// incremented and its position is unchanged. Otherwise a new line with
    /// quantity 1 is appended, with name and unit price snapshotted from
    /// the catalog product.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::UnknownProduct` if the catalog cannot resolve
    /// the id.
    pub fn add_item(&mut self, catalog: &Catalog<'a>, id: ProductId) -> Result<(), OrderError> {
        let product = catalog.get(id).ok_or(OrderError::UnknownProduct(id))?;

        match self.lines.iter().position(|line| line.product_id == id) {
            Some(position) => {
                if let Some(line) = self.lines.get_mut(position) {
                    line.quantity = line.quantity.saturating_add(1);
                }
            }
            None => {
                self.lines
                    .push(LineItem::new(product.id, product.name.clone(), product.price));
            }
        }

        Ok(())
    }

    /// Adjust a line's quantity by `delta`, clamping at zero.
    ///
    /// A line driven to zero is removed, never retained. Adjusting a
    /// product that has no line is a silent no-op rather than an error:
    /// the UI may race itself (e.g. a double-click on a remove button),
    /// and a stale gesture must not fault the session.
    pub fn adjust_quantity(&mut self, id: ProductId, delta: i64) {
        let Some(position) = self.lines.iter().position(|line| line.product_id == id) else {
            return;
        };

        let Some(line) = self.lines.get_mut(position) else {
            return;
        };

        let quantity = i64::from(line.quantity).saturating_add(delta).max(0);

        if quantity == 0 {
            self.lines.remove(position);
        } else {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Remove a product's line entirely, whatever its quantity.
    ///
    /// No-op when the product has no line.
    pub fn remove_all(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product_id != id);
    }

    /// Empty the order unconditionally. Idempotent.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Calculate the order total: the sum of unit price times quantity over
    /// all lines, in exact minor units. Zero for an empty order.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if there was a money arithmetic or
    /// currency mismatch error. Unreachable for an order built through
    /// [`Order::add_item`], which only admits catalog-currency prices.
    pub fn total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        order_total(&self.lines, self.currency)
    }

    /// Iterate over the line items in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &LineItem<'a>> {
        self.lines.iter()
    }

    /// Current quantity for a product, `0` when it has no line.
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.lines
            .iter()
            .find(|line| line.product_id == id)
            .map_or(0, LineItem::quantity)
    }

    /// Get the number of lines in the order.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the order is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the order.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use crate::products::Product;

    use super::*;

    fn test_catalog<'a>() -> Result<Catalog<'a>, crate::catalog::CatalogError> {
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

    fn assert_total_matches_lines(order: &Order<'_>) -> TestResult {
        let expected = order
            .lines()
            .map(|line| line.line_total().to_minor_units())
            .sum::<i64>();

        assert_eq!(
            order.total()?.to_minor_units(),
            expected,
            "total must equal the sum of line totals"
        );

        Ok(())
    }

    #[test]
    fn add_item_creates_line_with_quantity_one() -> TestResult {
        let catalog = test_catalog()?;
        let mut order = Order::new(USD);

        order.add_item(&catalog, ProductId(1))?;

        assert_eq!(order.len(), 1);
        assert_eq!(order.quantity_of(ProductId(1)), 1);
        assert_eq!(order.total()?, Money::from_minor(350, USD));

        Ok(())
    }

    #[test]
    fn repeated_adds_accumulate_into_one_line() -> TestResult {
        let catalog = test_catalog()?;
        let mut order = Order::new(USD);

        for _ in 0..5 {
            order.add_item(&catalog, ProductId(1))?;
        }

        assert_eq!(order.len(), 1, "no duplicate lines for the same product");
        assert_eq!(order.quantity_of(ProductId(1)), 5);
        assert_total_matches_lines(&order)?;

        Ok(())
    }

    #[test]
    fn add_item_snapshots_name_and_price() -> TestResult {
        let catalog = test_catalog()?;
        let mut order = Order::new(USD);

        order.add_item(&catalog, ProductId(2))?;

        let Some(line) = order.lines().next() else {
            panic!("expected a line");
        };

        assert_eq!(line.name(), "Croissant");
        assert_eq!(line.unit_price(), &Money::from_minor(300, USD));

        Ok(())
    }

    #[test]
    fn re_adding_keeps_snapshot_from_first_add() -> TestResult {
        let catalog = test_catalog()?;

        // Same id, different price. Stands in for a catalog reload between
        // the first and second add of the same product.
        let repriced = Catalog::with_products(
            [Product::new(
                ProductId(1),
                "Espresso",
                Money::from_minor(900, USD),
                "Beverages",
            )],
            USD,
        )?;

        let mut order = Order::new(USD);

        order.add_item(&catalog, ProductId(1))?;
        order.add_item(&repriced, ProductId(1))?;

        let Some(line) = order.lines().next() else {
            panic!("expected a line");
        };

        assert_eq!(line.quantity(), 2);
        assert_eq!(
            line.unit_price(),
            &Money::from_minor(350, USD),
            "open orders keep the price snapshotted at first add"
        );

        Ok(())
    }

    #[test]
    fn add_item_unknown_product_errors() -> TestResult {
        let catalog = test_catalog()?;
        let mut order = Order::new(USD);

        let result = order.add_item(&catalog, ProductId(99));

        assert!(matches!(
            result,
            Err(OrderError::UnknownProduct(ProductId(99)))
        ));
        assert!(order.is_empty());

        Ok(())
    }

    #[test]
    fn re_adding_does_not_move_the_line() -> TestResult {
        let catalog = test_catalog()?;
        let mut order = Order::new(USD);

        order.add_item(&catalog, ProductId(1))?;
        order.add_item(&catalog, ProductId(2))?;
        order.add_item(&catalog, ProductId(1))?;

        let ids: Vec<ProductId> = order.lines().map(LineItem::product_id).collect();

        assert_eq!(ids, [ProductId(1), ProductId(2)]);

        Ok(())
    }

    #[test]
    fn adjust_quantity_increments_and_decrements() -> TestResult {
        let catalog = test_catalog()?;
        let mut order = Order::new(USD);

        order.add_item(&catalog, ProductId(1))?;

        order.adjust_quantity(ProductId(1), 3);
        assert_eq!(order.quantity_of(ProductId(1)), 4);
        assert_total_matches_lines(&order)?;

        order.adjust_quantity(ProductId(1), -2);
        assert_eq!(order.quantity_of(ProductId(1)), 2);
        assert_total_matches_lines(&order)?;

        Ok(())
    }

    #[test]
    fn adjust_quantity_to_zero_removes_the_line() -> TestResult {
        let catalog = test_catalog()?;
        let mut order = Order::new(USD);

        order.add_item(&catalog, ProductId(1))?;
        order.adjust_quantity(ProductId(1), -1);

        assert!(order.is_empty(), "zero-quantity lines must not be retained");
        assert_eq!(order.total()?, Money::from_minor(0, USD));

        Ok(())
    }

    #[test]
    fn adjust_quantity_clamps_below_zero() -> TestResult {
        let catalog = test_catalog()?;
        let mut order = Order::new(USD);

        order.add_item(&catalog, ProductId(1))?;
        order.add_item(&catalog, ProductId(1))?;
        order.add_item(&catalog, ProductId(2))?;

        order.adjust_quantity(ProductId(1), -5);

        assert_eq!(order.quantity_of(ProductId(1)), 0);
        assert_eq!(order.len(), 1);
        assert_eq!(order.total()?, Money::from_minor(300, USD));

        Ok(())
    }

    #[test]
    fn adjust_quantity_on_absent_product_is_a_no_op() -> TestResult {
        let catalog = test_catalog()?;
        let mut order = Order::new(USD);

        order.add_item(&catalog, ProductId(1))?;
        order.adjust_quantity(ProductId(99), -1);

        assert_eq!(order.len(), 1);
        assert_eq!(order.quantity_of(ProductId(1)), 1);

        Ok(())
    }

    #[test]
    fn remove_all_drops_the_line_whatever_its_quantity() -> TestResult {
        let catalog = test_catalog()?;
        let mut order = Order::new(USD);

        order.add_item(&catalog, ProductId(1))?;
        order.add_item(&catalog, ProductId(1))?;
        order.add_item(&catalog, ProductId(1))?;

        order.remove_all(ProductId(1));

        assert!(order.is_empty());

        // Absent id: still a no-op.
        order.remove_all(ProductId(1));

        assert!(order.is_empty());

        Ok(())
    }

    #[test]
    fn clear_is_idempotent() -> TestResult {
        let catalog = test_catalog()?;
        let mut order = Order::new(USD);

        order.add_item(&catalog, ProductId(1))?;
        order.add_item(&catalog, ProductId(2))?;

        order.clear();

        assert!(order.is_empty());
        assert_eq!(order.total()?, Money::from_minor(0, USD));

        order.clear();

        assert!(order.is_empty());
        assert_eq!(order.total()?, Money::from_minor(0, USD));

        Ok(())
    }

    #[test]
    fn worked_example_from_the_cafe_catalog() -> TestResult {
        let catalog = test_catalog()?;
        let mut order = Order::new(USD);

        order.add_item(&catalog, ProductId(1))?;
        assert_eq!(order.total()?, Money::from_minor(350, USD));

        order.add_item(&catalog, ProductId(1))?;
        assert_eq!(order.quantity_of(ProductId(1)), 2);
        assert_eq!(order.total()?, Money::from_minor(700, USD));

        order.add_item(&catalog, ProductId(2))?;
        assert_eq!(order.total()?, Money::from_minor(1000, USD));

        order.adjust_quantity(ProductId(1), -5);
        assert_eq!(order.len(), 1);
        assert_eq!(order.quantity_of(ProductId(2)), 1);
        assert_eq!(order.total()?, Money::from_minor(300, USD));

        order.clear();
        assert!(order.is_empty());
        assert_eq!(order.total()?, Money::from_minor(0, USD));

        Ok(())
    }
}
