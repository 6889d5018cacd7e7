//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::orders::LineItem;

/// Errors that can occur while calculating order totals.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates the total for a single line: unit price times quantity.
///
/// All arithmetic happens in minor units, never floating point.
pub fn line_total<'a>(line: &LineItem<'a>) -> Money<'a, Currency> {
    let minor = line.unit_price().to_minor_units() * i64::from(line.quantity());

    Money::from_minor(minor, line.unit_price().currency())
}

/// Calculates the total of a list of line items.
///
/// An empty list totals zero in the given currency; an order knows its
/// currency up front, so there is no "unknown currency" case.
///
/// # Errors
///
/// - [`TotalPriceError::Money`]: Wrapped money arithmetic or currency mismatch error.
pub fn order_total<'a>(
    lines: &[LineItem<'a>],
    currency: &'static Currency,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    let total = lines.iter().try_fold(
        Money::from_minor(0, currency),
        |acc, line| acc.add(line_total(line)),
    )?;

    Ok(total)
}
