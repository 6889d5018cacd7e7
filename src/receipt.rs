//! Receipt

use std::io;

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{orders::Order, pricing::TotalPriceError, products::ProductId};

/// Errors that can occur when building or writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error calculating the order total.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// IO error while writing the rendered receipt.
    #[error("IO error")]
    Io(#[from] io::Error),
}

/// One rendered line of a completed order.
#[derive(Debug, Clone)]
pub struct ReceiptLine<'a> {
    /// Id of the product this line refers to.
    pub product_id: ProductId,

    /// Display name snapshotted from the order line.
    pub name: String,

    /// Quantity purchased.
    pub quantity: u32,

    /// Unit price at the time the line was added.
    pub unit_price: Money<'a, Currency>,

    /// Unit price times quantity.
    pub line_total: Money<'a, Currency>,
}

/// Immutable snapshot of an order taken when payment completes.
///
/// The order itself is cleared after completion; the receipt is what
/// survives for display.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    lines: SmallVec<[ReceiptLine<'a>; 10]>,
    total: Money<'a, Currency>,
    currency: &'static Currency,
}

impl<'a> Receipt<'a> {
    /// Snapshot the given order.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if the order total cannot be calculated.
    pub fn from_order(order: &Order<'a>) -> Result<Self, ReceiptError> {
        let lines = order
            .lines()
            .map(|line| ReceiptLine {
                product_id: line.product_id(),
                name: line.name().to_string(),
                quantity: line.quantity(),
                unit_price: *line.unit_price(),
                line_total: line.line_total(),
            })
            .collect();

        Ok(Receipt {
            lines,
            total: order.total()?,
            currency: order.currency(),
        })
    }

    /// The snapshotted lines in insertion order.
    pub fn lines(&self) -> &[ReceiptLine<'a>] {
        &self.lines
    }

    /// Total amount due for the order.
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Currency used for all monetary values.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Check if the receipt has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the receipt as a table followed by the total.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Qty", "Item", "Unit Price", "Line Total"]);

        for line in &self.lines {
            builder.push_record([
                line.quantity.to_string(),
                line.name.clone(),
                line.unit_price.to_string(),
                line.line_total.to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::sharp());
        table.modify(Columns::new(2..), Alignment::right());

        writeln!(out, "{table}")?;
        writeln!(out, "Total: {}", self.total)?;

        Ok(())
    }
}
