//! Receipt

use std::io;

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::{Columns, Rows}},
};

use crate::{
    items::LineItem,
    pricing::{compute_subtotal, round_price},
    strategies::PricingStrategy,
};

/// A priced cart, ready for display.
///
/// Holds the line items together with the 2-decimal subtotal and final total
/// produced by a strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt<'a> {
    items: &'a [LineItem],
    strategy_label: String,
    subtotal: Decimal,
    total: Decimal,
}

impl<'a> Receipt<'a> {
    /// Prices the items with the given strategy.
    ///
    /// The subtotal is computed first and seeds the strategy, so the total
    /// reflects the discount applied to exactly the displayed subtotal.
    #[must_use]
    pub fn from_strategy(
        items: &'a [LineItem],
        strategy_label: impl Into<String>,
        strategy: &PricingStrategy,
    ) -> Self {
        let subtotal = compute_subtotal(items);
        let total = strategy.apply(subtotal, items);

        Self {
            items,
            strategy_label: strategy_label.into(),
            subtotal,
            total,
        }
    }

    /// Total cost before the strategy was applied.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Final cost after the strategy was applied.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Label of the strategy that priced the cart.
    pub fn strategy_label(&self) -> &str {
        &self.strategy_label
    }

    /// Difference between subtotal and total.
    ///
    /// Negative when the strategy drove the total above the subtotal, which
    /// unclamped bulk deductions make possible.
    #[must_use]
    pub fn savings(&self) -> Decimal {
        round_price(self.subtotal - self.total)
    }

    /// Writes the receipt as a table followed by a summary block.
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing to `out`.
    pub fn write_to(&self, mut out: impl io::Write) -> io::Result<()> {
        let mut builder = Builder::default();

        builder.push_record(["Sku", "Qty", "Unit Price", "Line Total"]);

        for item in self.items {
            builder.push_record([
                item.sku().to_string(),
                item.qty().to_string(),
                format!("{:.2}", item.unit_price()),
                format!("{:.2}", round_price(item.line_total())),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::sharp());
        table.modify(Columns::new(1..4), Alignment::right());
        table.modify(Rows::first(), Alignment::center());

        writeln!(out, "{table}")?;
        writeln!(out, " Subtotal: {:.2}", self.subtotal)?;
        writeln!(out, " Strategy: {}", self.strategy_label)?;
        writeln!(out, "  Savings: {:.2}", self.savings())?;
        writeln!(out, "    Total: {:.2}", self.total)?;

        Ok(())
    }
}
