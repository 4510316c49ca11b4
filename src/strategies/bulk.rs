//! Bulk Item Discount
//!
//! A per-item amount off a target sku once a line's quantity reaches a
//! threshold.

use rust_decimal::Decimal;

use crate::{
    items::LineItem,
    pricing::{compute_subtotal, round_price},
};

/// A per-item discount for a sku meeting a quantity threshold.
///
/// Every line whose sku matches and whose quantity is at or above the
/// threshold deducts `qty * per_item_off` from the running total; with
/// several matching lines, each deducts its own amount. The result is not
/// floored at zero: deductions larger than the running total produce a
/// negative price, which the caller is expected to tolerate.
///
/// Unlike [`PercentageDiscount`](crate::strategies::PercentageDiscount),
/// construction performs no range checks on the threshold or the amount.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkItemDiscount {
    sku: String,
    threshold: i64,
    per_item_off: Decimal,
}

impl BulkItemDiscount {
    /// Creates a bulk discount for the given sku.
    #[must_use]
    pub fn new(sku: impl Into<String>, threshold: i64, per_item_off: Decimal) -> Self {
        Self {
            sku: sku.into(),
            threshold,
            per_item_off,
        }
    }

    /// Returns the target sku.
    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// Returns the quantity threshold.
    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    /// Returns the amount taken off per unit.
    pub fn per_item_off(&self) -> Decimal {
        self.per_item_off
    }

    /// Applies the discount to the running total, or to the subtotal of
    /// `items` when no total is given.
    #[must_use]
    pub fn calculate(&self, items: &[LineItem], current_total: Option<Decimal>) -> Decimal {
        let base = current_total.unwrap_or_else(|| compute_subtotal(items));

        let off: Decimal = items
            .iter()
            .filter(|item| item.sku() == self.sku && item.qty() >= self.threshold)
            .map(|item| Decimal::from(item.qty()) * self.per_item_off)
            .sum();

        round_price(base - off)
    }
}
