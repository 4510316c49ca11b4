//! Pricing strategies
//!
//! A strategy turns a list of line items, plus an optional running total,
//! into a final rounded price. The variants form a closed sum type, so
//! dispatch is exhaustive at compile time.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    items::LineItem,
    pricing::{compute_subtotal, round_price},
};

pub mod bulk;
pub mod composite;
pub mod percentage;

pub use self::{
    bulk::BulkItemDiscount, composite::CompositeStrategy, percentage::PercentageDiscount,
};

/// Errors raised while constructing a strategy with out-of-domain parameters.
///
/// Construction is the only failure point; `calculate` never fails.
#[derive(Debug, Error, PartialEq)]
pub enum StrategyError {
    /// Discount percent outside the closed `[0, 100]` range.
    #[error("discount percent must be between 0 and 100, got {0}")]
    PercentOutOfRange(Decimal),
}

/// A pricing strategy.
///
/// Strategy values are immutable once built and hold no state across calls:
/// `calculate` is a pure function of its inputs, so one value can price any
/// number of carts, from any number of threads, with no coordination.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingStrategy {
    /// Pass-through: returns the running total (or the subtotal) unchanged.
    NoDiscount,

    /// Percentage off the running total.
    Percentage(PercentageDiscount),

    /// Per-item amount off for a sku meeting a quantity threshold.
    Bulk(BulkItemDiscount),

    /// An ordered chain of strategies applied in sequence.
    Composite(CompositeStrategy),
}

impl PricingStrategy {
    /// Calculates the price after applying the strategy.
    ///
    /// When `current_total` is given it is the authoritative base; otherwise
    /// the base is the subtotal of `items`. The item list is passed through
    /// to every variant, even those that ignore it, so chained strategies can
    /// always re-inspect per-item detail. The result is rounded to 2 decimal
    /// places.
    #[must_use]
    pub fn calculate(&self, items: &[LineItem], current_total: Option<Decimal>) -> Decimal {
        match self {
            PricingStrategy::NoDiscount => match current_total {
                Some(total) => round_price(total),
                None => compute_subtotal(items),
            },
            PricingStrategy::Percentage(percentage) => percentage.calculate(items, current_total),
            PricingStrategy::Bulk(bulk) => bulk.calculate(items, current_total),
            PricingStrategy::Composite(composite) => composite.calculate(items, current_total),
        }
    }

    /// Applies the strategy to an already-computed subtotal.
    ///
    /// Shorthand for [`calculate`](Self::calculate) with the subtotal as the
    /// running total.
    #[must_use]
    pub fn apply(&self, subtotal: Decimal, items: &[LineItem]) -> Decimal {
        self.calculate(items, Some(subtotal))
    }
}
