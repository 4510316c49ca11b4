//! Percentage Discount
//!
//! Takes a fixed percentage off the running total.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::{
    items::LineItem,
    pricing::{compute_subtotal, round_price},
    strategies::StrategyError,
};

/// A percentage discount over the whole running total.
///
/// Holds percent points in the closed `[0, 100]` range; the range is checked
/// once at construction, never at apply time.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentageDiscount {
    percent: Decimal,
}

impl PercentageDiscount {
    /// Creates a percentage discount from percent points.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::PercentOutOfRange`] unless
    /// `0 <= percent <= 100`; both bounds are valid.
    pub fn new(percent: Decimal) -> Result<Self, StrategyError> {
        if !(Decimal::ZERO..=Decimal::ONE_HUNDRED).contains(&percent) {
            return Err(StrategyError::PercentOutOfRange(percent));
        }

        Ok(Self { percent })
    }

    /// Returns the discount in percent points.
    pub fn percent(&self) -> Decimal {
        self.percent
    }

    /// Applies the discount to the running total, or to the subtotal of
    /// `items` when no total is given.
    #[must_use]
    pub fn calculate(&self, items: &[LineItem], current_total: Option<Decimal>) -> Decimal {
        let base = current_total.unwrap_or_else(|| compute_subtotal(items));
        let off = Percentage::from(self.percent / Decimal::ONE_HUNDRED) * base;

        round_price(base - off)
    }
}
