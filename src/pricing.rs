//! Subtotals and rounding

use rust_decimal::Decimal;

use crate::items::LineItem;

/// Rounds a monetary amount to 2 decimal places.
///
/// Uses the half-to-even (banker's) midpoint rule. This is the single
/// rounding policy of the crate: every strategy output passes through it, so
/// composed strategies round at each stage.
#[must_use]
pub fn round_price(amount: Decimal) -> Decimal {
    amount.round_dp(2)
}

/// Calculates the subtotal of a list of line items.
///
/// The subtotal is the sum of `qty * unit_price` over all items, rounded to
/// 2 decimal places; an empty list yields zero. Quantities and prices are not
/// validated: negative inputs produce a zero or negative subtotal.
#[must_use]
pub fn compute_subtotal(items: &[LineItem]) -> Decimal {
    round_price(items.iter().map(LineItem::line_total).sum())
}
