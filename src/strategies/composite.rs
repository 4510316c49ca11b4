//! Composite Strategy
//!
//! Chains strategies in order, feeding each stage's output into the next.

use rust_decimal::Decimal;

use crate::{
    items::LineItem,
    pricing::{compute_subtotal, round_price},
    strategies::PricingStrategy,
};

/// An ordered chain of pricing strategies.
///
/// Stage order is significant: a percentage stage before a bulk stage prices
/// differently from the reverse. The full item list is passed unchanged to
/// every stage, so later stages can still inspect per-item detail. Because
/// each stage rounds its own output, composition rounds at every stage, not
/// once at the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositeStrategy {
    stages: Vec<PricingStrategy>,
}

impl CompositeStrategy {
    /// Creates a composite from an ordered list of stages.
    ///
    /// An empty list is valid and acts as the identity strategy. Composites
    /// may nest; sub-strategies are owned by value, so cycles cannot form.
    #[must_use]
    pub fn new(stages: Vec<PricingStrategy>) -> Self {
        Self { stages }
    }

    /// Returns the stages in application order.
    pub fn stages(&self) -> &[PricingStrategy] {
        &self.stages
    }

    /// Runs every stage in order, seeding the first with `current_total` (or
    /// the subtotal of `items`) and each later stage with its predecessor's
    /// output.
    #[must_use]
    pub fn calculate(&self, items: &[LineItem], current_total: Option<Decimal>) -> Decimal {
        let seed = current_total.unwrap_or_else(|| compute_subtotal(items));

        let total = self
            .stages
            .iter()
            .fold(seed, |total, stage| stage.calculate(items, Some(total)));

        // Redundant when stages ran, but keeps the output contract identical
        // to the other variants when the stage list is empty.
        round_price(total)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::strategies::{BulkItemDiscount, PercentageDiscount};

    use super::*;

    fn percent(points: i64) -> Result<PricingStrategy, crate::strategies::StrategyError> {
        Ok(PricingStrategy::Percentage(PercentageDiscount::new(
            Decimal::from(points),
        )?))
    }

    fn bulk(sku: &str, threshold: i64, off: i64) -> PricingStrategy {
        PricingStrategy::Bulk(BulkItemDiscount::new(sku, threshold, Decimal::from(off)))
    }

    #[test]
    fn empty_composite_returns_the_subtotal() {
        let items = [
            LineItem::new("A", 3, Decimal::from(10)),
            LineItem::new("B", 1, Decimal::from(5)),
        ];
        let composite = CompositeStrategy::new(Vec::new());

        assert_eq!(composite.calculate(&items, None), Decimal::from(35));
    }

    #[test]
    fn empty_composite_returns_the_seed_rounded() {
        let composite = CompositeStrategy::new(Vec::new());

        assert_eq!(
            composite.calculate(&[], Some(Decimal::new(12_345, 3))),
            Decimal::new(1234, 2)
        );
    }

    #[test]
    fn stages_apply_in_list_order() -> TestResult {
        let items = [LineItem::new("X", 2, Decimal::from(10))];

        // 20.00 -> 50% off -> 10.00 -> 2 * 1.00 off -> 8.00
        let percent_then_bulk = CompositeStrategy::new(vec![percent(50)?, bulk("X", 1, 1)]);

        // 20.00 -> 2 * 1.00 off -> 18.00 -> 50% off -> 9.00
        let bulk_then_percent = CompositeStrategy::new(vec![bulk("X", 1, 1), percent(50)?]);

        assert_eq!(percent_then_bulk.calculate(&items, None), Decimal::from(8));
        assert_eq!(bulk_then_percent.calculate(&items, None), Decimal::from(9));

        Ok(())
    }

    #[test]
    fn composites_nest() -> TestResult {
        let items = [LineItem::new("X", 2, Decimal::from(10))];

        let inner = CompositeStrategy::new(vec![percent(50)?]);
        let outer = CompositeStrategy::new(vec![
            PricingStrategy::Composite(inner),
            bulk("X", 1, 1),
        ]);

        assert_eq!(outer.calculate(&items, None), Decimal::from(8));

        Ok(())
    }

    #[test]
    fn each_stage_receives_the_previous_output_as_seed() -> TestResult {
        let items = [LineItem::new("X", 2, Decimal::from(10))];

        // The second stage halves the first stage's 8.00, not the subtotal.
        let composite =
            CompositeStrategy::new(vec![percent(50)?, bulk("X", 1, 1), percent(50)?]);

        assert_eq!(composite.calculate(&items, None), Decimal::from(4));

        Ok(())
    }

    #[test]
    fn stages_accessor_preserves_order() -> TestResult {
        let composite = CompositeStrategy::new(vec![percent(10)?, bulk("X", 1, 1)]);

        assert_eq!(composite.stages().len(), 2);
        assert!(matches!(
            composite.stages().first(),
            Some(PricingStrategy::Percentage(_))
        ));

        Ok(())
    }
}
