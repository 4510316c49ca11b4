//! Line items

use rust_decimal::Decimal;
use serde::Deserialize;

/// A single cart line: a product identifier, a quantity and a unit price.
///
/// Line items are plain values with structural equality; the engine only ever
/// reads them. No validation is performed here: a negative quantity or price
/// is accepted and flows into the totals unchanged.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineItem {
    sku: String,
    qty: i64,
    unit_price: Decimal,
}

impl LineItem {
    /// Creates a new line item.
    #[must_use]
    pub fn new(sku: impl Into<String>, qty: i64, unit_price: Decimal) -> Self {
        Self {
            sku: sku.into(),
            qty,
            unit_price,
        }
    }

    /// Returns the product identifier.
    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// Returns the quantity.
    pub fn qty(&self) -> i64 {
        self.qty
    }

    /// Returns the unit price.
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Returns the unrounded line total, `qty * unit_price`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.qty) * self.unit_price
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let item = LineItem::new("SKU-1", 3, Decimal::new(250, 2));

        assert_eq!(item.sku(), "SKU-1");
        assert_eq!(item.qty(), 3);
        assert_eq!(item.unit_price(), Decimal::new(250, 2));
    }

    #[test]
    fn line_total_multiplies_qty_by_unit_price() {
        let item = LineItem::new("SKU-1", 4, Decimal::new(125, 2));

        assert_eq!(item.line_total(), Decimal::from(5));
    }

    #[test]
    fn negative_qty_produces_negative_line_total() {
        let item = LineItem::new("SKU-1", -2, Decimal::from(10));

        assert_eq!(item.line_total(), Decimal::from(-20));
    }

    #[test]
    fn equality_is_structural() {
        let a = LineItem::new("A", 1, Decimal::from(10));
        let b = LineItem::new("A", 1, Decimal::from(10));
        let c = LineItem::new("B", 1, Decimal::from(10));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn deserializes_from_json_object() -> TestResult {
        let item: LineItem = serde_json::from_str(r#"{"sku":"A","qty":2,"unit_price":10.0}"#)?;

        assert_eq!(item, LineItem::new("A", 2, Decimal::from(10)));

        Ok(())
    }

    #[test]
    fn deserializes_string_prices() -> TestResult {
        let item: LineItem = serde_json::from_str(r#"{"sku":"A","qty":1,"unit_price":"2.50"}"#)?;

        assert_eq!(item.unit_price(), Decimal::new(250, 2));

        Ok(())
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<LineItem, _> =
            serde_json::from_str(r#"{"sku":"A","qty":1,"unit_price":1.0,"colour":"red"}"#);

        assert!(result.is_err(), "unknown fields should be rejected");
    }
}
