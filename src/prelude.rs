//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    config::{BulkParams, ConfigError, StrategyConfig, StrategyOptions, strategy_for},
    items::LineItem,
    pricing::{compute_subtotal, round_price},
    receipt::Receipt,
    strategies::{
        BulkItemDiscount, CompositeStrategy, PercentageDiscount, PricingStrategy, StrategyError,
    },
};
