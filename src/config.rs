//! Strategy configuration
//!
//! External callers select a strategy by kind name plus a bag of options.
//! [`StrategyConfig`] is the typed form: one variant per kind, carrying only
//! the fields that kind needs. Required options that are absent are an
//! error; they are never silently defaulted to zero or empty.

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::strategies::{
    BulkItemDiscount, CompositeStrategy, PercentageDiscount, PricingStrategy, StrategyError,
};

/// Errors raised while resolving a strategy configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The kind name is not one of `none`, `percent`, `bulk` or `composite`.
    #[error("unknown strategy kind: {0}")]
    UnknownKind(String),

    /// A required option for the chosen kind was not supplied.
    #[error("strategy kind `{kind}` requires the `{option}` option")]
    MissingOption {
        /// The kind being configured.
        kind: &'static str,
        /// The name of the missing option.
        option: &'static str,
    },

    /// A composite configuration produced no stages at all.
    #[error("composite strategy needs a percent and/or bulk configuration")]
    EmptyComposite,

    /// Invalid parameter for an individual strategy.
    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

/// Parameters of a bulk discount stage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BulkParams {
    /// Target sku.
    pub sku: String,

    /// Quantity threshold at which the discount starts to apply.
    pub threshold: i64,

    /// Amount off per unit of a matching line.
    pub per_item_off: Decimal,
}

impl BulkParams {
    fn into_discount(self) -> BulkItemDiscount {
        BulkItemDiscount::new(self.sku, self.threshold, self.per_item_off)
    }
}

/// A strategy selection, one variant per recognized kind.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    /// No discount.
    None,

    /// Percentage discount, in percent points within `[0, 100]`.
    Percent {
        /// Discount in percent points.
        percent: Decimal,
    },

    /// Bulk per-item discount.
    Bulk(BulkParams),

    /// Percentage and/or bulk stages chained in that order.
    Composite {
        /// Optional percentage stage, applied first.
        percent: Option<Decimal>,

        /// Optional bulk stage, applied after the percentage stage.
        bulk: Option<BulkParams>,
    },
}

/// Loose, untyped option bag accepted at the kind-name boundary.
///
/// All fields are optional; [`StrategyConfig::from_kind`] decides which are
/// required for a given kind.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StrategyOptions {
    /// Percent points for `percent` or `composite`.
    pub percent: Option<Decimal>,

    /// Target sku for `bulk` or `composite`.
    pub sku: Option<String>,

    /// Quantity threshold for `bulk` or `composite`.
    pub threshold: Option<i64>,

    /// Per-unit amount off for `bulk` or `composite`.
    pub per_item_off: Option<Decimal>,
}

impl StrategyOptions {
    fn has_bulk_options(&self) -> bool {
        self.sku.is_some() || self.threshold.is_some() || self.per_item_off.is_some()
    }
}

impl StrategyConfig {
    /// Resolves a kind name and a loose option bag into a typed config.
    ///
    /// The `composite` kind builds a percentage stage when `percent` is
    /// present and a bulk stage when any bulk option is present (all three
    /// bulk options are then required).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownKind`] for an unrecognized kind name and
    /// [`ConfigError::MissingOption`] when a required option for the chosen
    /// kind is absent.
    pub fn from_kind(kind: &str, options: &StrategyOptions) -> Result<Self, ConfigError> {
        match kind {
            "none" => Ok(StrategyConfig::None),
            "percent" => Ok(StrategyConfig::Percent {
                percent: require(options.percent, "percent", "percent")?,
            }),
            "bulk" => Ok(StrategyConfig::Bulk(bulk_params(options, "bulk")?)),
            "composite" => {
                let bulk = if options.has_bulk_options() {
                    Some(bulk_params(options, "composite")?)
                } else {
                    None
                };

                Ok(StrategyConfig::Composite {
                    percent: options.percent,
                    bulk,
                })
            }
            unknown => Err(ConfigError::UnknownKind(unknown.to_string())),
        }
    }
}

impl TryFrom<StrategyConfig> for PricingStrategy {
    type Error = ConfigError;

    fn try_from(config: StrategyConfig) -> Result<Self, Self::Error> {
        match config {
            StrategyConfig::None => Ok(PricingStrategy::NoDiscount),
            StrategyConfig::Percent { percent } => Ok(PricingStrategy::Percentage(
                PercentageDiscount::new(percent)?,
            )),
            StrategyConfig::Bulk(params) => Ok(PricingStrategy::Bulk(params.into_discount())),
            StrategyConfig::Composite { percent, bulk } => {
                let mut stages = Vec::new();

                if let Some(percent) = percent {
                    stages.push(PricingStrategy::Percentage(PercentageDiscount::new(
                        percent,
                    )?));
                }

                if let Some(params) = bulk {
                    stages.push(PricingStrategy::Bulk(params.into_discount()));
                }

                if stages.is_empty() {
                    return Err(ConfigError::EmptyComposite);
                }

                Ok(PricingStrategy::Composite(CompositeStrategy::new(stages)))
            }
        }
    }
}

/// Builds a strategy from a kind name and options.
///
/// # Errors
///
/// Returns a [`ConfigError`] for an unknown kind name, a missing required
/// option, a composite yielding no stages, or a percent outside `[0, 100]`.
pub fn strategy_for(
    kind: &str,
    options: &StrategyOptions,
) -> Result<PricingStrategy, ConfigError> {
    StrategyConfig::from_kind(kind, options)?.try_into()
}

fn require<T>(
    value: Option<T>,
    kind: &'static str,
    option: &'static str,
) -> Result<T, ConfigError> {
    value.ok_or(ConfigError::MissingOption { kind, option })
}

fn bulk_params(options: &StrategyOptions, kind: &'static str) -> Result<BulkParams, ConfigError> {
    Ok(BulkParams {
        sku: require(options.sku.clone(), kind, "sku")?,
        threshold: require(options.threshold, kind, "threshold")?,
        per_item_off: require(options.per_item_off, kind, "per_item_off")?,
    })
}
