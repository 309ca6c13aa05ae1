//! Market configuration: tier list, multiplier tables and cost factors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{
    CategoryTable, CompetitionLevel, CompetitionTable, CostFactors, FactorTable, MarkupTier,
    ProductCategory,
};

/// Everything a [`PricingCalculator`](super::PricingCalculator) needs to price a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub tiers: Vec<MarkupTier>,
    pub categories: CategoryTable,
    pub competition: CompetitionTable,
    pub cost_factors: CostFactors,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
            categories: default_category_table(),
            competition: default_competition_table(),
            cost_factors: CostFactors::default(),
        }
    }
}

pub fn default_tiers() -> Vec<MarkupTier> {
    vec![
        MarkupTier::bounded(100.0, 299.0, 0.60),
        MarkupTier::bounded(300.0, 699.0, 0.45),
        MarkupTier::bounded(700.0, 1199.0, 0.35),
        MarkupTier::bounded(1200.0, 2000.0, 0.25),
        MarkupTier::unbounded(2001.0, 0.20),
    ]
}

pub fn default_category_table() -> CategoryTable {
    ProductCategory::ALL
        .into_iter()
        .map(|category| {
            let factor = match category {
                ProductCategory::Electronics => 0.85,
                ProductCategory::Fashion => 1.15,
                ProductCategory::HomeKitchen => 1.0,
                ProductCategory::Beauty => 1.2,
                ProductCategory::Sports => 0.9,
                ProductCategory::Books => 0.7,
                ProductCategory::Toys => 1.1,
                ProductCategory::Generic => 1.0,
            };
            (category.key(), factor)
        })
        .collect()
}

pub fn default_competition_table() -> CompetitionTable {
    CompetitionLevel::ALL
        .into_iter()
        .map(|level| {
            let factor = match level {
                CompetitionLevel::Low => 1.2,
                CompetitionLevel::Medium => 1.0,
                CompetitionLevel::High => 0.85,
                CompetitionLevel::VeryHigh => 0.7,
            };
            (level.key(), factor)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("at least one markup tier is required")]
    NoTiers,
    #[error("tier {index} has a non-finite or negative bound")]
    InvalidTierBound { index: usize },
    #[error("tier {index} has min {min} above max {max}")]
    InvertedTier { index: usize, min: f64, max: f64 },
    #[error("tier {index} has invalid markup {markup}")]
    InvalidMarkup { index: usize, markup: f64 },
    #[error("tier {index} starts at {min}, which does not follow the previous tier")]
    UnorderedTier { index: usize, min: f64 },
    #[error("tier {index} is unbounded but is not the last tier")]
    UnboundedTierNotLast { index: usize },
    #[error("cost factor `{name}` must be a non-negative number, got {value}")]
    InvalidCostFactor { name: &'static str, value: f64 },
    #[error("{table} multiplier for `{key}` must be a non-negative number, got {value}")]
    InvalidMultiplier {
        table: &'static str,
        key: String,
        value: f64,
    },
}

impl PricingConfig {
    /// Checks the invariants the pricing pipeline relies on: tiers ascending
    /// and disjoint with only the last one unbounded, and every multiplier
    /// and cost factor finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_tiers(&self.tiers)?;
        validate_table("category", &self.categories)?;
        validate_table("competition", &self.competition)?;
        validate_cost_factors(&self.cost_factors)
    }
}

fn validate_tiers(tiers: &[MarkupTier]) -> Result<(), ConfigError> {
    if tiers.is_empty() {
        return Err(ConfigError::NoTiers);
    }

    let mut previous_max: Option<f64> = None;
    for (index, tier) in tiers.iter().enumerate() {
        if !is_non_negative(tier.min) || tier.max.is_some_and(|max| !is_non_negative(max)) {
            return Err(ConfigError::InvalidTierBound { index });
        }
        if !is_non_negative(tier.markup) {
            return Err(ConfigError::InvalidMarkup {
                index,
                markup: tier.markup,
            });
        }
        if let Some(max) = tier.max {
            if tier.min > max {
                return Err(ConfigError::InvertedTier {
                    index,
                    min: tier.min,
                    max,
                });
            }
        } else if index + 1 != tiers.len() {
            return Err(ConfigError::UnboundedTierNotLast { index });
        }
        if let Some(prev) = previous_max {
            if tier.min <= prev {
                return Err(ConfigError::UnorderedTier {
                    index,
                    min: tier.min,
                });
            }
        }
        previous_max = tier.max;
    }

    Ok(())
}

fn validate_table(table: &'static str, factors: &FactorTable) -> Result<(), ConfigError> {
    match factors.iter().find(|(_, factor)| !is_non_negative(*factor)) {
        Some((key, value)) => Err(ConfigError::InvalidMultiplier {
            table,
            key: key.to_string(),
            value,
        }),
        None => Ok(()),
    }
}

fn validate_cost_factors(factors: &CostFactors) -> Result<(), ConfigError> {
    let fields = [
        ("payment_gateway_fee", factors.payment_gateway_fee),
        ("platform_fee", factors.platform_fee),
        ("packaging_cost", factors.packaging_cost),
        ("returns_buffer", factors.returns_buffer),
        ("gst_rate", factors.gst_rate),
    ];

    match fields.into_iter().find(|(_, value)| !is_non_negative(*value)) {
        Some((name, value)) => Err(ConfigError::InvalidCostFactor { name, value }),
        None => Ok(()),
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
