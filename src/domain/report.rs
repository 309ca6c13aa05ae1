//! Summaries built on top of single-product pricing.

use serde::Serialize;

use super::{
    calculator::PricingCalculator,
    entities::{CompetitionLevel, PricingResult, ProductCategory},
    psychological::round_psychological,
};

/// Supplier prices sampled by [`price_range_report`] when none are given.
pub const DEFAULT_REPORT_PRICES: [f64; 9] = [
    100.0, 200.0, 400.0, 600.0, 800.0, 1000.0, 1500.0, 2000.0, 3000.0,
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceRangeRow {
    pub supplier_price: f64,
    pub base_markup_percent: f64,
    pub final_price: f64,
    pub profit_margin: f64,
}

/// One row per supplier price, priced as a generic product under medium
/// competition with rounding applied.
pub fn price_range_report(calculator: &PricingCalculator, prices: &[f64]) -> Vec<PriceRangeRow> {
    prices
        .iter()
        .map(|&price| {
            let result = calculator.calculate_price(
                price,
                ProductCategory::Generic.key(),
                CompetitionLevel::Medium.key(),
                false,
                true,
            );
            PriceRangeRow {
                supplier_price: price,
                base_markup_percent: result.base_markup_percent,
                final_price: result.final_price,
                profit_margin: result.profit_margin,
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoundingComparison {
    pub without_rounding: f64,
    pub with_rounding: f64,
}

impl RoundingComparison {
    /// Positive when rounding raised the price.
    pub fn difference(&self) -> f64 {
        self.with_rounding - self.without_rounding
    }
}

pub fn compare_rounding(
    calculator: &PricingCalculator,
    supplier_price: f64,
    category: &str,
    competition: &str,
    has_unique_value: bool,
) -> RoundingComparison {
    let raw = calculator.calculate_price(
        supplier_price,
        category,
        competition,
        has_unique_value,
        false,
    );
    RoundingComparison {
        without_rounding: raw.final_price,
        with_rounding: round_psychological(raw.cost_adjusted_price),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BulkSummary {
    pub products: usize,
    pub total_revenue: f64,
    pub total_profit: f64,
    pub average_margin: f64,
}

impl BulkSummary {
    pub fn from_results(results: &[PricingResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let total_revenue: f64 = results.iter().map(|r| r.final_price).sum();
        let total_profit: f64 = results.iter().map(|r| r.profit).sum();
        let margin_sum: f64 = results.iter().map(|r| r.profit_margin).sum();

        Self {
            products: results.len(),
            total_revenue,
            total_profit,
            average_margin: margin_sum / results.len() as f64,
        }
    }
}
