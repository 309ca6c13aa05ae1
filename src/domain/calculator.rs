//! Pricing pipeline: tier lookup, markup adjustment, overheads, rounding, margin.

use tracing::{debug, trace};

use super::{
    adjustment::MarkupAdjuster,
    config::{ConfigError, PricingConfig},
    entities::{CostBreakdown, PricingResult, ProductRecord},
    psychological::round_psychological,
    tiers::resolve_base_markup,
};

/// A configured pricing engine for one market.
///
/// The configuration is validated once in [`PricingCalculator::new`] and is
/// read-only afterwards, so a calculator can be shared across threads.
#[derive(Clone, Debug)]
pub struct PricingCalculator {
    config: PricingConfig,
}

impl Default for PricingCalculator {
    fn default() -> Self {
        Self {
            config: PricingConfig::default(),
        }
    }
}

impl PricingCalculator {
    pub fn new(config: PricingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn base_markup(&self, supplier_price: f64) -> f64 {
        resolve_base_markup(&self.config.tiers, supplier_price)
    }

    pub fn adjusted_markup(
        &self,
        base_markup: f64,
        category: &str,
        competition: &str,
        has_unique_value: bool,
    ) -> f64 {
        MarkupAdjuster::new(&self.config.categories, &self.config.competition).adjust(
            base_markup,
            category,
            competition,
            has_unique_value,
        )
    }

    /// Overheads for a sale at `selling_price`. The supplier price does not
    /// enter any of the current cost components.
    pub fn costs(&self, selling_price: f64) -> CostBreakdown {
        self.config.cost_factors.breakdown(selling_price)
    }

    /// Prices a single product.
    ///
    /// Never fails: invalid supplier prices (non-positive, non-finite) still
    /// produce a deterministic result and must be rejected by the caller.
    pub fn calculate_price(
        &self,
        supplier_price: f64,
        category: &str,
        competition: &str,
        has_unique_value: bool,
        apply_psychological: bool,
    ) -> PricingResult {
        let base_markup = self.base_markup(supplier_price);
        let adjusted_markup =
            self.adjusted_markup(base_markup, category, competition, has_unique_value);
        trace!(supplier_price, base_markup, adjusted_markup, "markup resolved");

        let selling_price = supplier_price * (1.0 + adjusted_markup);
        let cost_breakdown = self.costs(selling_price);
        let total_additional_costs = cost_breakdown.total();
        let cost_adjusted_price = selling_price + total_additional_costs;

        let final_price = if apply_psychological {
            round_psychological(cost_adjusted_price)
        } else {
            cost_adjusted_price
        };

        let profit = final_price - supplier_price - total_additional_costs;
        let profit_margin = if final_price > 0.0 {
            (profit / final_price) * 100.0
        } else {
            0.0
        };

        debug!(
            supplier_price,
            category,
            competition,
            has_unique_value,
            final_price,
            profit_margin,
            "priced product"
        );

        PricingResult {
            supplier_price,
            base_markup_percent: base_markup * 100.0,
            adjusted_markup_percent: adjusted_markup * 100.0,
            selling_price,
            cost_adjusted_price,
            final_price,
            profit,
            profit_margin,
            cost_breakdown,
            total_additional_costs,
        }
    }

    /// Prices a single batch record with psychological rounding applied.
    pub fn calculate_record(&self, record: &ProductRecord) -> PricingResult {
        self.calculate_price(
            record.supplier_price,
            &record.category,
            &record.competition,
            record.has_unique_value,
            true,
        )
    }

    /// Prices every record independently; output order follows input order.
    pub fn bulk_calculate(&self, products: &[ProductRecord]) -> Vec<PricingResult> {
        debug!(count = products.len(), "bulk pricing");
        products
            .iter()
            .map(|record| self.calculate_record(record))
            .collect()
    }
}
