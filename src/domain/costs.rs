use super::entities::{CostBreakdown, CostFactors};

impl CostFactors {
    /// Absolute overheads for a sale at `selling_price`.
    ///
    /// Callers pass the markup-adjusted price, never the rounded one:
    /// overheads follow the sticker price and rounding comes last.
    pub fn breakdown(&self, selling_price: f64) -> CostBreakdown {
        CostBreakdown {
            payment_gateway: selling_price * self.payment_gateway_fee,
            platform_fee: selling_price * self.platform_fee,
            packaging: self.packaging_cost,
            returns_buffer: selling_price * self.returns_buffer,
            gst: selling_price * self.gst_rate,
        }
    }

    /// Combined fraction of the selling price taken by proportional costs.
    pub fn proportional_rate(&self) -> f64 {
        self.payment_gateway_fee + self.platform_fee + self.returns_buffer + self.gst_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_breakdown_for_round_price() {
        let costs = CostFactors::default().breakdown(1000.0);
        assert!((costs.payment_gateway - 20.0).abs() < 1e-9);
        assert!((costs.platform_fee - 30.0).abs() < 1e-9);
        assert_eq!(costs.packaging, 10.0);
        assert!((costs.returns_buffer - 30.0).abs() < 1e-9);
        assert!((costs.gst - 180.0).abs() < 1e-9);
        assert!((costs.total() - 270.0).abs() < 1e-9);
    }

    #[test]
    fn packaging_is_price_independent() {
        let factors = CostFactors::default();
        assert_eq!(factors.breakdown(0.0).total(), factors.packaging_cost);
        assert_eq!(factors.breakdown(50_000.0).packaging, factors.packaging_cost);
    }

    #[test]
    fn proportional_rate_sums_fractions() {
        assert!((CostFactors::default().proportional_rate() - 0.26).abs() < 1e-12);
    }

    #[test]
    fn zero_factors_cost_nothing() {
        let factors = CostFactors {
            payment_gateway_fee: 0.0,
            platform_fee: 0.0,
            packaging_cost: 0.0,
            returns_buffer: 0.0,
            gst_rate: 0.0,
        };
        assert_eq!(factors.breakdown(999.0), CostBreakdown::default());
    }
}
