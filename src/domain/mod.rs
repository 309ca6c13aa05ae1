//! Pricing logic lives here. Nothing in this module performs I/O.

pub mod adjustment;
pub mod calculator;
pub mod config;
pub mod costs;
pub mod entities;
pub mod psychological;
pub mod report;
pub mod tiers;

pub use adjustment::{MarkupAdjuster, MARKUP_FLOOR, UNIQUE_VALUE_BONUS};
pub use calculator::PricingCalculator;
pub use config::{ConfigError, PricingConfig};
pub use entities::{
    CategoryTable, CompetitionLevel, CompetitionTable, CostBreakdown, CostFactors, FactorTable,
    MarkupTier, PricingResult, ProductCategory, ProductRecord, UnknownKey, NEUTRAL_FACTOR,
};
pub use psychological::round_psychological;
pub use report::{
    compare_rounding, price_range_report, BulkSummary, PriceRangeRow, RoundingComparison,
    DEFAULT_REPORT_PRICES,
};
pub use tiers::{resolve_base_markup, BELOW_TIERS_MARKUP, UNCOVERED_MARKUP};
