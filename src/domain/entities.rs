use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Multiplier applied when a category or competition key is not in its table.
pub const NEUTRAL_FACTOR: f64 = 1.0;

/// Product categories with different competitive pressures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Electronics,
    Fashion,
    HomeKitchen,
    Beauty,
    Sports,
    Books,
    Toys,
    #[default]
    Generic,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 8] = [
        Self::Electronics,
        Self::Fashion,
        Self::HomeKitchen,
        Self::Beauty,
        Self::Sports,
        Self::Books,
        Self::Toys,
        Self::Generic,
    ];

    /// Table key used by [`CategoryTable`] lookups and batch records.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Fashion => "fashion",
            Self::HomeKitchen => "home_kitchen",
            Self::Beauty => "beauty",
            Self::Sports => "sports",
            Self::Books => "books",
            Self::Toys => "toys",
            Self::Generic => "generic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Fashion => "Fashion",
            Self::HomeKitchen => "Home & Kitchen",
            Self::Beauty => "Beauty",
            Self::Sports => "Sports",
            Self::Books => "Books",
            Self::Toys => "Toys",
            Self::Generic => "Generic",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProductCategory {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or_else(|| UnknownKey {
                kind: "category",
                key: s.to_string(),
            })
    }
}

/// Market competition intensity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionLevel {
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
}

impl CompetitionLevel {
    pub const ALL: [CompetitionLevel; 4] = [Self::Low, Self::Medium, Self::High, Self::VeryHigh];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CompetitionLevel {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.key() == s)
            .ok_or_else(|| UnknownKey {
                kind: "competition level",
                key: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{key}`")]
pub struct UnknownKey {
    pub kind: &'static str,
    pub key: String,
}

/// A supplier-price band with its base markup fraction.
///
/// Both bounds are inclusive. `max: None` marks the open-ended top tier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkupTier {
    pub min: f64,
    #[serde(default)]
    pub max: Option<f64>,
    pub markup: f64,
}

impl MarkupTier {
    pub const fn bounded(min: f64, max: f64, markup: f64) -> Self {
        Self {
            min,
            max: Some(max),
            markup,
        }
    }

    pub const fn unbounded(min: f64, markup: f64) -> Self {
        Self {
            min,
            max: None,
            markup,
        }
    }

    /// NaN is never contained.
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && self.max.map_or(true, |max| price <= max)
    }
}

/// Lookup table from a category or competition key to a markup multiplier.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorTable(BTreeMap<String, f64>);

pub type CategoryTable = FactorTable;
pub type CompetitionTable = FactorTable;

impl FactorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, factor: f64) -> Self {
        self.0.insert(key.into(), factor);
        self
    }

    /// Returns the multiplier for `key`, or [`NEUTRAL_FACTOR`] when absent.
    pub fn factor(&self, key: &str) -> f64 {
        self.0.get(key).copied().unwrap_or(NEUTRAL_FACTOR)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(key, factor)| (key.as_str(), *factor))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for FactorTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(key, factor)| (key.into(), factor)).collect())
    }
}

/// Transaction overheads charged on every sale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostFactors {
    /// Fraction of the selling price.
    pub payment_gateway_fee: f64,
    /// Fraction of the selling price.
    pub platform_fee: f64,
    /// Fixed amount per order.
    pub packaging_cost: f64,
    /// Fraction of the selling price.
    pub returns_buffer: f64,
    /// Fraction of the selling price.
    pub gst_rate: f64,
}

impl Default for CostFactors {
    fn default() -> Self {
        Self {
            payment_gateway_fee: 0.02,
            platform_fee: 0.03,
            packaging_cost: 10.0,
            returns_buffer: 0.03,
            gst_rate: 0.18,
        }
    }
}

/// Absolute cost of each overhead for one sale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub payment_gateway: f64,
    pub platform_fee: f64,
    pub packaging: f64,
    pub returns_buffer: f64,
    pub gst: f64,
}

impl CostBreakdown {
    /// Sum of all components, accumulated in [`CostBreakdown::entries`] order.
    pub fn total(&self) -> f64 {
        self.entries().iter().map(|(_, amount)| amount).sum()
    }

    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("Payment Gateway", self.payment_gateway),
            ("Platform Fee", self.platform_fee),
            ("Packaging", self.packaging),
            ("Returns Buffer", self.returns_buffer),
            ("GST", self.gst),
        ]
    }
}

/// Full outcome of one pricing calculation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PricingResult {
    pub supplier_price: f64,
    pub base_markup_percent: f64,
    pub adjusted_markup_percent: f64,
    /// Markup-adjusted price before overheads.
    pub selling_price: f64,
    /// Selling price plus overheads, before psychological rounding.
    pub cost_adjusted_price: f64,
    pub final_price: f64,
    pub profit: f64,
    /// Profit as a percentage of the final price.
    pub profit_margin: f64,
    pub cost_breakdown: CostBreakdown,
    pub total_additional_costs: f64,
}

/// One product in a batch request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub supplier_price: f64,
    #[serde(default = "default_category_key")]
    pub category: String,
    #[serde(default = "default_competition_key")]
    pub competition: String,
    #[serde(default)]
    pub has_unique_value: bool,
}

impl ProductRecord {
    /// A record with generic category, medium competition and no unique value.
    pub fn new(supplier_price: f64) -> Self {
        Self {
            supplier_price,
            category: default_category_key(),
            competition: default_competition_key(),
            has_unique_value: false,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn competition(mut self, competition: impl Into<String>) -> Self {
        self.competition = competition.into();
        self
    }

    pub fn unique(mut self, has_unique_value: bool) -> Self {
        self.has_unique_value = has_unique_value;
        self
    }
}

fn default_category_key() -> String {
    ProductCategory::Generic.key().to_string()
}

fn default_competition_key() -> String {
    CompetitionLevel::Medium.key().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_keys_round_trip_through_from_str() {
        for category in ProductCategory::ALL {
            assert_eq!(category.key().parse::<ProductCategory>(), Ok(category));
        }
        assert!("appliances".parse::<ProductCategory>().is_err());
    }

    #[test]
    fn competition_keys_round_trip_through_from_str() {
        for level in CompetitionLevel::ALL {
            assert_eq!(level.key().parse::<CompetitionLevel>(), Ok(level));
        }
        let err = "extreme".parse::<CompetitionLevel>().unwrap_err();
        assert_eq!(err.to_string(), "unknown competition level `extreme`");
    }

    #[test]
    fn tier_bounds_are_inclusive() {
        let tier = MarkupTier::bounded(100.0, 299.0, 0.6);
        assert!(tier.contains(100.0));
        assert!(tier.contains(299.0));
        assert!(!tier.contains(99.99));
        assert!(!tier.contains(299.5));
        assert!(!tier.contains(f64::NAN));

        let top = MarkupTier::unbounded(2001.0, 0.2);
        assert!(top.contains(1.0e12));
        assert!(top.contains(f64::INFINITY));
    }

    #[test]
    fn missing_factor_is_neutral() {
        let table = FactorTable::new().with("books", 0.7);
        assert_eq!(table.factor("books"), 0.7);
        assert_eq!(table.factor("appliances"), NEUTRAL_FACTOR);
    }

    #[test]
    fn product_record_fills_defaults() {
        let record: ProductRecord = serde_json::from_str(r#"{"supplier_price": 420}"#).unwrap();
        assert_eq!(record, ProductRecord::new(420.0));
        assert_eq!(record.category, "generic");
        assert_eq!(record.competition, "medium");
        assert!(!record.has_unique_value);
    }

    #[test]
    fn breakdown_total_matches_entries() {
        let breakdown = CostBreakdown {
            payment_gateway: 2.0,
            platform_fee: 3.0,
            packaging: 10.0,
            returns_buffer: 3.0,
            gst: 18.0,
        };
        assert_eq!(breakdown.total(), 36.0);
        assert_eq!(breakdown.entries()[4], ("GST", 18.0));
    }
}
