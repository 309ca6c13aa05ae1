//! Markup pricing engine for resold products.
//!
//! [`domain::PricingCalculator`] turns a supplier cost into a retail price:
//! tiered base markup, category/competition/uniqueness adjustments,
//! transaction overheads and an optional psychological price ending.

pub mod domain;
pub mod infra;
pub mod util;
