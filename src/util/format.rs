//! Display helpers shared by the command-line output.

use crate::domain::{CostBreakdown, PricingResult};

pub const CURRENCY_SYMBOL: &str = "₹";

/// Whole-unit amount, e.g. `₹3099`.
pub fn money(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{amount:.0}")
}

/// Amount with paise, e.g. `₹215.50`.
pub fn money_exact(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}

pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn breakdown_lines(breakdown: &CostBreakdown) -> Vec<String> {
    breakdown
        .entries()
        .iter()
        .map(|(label, amount)| format!("{label}: {}", money_exact(*amount)))
        .collect()
}

/// Single-line summary used by batch output.
pub fn result_line(result: &PricingResult) -> String {
    format!(
        "{} -> {} (markup {}, margin {})",
        money(result.supplier_price),
        money(result.final_price),
        percent(result.adjusted_markup_percent),
        percent(result.profit_margin)
    )
}
