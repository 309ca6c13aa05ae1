use super::entities::MarkupTier;

/// Markup for prices below the lowest tier; protects margin on very cheap items.
pub const BELOW_TIERS_MARKUP: f64 = 0.70;
/// Markup for prices that no tier covers.
pub const UNCOVERED_MARKUP: f64 = 0.15;

/// Base markup fraction for `supplier_price`.
///
/// Tiers are scanned in order and the first one containing the price wins.
/// A price under the first tier's `min` gets [`BELOW_TIERS_MARKUP`]; anything
/// else left unmatched (gaps between bounded tiers, past a bounded top tier,
/// NaN) gets [`UNCOVERED_MARKUP`].
pub fn resolve_base_markup(tiers: &[MarkupTier], supplier_price: f64) -> f64 {
    if let Some(tier) = tiers.iter().find(|tier| tier.contains(supplier_price)) {
        return tier.markup;
    }

    match tiers.first() {
        Some(lowest) if supplier_price < lowest.min => BELOW_TIERS_MARKUP,
        _ => UNCOVERED_MARKUP,
    }
}
