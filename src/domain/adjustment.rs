use super::entities::{CategoryTable, CompetitionTable};

/// Multiplier for differentiated, bundled or warrantied products.
pub const UNIQUE_VALUE_BONUS: f64 = 1.15;
/// Adjusted markup never drops below this fraction.
pub const MARKUP_FLOOR: f64 = 0.15;

/// Applies category, competition and uniqueness multipliers to a base markup.
#[derive(Clone, Copy, Debug)]
pub struct MarkupAdjuster<'a> {
    categories: &'a CategoryTable,
    competition: &'a CompetitionTable,
}

impl<'a> MarkupAdjuster<'a> {
    pub fn new(categories: &'a CategoryTable, competition: &'a CompetitionTable) -> Self {
        Self {
            categories,
            competition,
        }
    }

    /// `base × category × competition × bonus`, floored at [`MARKUP_FLOOR`].
    /// Unknown keys count as neutral.
    pub fn adjust(
        &self,
        base_markup: f64,
        category: &str,
        competition: &str,
        has_unique_value: bool,
    ) -> f64 {
        let mut adjusted = base_markup;
        adjusted *= self.categories.factor(category);
        adjusted *= self.competition.factor(competition);

        if has_unique_value {
            adjusted *= UNIQUE_VALUE_BONUS;
        }

        adjusted.max(MARKUP_FLOOR)
    }
}
