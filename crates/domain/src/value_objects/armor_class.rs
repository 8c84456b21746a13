//! Armor class as a flat additive stack.

use serde::{Deserialize, Serialize};

/// The three contributions to a character's armor class.
///
/// Negative values are legal and are summed as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorClassBreakdown {
    /// Base value (armor, natural armor, or the unarmored default)
    pub base: i32,
    /// Attribute-derived contribution (usually a dexterity modifier)
    pub attribute: i32,
    /// Miscellaneous bonus (shields, magic items, spells)
    pub bonus: i32,
}

impl ArmorClassBreakdown {
    pub fn new(base: i32, attribute: i32, bonus: i32) -> Self {
        Self {
            base,
            attribute,
            bonus,
        }
    }

    pub fn total(&self) -> i32 {
        compute_armor_class(self.base, self.attribute, self.bonus)
    }
}

/// Total armor class: `base + attribute + bonus`.
///
/// Summed in `i64`, so the result is exact whenever it fits in an `i32`;
/// otherwise it saturates at the nearest bound.
pub fn compute_armor_class(base: i32, attribute: i32, bonus: i32) -> i32 {
    let total = i64::from(base) + i64::from(attribute) + i64::from(bonus);
    total.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_all_three_parts() {
        assert_eq!(compute_armor_class(10, 2, 1), 13);
        assert_eq!(compute_armor_class(16, 0, 2), 18);
    }

    #[test]
    fn negative_parts_are_summed_faithfully() {
        assert_eq!(compute_armor_class(10, -1, 0), 9);
        assert_eq!(compute_armor_class(-5, -3, -2), -10);
    }

    #[test]
    fn breakdown_total_matches_function() {
        let breakdown = ArmorClassBreakdown::new(12, 3, 2);
        assert_eq!(breakdown.total(), 17);
        assert_eq!(ArmorClassBreakdown::default().total(), 0);
    }

    #[test]
    fn extreme_values_saturate() {
        assert_eq!(compute_armor_class(i32::MAX, 1, 0), i32::MAX);
        assert_eq!(compute_armor_class(i32::MIN, -1, 0), i32::MIN);
        // Intermediate overflow does not leak into an in-range total
        assert_eq!(compute_armor_class(i32::MAX, 1, -5), i32::MAX - 4);
    }
}
