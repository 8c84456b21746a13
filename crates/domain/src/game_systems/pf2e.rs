//! Pathfinder 2nd Edition game system implementation.
//!
//! Shares the modifier-family formula with D&D 5e; proficiency and item
//! bonuses reach armor class through the breakdown's bonus field.

use super::traits::{CalculationEngine, SystemRules};
use super::GameSystem;
use crate::value_objects::modifier_for_score;

/// Pathfinder 2nd Edition game system.
#[derive(Debug, Default, Clone, Copy)]
pub struct Pf2eSystem;

impl Pf2eSystem {
    pub fn new() -> Self {
        Self
    }
}

impl SystemRules for Pf2eSystem {
    fn system(&self) -> GameSystem {
        GameSystem::Pathfinder2e
    }

    fn calculation_engine(&self) -> &dyn CalculationEngine {
        self
    }

    fn abilities(&self) -> &[(&'static str, &'static str)] {
        &[
            ("str", "Strength"),
            ("dex", "Dexterity"),
            ("con", "Constitution"),
            ("int", "Intelligence"),
            ("wis", "Wisdom"),
            ("cha", "Charisma"),
        ]
    }

    fn default_ability_score(&self) -> i32 {
        10
    }
}

impl CalculationEngine for Pf2eSystem {
    fn ability_modifier(&self, score: i32) -> i32 {
        modifier_for_score(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_systems::SystemFamily;

    #[test]
    fn system_identification() {
        let system = Pf2eSystem::new();
        assert_eq!(system.system_id(), "pf2e");
        assert_eq!(system.display_name(), "Pathfinder 2nd Edition");
        assert_eq!(system.family(), SystemFamily::Modifier);
    }

    #[test]
    fn ability_modifier_calculation() {
        let engine = Pf2eSystem::new();
        assert_eq!(engine.ability_modifier(8), -1);
        assert_eq!(engine.ability_modifier(18), 4);
    }
}
