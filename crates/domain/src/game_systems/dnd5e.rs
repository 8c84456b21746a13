//! D&D 5th Edition game system implementation.

use super::traits::{CalculationEngine, SystemRules};
use super::GameSystem;
use crate::value_objects::modifier_for_score;

/// D&D 5th Edition game system.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dnd5eSystem;

impl Dnd5eSystem {
    /// Create a new D&D 5e system instance.
    pub fn new() -> Self {
        Self
    }
}

impl SystemRules for Dnd5eSystem {
    fn system(&self) -> GameSystem {
        GameSystem::Dnd5e
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

impl CalculationEngine for Dnd5eSystem {
    fn ability_modifier(&self, score: i32) -> i32 {
        modifier_for_score(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_systems::SystemFamily;
    use crate::value_objects::ArmorClassBreakdown;

    #[test]
    fn system_identification() {
        let system = Dnd5eSystem::new();
        assert_eq!(system.system_id(), "dnd5e");
        assert_eq!(system.display_name(), "D&D 5th Edition");
        assert_eq!(system.family(), SystemFamily::Modifier);
    }

    #[test]
    fn ability_modifier_calculation() {
        let engine = Dnd5eSystem::new();
        assert_eq!(engine.ability_modifier(1), -5);
        assert_eq!(engine.ability_modifier(9), -1);
        assert_eq!(engine.ability_modifier(10), 0);
        assert_eq!(engine.ability_modifier(15), 2);
        assert_eq!(engine.ability_modifier(20), 5);
    }

    #[test]
    fn armor_class_is_flat_sum() {
        let engine = Dnd5eSystem::new();
        assert_eq!(engine.armor_class(&ArmorClassBreakdown::new(14, 2, 2)), 18);
    }

    #[test]
    fn default_abilities_are_tens() {
        let abilities = Dnd5eSystem::new().default_abilities();
        assert_eq!(abilities.len(), 6);
        assert!(abilities.iter().all(|a| a.value == 10));
        assert_eq!(abilities[1].key, "dex");
    }
}
