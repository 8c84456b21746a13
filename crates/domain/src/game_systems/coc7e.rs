//! Call of Cthulhu 7th Edition game system implementation.
//!
//! Characteristics are percentiles rolled against directly, so no derived
//! modifier is ever shown.

use super::traits::{CalculationEngine, SystemRules};
use super::GameSystem;

/// Call of Cthulhu 7th Edition game system.
#[derive(Debug, Default, Clone, Copy)]
pub struct Coc7eSystem;

impl Coc7eSystem {
    pub fn new() -> Self {
        Self
    }
}

impl SystemRules for Coc7eSystem {
    fn system(&self) -> GameSystem {
        GameSystem::CallOfCthulhu7e
    }

    fn calculation_engine(&self) -> &dyn CalculationEngine {
        self
    }

    fn abilities(&self) -> &[(&'static str, &'static str)] {
        &[
            ("str", "Strength"),
            ("con", "Constitution"),
            ("siz", "Size"),
            ("dex", "Dexterity"),
            ("app", "Appearance"),
            ("int", "Intelligence"),
            ("pow", "Power"),
            ("edu", "Education"),
        ]
    }

    fn default_ability_score(&self) -> i32 {
        50
    }
}

impl CalculationEngine for Coc7eSystem {
    fn ability_modifier(&self, _score: i32) -> i32 {
        0
    }
}
