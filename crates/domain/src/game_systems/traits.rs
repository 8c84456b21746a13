//! Game system traits for TTRPG-specific mechanics.
//!
//! These traits define the interface for system-specific calculations,
//! allowing different TTRPGs to implement their own rules while sharing a
//! common API.

use super::{GameSystem, SystemFamily};
use crate::value_objects::{compute_armor_class, AbilityScore, ArmorClassBreakdown};

/// Core trait all game systems must implement.
///
/// Provides system identification and access to the calculation engine.
pub trait SystemRules: Send + Sync {
    /// Which built-in system this is.
    fn system(&self) -> GameSystem;

    /// Unique identifier for this game system (e.g., "dnd5e", "coc7e").
    fn system_id(&self) -> &str {
        self.system().system_id()
    }

    /// Human-readable display name (e.g., "D&D 5th Edition").
    fn display_name(&self) -> &str {
        self.system().display_name()
    }

    /// Which derivation rule set applies.
    fn family(&self) -> SystemFamily {
        self.system().family()
    }

    /// Get the calculation engine for this system.
    fn calculation_engine(&self) -> &dyn CalculationEngine;

    /// `(key, label)` pairs for the abilities this system's sheets carry.
    fn abilities(&self) -> &[(&'static str, &'static str)];

    /// The score a fresh sheet starts each ability at.
    fn default_ability_score(&self) -> i32;

    /// A blank set of ability scores for a new character.
    fn default_abilities(&self) -> Vec<AbilityScore> {
        let score = self.default_ability_score();
        self.abilities()
            .iter()
            .map(|(key, label)| AbilityScore::new(*key, *label, score))
            .collect()
    }
}

/// Calculation rules that vary per game system.
pub trait CalculationEngine: Send + Sync {
    /// Calculate ability modifier from score.
    ///
    /// For modifier systems: floor((score - 10) / 2)
    /// For percentile systems: 0, the raw score is used directly
    fn ability_modifier(&self, score: i32) -> i32;

    /// Calculate Armor Class. Every supported system uses a flat sum.
    fn armor_class(&self, breakdown: &ArmorClassBreakdown) -> i32 {
        compute_armor_class(breakdown.base, breakdown.attribute, breakdown.bonus)
    }
}
