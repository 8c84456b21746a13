//! Tavernkeep domain: character statistic derivations.
//!
//! Everything here is pure and synchronous. The four core calculators are
//! total functions: they clamp or default instead of returning errors.
//!
//! - [`compute_armor_class`]
//! - [`resolve_ability_modifier`]
//! - [`compute_health_state`]
//! - [`classify_roll`]

pub mod character_sheet;
pub mod error;
pub mod game_systems;
pub mod value_objects;

pub use character_sheet::{CharacterSheet, ClassifiedRoll, DerivedAbility, DerivedSheet};

pub use error::DomainError;

// Re-export game system traits and types
pub use game_systems::{
    CalculationEngine, Coc7eSystem, Dnd5eSystem, GameSystem, GameSystemRegistry, Pf2eSystem,
    SystemFamily, SystemRules,
};

pub use value_objects::{
    classify_natural_roll, classify_roll, classify_roll_extreme, compute_armor_class,
    compute_health_state, format_modifier, modifier_for_score, resolve_ability_modifier,
    AbilityModifier, AbilityScore, ArmorClassBreakdown, DiceFormula, DiceParseError,
    DiceRollRecord, HealthBand, HealthBar, HealthSnapshot, HealthState, RollExtreme,
};
