//! Value objects - Immutable objects defined by their attributes

mod ability;
mod armor_class;
mod dice;
mod health;
mod roll;

pub use ability::{
    format_modifier, modifier_for_score, resolve_ability_modifier, AbilityModifier, AbilityScore,
};
pub use armor_class::{compute_armor_class, ArmorClassBreakdown};
pub use dice::{DiceFormula, DiceParseError};
pub use health::{compute_health_state, HealthBand, HealthBar, HealthSnapshot, HealthState};
pub use roll::{
    classify_natural_roll, classify_roll, classify_roll_extreme, DiceRollRecord, RollExtreme,
};
