//! Character sheet inputs and the statistics derived from them.
//!
//! A [`CharacterSheet`] is what a caller assembles from its own records; a
//! [`DerivedSheet`] is everything a presentation layer shows for it. Deriving
//! is pure: the same sheet always yields the same derived values.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::DomainError;
use crate::game_systems::{GameSystem, SystemRules};
use crate::value_objects::{
    AbilityModifier, AbilityScore, ArmorClassBreakdown, DiceRollRecord, HealthSnapshot,
    HealthState, RollExtreme,
};

/// Raw character statistics as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSheet {
    /// Omitted in JSON means "use the configured default system"
    #[serde(default)]
    pub system: Option<GameSystem>,
    #[serde(default)]
    pub abilities: Vec<AbilityScore>,
    #[serde(default)]
    pub armor_class: ArmorClassBreakdown,
    #[serde(default)]
    pub health: HealthState,
    #[serde(default)]
    pub rolls: Vec<DiceRollRecord>,
}

impl CharacterSheet {
    /// A fresh sheet with the system's default abilities.
    pub fn blank(system: GameSystem) -> Self {
        Self {
            system: Some(system),
            abilities: system.rules().default_abilities(),
            armor_class: ArmorClassBreakdown::default(),
            health: HealthState::default(),
            rolls: Vec::new(),
        }
    }

    /// Ability keys must be unique, otherwise a lookup by key is ambiguous.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for ability in &self.abilities {
            if !seen.insert(ability.key.as_str()) {
                return Err(DomainError::validation(format!(
                    "duplicate ability key: {}",
                    ability.key
                )));
            }
        }
        Ok(())
    }

    /// Derive with the built-in rules of the sheet's system, falling back to
    /// `default_system` when the sheet names none.
    pub fn derive(&self, default_system: GameSystem) -> DerivedSheet {
        let system = self.system.unwrap_or(default_system);
        self.derive_with(system.rules())
    }

    /// Derive with an explicit rule set.
    pub fn derive_with(&self, rules: &dyn SystemRules) -> DerivedSheet {
        let engine = rules.calculation_engine();
        let abilities = self
            .abilities
            .iter()
            .map(|ability| DerivedAbility {
                key: ability.key.clone(),
                label: ability.label.clone(),
                score: ability.value,
                modifier: AbilityModifier::new(engine.ability_modifier(ability.value)),
            })
            .collect();
        let rolls = self
            .rolls
            .iter()
            .map(|record| ClassifiedRoll {
                extreme: record.extreme(),
                record: record.clone(),
            })
            .collect();

        DerivedSheet {
            system: rules.system(),
            abilities,
            armor_class_total: engine.armor_class(&self.armor_class),
            health: self.health.snapshot(),
            rolls,
        }
    }
}

/// An ability score with its resolved modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedAbility {
    pub key: String,
    pub label: String,
    pub score: i32,
    pub modifier: AbilityModifier,
}

/// A logged roll with its critical classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedRoll {
    pub record: DiceRollRecord,
    pub extreme: Option<RollExtreme>,
}

impl ClassifiedRoll {
    pub fn is_critical(&self) -> bool {
        self.extreme.is_some()
    }
}

/// Every displayed statistic of a character sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedSheet {
    pub system: GameSystem,
    pub abilities: Vec<DerivedAbility>,
    pub armor_class_total: i32,
    pub health: HealthSnapshot,
    pub rolls: Vec<ClassifiedRoll>,
}

impl DerivedSheet {
    pub fn ability(&self, key: &str) -> Option<&DerivedAbility> {
        self.abilities.iter().find(|a| a.key == key)
    }
}
