//! Character statistics use cases.
//!
//! Resolves the active game system, runs the domain calculators, and pairs
//! the results with the system's theme.

mod error;

pub use error::CharacterStatsError;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tavernkeep_domain::{
    compute_armor_class, resolve_ability_modifier, AbilityModifier, CharacterSheet,
    DerivedSheet, GameSystem, GameSystemRegistry, HealthSnapshot, HealthState, SystemRules,
};

use crate::infrastructure::ports::{Theme, ThemeResolver};

// =============================================================================
// Result Types
// =============================================================================

/// Health snapshot plus the theme's style token for its band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemedHealth {
    #[serde(flatten)]
    pub snapshot: HealthSnapshot,
    pub band_token: String,
}

/// A fully derived sheet ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetView {
    #[serde(flatten)]
    pub derived: DerivedSheet,
    pub theme: Theme,
    pub health_band_token: String,
}

// =============================================================================
// Use Cases
// =============================================================================

/// Container for character statistics use cases.
pub struct CharacterStatsUseCases {
    registry: Arc<GameSystemRegistry>,
    themes: Arc<dyn ThemeResolver>,
    default_system: GameSystem,
}

impl CharacterStatsUseCases {
    pub fn new(
        registry: Arc<GameSystemRegistry>,
        themes: Arc<dyn ThemeResolver>,
        default_system: GameSystem,
    ) -> Self {
        Self {
            registry,
            themes,
            default_system,
        }
    }

    pub fn default_system(&self) -> GameSystem {
        self.default_system
    }

    /// Parse a system identifier, or use the configured default when absent.
    pub fn resolve_system(
        &self,
        system_id: Option<&str>,
    ) -> Result<GameSystem, CharacterStatsError> {
        match system_id {
            Some(id) => Ok(id.parse()?),
            None => Ok(self.default_system),
        }
    }

    pub fn armor_class(&self, base: i32, attribute: i32, bonus: i32) -> i32 {
        compute_armor_class(base, attribute, bonus)
    }

    pub fn ability_modifier(&self, score: i32, system: GameSystem) -> AbilityModifier {
        resolve_ability_modifier(score, system.family())
    }

    pub fn health(&self, state: HealthState, system: GameSystem) -> ThemedHealth {
        let snapshot = state.snapshot();
        let band_token = self.themes.resolve(system).band_token(snapshot.band);
        ThemedHealth {
            snapshot,
            band_token,
        }
    }

    /// Derive every statistic on a sheet and attach its theme.
    #[tracing::instrument(
        skip(self, sheet),
        fields(abilities = sheet.abilities.len(), rolls = sheet.rolls.len())
    )]
    pub fn derive_sheet(&self, sheet: &CharacterSheet) -> Result<SheetView, CharacterStatsError> {
        sheet.validate()?;

        let system = sheet.system.unwrap_or(self.default_system);
        let rules = self.rules_for(system)?;
        let derived = sheet.derive_with(rules.as_ref());

        let theme = self.themes.resolve(system);
        let health_band_token = theme.band_token(derived.health.band);

        let criticals = derived.rolls.iter().filter(|r| r.is_critical()).count();
        tracing::debug!(
            system = %system,
            armor_class = derived.armor_class_total,
            band = derived.health.band.as_str(),
            criticals,
            "Derived character sheet"
        );

        Ok(SheetView {
            derived,
            theme,
            health_band_token,
        })
    }

    fn rules_for(&self, system: GameSystem) -> Result<Arc<dyn SystemRules>, CharacterStatsError> {
        self.registry.get(system.system_id()).ok_or_else(|| {
            tracing::warn!(system = %system, "Game system not registered");
            CharacterStatsError::GameSystemNotFound(system.system_id().to_string())
        })
    }
}
