//! Records that cross port boundaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tavernkeep_domain::{DiceRollRecord, GameSystem, HealthBand};

use crate::ids::{CharacterId, RollId};

/// One stored roll in a character's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollLogEntry {
    pub id: RollId,
    pub character_id: CharacterId,
    pub record: DiceRollRecord,
    pub rolled_at: DateTime<Utc>,
}

/// Presentation theme for one game system.
///
/// The engine only decides *which* theme and *which* health band applies;
/// the identifiers themselves are consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub system: GameSystem,
    pub name: String,
}

impl Theme {
    pub fn new(system: GameSystem, name: impl Into<String>) -> Self {
        Self {
            system,
            name: name.into(),
        }
    }

    /// Style token for a health band under this theme, e.g. "horror-critical".
    pub fn band_token(&self, band: HealthBand) -> String {
        format!("{}-{}", self.name, band.as_str())
    }
}
