//! Roll log use cases.
//!
//! Records dice rolls against a character and reads them back with their
//! critical classification. Classification uses the same heuristic as the
//! character sheet, so a roll shows the same badge everywhere.

mod error;

pub use error::RollLogError;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tavernkeep_domain::{DiceRollRecord, RollExtreme};

use crate::ids::{CharacterId, RollId};
use crate::infrastructure::ports::{ClockPort, RollLogEntry, RollLogStore};

// =============================================================================
// Result Types
// =============================================================================

/// A stored roll with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedRoll {
    #[serde(flatten)]
    pub entry: RollLogEntry,
    pub extreme: Option<RollExtreme>,
}

impl RecordedRoll {
    fn classify(entry: RollLogEntry) -> Self {
        let extreme = entry.record.extreme();
        Self { entry, extreme }
    }
}

/// How many of a character's recent rolls hit each extreme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalTally {
    pub natural_max: usize,
    pub natural_min: usize,
}

impl CriticalTally {
    pub fn from_rolls<'a>(rolls: impl IntoIterator<Item = &'a RecordedRoll>) -> Self {
        let mut tally = Self::default();
        for roll in rolls {
            match roll.extreme {
                Some(RollExtreme::NaturalMax) => tally.natural_max += 1,
                Some(RollExtreme::NaturalMin) => tally.natural_min += 1,
                None => {}
            }
        }
        tally
    }
}

// =============================================================================
// Use Cases
// =============================================================================

/// Container for roll log use cases.
pub struct RollLogUseCases {
    store: Arc<dyn RollLogStore>,
    clock: Arc<dyn ClockPort>,
    history_limit: usize,
}

impl RollLogUseCases {
    pub fn new(
        store: Arc<dyn RollLogStore>,
        clock: Arc<dyn ClockPort>,
        history_limit: usize,
    ) -> Self {
        Self {
            store,
            clock,
            history_limit: history_limit.max(1),
        }
    }

    /// Store a roll and return it classified.
    #[tracing::instrument(
        skip(self, record),
        fields(formula = %record.formula, result = record.result)
    )]
    pub async fn record_roll(
        &self,
        character_id: CharacterId,
        record: DiceRollRecord,
    ) -> Result<RecordedRoll, RollLogError> {
        if record.formula.trim().is_empty() {
            return Err(RollLogError::InvalidRecord("formula is empty".to_string()));
        }

        let entry = RollLogEntry {
            id: RollId::new(),
            character_id,
            record,
            rolled_at: self.clock.now(),
        };
        self.store.append(&entry).await?;

        let recorded = RecordedRoll::classify(entry);
        if let Some(extreme) = recorded.extreme {
            tracing::info!(roll_id = %recorded.entry.id, ?extreme, "Critical roll recorded");
        }
        Ok(recorded)
    }

    /// Newest rolls first. `limit` is capped at the configured history limit.
    pub async fn history(
        &self,
        character_id: CharacterId,
        limit: Option<usize>,
    ) -> Result<Vec<RecordedRoll>, RollLogError> {
        let limit = limit.unwrap_or(self.history_limit).min(self.history_limit);
        let entries = self.store.list_for_character(character_id, limit).await?;
        tracing::debug!(%character_id, count = entries.len(), "Loaded roll history");
        Ok(entries.into_iter().map(RecordedRoll::classify).collect())
    }

    /// Count natural maxima and minima across the character's history window.
    pub async fn critical_count(
        &self,
        character_id: CharacterId,
    ) -> Result<CriticalTally, RollLogError> {
        let history = self.history(character_id, None).await?;
        Ok(CriticalTally::from_rolls(&history))
    }
}
