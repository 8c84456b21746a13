//! In-memory roll-log store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ids::CharacterId;
use crate::infrastructure::ports::{RollLogEntry, RollLogStore, StoreError};

/// Roll log kept in process memory, keyed by character.
#[derive(Default)]
pub struct InMemoryRollLogStore {
    entries: RwLock<HashMap<CharacterId, Vec<RollLogEntry>>>,
}

impl InMemoryRollLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total entries across all characters.
    pub async fn len(&self) -> usize {
        self.entries.read().await.values().map(Vec::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl RollLogStore for InMemoryRollLogStore {
    async fn append(&self, entry: &RollLogEntry) -> Result<(), StoreError> {
        let mut guard = self.entries.write().await;
        guard
            .entry(entry.character_id)
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    async fn list_for_character(
        &self,
        character_id: CharacterId,
        limit: usize,
    ) -> Result<Vec<RollLogEntry>, StoreError> {
        let guard = self.entries.read().await;
        let Some(entries) = guard.get(&character_id) else {
            return Ok(Vec::new());
        };
        // Reverse first so equal timestamps stay newest-appended first under
        // the stable sort.
        let mut newest_first: Vec<RollLogEntry> = entries.iter().rev().cloned().collect();
        newest_first.sort_by(|a, b| b.rolled_at.cmp(&a.rolled_at));
        newest_first.truncate(limit);
        Ok(newest_first)
    }
}
