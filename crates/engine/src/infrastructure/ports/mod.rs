//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Roll-log storage
//! - Theme resolution (configured once at startup, injected into `App`)
//! - Clock (for testing)

mod error;
mod types;

pub use error::StoreError;
pub use types::{RollLogEntry, Theme};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tavernkeep_domain::GameSystem;

use crate::ids::CharacterId;

// =============================================================================
// Storage Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RollLogStore: Send + Sync {
    async fn append(&self, entry: &RollLogEntry) -> Result<(), StoreError>;

    /// Newest first, at most `limit` entries.
    async fn list_for_character(
        &self,
        character_id: CharacterId,
        limit: usize,
    ) -> Result<Vec<RollLogEntry>, StoreError>;
}

// =============================================================================
// Presentation Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ThemeResolver: Send + Sync {
    fn resolve(&self, system: GameSystem) -> Theme;
}

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
