//! Game system implementations for various TTRPGs.
//!
//! Each system implements the core traits defined in `traits.rs`. What
//! matters to the statistic derivations is the system's [`SystemFamily`]:
//! modifier-based systems derive a bonus from each ability score, percentile
//! systems show the raw score only.
//!
//! # Supported Systems
//!
//! - D&D 5th Edition (`dnd5e`)
//! - Pathfinder 2e (`pf2e`)
//! - Call of Cthulhu 7e (`coc7e`)

mod coc7e;
mod dnd5e;
mod pf2e;
mod traits;

pub use coc7e::Coc7eSystem;
pub use dnd5e::Dnd5eSystem;
pub use pf2e::Pf2eSystem;
pub use traits::{CalculationEngine, SystemRules};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::DomainError;

/// Which derivation rule set a game system uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemFamily {
    /// Ability scores map to `floor((score - 10) / 2)` (D&D, Pathfinder)
    Modifier,
    /// Scores are percentiles used directly (Call of Cthulhu)
    Percentile,
}

/// Identifier of a built-in game system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameSystem {
    #[default]
    #[serde(rename = "dnd5e")]
    Dnd5e,
    #[serde(rename = "pf2e")]
    Pathfinder2e,
    #[serde(rename = "coc7e")]
    CallOfCthulhu7e,
}

static DND5E: Dnd5eSystem = Dnd5eSystem;
static PF2E: Pf2eSystem = Pf2eSystem;
static COC7E: Coc7eSystem = Coc7eSystem;

impl GameSystem {
    pub const ALL: [GameSystem; 3] = [Self::Dnd5e, Self::Pathfinder2e, Self::CallOfCthulhu7e];

    pub fn system_id(&self) -> &'static str {
        match self {
            Self::Dnd5e => "dnd5e",
            Self::Pathfinder2e => "pf2e",
            Self::CallOfCthulhu7e => "coc7e",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Dnd5e => "D&D 5th Edition",
            Self::Pathfinder2e => "Pathfinder 2nd Edition",
            Self::CallOfCthulhu7e => "Call of Cthulhu 7th Edition",
        }
    }

    pub fn family(&self) -> SystemFamily {
        match self {
            Self::Dnd5e | Self::Pathfinder2e => SystemFamily::Modifier,
            Self::CallOfCthulhu7e => SystemFamily::Percentile,
        }
    }

    /// The built-in rules for this system.
    pub fn rules(&self) -> &'static dyn SystemRules {
        match self {
            Self::Dnd5e => &DND5E,
            Self::Pathfinder2e => &PF2E,
            Self::CallOfCthulhu7e => &COC7E,
        }
    }
}

impl fmt::Display for GameSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.system_id())
    }
}

impl FromStr for GameSystem {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dnd5e" | "dnd" | "5e" => Ok(Self::Dnd5e),
            "pf2e" | "pathfinder" => Ok(Self::Pathfinder2e),
            "coc7e" | "coc" | "cthulhu" => Ok(Self::CallOfCthulhu7e),
            other => Err(DomainError::parse(format!(
                "Unknown game system: {other}"
            ))),
        }
    }
}

/// Registry of available game systems.
pub struct GameSystemRegistry {
    systems: Vec<Arc<dyn SystemRules>>,
}

impl Default for GameSystemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSystemRegistry {
    /// Create a new registry with all built-in game systems.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(Dnd5eSystem::new()));
        registry.register(Arc::new(Pf2eSystem::new()));
        registry.register(Arc::new(Coc7eSystem::new()));
        registry
    }

    /// Create an empty registry without built-in systems.
    pub fn empty() -> Self {
        Self {
            systems: Vec::new(),
        }
    }

    /// Register a game system. A later registration for the same id wins.
    pub fn register(&mut self, system: Arc<dyn SystemRules>) {
        self.systems.retain(|s| s.system_id() != system.system_id());
        self.systems.push(system);
    }

    /// Get a game system by its ID.
    pub fn get(&self, system_id: &str) -> Option<Arc<dyn SystemRules>> {
        self.systems
            .iter()
            .find(|s| s.system_id() == system_id)
            .cloned()
    }

    /// List all registered system IDs.
    pub fn list_systems(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.system_id()).collect()
    }

    /// List all registered systems with their display names.
    pub fn list_systems_with_names(&self) -> Vec<(&str, &str)> {
        self.systems
            .iter()
            .map(|s| (s.system_id(), s.display_name()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_includes_all_systems() {
        let registry = GameSystemRegistry::new();
        let systems = registry.list_systems();
        assert!(systems.contains(&"dnd5e"));
        assert!(systems.contains(&"pf2e"));
        assert!(systems.contains(&"coc7e"));
        assert_eq!(systems.len(), 3);
    }

    #[test]
    fn empty_registry_has_no_systems() {
        let registry = GameSystemRegistry::empty();
        assert!(registry.list_systems().is_empty());
        assert!(registry.get("dnd5e").is_none());
    }

    #[test]
    fn registry_list_with_names() {
        let registry = GameSystemRegistry::new();
        let systems = registry.list_systems_with_names();
        assert!(systems.contains(&("dnd5e", "D&D 5th Edition")));
        assert!(systems.contains(&("coc7e", "Call of Cthulhu 7th Edition")));
    }

    #[test]
    fn re_registering_replaces() {
        let mut registry = GameSystemRegistry::new();
        registry.register(Arc::new(Dnd5eSystem::new()));
        assert_eq!(registry.list_systems().len(), 3);
    }

    #[test]
    fn families() {
        assert_eq!(GameSystem::Dnd5e.family(), SystemFamily::Modifier);
        assert_eq!(GameSystem::Pathfinder2e.family(), SystemFamily::Modifier);
        assert_eq!(
            GameSystem::CallOfCthulhu7e.family(),
            SystemFamily::Percentile
        );
    }

    #[test]
    fn rules_match_identifier() {
        for system in GameSystem::ALL {
            assert_eq!(system.rules().system(), system);
            assert_eq!(system.rules().family(), system.family());
        }
    }

    #[test]
    fn parse_identifiers() {
        assert_eq!("dnd5e".parse::<GameSystem>(), Ok(GameSystem::Dnd5e));
        assert_eq!(
            " COC7E ".parse::<GameSystem>(),
            Ok(GameSystem::CallOfCthulhu7e)
        );
        assert_eq!(
            "pathfinder".parse::<GameSystem>(),
            Ok(GameSystem::Pathfinder2e)
        );
        assert!(matches!(
            "gurps".parse::<GameSystem>(),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn serde_uses_system_id() {
        let json = serde_json::to_string(&GameSystem::CallOfCthulhu7e).expect("serialize");
        assert_eq!(json, "\"coc7e\"");
        let parsed: GameSystem = serde_json::from_str("\"pf2e\"").expect("deserialize");
        assert_eq!(parsed, GameSystem::Pathfinder2e);
        assert_eq!(GameSystem::Pathfinder2e.to_string(), "pf2e");
    }
}
