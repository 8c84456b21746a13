//! Engine configuration, read from the environment once at startup.
//!
//! | variable | default | meaning |
//! |----------|---------|---------|
//! | `TAVERNKEEP_DEFAULT_SYSTEM` | `dnd5e` | system for sheets that name none |
//! | `TAVERNKEEP_THEME_<SYSTEM>` | built-in | theme name override, e.g. `TAVERNKEEP_THEME_COC7E=eldritch` |
//! | `TAVERNKEEP_ROLL_HISTORY_LIMIT` | `100` | cap on roll history queries |

use std::collections::HashMap;

use tavernkeep_domain::GameSystem;

pub const DEFAULT_SYSTEM_VAR: &str = "TAVERNKEEP_DEFAULT_SYSTEM";
pub const THEME_VAR_PREFIX: &str = "TAVERNKEEP_THEME_";
pub const ROLL_HISTORY_LIMIT_VAR: &str = "TAVERNKEEP_ROLL_HISTORY_LIMIT";

const DEFAULT_ROLL_HISTORY_LIMIT: usize = 100;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &str, value: &str, reason: impl ToString) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub default_system: GameSystem,
    /// Theme name per system, replacing the built-in one
    pub theme_overrides: HashMap<GameSystem, String>,
    pub roll_history_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_system: GameSystem::default(),
            theme_overrides: HashMap::new(),
            roll_history_limit: DEFAULT_ROLL_HISTORY_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its
    /// value. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(value) = get(DEFAULT_SYSTEM_VAR) {
            config.default_system = value
                .parse()
                .map_err(|e| ConfigError::invalid(DEFAULT_SYSTEM_VAR, &value, e))?;
        }

        for system in GameSystem::ALL {
            let key = theme_var(system);
            if let Some(name) = get(&key) {
                config.theme_overrides.insert(system, name);
            }
        }

        if let Some(value) = get(ROLL_HISTORY_LIMIT_VAR) {
            let limit: usize = value
                .parse()
                .map_err(|e| ConfigError::invalid(ROLL_HISTORY_LIMIT_VAR, &value, e))?;
            if limit == 0 {
                return Err(ConfigError::invalid(
                    ROLL_HISTORY_LIMIT_VAR,
                    &value,
                    "must be at least 1",
                ));
            }
            config.roll_history_limit = limit;
        }

        Ok(config)
    }
}

/// `TAVERNKEEP_THEME_DND5E`, `TAVERNKEEP_THEME_COC7E`, ...
pub fn theme_var(system: GameSystem) -> String {
    format!("{}{}", THEME_VAR_PREFIX, system.system_id().to_ascii_uppercase())
}

/// Load `.env.local` then `.env` from the repository root, if present.
///
/// Variables already set in the environment are never overwritten.
pub fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            if let Err(e) = dotenvy::from_path(&path) {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load env file");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = EngineConfig::from_lookup(|_| None).expect("config");
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.default_system, GameSystem::Dnd5e);
        assert_eq!(config.roll_history_limit, 100);
    }

    #[test]
    fn reads_all_variables() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("TAVERNKEEP_DEFAULT_SYSTEM", "coc7e"),
            ("TAVERNKEEP_THEME_COC7E", "eldritch"),
            ("TAVERNKEEP_ROLL_HISTORY_LIMIT", "25"),
        ]))
        .expect("config");
        assert_eq!(config.default_system, GameSystem::CallOfCthulhu7e);
        assert_eq!(
            config.theme_overrides.get(&GameSystem::CallOfCthulhu7e),
            Some(&"eldritch".to_string())
        );
        assert_eq!(config.roll_history_limit, 25);
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("TAVERNKEEP_DEFAULT_SYSTEM", "   "),
            ("TAVERNKEEP_THEME_DND5E", ""),
        ]))
        .expect("config");
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn unknown_system_is_rejected() {
        let lookup = lookup_from(&[("TAVERNKEEP_DEFAULT_SYSTEM", "gurps")]);
        let err = EngineConfig::from_lookup(lookup).expect_err("should fail");
        assert!(err.to_string().contains("TAVERNKEEP_DEFAULT_SYSTEM"));
        assert!(err.to_string().contains("gurps"));
    }

    #[test]
    fn bad_history_limit_is_rejected() {
        for bad in ["zero", "0", "-3"] {
            let result = EngineConfig::from_lookup(lookup_from(&[(
                "TAVERNKEEP_ROLL_HISTORY_LIMIT",
                bad,
            )]));
            assert!(result.is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn theme_var_names() {
        assert_eq!(theme_var(GameSystem::Dnd5e), "TAVERNKEEP_THEME_DND5E");
        assert_eq!(theme_var(GameSystem::Pathfinder2e), "TAVERNKEEP_THEME_PF2E");
    }
}
