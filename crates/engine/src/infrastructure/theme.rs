//! Theme resolution keyed by game system.
//!
//! Built once from [`EngineConfig`] at startup and shared through `App`, so
//! there is no process-wide mutable theme state.

use std::collections::HashMap;

use tavernkeep_domain::GameSystem;

use crate::config::EngineConfig;
use crate::infrastructure::ports::{Theme, ThemeResolver};

/// Built-in theme name for a system.
pub fn default_theme_name(system: GameSystem) -> &'static str {
    match system {
        GameSystem::Dnd5e | GameSystem::Pathfinder2e => "fantasy",
        GameSystem::CallOfCthulhu7e => "horror",
    }
}

/// Resolves themes from built-in defaults plus configured overrides.
#[derive(Debug, Clone)]
pub struct ConfiguredThemeResolver {
    themes: HashMap<GameSystem, Theme>,
}

impl ConfiguredThemeResolver {
    pub fn new(overrides: &HashMap<GameSystem, String>) -> Self {
        let themes = GameSystem::ALL
            .into_iter()
            .map(|system| {
                let name = overrides
                    .get(&system)
                    .map(String::as_str)
                    .unwrap_or_else(|| default_theme_name(system));
                (system, Theme::new(system, name))
            })
            .collect();
        Self { themes }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        for (system, name) in &config.theme_overrides {
            tracing::debug!(system = %system, theme = %name, "Theme override configured");
        }
        Self::new(&config.theme_overrides)
    }
}

impl Default for ConfiguredThemeResolver {
    fn default() -> Self {
        Self::new(&HashMap::new())
    }
}

impl ThemeResolver for ConfiguredThemeResolver {
    fn resolve(&self, system: GameSystem) -> Theme {
        self.themes
            .get(&system)
            .cloned()
            .unwrap_or_else(|| Theme::new(system, default_theme_name(system)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_themes() {
        let resolver = ConfiguredThemeResolver::default();
        assert_eq!(resolver.resolve(GameSystem::Dnd5e).name, "fantasy");
        assert_eq!(resolver.resolve(GameSystem::Pathfinder2e).name, "fantasy");
        assert_eq!(resolver.resolve(GameSystem::CallOfCthulhu7e).name, "horror");
    }

    #[test]
    fn overrides_replace_only_their_system() {
        let mut config = EngineConfig::default();
        config
            .theme_overrides
            .insert(GameSystem::CallOfCthulhu7e, "eldritch".to_string());
        let resolver = ConfiguredThemeResolver::from_config(&config);
        assert_eq!(resolver.resolve(GameSystem::CallOfCthulhu7e).name, "eldritch");
        assert_eq!(resolver.resolve(GameSystem::Dnd5e).name, "fantasy");
    }

    #[test]
    fn resolved_theme_knows_its_system() {
        let resolver = ConfiguredThemeResolver::default();
        let theme = resolver.resolve(GameSystem::Pathfinder2e);
        assert_eq!(theme.system, GameSystem::Pathfinder2e);
    }
}
