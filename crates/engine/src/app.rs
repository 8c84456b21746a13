//! Application state and composition.

use std::sync::Arc;

use tavernkeep_domain::GameSystemRegistry;

use crate::config::EngineConfig;
use crate::infrastructure::{
    clock::SystemClock,
    ports::{ClockPort, RollLogStore, ThemeResolver},
    roll_log::InMemoryRollLogStore,
    theme::ConfiguredThemeResolver,
};
use crate::use_cases;

/// Main application state.
///
/// Built once at startup from configuration; everything downstream receives
/// its dependencies from here rather than from globals.
pub struct App {
    pub config: EngineConfig,
    pub themes: Arc<dyn ThemeResolver>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub character_stats: use_cases::CharacterStatsUseCases,
    pub roll_log: use_cases::RollLogUseCases,
}

impl App {
    /// Wire the application with explicit adapters.
    pub fn new(
        config: EngineConfig,
        registry: Arc<GameSystemRegistry>,
        themes: Arc<dyn ThemeResolver>,
        roll_store: Arc<dyn RollLogStore>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let use_cases = UseCases {
            character_stats: use_cases::CharacterStatsUseCases::new(
                registry,
                themes.clone(),
                config.default_system,
            ),
            roll_log: use_cases::RollLogUseCases::new(
                roll_store,
                clock,
                config.roll_history_limit,
            ),
        };

        Self {
            config,
            themes,
            use_cases,
        }
    }

    /// Wire the application with the built-in adapters: all game systems,
    /// configured themes, in-memory roll log and the system clock.
    pub fn from_config(config: EngineConfig) -> Self {
        let themes = Arc::new(ConfiguredThemeResolver::from_config(&config));
        Self::new(
            config,
            Arc::new(GameSystemRegistry::new()),
            themes,
            Arc::new(InMemoryRollLogStore::new()),
            Arc::new(SystemClock::new()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tavernkeep_domain::{CharacterSheet, GameSystem};

    #[test]
    fn from_config_threads_settings_through() {
        let mut config = EngineConfig {
            default_system: GameSystem::CallOfCthulhu7e,
            ..EngineConfig::default()
        };
        config
            .theme_overrides
            .insert(GameSystem::CallOfCthulhu7e, "noir".to_string());

        let app = App::from_config(config);
        assert_eq!(
            app.use_cases.character_stats.default_system(),
            GameSystem::CallOfCthulhu7e
        );
        assert_eq!(app.themes.resolve(GameSystem::CallOfCthulhu7e).name, "noir");

        let mut sheet = CharacterSheet::blank(GameSystem::Dnd5e);
        sheet.system = None;
        let view = app
            .use_cases
            .character_stats
            .derive_sheet(&sheet)
            .expect("derive");
        assert_eq!(view.theme.name, "noir");
    }
}
