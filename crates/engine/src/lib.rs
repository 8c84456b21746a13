//! Tavernkeep Engine library.
//!
//! Wires the pure statistic derivations in `tavernkeep-domain` to
//! configuration, theming and a roll log.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `config` - Environment-driven configuration
//! - `cli` - Command handlers for the binary
//! - `app` - Application composition

pub mod app;
pub mod cli;
pub mod config;
pub mod ids;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use config::{ConfigError, EngineConfig};
