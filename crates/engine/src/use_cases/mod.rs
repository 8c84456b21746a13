//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod character_stats;
pub mod roll_log;

pub use character_stats::CharacterStatsUseCases;
pub use roll_log::RollLogUseCases;
