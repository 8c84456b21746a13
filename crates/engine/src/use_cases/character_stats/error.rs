//! Character statistics operation errors.

use tavernkeep_domain::DomainError;

/// Errors that can occur while deriving character statistics.
///
/// The calculators themselves never fail; these come from resolving the
/// inputs (system identifiers, sheet validation).
#[derive(Debug, thiserror::Error)]
pub enum CharacterStatsError {
    #[error("Game system not found: {0}")]
    GameSystemNotFound(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
