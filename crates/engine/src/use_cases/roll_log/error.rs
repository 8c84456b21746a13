//! Roll log operation errors.

use crate::infrastructure::ports::StoreError;

/// Errors that can occur while recording or reading rolls.
#[derive(Debug, thiserror::Error)]
pub enum RollLogError {
    #[error("Invalid roll record: {0}")]
    InvalidRecord(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
