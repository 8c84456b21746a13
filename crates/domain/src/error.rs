//! Unified error types for the domain layer
//!
//! The statistic calculators themselves are total and never fail. Errors only
//! arise at the boundaries: parsing identifiers, parsing dice formulas with the
//! strict grammar, and validating caller-assembled sheets.

use thiserror::Error;

use crate::value_objects::DiceParseError;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., duplicate ability keys on a sheet)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects and identifiers)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for a caller-supplied structure that
    /// cannot be interpreted unambiguously.
    ///
    /// # Example
    /// ```ignore
    /// if !seen.insert(&ability.key) {
    ///     return Err(DomainError::validation(format!("duplicate ability key: {}", ability.key)));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<DiceParseError> for DomainError {
    fn from(err: DiceParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("duplicate ability key: str");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: duplicate ability key: str");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown game system: gurps");
        assert_eq!(err.to_string(), "Parse error: Unknown game system: gurps");
    }

    #[test]
    fn test_from_dice_parse_error() {
        let dice_err = DiceParseError::Empty;
        let domain_err: DomainError = dice_err.into();
        assert!(matches!(domain_err, DomainError::Parse(_)));
        assert!(domain_err.to_string().contains("Empty dice formula"));
    }
}
