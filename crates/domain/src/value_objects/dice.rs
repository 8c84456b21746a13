//! Dice formula grammar
//!
//! Parses formulas of the form `<count>d<faces>(±<modifier>)*`, such as
//! "1d20+5", "2d6-1", "d20+2+1", "1d100".

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error when parsing a dice formula
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    /// The formula string is empty
    #[error("Empty dice formula")]
    Empty,
    /// Invalid format - expected XdY, XdY+Z or XdY+Z-W...
    #[error("Invalid dice format: {0}")]
    InvalidFormat(String),
    /// Dice count must be at least 1
    #[error("Dice count must be at least 1")]
    InvalidDiceCount,
    /// Die size must be at least 2
    #[error("Die size must be at least 2")]
    InvalidDieSize,
    /// Modifier overflow
    #[error("Modifier value overflow")]
    ModifierOverflow,
}

/// A parsed dice formula like "2d6+3"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceFormula {
    /// Number of dice to roll (X in XdY)
    pub dice_count: u32,
    /// Size of each die (Y in XdY)
    pub die_size: u32,
    /// Sum of every additive modifier after the dice term
    pub modifier: i32,
}

impl DiceFormula {
    /// Create a new dice formula
    pub fn new(dice_count: u32, die_size: u32, modifier: i32) -> Result<Self, DiceParseError> {
        if dice_count == 0 {
            return Err(DiceParseError::InvalidDiceCount);
        }
        if die_size < 2 {
            return Err(DiceParseError::InvalidDieSize);
        }
        Ok(Self {
            dice_count,
            die_size,
            modifier,
        })
    }

    /// Parse a dice formula string.
    ///
    /// Supported formats:
    /// - "XdY" - X dice of size Y
    /// - "dY" - shorthand for "1dY"
    /// - "XdY+Z", "XdY-Z" - with a modifier
    /// - "XdY+Z-W+V" - any chain of additive modifiers, summed
    ///
    /// Case and whitespace are ignored ("1D20 + 5" parses).
    pub fn parse(input: &str) -> Result<Self, DiceParseError> {
        let input: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        if input.is_empty() {
            return Err(DiceParseError::Empty);
        }

        // Find 'd' separator
        let d_pos = input.find('d').ok_or_else(|| {
            DiceParseError::InvalidFormat(format!("Missing 'd' separator in '{input}'"))
        })?;

        // Parse dice count (before 'd')
        let dice_count_str = &input[..d_pos];
        let dice_count: u32 = if dice_count_str.is_empty() {
            1 // "d20" means "1d20"
        } else {
            parse_digits(dice_count_str).ok_or_else(|| {
                DiceParseError::InvalidFormat(format!("Invalid dice count: '{dice_count_str}'"))
            })?
        };

        // Die size runs until the first sign character
        let after_d = &input[d_pos + 1..];
        let size_end = after_d.find(['+', '-']).unwrap_or(after_d.len());
        let die_size_str = &after_d[..size_end];
        let die_size: u32 = parse_digits(die_size_str).ok_or_else(|| {
            DiceParseError::InvalidFormat(format!("Invalid die size: '{die_size_str}'"))
        })?;

        let modifier = parse_modifier_chain(&after_d[size_end..])?;

        Self::new(dice_count, die_size, modifier)
    }

    /// Get the minimum possible total
    pub fn min_roll(&self) -> i64 {
        i64::from(self.dice_count) + i64::from(self.modifier)
    }

    /// Get the maximum possible total
    pub fn max_roll(&self) -> i64 {
        i64::from(self.dice_count) * i64::from(self.die_size) + i64::from(self.modifier)
    }

    /// True for a single twenty-sided die, the only shape critical rules apply to.
    pub fn is_single_d20(&self) -> bool {
        self.dice_count == 1 && self.die_size == 20
    }

    /// The face the die must have shown to produce `total`, for single-die
    /// formulas. Multi-die formulas have no unique face.
    pub fn natural_face(&self, total: i32) -> Option<i64> {
        (self.dice_count == 1).then(|| i64::from(total) - i64::from(self.modifier))
    }

    /// Format as a display string (e.g., "1d20+5")
    pub fn display(&self) -> String {
        if self.modifier == 0 {
            format!("{}d{}", self.dice_count, self.die_size)
        } else {
            format!("{}d{}{:+}", self.dice_count, self.die_size, self.modifier)
        }
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl std::str::FromStr for DiceFormula {
    type Err = DiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Only ASCII digits; rejects signs and empty strings, which `str::parse` would
/// partly accept.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Sum a chain like "+5-1+2". Empty input is a zero modifier.
fn parse_modifier_chain(mut rest: &str) -> Result<i32, DiceParseError> {
    let mut total: i32 = 0;
    while let Some(sign) = rest.chars().next() {
        let body = &rest[1..];
        let end = body.find(['+', '-']).unwrap_or(body.len());
        let term = &body[..end];
        let value = parse_digits(term)
            .ok_or_else(|| {
                DiceParseError::InvalidFormat(format!("Invalid modifier: '{sign}{term}'"))
            })
            .and_then(|v| i32::try_from(v).map_err(|_| DiceParseError::ModifierOverflow))?;
        total = match sign {
            '+' => total.checked_add(value),
            _ => total.checked_sub(value),
        }
        .ok_or(DiceParseError::ModifierOverflow)?;
        rest = &body[end..];
    }
    Ok(total)
}
