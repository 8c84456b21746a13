//! Critical roll detection for d20 formulas.
//!
//! Two classifiers live here:
//!
//! - [`classify_roll`] / [`classify_roll_extreme`]: the string heuristic the
//!   roll log has always used. It looks only at the text before the first `+`
//!   and does not subtract modifiers, so for "1d20+5" it tests the *total*
//!   against 20 and 1.
//! - [`classify_natural_roll`]: parses the formula with [`DiceFormula`] and
//!   tests the natural face (`total - modifier`). Only single-d20 formulas are
//!   classified.
//!
//! The two disagree on formulas with modifiers: "1d20+5" with a total of 6 is
//! a natural 1 to the grammar but not critical to the heuristic. Callers pick
//! the one they want explicitly.

use serde::{Deserialize, Serialize};

use super::DiceFormula;

const D20_TOKEN: &str = "d20";
const NATURAL_MAX: i64 = 20;
const NATURAL_MIN: i64 = 1;

/// A logged dice roll: the formula as typed and the final total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceRollRecord {
    pub formula: String,
    pub result: i32,
}

impl DiceRollRecord {
    pub fn new(formula: impl Into<String>, result: i32) -> Self {
        Self {
            formula: formula.into(),
            result,
        }
    }

    pub fn is_critical(&self) -> bool {
        classify_roll(&self.formula, self.result)
    }

    pub fn extreme(&self) -> Option<RollExtreme> {
        classify_roll_extreme(&self.formula, self.result)
    }
}

/// Which end of the die a critical roll landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollExtreme {
    /// Natural 20
    NaturalMax,
    /// Natural 1
    NaturalMin,
}

impl RollExtreme {
    fn from_natural(natural: i64) -> Option<Self> {
        if natural >= NATURAL_MAX {
            Some(Self::NaturalMax)
        } else if natural <= NATURAL_MIN {
            Some(Self::NaturalMin)
        } else {
            None
        }
    }
}

/// Is this roll a critical (natural 20 or natural 1)?
///
/// Formulas without a `d20` token are never critical. Never panics; malformed
/// input degrades to `false`.
///
/// Known limitation: this is a string heuristic, not a dice parser. The
/// coefficient is taken from the text before the first `+` with one `1d20`
/// removed, so modifiers are not subtracted and multi-die or subtractive
/// formulas can misclassify. See [`classify_natural_roll`] for the
/// grammar-based check.
pub fn classify_roll(formula: &str, result: i32) -> bool {
    classify_roll_extreme(formula, result).is_some()
}

/// Like [`classify_roll`], but reports which extreme was hit.
pub fn classify_roll_extreme(formula: &str, result: i32) -> Option<RollExtreme> {
    if !formula.contains(D20_TOKEN) {
        return None;
    }
    let dice_token = formula.split_once('+').map_or(formula, |(head, _)| head);
    let coefficient = parse_leading_int(&dice_token.replacen("1d20", "", 1));
    let coefficient = coefficient.unwrap_or(0);
    RollExtreme::from_natural(i64::from(result) - coefficient)
}

/// Grammar-based critical check: parse `formula`, require exactly one d20,
/// and classify the natural face `result - modifier`.
///
/// Unparsable formulas and anything other than a single d20 yield `None`.
pub fn classify_natural_roll(formula: &str, result: i32) -> Option<RollExtreme> {
    let parsed = DiceFormula::parse(formula).ok()?;
    if !parsed.is_single_d20() {
        return None;
    }
    parsed.natural_face(result).and_then(RollExtreme::from_natural)
}

/// Leading-integer parse: optional whitespace, optional sign, then as many
/// digits as are present. Trailing text is ignored ("3d20" gives 3).
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
