//! Ability scores and the modifiers derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::game_systems::SystemFamily;

/// A raw ability score as it appears on a character sheet.
///
/// No range is enforced on `value`; out-of-range scores still resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityScore {
    /// Machine-readable key (e.g., "str", "dex")
    pub key: String,
    /// Human-readable label (e.g., "Strength")
    pub label: String,
    /// The raw score
    pub value: i32,
}

impl AbilityScore {
    pub fn new(key: impl Into<String>, label: impl Into<String>, value: i32) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value,
        }
    }

    /// Resolve this score's display modifier under the given rule family.
    pub fn modifier(&self, family: SystemFamily) -> AbilityModifier {
        resolve_ability_modifier(self.value, family)
    }
}

/// A derived ability modifier plus its sign-prefixed display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityModifier {
    pub value: i32,
    /// Always signed: "+0", "+3", "-2"
    pub formatted: String,
}

impl AbilityModifier {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            formatted: format_modifier(value),
        }
    }
}

impl fmt::Display for AbilityModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

/// Modifier-family rule: `floor((score - 10) / 2)`.
///
/// Rust's `/` truncates toward zero, so the division is done with
/// `div_euclid` (equal to floor for a positive divisor) in `i64` to keep
/// every `i32` input in range.
pub fn modifier_for_score(score: i32) -> i32 {
    let halved = (i64::from(score) - 10).div_euclid(2);
    // |halved| <= 2^30 + 5, always representable
    halved as i32
}

/// Convert a raw ability score into a display modifier.
///
/// Percentile systems use the raw score directly, so their modifier is
/// always zero.
pub fn resolve_ability_modifier(score: i32, family: SystemFamily) -> AbilityModifier {
    let value = match family {
        SystemFamily::Percentile => 0,
        SystemFamily::Modifier => modifier_for_score(score),
    };
    AbilityModifier::new(value)
}

/// Sign-prefix a modifier. Zero and positive values get an explicit `+`.
pub fn format_modifier(value: i32) -> String {
    format!("{:+}", value)
}
