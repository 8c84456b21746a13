//! Hit point state and health-bar math.
//!
//! Inputs are never rejected: every value is clamped into range. Maximum HP is
//! clamped to at least 1 before anything divides by it, so the bar fractions
//! are always finite.
//!
//! Temporary HP only shows up on the bar when the character is at full core
//! health; otherwise there is missing health to show and the temporary segment
//! is suppressed.

use serde::{Deserialize, Serialize};

/// Three-way color classification for the core health segment.
///
/// The concrete color/class names are supplied by the caller's theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    /// More than half health
    Healthy,
    /// Above a quarter, up to and including half
    Caution,
    /// A quarter or less
    Critical,
}

impl HealthBand {
    /// Classify `current / max`. Exactly 50% is `Caution`, exactly 25% is
    /// `Critical`. Compared in integers so the boundaries are exact.
    pub fn classify(current: i32, max: i32) -> Self {
        let current = i64::from(current);
        let max = i64::from(max.max(1));
        if current * 2 > max {
            Self::Healthy
        } else if current * 4 > max {
            Self::Caution
        } else {
            Self::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Caution => "caution",
            Self::Critical => "critical",
        }
    }
}

/// Display widths for the two segments of a health bar, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthBar {
    pub core_fraction: f64,
    pub temp_fraction: f64,
    pub band: HealthBand,
}

/// Everything a presentation layer needs to draw a character's health.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSnapshot {
    pub clamped_current: i32,
    pub clamped_max: i32,
    pub clamped_temporary: i32,
    pub core_fraction: f64,
    pub temp_fraction: f64,
    /// Classified from `clamped_current / clamped_max`, not from
    /// `core_fraction`: a full bar with a large temporary pool is still
    /// `Healthy` even though its core segment is under half the bar.
    pub band: HealthBand,
}

/// Raw, unclamped health values as a caller or JSON document supplies them.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HealthInput {
    #[serde(default)]
    current: i32,
    #[serde(default)]
    max: i32,
    #[serde(default)]
    temporary: i32,
}

impl From<HealthInput> for HealthState {
    fn from(input: HealthInput) -> Self {
        HealthState::new(input.current, input.max, input.temporary)
    }
}

/// Current, maximum and temporary hit points with `0 <= current <= max`,
/// `max >= 1` and `temporary >= 0` always holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "HealthInput")]
pub struct HealthState {
    current: i32,
    max: i32,
    temporary: i32,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            current: 1,
            max: 1,
            temporary: 0,
        }
    }
}

impl HealthState {
    /// Build a state from raw values. Max is clamped first so current is
    /// clamped against the new max, not the requested one.
    pub fn new(current: i32, max: i32, temporary: i32) -> Self {
        let max = max.max(1);
        Self {
            current: current.clamp(0, max),
            max,
            temporary: temporary.max(0),
        }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn temporary(&self) -> i32 {
        self.temporary
    }

    /// `max(0, min(requested, max))`
    pub fn set_current(&mut self, requested: i32) {
        self.current = requested.clamp(0, self.max);
    }

    /// Lowering max below current pulls current down in the same update.
    pub fn set_max(&mut self, requested: i32) {
        self.max = requested.max(1);
        self.current = self.current.min(self.max);
    }

    pub fn set_temporary(&mut self, requested: i32) {
        self.temporary = requested.max(0);
    }

    pub fn is_full(&self) -> bool {
        self.current == self.max
    }

    /// Apply damage: temporary HP absorbs it first, the rest comes off
    /// current HP. Negative amounts are ignored.
    pub fn apply_damage(&mut self, amount: i32) {
        let amount = amount.max(0);
        let absorbed = amount.min(self.temporary);
        self.temporary -= absorbed;
        self.set_current(self.current.saturating_sub(amount - absorbed));
    }

    /// Restore current HP up to max. Never touches temporary HP. Negative
    /// amounts are ignored.
    pub fn heal(&mut self, amount: i32) {
        self.set_current(self.current.saturating_add(amount.max(0)));
    }

    pub fn bar(&self) -> HealthBar {
        let max = f64::from(self.max);
        let band = HealthBand::classify(self.current, self.max);

        if self.temporary > 0 && self.is_full() {
            // Summed in f64: max + temporary can exceed i32
            let pool = max + f64::from(self.temporary);
            HealthBar {
                core_fraction: max / pool,
                temp_fraction: f64::from(self.temporary) / pool,
                band,
            }
        } else {
            HealthBar {
                core_fraction: f64::from(self.current) / max,
                temp_fraction: 0.0,
                band,
            }
        }
    }

    pub fn snapshot(&self) -> HealthSnapshot {
        let bar = self.bar();
        HealthSnapshot {
            clamped_current: self.current,
            clamped_max: self.max,
            clamped_temporary: self.temporary,
            core_fraction: bar.core_fraction,
            temp_fraction: bar.temp_fraction,
            band: bar.band,
        }
    }
}

/// Clamp raw health inputs and derive the bar for them.
pub fn compute_health_state(current: i32, max: i32, temporary: i32) -> HealthSnapshot {
    HealthState::new(current, max, temporary).snapshot()
}
