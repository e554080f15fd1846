//! Numeric battery gauge tracked alongside the fact set.
//!
//! The gauge is a whole percentage in `0..=100`. Drains saturate at zero;
//! there is no recharge action.

use serde::{Deserialize, Serialize};

use crate::error::WorldError;

/// A fully charged battery.
pub const FULL_CHARGE: u32 = 100;

/// Battery charge as a percentage.
///
/// Deserialization goes through [`BatteryGauge::new`], so levels above
/// [`FULL_CHARGE`] are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawBatteryGauge")]
pub struct BatteryGauge {
    level: u32,
}

/// Unchecked wire shape of [`BatteryGauge`].
#[derive(Deserialize)]
struct RawBatteryGauge {
    level: u32,
}

impl TryFrom<RawBatteryGauge> for BatteryGauge {
    type Error = WorldError;

    fn try_from(raw: RawBatteryGauge) -> Result<Self, Self::Error> {
        Self::new(raw.level)
    }
}

impl BatteryGauge {
    /// A gauge at [`FULL_CHARGE`].
    pub const fn full() -> Self {
        Self { level: FULL_CHARGE }
    }

    /// A gauge at `level` percent.
    pub const fn new(level: u32) -> Result<Self, WorldError> {
        if level > FULL_CHARGE {
            return Err(WorldError::BatteryOutOfRange(level));
        }
        Ok(Self { level })
    }

    /// Current charge percentage.
    pub const fn level(self) -> u32 {
        self.level
    }

    /// Whether the battery has run flat.
    pub const fn is_depleted(self) -> bool {
        self.level == 0
    }

    /// Remove `amount` percent of charge, stopping at zero.
    ///
    /// Returns the new level.
    pub fn drain(&mut self, amount: u32) -> u32 {
        self.level = self.level.saturating_sub(amount);
        if self.is_depleted() && amount > 0 {
            tracing::debug!(amount, "Battery depleted");
        }
        self.level
    }
}

impl Default for BatteryGauge {
    fn default() -> Self {
        Self::full()
    }
}
