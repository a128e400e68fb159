//! Driver configuration

use serde::{Deserialize, Serialize};

/// Default SN76489 master clock (2 MHz)
pub const DEFAULT_MASTER_CLOCK: u32 = 2_000_000;

/// The tone counter ticks once every 32 master clock cycles
const TONE_CLOCK_DIVIDER: u32 = 32;

/// Configuration for a [`Psg`](crate::Psg) driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PsgConfig {
    /// Master clock fed to the chip, in Hz
    pub master_clock: u32,
}

impl PsgConfig {
    /// Create a configuration for a chip clocked at `master_clock` Hz
    pub fn with_master_clock(master_clock: u32) -> Self {
        PsgConfig { master_clock }
    }

    /// Numerator of the tone period formula (`period = divisor / Hz`)
    ///
    /// 62 500 at the default 2 MHz clock.
    pub fn tone_divisor(&self) -> u32 {
        self.master_clock / TONE_CLOCK_DIVIDER
    }
}

impl Default for PsgConfig {
    fn default() -> Self {
        Self::with_master_clock(DEFAULT_MASTER_CLOCK)
    }
}
