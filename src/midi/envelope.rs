//! ADSR envelope shape
//!
//! Static attack/decay/sustain/release settings in MIDI's 0-127 range.
//! Attack, decay and release scale linearly to 0-1000 ms; sustain is a level.
//! Nothing here steps an envelope over time.

use std::fmt;

use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

/// Largest value of an envelope parameter
pub const MAX_PARAM: u8 = 127;

/// Duration of a full-scale (127) attack, decay or release
pub const MAX_TIME_MS: u32 = 1000;

/// Phase of a time-stepped envelope
///
/// Vocabulary only; an executor that walks these phases lives outside
/// this crate.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize, Deserialize,
)]
pub enum EnvelopeState {
    /// Note not started
    #[default]
    Init = 0,
    /// Rising to full level
    Attack = 1,
    /// Falling to the sustain level
    Decay = 2,
    /// Holding the sustain level
    Sustain = 3,
    /// Falling to silence after note off
    Release = 4,
}

impl fmt::Display for EnvelopeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvelopeState::Init => write!(f, "Init"),
            EnvelopeState::Attack => write!(f, "Attack"),
            EnvelopeState::Decay => write!(f, "Decay"),
            EnvelopeState::Sustain => write!(f, "Sustain"),
            EnvelopeState::Release => write!(f, "Release"),
        }
    }
}

/// ADSR envelope shape
///
/// Each field is expected in `0..=127`. Larger values are not rejected by
/// plain field access and scale past 1000 ms.
///
/// # Example
///
/// ```
/// use sn76489_psg::Envelope;
///
/// let pluck = Envelope::new(0, 64, 0, 16);
/// assert_eq!(pluck.decay_time(), 503);
/// assert_eq!(pluck.release_time(), 125);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Envelope {
    /// Attack rate (0 = instant, 127 = 1 s)
    pub attack: u8,
    /// Decay rate (0 = instant, 127 = 1 s)
    pub decay: u8,
    /// Sustain level (0 = silent, 127 = full)
    pub sustain: u8,
    /// Release rate (0 = instant, 127 = 1 s)
    pub release: u8,
}

impl Envelope {
    /// Create an envelope from raw parameters
    pub fn new(attack: u8, decay: u8, sustain: u8, release: u8) -> Self {
        Envelope {
            attack,
            decay,
            sustain,
            release,
        }
    }

    /// Create an envelope, or `None` if any parameter exceeds 127
    pub fn try_new(attack: u8, decay: u8, sustain: u8, release: u8) -> Option<Self> {
        [attack, decay, sustain, release]
            .iter()
            .all(|&v| v <= MAX_PARAM)
            .then(|| Self::new(attack, decay, sustain, release))
    }

    /// Attack duration in milliseconds
    pub fn attack_time(&self) -> u32 {
        param_to_ms(self.attack)
    }

    /// Decay duration in milliseconds
    pub fn decay_time(&self) -> u32 {
        param_to_ms(self.decay)
    }

    /// Release duration in milliseconds
    pub fn release_time(&self) -> u32 {
        param_to_ms(self.release)
    }
}

impl Default for Envelope {
    /// Instant attack, full sustain, instant release (a plain gate)
    fn default() -> Self {
        Envelope {
            attack: 0,
            decay: 0,
            sustain: MAX_PARAM,
            release: 0,
        }
    }
}

#[inline]
fn param_to_ms(value: u8) -> u32 {
    MAX_TIME_MS * value as u32 / MAX_PARAM as u32
}
