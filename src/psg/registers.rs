//! SN76489 Command Byte Definitions
//!
//! Channel addressing, noise configuration and the bit packing of every
//! command the chip understands. Shift amounts and masks here are the wire
//! protocol; do not reorder them.

use std::fmt;
use std::ops::Deref;

use bitflags::bitflags;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

use crate::PsgError;

/// Highest value the 10-bit tone period register can hold
pub const MAX_TONE_PERIOD: u16 = 0x3FF;

/// Highest volume level (loudest, attenuation 0)
pub const MAX_LEVEL: u8 = 15;

/// Channel code that addresses the noise generator in a noise command
const NOISE_CHANNEL_CODE: u8 = 3;

bitflags! {
    /// Marker bits of a latch (first) command byte
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CommandFlags: u8 {
        /// Latch marker (1 = command byte, 0 = tone continuation data)
        const LATCH = 1 << 7;
        /// Register selector (1 = volume, 0 = tone/noise)
        const VOLUME = 1 << 4;
    }
}

impl CommandFlags {
    /// Extract the marker bits from a wire byte
    pub fn from_byte(byte: u8) -> Self {
        CommandFlags::from_bits_truncate(byte)
    }

    /// Check if the byte starts a new command
    pub fn is_latch(&self) -> bool {
        self.contains(CommandFlags::LATCH)
    }

    /// Check if the byte targets a volume register
    pub fn is_volume(&self) -> bool {
        self.is_latch() && self.contains(CommandFlags::VOLUME)
    }
}

/// PSG channel address
///
/// `Ch1`-`Ch3` are tone channels. `Ch4` is the noise channel; its volume is
/// set like any other channel, and a tone write to it lands in the noise
/// control register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum Channel {
    /// Tone channel 1 - code 0
    Ch1 = 0,
    /// Tone channel 2 - code 1
    Ch2 = 1,
    /// Tone channel 3 - code 2
    Ch3 = 2,
    /// Noise channel - code 3
    Ch4 = 3,
}

impl Channel {
    /// All channels in address order
    pub const ALL: [Channel; 4] = [Channel::Ch1, Channel::Ch2, Channel::Ch3, Channel::Ch4];

    /// Get the 2-bit channel code
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Channel {
    type Error = PsgError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Channel::from_u8(value).ok_or(PsgError::InvalidChannel(value))
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Ch1 => write!(f, "CH1 (Tone 1)"),
            Channel::Ch2 => write!(f, "CH2 (Tone 2)"),
            Channel::Ch3 => write!(f, "CH3 (Tone 3)"),
            Channel::Ch4 => write!(f, "CH4 (Noise)"),
        }
    }
}

/// Noise generator feedback mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum NoiseType {
    /// Periodic (buzz-like) noise
    Periodic = 0,
    /// White noise
    White = 1,
}

impl TryFrom<u8> for NoiseType {
    type Error = PsgError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        NoiseType::from_u8(value).ok_or(PsgError::InvalidNoiseType(value))
    }
}

/// Noise generator shift-rate source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum NoiseCtrl {
    /// Clock / 512
    High = 0,
    /// Clock / 1024
    Mid = 1,
    /// Clock / 2048
    Low = 2,
    /// Follow tone channel 3's period
    Ch3 = 3,
}

impl TryFrom<u8> for NoiseCtrl {
    type Error = PsgError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        NoiseCtrl::from_u8(value).ok_or(PsgError::InvalidNoiseCtrl(value))
    }
}

/// A single PSG command, ready to be packed into wire bytes
///
/// Encoding is unchecked: a `level` above 15 or a `period` above
/// [`MAX_TONE_PERIOD`] bleeds into neighbouring bit fields exactly as the
/// hardware protocol would. [`Psg`](crate::Psg) validates before building
/// commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Set channel volume (0 = silent, 15 = loudest)
    Volume {
        /// Target channel
        channel: Channel,
        /// Volume level, inverted to attenuation on the wire
        level: u8,
    },
    /// Set channel tone period (two bytes, latch then data)
    Tone {
        /// Target channel
        channel: Channel,
        /// 10-bit tone period
        period: u16,
    },
    /// Configure the noise generator
    Noise {
        /// Feedback mode
        noise_type: NoiseType,
        /// Shift-rate source
        ctrl: NoiseCtrl,
    },
}

impl Command {
    /// Pack the command into its wire bytes
    pub fn bytes(&self) -> CommandBytes {
        match *self {
            Command::Volume { channel, level } => {
                let attenuation = MAX_LEVEL.wrapping_sub(level);
                CommandBytes::one((1 << 7) | (channel.code() << 5) | (1 << 4) | attenuation)
            }
            Command::Tone { channel, period } => {
                let low_bits = (period & 0xF) as u8;
                let high_bits = (period >> 4) as u8;
                CommandBytes::two((1 << 7) | (channel.code() << 5) | low_bits, high_bits)
            }
            Command::Noise { noise_type, ctrl } => {
                let type_freq = ((noise_type as u8) << 2) | ctrl as u8;
                CommandBytes::one((1 << 7) | (NOISE_CHANNEL_CODE << 5) | type_freq)
            }
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Volume { channel, level } => write!(f, "{channel} volume {level}"),
            Command::Tone { channel, period } => write!(f, "{channel} tone period {period}"),
            Command::Noise { noise_type, ctrl } => write!(f, "noise {noise_type:?}/{ctrl:?}"),
        }
    }
}

/// Encoded bytes of one command (1 or 2 bytes, in emission order)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandBytes {
    buf: [u8; 2],
    len: usize,
}

impl CommandBytes {
    fn one(first: u8) -> Self {
        CommandBytes {
            buf: [first, 0],
            len: 1,
        }
    }

    fn two(first: u8, second: u8) -> Self {
        CommandBytes {
            buf: [first, second],
            len: 2,
        }
    }

    /// Get the bytes as a slice
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl Deref for CommandBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for CommandBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
