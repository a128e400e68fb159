//! SN76489 PSG command encoder
//!
//! A small hardware-control layer for the Texas Instruments SN76489 family of
//! Programmable Sound Generators, plus the MIDI note helpers used to drive it.
//! The chip is write-only: every command is a byte (or, for tone periods, a
//! latch byte followed by a data byte) pushed onto its register interface.
//! This crate turns musical commands into those bytes and hands them to a
//! caller-supplied [`ByteSink`].
//!
//! # Features
//! - Volume, tone and noise commands for all 4 channels, bit-exact
//! - Tone period computation from Hz with configurable master clock
//! - Pluggable byte sinks (buffers, closures, shared buses)
//! - MIDI note to frequency conversion (float and coarse integer paths)
//! - ADSR envelope shape model with millisecond durations
//!
//! # Crate feature flags
//! - `midi` (default): Note conversion, envelope shape and mono/poly mode (`midi`)
//!
//! # Quick start
//! ```
//! use sn76489_psg::{Channel, NoiseCtrl, NoiseType, Psg};
//!
//! let mut psg = Psg::new(Vec::<u8>::new());
//! psg.set_tone(Channel::Ch1, 440).unwrap();
//! psg.set_volume(Channel::Ch1, 15).unwrap();
//! psg.set_noise(NoiseType::White, NoiseCtrl::Low).unwrap();
//!
//! assert_eq!(psg.sink().as_slice(), &[0x8E, 0x08, 0x90, 0xE6]);
//! ```

#![warn(missing_docs)]

use std::convert::Infallible;

#[cfg(feature = "midi")]
pub mod midi; // Note/Frequency Helpers
pub mod psg; // PSG Command Encoding (core)

/// Error types for PSG command encoding
///
/// `E` is the error type of the [`ByteSink`] the driver writes to. Sinks that
/// cannot fail use [`Infallible`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PsgError<E = Infallible> {
    /// Volume level does not fit the 4-bit attenuation field
    #[error("Invalid volume level {0} (expected 0-15)")]
    InvalidLevel(u8),

    /// Tone frequency of 0 Hz has no period
    #[error("Invalid tone frequency: 0 Hz")]
    ZeroFrequency,

    /// Tone period does not fit the 10-bit period register
    #[error("Tone period {period} for {frequency} Hz exceeds 10 bits")]
    PeriodOutOfRange {
        /// Requested frequency in Hz (0 when a raw period was given)
        frequency: u32,
        /// Computed or requested period
        period: u32,
    },

    /// Raw channel number outside 0-3
    #[error("Invalid channel {0} (expected 0-3)")]
    InvalidChannel(u8),

    /// Raw noise type outside 0-1
    #[error("Invalid noise type {0} (expected 0-1)")]
    InvalidNoiseType(u8),

    /// Raw noise frequency control outside 0-3
    #[error("Invalid noise control {0} (expected 0-3)")]
    InvalidNoiseCtrl(u8),

    /// Error reported by the byte sink, passed through unmodified
    #[error("Byte sink error: {0}")]
    Sink(E),
}

/// Result type for PSG operations
pub type Result<T, E = Infallible> = std::result::Result<T, PsgError<E>>;

// Public API exports
pub use psg::{
    ByteSink, Channel, Command, CommandBytes, CommandFlags, FnSink, NoiseCtrl, NoiseType, Psg,
    PsgConfig, SharedSink,
};

#[cfg(feature = "midi")]
pub use midi::{
    frequency_to_note, note_to_frequency, note_to_frequency_int, Envelope, EnvelopeState,
    MonoPolyMode,
};
