//! SN76489 command driver
//!
//! Validates musical commands, encodes them with [`Command`] and pushes the
//! resulting bytes through a [`ByteSink`]. The driver keeps no copy of chip
//! state: every call is a complete, independent write.

use log::{debug, trace};

use super::config::PsgConfig;
use super::registers::{Channel, Command, NoiseCtrl, NoiseType, MAX_LEVEL, MAX_TONE_PERIOD};
use super::sink::ByteSink;
use crate::{PsgError, Result};

/// SN76489 PSG driver
///
/// Owns its sink. Each operation emits one command (one or two bytes) through
/// [`ByteSink::send_all`]; `&mut self` keeps a tone's latch and data bytes
/// together. Drivers sharing one bus should use a
/// [`SharedSink`](crate::SharedSink).
///
/// # Example
///
/// ```
/// use sn76489_psg::{Channel, Psg};
///
/// let mut psg = Psg::new(Vec::<u8>::new());
/// psg.set_tone(Channel::Ch1, 440).unwrap();
/// assert_eq!(psg.sink().as_slice(), &[0x8E, 0x08]);
/// ```
#[derive(Debug, Clone)]
pub struct Psg<S> {
    sink: S,
    config: PsgConfig,
}

impl<S: ByteSink> Psg<S> {
    /// Create a driver for a chip on the default 2 MHz clock
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, PsgConfig::default())
    }

    /// Create a driver with a custom configuration
    pub fn with_config(sink: S, config: PsgConfig) -> Self {
        Psg { sink, config }
    }

    /// Get the driver configuration
    pub fn config(&self) -> &PsgConfig {
        &self.config
    }

    /// Set channel volume
    ///
    /// # Arguments
    ///
    /// * `channel` - Target channel
    /// * `level` - Volume 0 (silent) to 15 (loudest); sent as attenuation `15 - level`
    ///
    /// # Errors
    ///
    /// [`PsgError::InvalidLevel`] if `level > 15`. Nothing is sent in that case.
    pub fn set_volume(&mut self, channel: Channel, level: u8) -> Result<(), S::Error> {
        if level > MAX_LEVEL {
            debug!("rejected volume {level} for {channel}");
            return Err(PsgError::InvalidLevel(level));
        }
        self.write(Command::Volume { channel, level })
    }

    /// Set channel tone frequency
    ///
    /// Sends the latch byte carrying the low 4 period bits followed by the
    /// data byte carrying the high 6 bits.
    ///
    /// # Arguments
    ///
    /// * `channel` - Target channel
    /// * `frequency` - Tone frequency in Hz
    ///
    /// # Errors
    ///
    /// See [`tone_period`](Psg::tone_period). Nothing is sent on error.
    pub fn set_tone(&mut self, channel: Channel, frequency: u32) -> Result<(), S::Error> {
        let period = self.tone_period(frequency)?;
        self.write(Command::Tone { channel, period })
    }

    /// Set a raw 10-bit tone period
    ///
    /// # Errors
    ///
    /// [`PsgError::PeriodOutOfRange`] if `period > 0x3FF`.
    pub fn set_tone_period(&mut self, channel: Channel, period: u16) -> Result<(), S::Error> {
        if period > MAX_TONE_PERIOD {
            debug!("rejected tone period {period} for {channel}");
            return Err(PsgError::PeriodOutOfRange {
                frequency: 0,
                period: period as u32,
            });
        }
        self.write(Command::Tone { channel, period })
    }

    /// Configure the noise generator
    pub fn set_noise(&mut self, noise_type: NoiseType, ctrl: NoiseCtrl) -> Result<(), S::Error> {
        self.write(Command::Noise { noise_type, ctrl })
    }

    /// Play a MIDI note on a tone channel
    ///
    /// The note is converted with [`note_to_frequency`](crate::note_to_frequency)
    /// and rounded to the nearest Hz.
    ///
    /// # Errors
    ///
    /// [`PsgError::PeriodOutOfRange`] for notes too low for the 10-bit period
    /// (below roughly B1 at 2 MHz).
    #[cfg(feature = "midi")]
    pub fn set_note(&mut self, channel: Channel, note: u8) -> Result<(), S::Error> {
        let frequency = crate::midi::note_to_frequency(note as f32).round() as u32;
        self.set_tone(channel, frequency)
    }

    /// Set every channel, noise included, to volume 0
    pub fn silence(&mut self) -> Result<(), S::Error> {
        for channel in Channel::ALL {
            self.set_volume(channel, 0)?;
        }
        Ok(())
    }

    /// Compute the 10-bit tone period for a frequency
    ///
    /// `period = tone_divisor / frequency`, truncated (`62500 / Hz` at 2 MHz).
    ///
    /// # Errors
    ///
    /// - [`PsgError::ZeroFrequency`] for 0 Hz
    /// - [`PsgError::PeriodOutOfRange`] if the period needs more than 10 bits
    pub fn tone_period(&self, frequency: u32) -> Result<u16, S::Error> {
        if frequency == 0 {
            debug!("rejected tone frequency 0 Hz");
            return Err(PsgError::ZeroFrequency);
        }
        let period = self.config.tone_divisor() / frequency;
        if period > MAX_TONE_PERIOD as u32 {
            debug!("tone period {period} for {frequency} Hz exceeds 10 bits");
            return Err(PsgError::PeriodOutOfRange { frequency, period });
        }
        Ok(period as u16)
    }

    /// Encode and send one command
    ///
    /// No validation: out-of-range fields are packed as-is.
    pub fn write(&mut self, command: Command) -> Result<(), S::Error> {
        let bytes = command.bytes();
        trace!("{command} -> {:02X?}", bytes.as_slice());
        self.sink.send_all(&bytes).map_err(PsgError::Sink)
    }

    /// Send a pre-encoded byte straight to the sink
    pub fn write_raw(&mut self, byte: u8) -> Result<(), S::Error> {
        trace!("raw byte {byte:02X}");
        self.sink.send(byte).map_err(PsgError::Sink)
    }

    /// Get the sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get the sink mutably
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Release the sink
    pub fn into_inner(self) -> S {
        self.sink
    }
}
