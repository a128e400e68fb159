//! Note number to frequency conversion
//!
//! Note 69 is A4 = 440 Hz; each step is one equal-tempered semitone.

use num_traits::Float;

/// MIDI note number of the reference pitch A4
pub const A4_NOTE: i32 = 69;

/// Frequency of A4 in Hz
pub const A4_FREQUENCY: u32 = 440;

const SEMITONES_PER_OCTAVE: i32 = 12;

/// Convert a (possibly fractional) note number to a frequency in Hz
///
/// `440 * 2^((note - 69) / 12)`. Fractional notes model pitch bend. No range
/// checks: extreme notes yield huge, tiny or non-finite results.
///
/// ```
/// use sn76489_psg::note_to_frequency;
///
/// assert!((note_to_frequency(69.0f32) - 440.0).abs() < 1e-3);
/// assert!((note_to_frequency(81.0f64) - 880.0).abs() < 1e-9);
/// ```
pub fn note_to_frequency<F: Float>(note: F) -> F {
    let a4 = F::from(A4_FREQUENCY).unwrap_or_else(F::nan);
    let reference = F::from(A4_NOTE).unwrap_or_else(F::nan);
    let octave = F::from(SEMITONES_PER_OCTAVE).unwrap_or_else(F::nan);
    let two = F::one() + F::one();
    a4 * two.powf((note - reference) / octave)
}

/// Coarse integer note to frequency conversion
///
/// The exponent `(note - 69) / 12` is an integer quotient, truncated toward
/// zero before the power, so only whole octaves away from A4 change the
/// result: notes 58..=80 all give 440. Use [`note_to_frequency`] for real
/// pitches; this path is a cheap octave-level lookup.
pub fn note_to_frequency_int(note: i32) -> i32 {
    let octaves = note.saturating_sub(A4_NOTE) / SEMITONES_PER_OCTAVE;
    (A4_FREQUENCY as f64 * 2f64.powi(octaves)) as i32
}

/// Convert a frequency in Hz back to a fractional note number
///
/// Inverse of [`note_to_frequency`]. Zero or negative input gives a
/// non-finite result.
pub fn frequency_to_note(frequency: f32) -> f32 {
    A4_NOTE as f32 + SEMITONES_PER_OCTAVE as f32 * (frequency / A4_FREQUENCY as f32).log2()
}
