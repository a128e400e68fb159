//! MIDI note helpers
//!
//! Note number to frequency conversion, a static ADSR envelope shape and the
//! mono/poly voice mode flag. None of this talks to the chip; a caller turns
//! a note into Hz here and hands the result to [`Psg::set_tone`](crate::Psg::set_tone).

pub mod envelope;
pub mod mode;
pub mod note;

pub use envelope::{Envelope, EnvelopeState};
pub use mode::MonoPolyMode;
pub use note::{frequency_to_note, note_to_frequency, note_to_frequency_int};
