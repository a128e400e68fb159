//! SN76489 register interface
//!
//! Translates volume, tone and noise commands into the chip's byte protocol:
//!
//! | Command | Byte 1       | Byte 2     |
//! |---------|--------------|------------|
//! | Volume  | `1 CC 1 VVVV` | -         |
//! | Tone    | `1 CC 0 LLLL` | `0 HHHHHH` |
//! | Noise   | `1 11 TFFFF`  | -         |
//!
//! `CC` is the channel, `VVVV` the attenuation (15 - level), `LLLL`/`HHHHHH`
//! the low 4 and high 6 bits of the tone period.

pub mod config;
pub mod driver;
pub mod registers;
pub mod sink;

pub use config::PsgConfig;
pub use driver::Psg;
pub use registers::{Channel, Command, CommandBytes, CommandFlags, NoiseCtrl, NoiseType};
pub use sink::{ByteSink, FnSink, SharedSink};
