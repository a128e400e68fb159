//! Voice allocation mode

use std::fmt;

use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

/// Mono or poly voice mode
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MonoPolyMode {
    /// One voice, new notes steal it
    #[default]
    Mono = 0,
    /// One voice per channel
    Poly = 1,
}

impl MonoPolyMode {
    /// Check if the mode is poly
    pub fn is_poly(&self) -> bool {
        *self == MonoPolyMode::Poly
    }

    /// Get the other mode
    pub fn toggled(&self) -> Self {
        match self {
            MonoPolyMode::Mono => MonoPolyMode::Poly,
            MonoPolyMode::Poly => MonoPolyMode::Mono,
        }
    }
}

impl fmt::Display for MonoPolyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonoPolyMode::Mono => write!(f, "Mono"),
            MonoPolyMode::Poly => write!(f, "Poly"),
        }
    }
}
