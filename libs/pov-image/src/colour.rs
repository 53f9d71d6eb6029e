//! # Colour
//!
//! Three-bit voxel colours. Each bit drives one LED channel:
//!
//! ```text
//! 0b r g b
//!   │ │ └─ blue
//!   │ └─── green
//!   └───── red
//! ```
//!
//! Colours accumulate with bitwise OR when shapes overlap.

use crate::error::{PovError, PovResult};
use config::constants::MAX_COLOUR_VALUE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

/// A voxel colour in the range `0..=7`.
///
/// # Examples
/// ```
/// use pov_image::Colour;
///
/// assert_eq!(Colour::RED | Colour::BLUE, Colour::PINK);
/// assert!(Colour::new(8).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Colour(u8);

impl Colour {
    pub const BLACK: Colour = Colour(0b000);
    pub const BLUE: Colour = Colour(0b001);
    pub const GREEN: Colour = Colour(0b010);
    pub const TEAL: Colour = Colour(0b011);
    pub const RED: Colour = Colour(0b100);
    pub const PINK: Colour = Colour(0b101);
    pub const YELLOW: Colour = Colour(0b110);
    pub const WHITE: Colour = Colour(0b111);

    /// Palette in ascending value order, with the names accepted by `from_str`.
    pub const NAMED: [(&'static str, Colour); 8] = [
        ("black", Colour::BLACK),
        ("blue", Colour::BLUE),
        ("green", Colour::GREEN),
        ("teal", Colour::TEAL),
        ("red", Colour::RED),
        ("pink", Colour::PINK),
        ("yellow", Colour::YELLOW),
        ("white", Colour::WHITE),
    ];

    /// Creates a colour, rejecting values with bits above the third set.
    pub fn new(value: u8) -> PovResult<Self> {
        if value > MAX_COLOUR_VALUE {
            return Err(PovError::ColourOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Keeps only the low three bits of `value`.
    pub(crate) const fn from_masked(value: u8) -> Self {
        Self(value & MAX_COLOUR_VALUE)
    }

    /// Raw three-bit value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// True if every channel set in `other` is also set in `self`.
    pub fn contains(self, other: Colour) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_black(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Colour {
    type Output = Colour;

    fn bitor(self, rhs: Colour) -> Colour {
        Colour(self.0 | rhs.0)
    }
}

impl BitOrAssign for Colour {
    fn bitor_assign(&mut self, rhs: Colour) {
        self.0 |= rhs.0;
    }
}

impl TryFrom<u8> for Colour {
    type Error = PovError;

    fn try_from(value: u8) -> PovResult<Self> {
        Colour::new(value)
    }
}

impl From<Colour> for u8 {
    fn from(colour: Colour) -> u8 {
        colour.0
    }
}

impl FromStr for Colour {
    type Err = PovError;

    fn from_str(s: &str) -> PovResult<Self> {
        let name = s.trim().to_ascii_lowercase();
        Colour::NAMED
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, colour)| *colour)
            .ok_or_else(|| PovError::UnknownColour(s.to_string()))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#05b}", self.0)
    }
}
