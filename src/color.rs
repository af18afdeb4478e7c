//! The canonical color value every conversion pivots through.
//!
//! # Examples
//!
//! ```
//! use chroma_codec::{Color, Notation};
//!
//! let orange = Color::rgb(255, 102, 0);
//! assert_eq!(orange.to_notation(Notation::Hex).unwrap(), "#ff6600");
//! assert_eq!(orange.to_string(), "rgb(255, 102, 0)");
//!
//! let veiled = Color::rgba(10, 20, 30, 0.5);
//! assert_eq!(veiled.to_notation(Notation::Hexa).unwrap(), "#0a141e80");
//! ```
//!
//! Channels are plain integers and are never clamped: `rgb(999, 0, 0)` is a
//! valid input and round-trips as such.

use std::fmt;

use crate::convert;
use crate::error::ColorError;
use crate::format;
use crate::notation::Notation;

/// How an alpha value is written back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlphaPrecision {
    /// Shortest representation of the exact value (`0.5`, `1`, `0.3333`).
    #[default]
    Exact,
    /// Rounded to two decimals. `rgba()` shows both digits (`0.50`), other
    /// notations the rounded value in shortest form (`0.5`).
    ///
    /// Used for alpha decoded from a hex byte, where the exact value
    /// (`128 / 255`) is not meaningful to display.
    Hundredths,
}

/// Opacity in `0.0..=1.0`, plus how it should be displayed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alpha {
    value: f64,
    precision: AlphaPrecision,
}

impl Alpha {
    /// Fully opaque, displayed exactly.
    pub const OPAQUE: Self = Self::new(1.0);

    /// Create an alpha displayed with [`AlphaPrecision::Exact`].
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            precision: AlphaPrecision::Exact,
        }
    }

    /// Create an alpha with an explicit display precision.
    #[must_use]
    pub const fn with_precision(value: f64, precision: AlphaPrecision) -> Self {
        Self { value, precision }
    }

    /// Alpha decoded from a hex byte (`0x80` -> `128 / 255`).
    #[must_use]
    pub fn from_byte(byte: u8) -> Self {
        Self::with_precision(f64::from(byte) / 255.0, AlphaPrecision::Hundredths)
    }

    /// The full-precision value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// The display precision.
    #[must_use]
    pub const fn precision(self) -> AlphaPrecision {
        self.precision
    }

    /// The value scaled to a byte, rounded (not clamped).
    #[must_use]
    pub fn byte(self) -> i64 {
        convert::round_int(self.value * 255.0)
    }

    /// The value as it is displayed, after applying the precision.
    #[must_use]
    pub fn display_value(self) -> f64 {
        match self.precision {
            AlphaPrecision::Exact => self.value,
            AlphaPrecision::Hundredths => (self.value * 100.0).round() / 100.0,
        }
    }
}

impl Default for Alpha {
    fn default() -> Self {
        Self::OPAQUE
    }
}

impl From<f64> for Alpha {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// A color as red, green and blue channels with optional alpha.
///
/// `alpha` is `None` for colors that came from (and go to) the opaque
/// notations, and `Some` for the alpha-carrying ones. The two never mix
/// unless a [`Converter`](crate::Converter) is configured to coerce them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red channel, nominally 0-255.
    pub red: i32,
    /// Green channel, nominally 0-255.
    pub green: i32,
    /// Blue channel, nominally 0-255.
    pub blue: i32,
    /// Opacity, absent for opaque notations.
    pub alpha: Option<Alpha>,
}

impl Color {
    /// Create an opaque color from RGB channels.
    #[must_use]
    pub const fn rgb(red: i32, green: i32, blue: i32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: None,
        }
    }

    /// Create a color with alpha from RGB channels and an exact alpha.
    #[must_use]
    pub const fn rgba(red: i32, green: i32, blue: i32, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: Some(Alpha::new(alpha)),
        }
    }

    /// Create an opaque color from unrounded 0-255 scale channels.
    #[must_use]
    pub fn from_scaled((red, green, blue): (f64, f64, f64)) -> Self {
        Self::rgb(
            convert::round_channel(red),
            convert::round_channel(green),
            convert::round_channel(blue),
        )
    }

    /// Return this color with the given alpha.
    #[must_use]
    pub const fn with_alpha(self, alpha: Alpha) -> Self {
        Self {
            alpha: Some(alpha),
            ..self
        }
    }

    /// Return this color without alpha.
    #[must_use]
    pub const fn without_alpha(self) -> Self {
        Self {
            alpha: None,
            ..self
        }
    }

    /// Returns true if the color belongs to the alpha-carrying family.
    #[must_use]
    pub const fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    /// Returns normalized RGB as fractions of 255.
    #[must_use]
    pub fn normalized(&self) -> (f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        )
    }

    /// Convert to `(hue°, saturation, lightness)`.
    #[must_use]
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let (r, g, b) = self.normalized();
        convert::rgb_to_hsl(r, g, b)
    }

    /// Convert to `(hue°, saturation, value)`.
    #[must_use]
    pub fn to_hsv(&self) -> (f64, f64, f64) {
        let (r, g, b) = self.normalized();
        convert::rgb_to_hsv(r, g, b)
    }

    /// Convert to `(cyan, magenta, yellow, black)`.
    #[must_use]
    pub fn to_cmyk(&self) -> (f64, f64, f64, f64) {
        let (r, g, b) = self.normalized();
        convert::rgb_to_cmyk(r, g, b)
    }

    /// The RGB notation matching this color's alpha family.
    #[must_use]
    pub const fn natural_notation(&self) -> Notation {
        if self.has_alpha() {
            Notation::Rgba
        } else {
            Notation::Rgb
        }
    }

    /// Render the color in the given notation.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::IncompatibleAlpha` if `notation` belongs to the
    /// other alpha family.
    pub fn to_notation(&self, notation: Notation) -> Result<String, ColorError> {
        format::format(self, notation)
    }
}

impl From<(i32, i32, i32)> for Color {
    fn from((red, green, blue): (i32, i32, i32)) -> Self {
        Self::rgb(red, green, blue)
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::rgb(i32::from(red), i32::from(green), i32::from(blue))
    }
}

impl From<[u8; 4]> for Color {
    fn from([red, green, blue, alpha]: [u8; 4]) -> Self {
        Self::rgb(i32::from(red), i32::from(green), i32::from(blue))
            .with_alpha(Alpha::from_byte(alpha))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::render(self, self.natural_notation()))
    }
}
