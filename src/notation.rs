//! The ten textual color notations understood by the codec.
//!
//! Notations come in two families: the opaque ones (`#rrggbb`, `rgb()`,
//! `hsl()`, `hsv()`, `cmyk()`) and their alpha-carrying counterparts
//! (`#rrggbbaa`, `rgba()`, `hsla()`, `hsva()`, `cmyka()`). A color recognized
//! in one family is only ever rendered into the same family unless a
//! [`Converter`](crate::Converter) is configured otherwise.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// A textual color notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Notation {
    /// `#rgb` or `#rrggbb`.
    Hex = 0,
    /// `#rgba` or `#rrggbbaa`.
    Hexa = 1,
    /// `rgb(r, g, b)`.
    Rgb = 2,
    /// `rgba(r, g, b, a)`.
    Rgba = 3,
    /// `hsl(h, s%, l%)`.
    Hsl = 4,
    /// `hsla(h, s%, l%, a)`.
    Hsla = 5,
    /// `hsv(h, s%, v%)`.
    Hsv = 6,
    /// `hsva(h, s%, v%, a)`.
    Hsva = 7,
    /// `cmyk(c%, m%, y%, k%)`.
    Cmyk = 8,
    /// `cmyka(c%, m%, y%, k%, a)`.
    Cmyka = 9,
}

impl Notation {
    /// Every notation, in the order the recognizer tries them.
    pub const PRECEDENCE: [Notation; 10] = [
        Notation::Rgb,
        Notation::Rgba,
        Notation::Hex,
        Notation::Hexa,
        Notation::Hsl,
        Notation::Hsla,
        Notation::Hsv,
        Notation::Hsva,
        Notation::Cmyk,
        Notation::Cmyka,
    ];

    /// Lowercase name of the notation, as used by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Hexa => "hexa",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::Hsv => "hsv",
            Self::Hsva => "hsva",
            Self::Cmyk => "cmyk",
            Self::Cmyka => "cmyka",
        }
    }

    /// Returns true if the notation carries an alpha channel.
    #[must_use]
    pub const fn has_alpha(self) -> bool {
        matches!(
            self,
            Self::Hexa | Self::Rgba | Self::Hsla | Self::Hsva | Self::Cmyka
        )
    }

    /// The same notation in the other alpha family (`Rgb` <-> `Rgba`, ...).
    #[must_use]
    pub const fn counterpart(self) -> Self {
        match self {
            Self::Hex => Self::Hexa,
            Self::Hexa => Self::Hex,
            Self::Rgb => Self::Rgba,
            Self::Rgba => Self::Rgb,
            Self::Hsl => Self::Hsla,
            Self::Hsla => Self::Hsl,
            Self::Hsv => Self::Hsva,
            Self::Hsva => Self::Hsv,
            Self::Cmyk => Self::Cmyka,
            Self::Cmyka => Self::Cmyk,
        }
    }

    /// Number of numeric fields the notation's grammar carries.
    ///
    /// Hex notations count one field per channel.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Hex | Self::Rgb | Self::Hsl | Self::Hsv => 3,
            Self::Hexa | Self::Rgba | Self::Hsla | Self::Hsva | Self::Cmyk => 4,
            Self::Cmyka => 5,
        }
    }

    /// All notations of one alpha family, in precedence order.
    pub fn family(has_alpha: bool) -> impl Iterator<Item = Notation> {
        Self::PRECEDENCE
            .into_iter()
            .filter(move |notation| notation.has_alpha() == has_alpha)
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Notation {
    type Err = ColorError;

    /// Parse a notation name such as `"hsla"` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::PRECEDENCE
            .into_iter()
            .find(|notation| notation.name() == lowered)
            .ok_or_else(|| ColorError::invalid_format(s, None))
    }
}
