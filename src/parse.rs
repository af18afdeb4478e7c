//! Format recognizer: decides which notation a string is written in and
//! decodes its fields into a [`Color`].
//!
//! Each notation has one anchored grammar. Grammars are tried in
//! [`Notation::PRECEDENCE`] order and the first structural match wins. The
//! grammars are disjoint by their leading token, so in practice at most one
//! ever matches.
//!
//! Matching is strict: no surrounding whitespace, lowercase function names,
//! ASCII digits only. Hex digits may be either case.
//!
//! ```
//! use chroma_codec::parse::{identify, identify_as};
//! use chroma_codec::{Color, Notation};
//!
//! let (notation, color) = identify("#f60").unwrap();
//! assert_eq!(notation, Notation::Hex);
//! assert_eq!(color, Color::rgb(255, 102, 0));
//!
//! assert!(identify_as(Notation::Rgb, "#f60").is_err());
//! ```

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::color::{Alpha, Color};
use crate::convert;
use crate::error::ColorError;
use crate::notation::Notation;

/// One notation's grammar and the decoder for its captured fields.
struct Grammar {
    pattern: &'static str,
    decode: fn(&Captures<'_>) -> Option<Color>,
}

/// Grammars indexed by `Notation as usize`.
const GRAMMARS: [Grammar; 10] = [
    // Hex
    Grammar {
        pattern: r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$",
        decode: decode_hex,
    },
    // Hexa
    Grammar {
        pattern: r"^#([A-Fa-f0-9]{8}|[A-Fa-f0-9]{4})$",
        decode: decode_hexa,
    },
    // Rgb
    Grammar {
        pattern: r"^rgb\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*\)$",
        decode: decode_rgb,
    },
    // Rgba
    Grammar {
        pattern: r"^rgba\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9](?:\.[0-9]+)?|\.[0-9]+)\s*\)$",
        decode: decode_rgba,
    },
    // Hsl
    Grammar {
        pattern: r"^hsl\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})%?\s*,\s*([0-9]{1,3})%?\s*\)$",
        decode: decode_hsl,
    },
    // Hsla
    Grammar {
        pattern: r"^hsla\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})%?\s*,\s*([0-9]{1,3})%?\s*,\s*([0-9](?:\.[0-9]+)?|\.[0-9]+)\s*\)$",
        decode: decode_hsla,
    },
    // Hsv
    Grammar {
        pattern: r"^hsv\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})%?\s*,\s*([0-9]{1,3})%?\s*\)$",
        decode: decode_hsv,
    },
    // Hsva
    Grammar {
        pattern: r"^hsva\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})%?\s*,\s*([0-9]{1,3})%?\s*,\s*([0-9](?:\.[0-9]+)?|\.[0-9]+)\s*\)$",
        decode: decode_hsva,
    },
    // Cmyk
    Grammar {
        pattern: r"^cmyk\(\s*([0-9]{1,3})%?\s*,\s*([0-9]{1,3})%?\s*,\s*([0-9]{1,3})%?\s*,\s*([0-9]{1,3})%?\s*\)$",
        decode: decode_cmyk,
    },
    // Cmyka
    Grammar {
        pattern: r"^cmyka\(\s*([0-9]{1,3})%?\s*,\s*([0-9]{1,3})%?\s*,\s*([0-9]{1,3})%?\s*,\s*([0-9]{1,3})%?\s*,\s*([0-9](?:\.[0-9]+)?|\.[0-9]+)\s*\)$",
        decode: decode_cmyka,
    },
];

static MATCHERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    GRAMMARS
        .iter()
        .map(|grammar| Regex::new(grammar.pattern).expect("valid regex"))
        .collect()
});

fn matcher(notation: Notation) -> &'static Regex {
    &MATCHERS[notation as usize]
}

/// Returns true if `text` structurally matches the grammar of `notation`.
#[must_use]
pub fn is_match(notation: Notation, text: &str) -> bool {
    matcher(notation).is_match(text)
}

/// The first notation, in precedence order, whose grammar `text` matches.
#[must_use]
pub fn recognize(text: &str) -> Option<Notation> {
    Notation::PRECEDENCE
        .into_iter()
        .find(|&notation| is_match(notation, text))
}

/// Recognize the notation of `text` and decode it.
///
/// # Errors
///
/// Returns `ColorError::InvalidFormat` if `text` matches no grammar.
pub fn identify(text: &str) -> Result<(Notation, Color), ColorError> {
    for notation in Notation::PRECEDENCE {
        if let Some(caps) = matcher(notation).captures(text) {
            let color = decode(notation, text, &caps)?;
            log::trace!("recognized {notation} color {text:?} as {color:?}");
            return Ok((notation, color));
        }
    }

    log::debug!("unrecognized color input {text:?}");
    Err(ColorError::invalid_format(text, None))
}

/// Decode `text` as the given notation.
///
/// # Errors
///
/// Returns `ColorError::InvalidFormat` naming `notation` if `text` does not
/// match its grammar.
pub fn identify_as(notation: Notation, text: &str) -> Result<Color, ColorError> {
    let caps = matcher(notation).captures(text).ok_or_else(|| {
        log::debug!("{text:?} is not a valid {notation} color");
        ColorError::invalid_format(text, Some(notation))
    })?;
    decode(notation, text, &caps)
}

fn decode(notation: Notation, text: &str, caps: &Captures<'_>) -> Result<Color, ColorError> {
    (GRAMMARS[notation as usize].decode)(caps)
        .ok_or_else(|| ColorError::invalid_format(text, Some(notation)))
}

// ============================================================================
// Field extraction
// ============================================================================

fn int_field(caps: &Captures<'_>, index: usize) -> Option<i32> {
    caps.get(index)?.as_str().parse().ok()
}

/// An integer field read as a fraction of `scale`.
fn scaled_field(caps: &Captures<'_>, index: usize, scale: f64) -> Option<f64> {
    int_field(caps, index).map(|value| f64::from(value) / scale)
}

fn alpha_field(caps: &Captures<'_>, index: usize) -> Option<Alpha> {
    caps.get(index)?.as_str().parse().ok().map(Alpha::new)
}

/// Expand hex digits into bytes. Shorthand digits are repeated (`d` -> `dd`).
fn hex_bytes(digits: &str) -> Option<Vec<u8>> {
    match digits.len() {
        3 | 4 => digits
            .chars()
            .map(|digit| {
                digit
                    .to_digit(16)
                    .and_then(|value| u8::try_from(value * 17).ok())
            })
            .collect(),
        6 | 8 => (0..digits.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok())
            .collect(),
        _ => None,
    }
}

// ============================================================================
// Decoders
// ============================================================================

fn decode_hex(caps: &Captures<'_>) -> Option<Color> {
    match hex_bytes(caps.get(1)?.as_str())?.as_slice() {
        &[red, green, blue] => Some(Color::from([red, green, blue])),
        _ => None,
    }
}

fn decode_hexa(caps: &Captures<'_>) -> Option<Color> {
    match hex_bytes(caps.get(1)?.as_str())?.as_slice() {
        &[red, green, blue, alpha] => Some(Color::from([red, green, blue, alpha])),
        _ => None,
    }
}

fn decode_rgb(caps: &Captures<'_>) -> Option<Color> {
    Some(Color::rgb(
        int_field(caps, 1)?,
        int_field(caps, 2)?,
        int_field(caps, 3)?,
    ))
}

fn decode_rgba(caps: &Captures<'_>) -> Option<Color> {
    Some(decode_rgb(caps)?.with_alpha(alpha_field(caps, 4)?))
}

fn decode_hsl(caps: &Captures<'_>) -> Option<Color> {
    Some(Color::from_scaled(convert::hsl_to_rgb(
        scaled_field(caps, 1, 360.0)?,
        scaled_field(caps, 2, 100.0)?,
        scaled_field(caps, 3, 100.0)?,
    )))
}

fn decode_hsla(caps: &Captures<'_>) -> Option<Color> {
    Some(decode_hsl(caps)?.with_alpha(alpha_field(caps, 4)?))
}

fn decode_hsv(caps: &Captures<'_>) -> Option<Color> {
    Some(Color::from_scaled(convert::hsv_to_rgb(
        scaled_field(caps, 1, 1.0)?,
        scaled_field(caps, 2, 100.0)?,
        scaled_field(caps, 3, 100.0)?,
    )))
}

fn decode_hsva(caps: &Captures<'_>) -> Option<Color> {
    Some(decode_hsv(caps)?.with_alpha(alpha_field(caps, 4)?))
}

fn decode_cmyk(caps: &Captures<'_>) -> Option<Color> {
    Some(Color::from_scaled(convert::cmyk_to_rgb(
        scaled_field(caps, 1, 100.0)?,
        scaled_field(caps, 2, 100.0)?,
        scaled_field(caps, 3, 100.0)?,
        scaled_field(caps, 4, 100.0)?,
    )))
}

fn decode_cmyka(caps: &Captures<'_>) -> Option<Color> {
    Some(decode_cmyk(caps)?.with_alpha(alpha_field(caps, 5)?))
}
