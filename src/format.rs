//! Formatter: renders a [`Color`] as text in any notation.
//!
//! All renderings start from the RGB channels. Hue is printed in whole
//! degrees; saturation, lightness, value and the CMYK inks in whole percent
//! with a `%` suffix; hex bytes as two lowercase digits.

use crate::color::{Alpha, AlphaPrecision, Color};
use crate::convert::round_int;
use crate::error::ColorError;
use crate::notation::Notation;

/// Renderers indexed by `Notation as usize`.
const RENDERERS: [fn(&Color) -> String; 10] = [
    render_hex,
    render_hexa,
    render_rgb,
    render_rgba,
    render_hsl,
    render_hsla,
    render_hsv,
    render_hsva,
    render_cmyk,
    render_cmyka,
];

/// Render `color` in the `target` notation.
///
/// # Errors
///
/// Returns `ColorError::IncompatibleAlpha` when the color and the target
/// belong to different alpha families.
pub fn format(color: &Color, target: Notation) -> Result<String, ColorError> {
    if color.has_alpha() != target.has_alpha() {
        log::debug!("refusing to format {color:?} as {target}: alpha family mismatch");
        return Err(ColorError::IncompatibleAlpha {
            target,
            has_alpha: color.has_alpha(),
        });
    }
    Ok(render(color, target))
}

/// Render without the family check. Alpha notations fall back to
/// [`Alpha::OPAQUE`]; opaque notations ignore alpha.
pub(crate) fn render(color: &Color, target: Notation) -> String {
    let text = RENDERERS[target as usize](color);
    log::trace!("formatted {color:?} as {text:?}");
    text
}

/// Format a channel as two lowercase hex digits.
///
/// Out-of-range values are written in full (`999` -> `3e7`, `-128` ->
/// `-80`) rather than wrapped to a byte.
#[must_use]
pub fn hex_byte(value: i64) -> String {
    if value < 0 {
        format!("-{:x}", value.unsigned_abs())
    } else {
        format!("{value:02x}")
    }
}

/// Format alpha the way `rgba()` shows it.
fn rgba_alpha(alpha: Alpha) -> String {
    match alpha.precision() {
        AlphaPrecision::Exact => alpha.value().to_string(),
        AlphaPrecision::Hundredths => format!("{:.2}", alpha.value()),
    }
}

/// Format alpha the way every other alpha notation shows it.
fn plain_alpha(alpha: Alpha) -> String {
    alpha.display_value().to_string()
}

fn alpha_of(color: &Color) -> Alpha {
    color.alpha.unwrap_or_default()
}

fn percent(fraction: f64) -> i64 {
    round_int(fraction * 100.0)
}

fn render_hex(color: &Color) -> String {
    format!(
        "#{}{}{}",
        hex_byte(color.red.into()),
        hex_byte(color.green.into()),
        hex_byte(color.blue.into())
    )
}

fn render_hexa(color: &Color) -> String {
    format!("{}{}", render_hex(color), hex_byte(alpha_of(color).byte()))
}

fn render_rgb(color: &Color) -> String {
    format!("rgb({}, {}, {})", color.red, color.green, color.blue)
}

fn render_rgba(color: &Color) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        color.red,
        color.green,
        color.blue,
        rgba_alpha(alpha_of(color))
    )
}

fn hsl_fields(color: &Color) -> (i64, i64, i64) {
    let (h, s, l) = color.to_hsl();
    (round_int(h), percent(s), percent(l))
}

fn render_hsl(color: &Color) -> String {
    let (h, s, l) = hsl_fields(color);
    format!("hsl({h}, {s}%, {l}%)")
}

fn render_hsla(color: &Color) -> String {
    let (h, s, l) = hsl_fields(color);
    let a = plain_alpha(alpha_of(color));
    format!("hsla({h}, {s}%, {l}%, {a})")
}

fn hsv_fields(color: &Color) -> (i64, i64, i64) {
    let (h, s, v) = color.to_hsv();
    (round_int(h), percent(s), percent(v))
}

fn render_hsv(color: &Color) -> String {
    let (h, s, v) = hsv_fields(color);
    format!("hsv({h}, {s}%, {v}%)")
}

fn render_hsva(color: &Color) -> String {
    let (h, s, v) = hsv_fields(color);
    let a = plain_alpha(alpha_of(color));
    format!("hsva({h}, {s}%, {v}%, {a})")
}

fn cmyk_fields(color: &Color) -> (i64, i64, i64, i64) {
    let (c, m, y, k) = color.to_cmyk();
    (percent(c), percent(m), percent(y), percent(k))
}

fn render_cmyk(color: &Color) -> String {
    let (c, m, y, k) = cmyk_fields(color);
    format!("cmyk({c}%, {m}%, {y}%, {k}%)")
}

fn render_cmyka(color: &Color) -> String {
    let (c, m, y, k) = cmyk_fields(color);
    let a = plain_alpha(alpha_of(color));
    format!("cmyka({c}%, {m}%, {y}%, {k}%, {a})")
}
