//! # chroma_codec
//!
//! Recognize color values written in ten textual notations and convert them
//! into one another.
//!
//! | Opaque | With alpha |
//! |---|---|
//! | `#rrggbb`, `#rgb` | `#rrggbbaa`, `#rgba` |
//! | `rgb(r, g, b)` | `rgba(r, g, b, a)` |
//! | `hsl(h, s%, l%)` | `hsla(h, s%, l%, a)` |
//! | `hsv(h, s%, v%)` | `hsva(h, s%, v%, a)` |
//! | `cmyk(c%, m%, y%, k%)` | `cmyka(c%, m%, y%, k%, a)` |
//!
//! ## Quick Start
//!
//! ```rust
//! use chroma_codec::prelude::*;
//!
//! let (notation, color) = identify("#f60").unwrap();
//! assert_eq!(notation, Notation::Hex);
//! assert_eq!(format(&color, Notation::Rgb).unwrap(), "rgb(255, 102, 0)");
//!
//! let all = convert_all("rgba(10, 20, 30, 0.5)").unwrap();
//! assert_eq!(all.get(Notation::Hexa), Some("#0a141e80"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Notation**: one of the ten grammars, split into an opaque and an alpha family
//! - **Color**: the RGB(+alpha) value every conversion pivots through
//! - **Recognizer** ([`parse`]): text -> notation + color
//! - **Formatter** ([`mod@format`]): color -> text in any notation of its family
//! - **Converter**: both, with a recognition cache and an alpha policy
//!
//! Every operation is a pure function of its arguments; bad input is reported
//! as a [`ColorError`], never a panic.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod convert;
pub mod converter;
pub mod error;
pub mod format;
pub mod notation;
pub mod parse;
pub mod sync;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::color::{Alpha, AlphaPrecision, Color};
    pub use crate::converter::{
        AlphaPolicy, Conversion, Converter, ConverterBuilder, convert, convert_all, format,
        identify,
    };
    pub use crate::error::ColorError;
    pub use crate::notation::Notation;
}

// Re-export key types at crate root
pub use color::{Alpha, AlphaPrecision, Color};
pub use converter::{
    AlphaPolicy, Conversion, Converter, ConverterBuilder, DEFAULT_CACHE_CAPACITY, convert,
    convert_all, format, identify,
};
pub use error::ColorError;
pub use notation::Notation;
