//! Configured entry point tying the recognizer and the formatter together.
//!
//! ```
//! use chroma_codec::{AlphaPolicy, Converter, Notation};
//!
//! let converter = Converter::new();
//! assert_eq!(converter.convert("#f60", Notation::Hsl).unwrap(), "hsl(24, 100%, 50%)");
//! assert!(converter.convert("#f60", Notation::Hsla).is_err());
//!
//! let lenient = Converter::builder()
//!     .alpha_policy(AlphaPolicy::Coerce { default_alpha: 1.0 })
//!     .build();
//! assert_eq!(lenient.convert("#f60", Notation::Rgba).unwrap(), "rgba(255, 102, 0, 1)");
//! ```

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::{LazyLock, Mutex};

use lru::LruCache;

use crate::color::{Alpha, Color};
use crate::error::ColorError;
use crate::notation::Notation;
use crate::parse;
use crate::sync::lock_recover;

/// Default number of recognized inputs kept by a converter.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// What to do when a color is formatted into the other alpha family.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlphaPolicy {
    /// Refuse with [`ColorError::IncompatibleAlpha`].
    #[default]
    Strict,
    /// Opaque colors get `default_alpha`; colors with alpha lose it.
    Coerce {
        /// Alpha given to opaque colors formatted into alpha notations.
        default_alpha: f64,
    },
}

/// Every notation of a recognized input's family, rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Notation the input was written in.
    pub source: Notation,
    /// The decoded color.
    pub color: Color,
    /// One rendering per notation of the source's family, in precedence order.
    pub outputs: Vec<(Notation, String)>,
}

impl Conversion {
    /// The rendering for `notation`, if it belongs to this conversion.
    #[must_use]
    pub fn get(&self, notation: Notation) -> Option<&str> {
        self.outputs
            .iter()
            .find(|(candidate, _)| *candidate == notation)
            .map(|(_, text)| text.as_str())
    }
}

/// Recognizes and formats colors according to its configuration.
///
/// A `Converter` is `Send + Sync`; share one across threads freely.
pub struct Converter {
    alpha_policy: AlphaPolicy,
    cache: Option<Mutex<LruCache<String, (Notation, Color)>>>,
}

impl Converter {
    /// Create a converter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new converter builder.
    #[must_use]
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::default()
    }

    /// The configured alpha policy.
    #[must_use]
    pub const fn alpha_policy(&self) -> AlphaPolicy {
        self.alpha_policy
    }

    /// Number of inputs currently cached.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache
            .as_ref()
            .map_or(0, |cache| lock_recover(cache).len())
    }

    /// Recognize and decode `text` (cached).
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidFormat` if `text` matches no notation.
    pub fn identify(&self, text: &str) -> Result<(Notation, Color), ColorError> {
        let Some(cache) = &self.cache else {
            return parse::identify(text);
        };

        if let Some(hit) = lock_recover(cache).get(text) {
            return Ok(*hit);
        }

        log::debug!("color cache miss for {text:?}");
        let result = parse::identify(text)?;
        lock_recover(cache).put(text.to_string(), result);
        Ok(result)
    }

    /// Render `color` in `target`, applying the alpha policy.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::IncompatibleAlpha` under [`AlphaPolicy::Strict`]
    /// when the color and target belong to different alpha families.
    pub fn format(&self, color: &Color, target: Notation) -> Result<String, ColorError> {
        let color = match self.alpha_policy {
            AlphaPolicy::Strict => *color,
            AlphaPolicy::Coerce { default_alpha } => match (color.alpha, target.has_alpha()) {
                (None, true) => color.with_alpha(Alpha::new(default_alpha)),
                (Some(_), false) => color.without_alpha(),
                _ => *color,
            },
        };
        crate::format::format(&color, target)
    }

    /// Recognize `text` and render it in `target`.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidFormat` for unrecognized input and
    /// `ColorError::IncompatibleAlpha` as described in [`Converter::format`].
    pub fn convert(&self, text: &str, target: Notation) -> Result<String, ColorError> {
        let (_, color) = self.identify(text)?;
        self.format(&color, target)
    }

    /// Recognize `text` and render it in every notation of its family.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidFormat` for unrecognized input.
    pub fn convert_all(&self, text: &str) -> Result<Conversion, ColorError> {
        let (source, color) = self.identify(text)?;
        let outputs = Notation::family(source.has_alpha())
            .map(|notation| Ok((notation, self.format(&color, notation)?)))
            .collect::<Result<Vec<_>, ColorError>>()?;
        Ok(Conversion {
            source,
            color,
            outputs,
        })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("alpha_policy", &self.alpha_policy)
            .field(
                "cache_capacity",
                &self
                    .cache
                    .as_ref()
                    .map(|cache| lock_recover(cache).cap().get()),
            )
            .finish()
    }
}

/// Builder for creating a [`Converter`] with custom options.
#[derive(Debug, Clone, Default)]
pub struct ConverterBuilder {
    alpha_policy: Option<AlphaPolicy>,
    cache_capacity: Option<usize>,
}

impl ConverterBuilder {
    /// Set the alpha policy.
    #[must_use]
    pub fn alpha_policy(mut self, policy: AlphaPolicy) -> Self {
        self.alpha_policy = Some(policy);
        self
    }

    /// Set how many recognized inputs to cache. `0` disables the cache.
    #[must_use]
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = Some(capacity);
        self
    }

    /// Disable the recognition cache.
    #[must_use]
    pub fn no_cache(self) -> Self {
        self.cache_capacity(0)
    }

    /// Build the converter.
    #[must_use]
    pub fn build(self) -> Converter {
        let capacity = self.cache_capacity.unwrap_or(DEFAULT_CACHE_CAPACITY);
        Converter {
            alpha_policy: self.alpha_policy.unwrap_or_default(),
            cache: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }
}

static DEFAULT_CONVERTER: LazyLock<Converter> = LazyLock::new(Converter::new);

/// Recognize and decode `text` with the shared default converter.
///
/// # Errors
///
/// Returns `ColorError::InvalidFormat` if `text` matches no notation.
pub fn identify(text: &str) -> Result<(Notation, Color), ColorError> {
    DEFAULT_CONVERTER.identify(text)
}

/// Render `color` in `target` with the shared default converter.
///
/// # Errors
///
/// Returns `ColorError::IncompatibleAlpha` if the alpha families differ.
pub fn format(color: &Color, target: Notation) -> Result<String, ColorError> {
    DEFAULT_CONVERTER.format(color, target)
}

/// Recognize `text` and render it in `target` with the shared default
/// converter.
///
/// # Errors
///
/// See [`Converter::convert`].
pub fn convert(text: &str, target: Notation) -> Result<String, ColorError> {
    DEFAULT_CONVERTER.convert(text, target)
}

/// Recognize `text` and render its whole family with the shared default
/// converter.
///
/// # Errors
///
/// Returns `ColorError::InvalidFormat` for unrecognized input.
pub fn convert_all(text: &str) -> Result<Conversion, ColorError> {
    DEFAULT_CONVERTER.convert_all(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let converter = Converter::new();
        assert_eq!(converter.alpha_policy(), AlphaPolicy::Strict);
        assert_eq!(converter.cached_len(), 0);
    }

    #[test]
    fn test_identify_populates_cache() {
        let converter = Converter::builder().cache_capacity(2).build();
        converter.identify("#f60").unwrap();
        converter.identify("#f60").unwrap();
        assert_eq!(converter.cached_len(), 1);

        converter.identify("rgb(1, 2, 3)").unwrap();
        converter.identify("hsl(0, 0%, 0%)").unwrap();
        assert_eq!(converter.cached_len(), 2);
    }

    #[test]
    fn test_failures_are_not_cached() {
        let converter = Converter::new();
        assert!(converter.identify("not-a-color").is_err());
        assert_eq!(converter.cached_len(), 0);
    }

    #[test]
    fn test_cached_and_uncached_agree() {
        let cached = Converter::new();
        let uncached = Converter::builder().no_cache().build();
        for text in ["#0a141e80", "hsva(300, 50%, 50%, 0.75)", "cmyk(10, 20, 30, 40)"] {
            let first = cached.identify(text).unwrap();
            assert_eq!(cached.identify(text).unwrap(), first);
            assert_eq!(uncached.identify(text).unwrap(), first);
        }
        assert_eq!(uncached.cached_len(), 0);
    }

    #[test]
    fn test_strict_policy_rejects_crossing() {
        let converter = Converter::new();
        assert_eq!(
            converter.convert("rgb(1, 2, 3)", Notation::Rgba),
            Err(ColorError::IncompatibleAlpha {
                target: Notation::Rgba,
                has_alpha: false
            })
        );
    }

    #[test]
    fn test_coerce_policy() {
        let converter = Converter::builder()
            .alpha_policy(AlphaPolicy::Coerce { default_alpha: 0.5 })
            .build();
        assert_eq!(
            converter.convert("rgb(10, 20, 30)", Notation::Hexa).unwrap(),
            "#0a141e80"
        );
        assert_eq!(
            converter.convert("rgba(10, 20, 30, 0.1)", Notation::Hex).unwrap(),
            "#0a141e"
        );
        assert_eq!(
            converter.convert("rgba(10, 20, 30, 0.1)", Notation::Rgba).unwrap(),
            "rgba(10, 20, 30, 0.1)"
        );
    }

    #[test]
    fn test_convert_all_opaque_family() {
        let conversion = Converter::new().convert_all("#ff6600").unwrap();
        assert_eq!(conversion.source, Notation::Hex);
        assert_eq!(conversion.color, Color::rgb(255, 102, 0));
        let notations: Vec<_> = conversion.outputs.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            notations,
            vec![
                Notation::Rgb,
                Notation::Hex,
                Notation::Hsl,
                Notation::Hsv,
                Notation::Cmyk
            ]
        );
        assert_eq!(conversion.get(Notation::Hsl), Some("hsl(24, 100%, 50%)"));
        assert_eq!(conversion.get(Notation::Rgba), None);
    }

    #[test]
    fn test_convert_all_alpha_family() {
        let conversion = Converter::new().convert_all("#ff660080").unwrap();
        assert_eq!(conversion.source, Notation::Hexa);
        assert_eq!(conversion.get(Notation::Rgba), Some("rgba(255, 102, 0, 0.50)"));
        assert_eq!(conversion.get(Notation::Hexa), Some("#ff660080"));
        assert_eq!(conversion.get(Notation::Hsla), Some("hsla(24, 100%, 50%, 0.5)"));
        assert_eq!(conversion.get(Notation::Rgb), None);
    }

    #[test]
    fn test_debug_shows_configuration() {
        let converter = Converter::builder().cache_capacity(8).build();
        let debug = format!("{converter:?}");
        assert!(debug.contains("Strict"));
        assert!(debug.contains('8'));
    }

    #[test]
    fn test_shared_default_functions() {
        assert_eq!(identify("#000").unwrap().1, Color::rgb(0, 0, 0));
        assert_eq!(
            format(&Color::rgb(0, 0, 0), Notation::Cmyk).unwrap(),
            "cmyk(0%, 0%, 0%, 100%)"
        );
        assert_eq!(convert("#fff", Notation::Rgb).unwrap(), "rgb(255, 255, 255)");
        assert_eq!(convert_all("#fff").unwrap().outputs.len(), 5);
    }
}
