//! Error type shared by the recognizer and the formatter.

use std::fmt;

use crate::notation::Notation;

/// Error type for color recognition and formatting.
///
/// Both variants are recoverable: the codec never panics on bad input, it
/// returns one of these for the caller to handle (typically by ignoring the
/// input and keeping whatever was displayed before).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input does not match the grammar of any notation (`expected` is
    /// `None`) or of the one notation it was checked against.
    InvalidFormat {
        /// The rejected input.
        input: String,
        /// The notation the input was checked against, if only one was tried.
        expected: Option<Notation>,
    },
    /// A color was asked to be rendered into a notation of the other alpha
    /// family while the converter does not allow crossing families.
    IncompatibleAlpha {
        /// The requested notation.
        target: Notation,
        /// Whether the color being formatted carries alpha.
        has_alpha: bool,
    },
}

impl ColorError {
    pub(crate) fn invalid_format(input: &str, expected: Option<Notation>) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            expected,
        }
    }

    /// Returns true for [`ColorError::InvalidFormat`].
    #[must_use]
    pub const fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat {
                input,
                expected: None,
            } => write!(f, "Unrecognized color: {input:?}"),
            Self::InvalidFormat {
                input,
                expected: Some(notation),
            } => write!(f, "Invalid {} color: {input:?}", notation.name().to_uppercase()),
            Self::IncompatibleAlpha {
                target,
                has_alpha: true,
            } => write!(f, "Cannot format a color with alpha as {target}"),
            Self::IncompatibleAlpha {
                target,
                has_alpha: false,
            } => write!(f, "Cannot format an opaque color as {target}"),
        }
    }
}

impl std::error::Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ColorError::invalid_format("not-a-color", None);
        assert_eq!(err.to_string(), "Unrecognized color: \"not-a-color\"");

        let err = ColorError::invalid_format("#12", Some(Notation::Hex));
        assert_eq!(err.to_string(), "Invalid HEX color: \"#12\"");

        let err = ColorError::IncompatibleAlpha {
            target: Notation::Rgb,
            has_alpha: true,
        };
        assert_eq!(err.to_string(), "Cannot format a color with alpha as rgb");

        let err = ColorError::IncompatibleAlpha {
            target: Notation::Hsla,
            has_alpha: false,
        };
        assert_eq!(err.to_string(), "Cannot format an opaque color as hsla");
    }

    #[test]
    fn test_is_invalid_format() {
        assert!(ColorError::invalid_format("x", None).is_invalid_format());
        assert!(
            !ColorError::IncompatibleAlpha {
                target: Notation::Hex,
                has_alpha: true
            }
            .is_invalid_format()
        );
    }
}
