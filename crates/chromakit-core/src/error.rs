//! Unified error type for the chromakit-core public API.
//!
//! [`ColorError`] covers registry lookups, color construction and
//! conversion, and wraps [`DecimalError`] for `?` propagation out of
//! numeric code.

use thiserror::Error;

use crate::decimal::DecimalError;

/// Error type for color construction, lookup and conversion.
///
/// # Example
///
/// ```
/// use chromakit_core::{Color, ColorError};
///
/// fn parse_accent() -> Result<Color, ColorError> {
///     let accent = Color::from_hex("#ff8800")?;
///     accent.to_oklab()
/// }
/// assert!(parse_accent().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// No color space is registered under this name.
    #[error("unknown color space: {0}")]
    UnknownColorSpace(String),

    /// Coordinate count does not match the space's coordinate names.
    #[error("color space {space} expects {expected} coordinates, got {actual}")]
    CoordinateArityMismatch {
        space: String,
        expected: usize,
        actual: usize,
    },

    /// A converter was handed a color of the wrong model.
    #[error("cannot convert {color}: expected color model {expected}, got {actual}")]
    WrongSourceColorModel {
        color: String,
        expected: String,
        actual: String,
    },

    /// No converter is registered between the two color models.
    #[error("no converter found from {from} to {to}")]
    NoConverterFound { from: String, to: String },

    /// Hex notation could not be parsed.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// A coordinate is outside the range its color model allows.
    #[error("{coordinate} must be between {min} and {max}, got {value}")]
    CoordinateOutOfRange {
        coordinate: String,
        value: String,
        min: String,
        max: String,
    },

    /// A palette operation would produce more colors than can be stored.
    #[error("requested palette is too large: {0}")]
    PaletteTooLarge(String),

    #[error(transparent)]
    Decimal(#[from] DecimalError),
}
