// `color::color` and `palette::palette` mirror the public type names.
#![allow(clippy::module_inception)]

//! chromakit-core: color space conversion with decimal precision
//!
//! This library models colors as coordinates in a named color space, stored
//! as arbitrary-precision [`Decimal`]s, and converts between spaces through a
//! registry of model-to-model converters.
//!
//! # Quick Start
//!
//! ```
//! use chromakit_core::Color;
//!
//! let orange = Color::from_hex("#ff8800").unwrap();
//! let oklch = orange.to_oklch().unwrap();
//! assert_eq!(oklch.color_space().name(), "oklch");
//!
//! let lighter = orange.lighten(0.1).unwrap();
//! assert_eq!(lighter.to_srgb().unwrap().color_space().name(), "srgb");
//! ```
//!
//! # Building Colors by Space Name
//!
//! [`create_color`] and [`convert`] look spaces up by name, so user input
//! like `"oklab"` maps straight onto the registry:
//!
//! ```
//! use chromakit_core::{convert, create_color, Decimal};
//!
//! let coords = ["0.7", "0.1", "-0.05"].map(|s| s.parse::<Decimal>().unwrap());
//! let color = create_color("oklab", coords.to_vec(), Decimal::one()).unwrap();
//! let srgb = convert(&color, "rgb").unwrap();
//! assert_eq!(srgb.color_space().name(), "srgb");
//! ```
//!
//! # Color Spaces
//!
//! | Space   | Coordinates                | Notes                            |
//! |---------|----------------------------|----------------------------------|
//! | `srgb`  | red, green, blue           | gamma encoded, alias `rgb`       |
//! | `lrgb`  | red, green, blue           | linear light                     |
//! | `oklab` | lightness, a, b            | perceptual, used for lightening  |
//! | `oklch` | lightness, chroma, hue     | hue in degrees `[0, 360)`        |
//! | `hsv`   | hue, saturation, value     | hue as a fraction of a turn      |
//! | `hsl`   | hue, saturation, lightness | hue in degrees                   |
//! | `lab`   | lightness, a, b            | registered, no converters        |
//!
//! Every ordered pair among `srgb`, `lrgb`, `oklab`, `oklch`, `hsv` and
//! `hsl` has a converter. Further spaces and converters can be added at
//! runtime with [`register_color_space`], [`alias_color_space`] and
//! [`register_converter`].
//!
//! # Precision
//!
//! Arithmetic rounds to the precision of its left operand, and converters
//! always put the color's coordinates on the left, so a color parsed with
//! 10 significant digits converts with 10 significant digits. Hex input is
//! stored as exact fractions of 255 and only rounded when it meets an
//! inexact value. Square roots, fractional powers and trigonometry go
//! through `f64`; see [`decimal`] for details.
//!
//! # Palettes
//!
//! [`Palette`] collects colors and adds aggregate operations: averaging,
//! interpolation between neighbours, lightness normalization and sorting.
//! The [`gamut`] module checks and clips colors against RGB gamuts.

pub mod color;
pub mod convert;
pub mod decimal;
pub mod error;
pub mod gamut;
pub mod palette;
pub mod space;


use std::sync::Arc;

pub use color::Color;
pub use convert::{convert, Converter, ConverterRegistry};
pub use decimal::{Decimal, DecimalContext, DecimalError, DEFAULT_PRECISION};
pub use error::ColorError;
pub use gamut::RgbGamut;
pub use palette::Palette;
pub use space::{ColorModel, ColorSpace, ColorSpaceRegistry, WhitePoint};

/// Build a color in the space registered as `space`.
///
/// # Errors
///
/// [`ColorError::UnknownColorSpace`] for an unregistered name,
/// [`ColorError::CoordinateArityMismatch`] when `coordinates` does not match
/// the space.
pub fn create_color(space: &str, coordinates: Vec<Decimal>, alpha: Decimal) -> Result<Color, ColorError> {
    Color::in_space(space, coordinates, alpha)
}

/// Parse hex notation into an sRGB color; see [`Color::from_hex`].
///
/// # Errors
///
/// [`ColorError::InvalidHex`] when `hex` is not 3, 4, 6 or 8 hex digits.
pub fn from_hex(hex: &str) -> Result<Color, ColorError> {
    Color::from_hex(hex)
}

/// Register a color space in the global registry, replacing any space of
/// the same name.
///
/// ```
/// use chromakit_core::{register_color_space, ColorModel, ColorSpace, WhitePoint};
///
/// let space = ColorSpace::new("display-p3-linear", ["red", "green", "blue"], WhitePoint::D65, ColorModel::LRGB);
/// register_color_space(space);
/// assert!(ColorSpace::find("display-p3-linear").is_ok());
/// ```
pub fn register_color_space(space: ColorSpace) -> Arc<ColorSpace> {
    ColorSpaceRegistry::global().register(space)
}

/// Make `alias` resolve to the space registered as `existing`.
///
/// # Errors
///
/// [`ColorError::UnknownColorSpace`] if `existing` is not registered.
pub fn alias_color_space(existing: &str, alias: &str) -> Result<Arc<ColorSpace>, ColorError> {
    ColorSpaceRegistry::global().alias(existing, alias)
}

/// Register a converter between two color models in the global registry,
/// replacing any existing converter for the pair.
pub fn register_converter<C>(from: ColorModel, to: ColorModel, converter: C)
where
    C: Converter + 'static,
{
    ConverterRegistry::global().register(from, to, converter);
}
