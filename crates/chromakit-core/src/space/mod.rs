//! Color space descriptors and the process-wide registry.
//!
//! A [`ColorSpace`] names a coordinate layout, a reference white and the
//! [`ColorModel`] that decides which converters apply to it. Spaces are looked
//! up by name through [`ColorSpaceRegistry`]; several names may resolve to one
//! descriptor (`rgb` is an alias of `srgb`).
//!
//! | Name    | Coordinates                   | Model   |
//! |---------|-------------------------------|---------|
//! | `srgb`  | red, green, blue              | `srgb`  |
//! | `lrgb`  | red, green, blue              | `lrgb`  |
//! | `hsl`   | hue, saturation, lightness    | `hsl`   |
//! | `hsv`   | hue, saturation, value        | `hsv`   |
//! | `lab`   | lightness, a, b               | `lab`   |
//! | `oklab` | lightness, a, b               | `oklab` |
//! | `oklch` | lightness, chroma, hue        | `oklch` |
//!
//! All standard spaces use the D65 white point.

mod model;
mod registry;

pub use model::{ColorModel, WhitePoint};
pub use registry::ColorSpaceRegistry;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::ColorError;

pub const SRGB: &str = "srgb";
pub const RGB: &str = "rgb";
pub const LRGB: &str = "lrgb";
pub const HSL: &str = "hsl";
pub const HSV: &str = "hsv";
pub const LAB: &str = "lab";
pub const OKLAB: &str = "oklab";
pub const OKLCH: &str = "oklch";
pub const OK_LCH: &str = "ok-lch";

/// A named color space.
///
/// Two descriptors are equal when their names are equal; the registry
/// guarantees names are unique.
#[derive(Debug, Clone)]
pub struct ColorSpace {
    name: String,
    coordinates: Vec<String>,
    white_point: WhitePoint,
    color_model: ColorModel,
}

impl ColorSpace {
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        coordinates: impl IntoIterator<Item = S>,
        white_point: WhitePoint,
        color_model: ColorModel,
    ) -> Self {
        Self {
            name: name.into(),
            coordinates: coordinates.into_iter().map(Into::into).collect(),
            white_point,
            color_model,
        }
    }

    /// Look a space up in the global registry.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnknownColorSpace`] if nothing is registered
    /// under `name`.
    pub fn find(name: &str) -> Result<Arc<ColorSpace>, ColorError> {
        ColorSpaceRegistry::global().find(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Coordinate names, in storage order.
    pub fn coordinates(&self) -> &[String] {
        &self.coordinates
    }

    /// Number of coordinates a color in this space carries.
    pub fn arity(&self) -> usize {
        self.coordinates.len()
    }

    /// Position of a named coordinate.
    pub fn coordinate_index(&self, coordinate: &str) -> Option<usize> {
        self.coordinates.iter().position(|c| c == coordinate)
    }

    pub fn white_point(&self) -> WhitePoint {
        self.white_point
    }

    pub fn color_model(&self) -> &ColorModel {
        &self.color_model
    }
}

impl PartialEq for ColorSpace {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ColorSpace {}

impl Hash for ColorSpace {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Descriptors for the built-in spaces, in registration order.
pub(crate) fn standard_spaces() -> Vec<ColorSpace> {
    let rgb = ["red", "green", "blue"];
    vec![
        ColorSpace::new(SRGB, rgb, WhitePoint::D65, ColorModel::SRGB),
        ColorSpace::new(LRGB, rgb, WhitePoint::D65, ColorModel::LRGB),
        ColorSpace::new(
            HSL,
            ["hue", "saturation", "lightness"],
            WhitePoint::D65,
            ColorModel::HSL,
        ),
        ColorSpace::new(
            HSV,
            ["hue", "saturation", "value"],
            WhitePoint::D65,
            ColorModel::HSV,
        ),
        ColorSpace::new(LAB, ["lightness", "a", "b"], WhitePoint::D65, ColorModel::LAB),
        ColorSpace::new(OKLAB, ["lightness", "a", "b"], WhitePoint::D65, ColorModel::OKLAB),
        ColorSpace::new(
            OKLCH,
            ["lightness", "chroma", "hue"],
            WhitePoint::D65,
            ColorModel::OKLCH,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_name_only() {
        let a = ColorSpace::new("scratch", ["x"], WhitePoint::D50, ColorModel::LRGB);
        let b = ColorSpace::new("scratch", ["x", "y"], WhitePoint::D65, ColorModel::SRGB);
        let c = ColorSpace::new("other", ["x"], WhitePoint::D50, ColorModel::LRGB);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_standard_space_layouts() {
        let oklch = ColorSpace::find(OKLCH).unwrap();
        assert_eq!(oklch.coordinates(), ["lightness", "chroma", "hue"]);
        assert_eq!(oklch.arity(), 3);
        assert_eq!(oklch.coordinate_index("hue"), Some(2));
        assert_eq!(oklch.white_point(), WhitePoint::D65);
        assert_eq!(oklch.color_model(), &ColorModel::OKLCH);

        let hsv = ColorSpace::find(HSV).unwrap();
        assert_eq!(hsv.coordinates(), ["hue", "saturation", "value"]);
    }

    #[test]
    fn test_every_standard_space_is_d65() {
        for space in standard_spaces() {
            assert_eq!(space.white_point(), WhitePoint::D65, "{}", space.name());
        }
    }
}
