//! Color model and white point identifiers.

use std::borrow::Cow;
use std::fmt;

/// Mathematical family a color space belongs to.
///
/// Converters are keyed by model pairs, so two spaces sharing a model (for
/// example `srgb` and its alias `rgb`) share every converter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorModel(Cow<'static, str>);

impl ColorModel {
    /// Gamma-encoded sRGB.
    pub const SRGB: ColorModel = ColorModel(Cow::Borrowed("srgb"));
    /// Linear-light RGB with sRGB primaries.
    pub const LRGB: ColorModel = ColorModel(Cow::Borrowed("lrgb"));
    pub const HSL: ColorModel = ColorModel(Cow::Borrowed("hsl"));
    pub const HSV: ColorModel = ColorModel(Cow::Borrowed("hsv"));
    /// CIE L*a*b*. Registered as a space, no converters ship for it.
    pub const LAB: ColorModel = ColorModel(Cow::Borrowed("lab"));
    pub const OKLAB: ColorModel = ColorModel(Cow::Borrowed("oklab"));
    pub const OKLCH: ColorModel = ColorModel(Cow::Borrowed("oklch"));

    /// A custom model identifier.
    pub fn new(name: impl Into<String>) -> Self {
        ColorModel(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// CIE standard illuminant used as the reference white.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WhitePoint {
    D50,
    D55,
    #[default]
    D65,
    D75,
}

impl fmt::Display for WhitePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WhitePoint::D50 => "D50",
            WhitePoint::D55 => "D55",
            WhitePoint::D65 => "D65",
            WhitePoint::D75 => "D75",
        };
        f.write_str(name)
    }
}
