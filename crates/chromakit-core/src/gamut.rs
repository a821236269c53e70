//! RGB gamut checks and clipping.
//!
//! A gamut here is the unit cube of an RGB space: a color is inside when its
//! coordinates in that space all lie in `[0, 1]`. Clipping converts into the
//! space and clamps each channel; it does not try to preserve hue.

use crate::color::{clamp_unit, Color};
use crate::decimal::Decimal;
use crate::error::ColorError;
use crate::space::{self, ColorSpace};

/// The displayable range of an RGB color space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbGamut {
    space: &'static str,
}

/// Gamma-encoded sRGB.
pub const SRGB: RgbGamut = RgbGamut::new(space::SRGB);

/// Linear-light sRGB primaries.
pub const LINEAR_RGB: RgbGamut = RgbGamut::new(space::LRGB);

impl RgbGamut {
    /// A gamut bounded by the unit cube of the space registered as `space`.
    pub const fn new(space: &'static str) -> Self {
        Self { space }
    }

    pub fn space_name(&self) -> &'static str {
        self.space
    }

    /// Whether every channel of `color`, expressed in this gamut's space,
    /// lies in `[0, 1]`.
    ///
    /// ```
    /// use chromakit_core::{gamut, Color};
    ///
    /// assert!(gamut::SRGB.contains(&Color::from_hex("#ff8800").unwrap()).unwrap());
    /// let too_bright = Color::from_rgb("1.2", "0.5", "0.0").unwrap();
    /// assert!(!gamut::SRGB.contains(&too_bright).unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// Conversion errors for `color`.
    pub fn contains(&self, color: &Color) -> Result<bool, ColorError> {
        Ok(self.out_of_range(color)?.is_none())
    }

    /// Like [`RgbGamut::contains`], but names the first offending channel.
    ///
    /// # Errors
    ///
    /// [`ColorError::CoordinateOutOfRange`] for the first channel outside
    /// `[0, 1]`, or a conversion error.
    pub fn check(&self, color: &Color) -> Result<(), ColorError> {
        match self.out_of_range(color)? {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Convert into this gamut's space and clamp each channel to `[0, 1]`.
    /// Alpha is kept.
    ///
    /// # Errors
    ///
    /// Conversion errors for `color`.
    pub fn clamp(&self, color: &Color) -> Result<Color, ColorError> {
        let converted = color.convert_to(&ColorSpace::find(self.space)?)?;
        let (space, coordinates, alpha) = converted.into_parts();
        let clamped = coordinates.into_iter().map(clamp_unit).collect();
        Color::new(space, clamped, alpha)
    }

    fn out_of_range(&self, color: &Color) -> Result<Option<ColorError>, ColorError> {
        let space = ColorSpace::find(self.space)?;
        let converted = color.convert_to(&space)?;
        let offending = space
            .coordinates()
            .iter()
            .zip(converted.coordinates())
            .find(|(_, value)| value.is_negative() || **value > Decimal::one());

        Ok(offending.map(|(name, value)| {
            tracing::trace!(space = self.space, coordinate = %name, %value, "outside gamut");
            ColorError::CoordinateOutOfRange {
                coordinate: name.clone(),
                value: value.to_string(),
                min: "0".to_string(),
                max: "1".to_string(),
            }
        }))
    }
}
