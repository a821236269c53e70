//! Linear blending between two colors.

use std::sync::Arc;

use super::Color;
use crate::decimal::{to_decimal, Decimal, DecimalError};
use crate::error::ColorError;
use crate::space::ColorSpace;

impl Color {
    /// Blend toward `other` by `amount`, in this color's space.
    ///
    /// Each coordinate becomes `self * (1 - amount) + other * amount` and
    /// alpha moves the same way. `other` is converted into this color's space
    /// first. `amount` is not clamped, so values outside `0..=1` extrapolate.
    /// An amount of exactly 0 or 1 returns that endpoint untouched, so exact
    /// coordinates are not rounded.
    ///
    /// ```
    /// use chromakit_core::Color;
    ///
    /// let black = Color::from_rgb(0, 0, 0).unwrap();
    /// let white = Color::from_rgb(1, 1, 1).unwrap();
    /// let gray = black.blend(&white, 0.5).unwrap();
    /// assert_eq!(gray.to_string(), "srgb(0.5, 0.5, 0.5)");
    /// ```
    ///
    /// # Errors
    ///
    /// Conversion errors for `other`, or [`ColorError::Decimal`] for a
    /// non-finite `amount`.
    pub fn blend<T>(&self, other: &Color, amount: T) -> Result<Color, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        blend_colors(self, other, &to_decimal(amount)?)
    }

    /// Blend in the space registered as `space`. Both colors are converted
    /// there first and the result stays in that space.
    ///
    /// # Errors
    ///
    /// Conversion errors for either color, [`ColorError::UnknownColorSpace`]
    /// for an unregistered space name.
    pub fn blend_in_space<T>(&self, other: &Color, amount: T, space: &str) -> Result<Color, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        let space = ColorSpace::find(space)?;
        let start = self.convert_to(&space)?;
        blend_colors(&start, other, &to_decimal(amount)?)
    }

    /// Same as [`Color::blend`].
    ///
    /// # Errors
    ///
    /// See [`Color::blend`].
    pub fn mix<T>(&self, other: &Color, amount: T) -> Result<Color, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        self.blend(other, amount)
    }

    /// Replace this color with its blend toward `other`.
    ///
    /// # Errors
    ///
    /// See [`Color::blend`]; on error the color is unchanged.
    pub fn blend_in_place<T>(&mut self, other: &Color, amount: T) -> Result<&mut Self, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        let blended = self.blend(other, amount)?;
        Ok(self.replace_with(blended))
    }
}

/// Blend `start` toward `end` by `amount`, in `start`'s space.
pub(crate) fn blend_colors(start: &Color, end: &Color, amount: &Decimal) -> Result<Color, ColorError> {
    let space: &Arc<ColorSpace> = start.color_space();
    let end = end.convert_to(space)?;
    if amount.is_zero() {
        return Ok(start.clone());
    }
    if *amount == Decimal::one() {
        return Ok(end);
    }

    let coordinates = start
        .coordinates()
        .iter()
        .zip(end.coordinates())
        .map(|(c1, c2)| c1 * (1 - amount) + c2 * amount)
        .collect();
    let alpha = start.alpha() + (end.alpha() - start.alpha()) * amount;

    Color::new(Arc::clone(space), coordinates, alpha)
}
