//! Lightness adjustment in Oklab.

use super::Color;
use crate::decimal::{to_decimal, Decimal, DecimalError};
use crate::error::ColorError;

impl Color {
    /// Add `amount` to the Oklab lightness, clamped to `[0, 1]`. The result
    /// is an Oklab color with `a`, `b` and alpha unchanged.
    ///
    /// ```
    /// use chromakit_core::Color;
    ///
    /// let gray = Color::from_oklab(0.5, 0.0, 0.0).unwrap();
    /// assert_eq!(gray.lighten(0.2).unwrap().to_string(), "oklab(0.7, 0.0, 0.0)");
    /// assert_eq!(gray.lighten(0.8).unwrap().to_string(), "oklab(1.0, 0.0, 0.0)");
    /// ```
    ///
    /// # Errors
    ///
    /// Conversion errors, or [`ColorError::Decimal`] for a non-finite amount.
    pub fn lighten<T>(&self, amount: T) -> Result<Color, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        self.shift_lightness(&to_decimal(amount)?)
    }

    /// Subtract `amount` from the Oklab lightness; see [`Color::lighten`].
    ///
    /// # Errors
    ///
    /// See [`Color::lighten`].
    pub fn darken<T>(&self, amount: T) -> Result<Color, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        self.shift_lightness(&-to_decimal(amount)?)
    }

    pub fn lighten_in_place<T>(&mut self, amount: T) -> Result<&mut Self, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        let lighter = self.lighten(amount)?;
        Ok(self.replace_with(lighter))
    }

    pub fn darken_in_place<T>(&mut self, amount: T) -> Result<&mut Self, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        let darker = self.darken(amount)?;
        Ok(self.replace_with(darker))
    }

    fn shift_lightness(&self, delta: &Decimal) -> Result<Color, ColorError> {
        self.map_lightness(|lightness| Ok(lightness + delta))
    }

    /// Convert to Oklab and replace lightness with `f(lightness)` clamped to
    /// `[0, 1]`.
    pub(crate) fn map_lightness(
        &self,
        f: impl FnOnce(&Decimal) -> Result<Decimal, ColorError>,
    ) -> Result<Color, ColorError> {
        let oklab = self.to_oklab()?;
        let (space, mut coordinates, alpha) = oklab.into_parts();
        let lightness = f(&coordinates[0])?;
        coordinates[0] = clamp_unit(lightness);
        Color::new(space, coordinates, alpha)
    }
}

/// Clamp to `[0, 1]`, keeping the value's precision.
pub(crate) fn clamp_unit(value: Decimal) -> Decimal {
    if value.is_negative() {
        value.zeroed()
    } else if value > Decimal::one() {
        value.zeroed() + 1
    } else {
        value
    }
}
