//! Palette-wide lightness remapping in Oklab.
//!
//! Every operation here converts each color to Oklab, rewrites only the `L`
//! coordinate (clamped to `[0, 1]`), and returns Oklab colors with `a`, `b`
//! and alpha untouched.

use super::Palette;
use crate::color::clamp_unit;
use crate::decimal::{to_decimal, Decimal, DecimalError};
use crate::error::ColorError;

impl Palette {
    /// Linearly map the palette's lightness range onto `[min, max]`.
    ///
    /// The darkest color lands on `min` and the lightest on `max`. When all
    /// colors share one lightness they all land on the midpoint of the
    /// target range.
    ///
    /// ```
    /// use chromakit_core::{Color, Palette};
    ///
    /// let grays = Palette::new(vec![
    ///     Color::from_oklab(0.4, 0.0, 0.0).unwrap(),
    ///     Color::from_oklab(0.6, 0.0, 0.0).unwrap(),
    /// ]);
    /// let stretched = grays.stretch_luminance(0.1, 0.9).unwrap();
    /// assert_eq!(stretched[0].to_string(), "oklab(0.1, 0.0, 0.0)");
    /// assert_eq!(stretched[1].to_string(), "oklab(0.9, 0.0, 0.0)");
    /// ```
    ///
    /// # Errors
    ///
    /// Conversion errors, or [`ColorError::Decimal`] for non-finite bounds.
    pub fn stretch_luminance<T>(&self, min: T, max: T) -> Result<Palette, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        let (min, max) = (to_decimal(min)?, to_decimal(max)?);
        let lightness = self
            .iter()
            .map(|color| color.lightness())
            .collect::<Result<Vec<_>, _>>()?;
        let (Some(low), Some(high)) = (lightness.iter().min(), lightness.iter().max()) else {
            return Ok(Palette::default());
        };

        let source_range = high - low;
        let target_range = &max - &min;
        if source_range.is_zero() {
            let midpoint = (&min + &max) / 2;
            return self.try_map(|color| color.map_lightness(|_| Ok(midpoint.clone())));
        }

        self.try_map(|color| {
            color.map_lightness(|l| {
                let position = (l - low).checked_div(&source_range)?;
                Ok(&min + position * &target_range)
            })
        })
    }

    /// Stretch lightness to cover the full `[0, 1]` range.
    ///
    /// # Errors
    ///
    /// See [`Palette::stretch_luminance`].
    pub fn normalize_luminance(&self) -> Result<Palette, ColorError> {
        self.stretch_luminance(0, 1)
    }

    /// Pull lightness toward (`factor < 1`) or away from (`factor > 1`)
    /// middle gray: `L' = 0.5 + (L - 0.5) * factor`.
    ///
    /// # Errors
    ///
    /// Conversion errors, or [`ColorError::Decimal`] for a non-finite factor.
    pub fn compress_luminance<T>(&self, factor: T) -> Result<Palette, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        let factor = to_decimal(factor)?;
        let half = Decimal::from_rational(1, 2)?;
        self.try_map(|color| color.map_lightness(|l| Ok(&half + (l - &half) * &factor)))
    }

    /// Apply `L' = L^gamma` to the clamped lightness. `gamma < 1` brightens
    /// midtones, `gamma > 1` darkens them; black and white stay fixed.
    ///
    /// # Errors
    ///
    /// Conversion errors, or [`ColorError::Decimal`] for a non-finite gamma.
    pub fn curve_luminance<T>(&self, gamma: T) -> Result<Palette, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        let gamma = to_decimal(gamma)?;
        self.try_map(|color| {
            color.map_lightness(|l| {
                let l = clamp_unit(l.clone());
                if l.is_zero() {
                    return Ok(l);
                }
                Ok(l.pow(&gamma)?)
            })
        })
    }
}
