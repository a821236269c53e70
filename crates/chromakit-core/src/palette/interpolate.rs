//! Inserting intermediate colors between palette neighbours.

use super::Palette;
use crate::color::{blend_colors, Color};
use crate::decimal::Decimal;
use crate::error::ColorError;

impl Palette {
    /// Insert `count` evenly spaced blends between each consecutive pair.
    ///
    /// Blends happen in the space of the left color of each pair, at the
    /// exact fractions `i / (count + 1)`. A palette with fewer than two
    /// colors, or `count == 0`, comes back unchanged.
    ///
    /// ```
    /// use chromakit_core::{Color, Palette};
    ///
    /// let palette = Palette::new(vec![
    ///     Color::from_rgb(1, 0, 0).unwrap(),
    ///     Color::from_rgb(0, 0, 1).unwrap(),
    /// ]);
    /// let ramp = palette.interpolate(1).unwrap();
    /// assert_eq!(ramp.len(), 3);
    /// assert_eq!(ramp[1].to_string(), "srgb(0.5, 0.0, 0.5)");
    /// ```
    ///
    /// # Errors
    ///
    /// Conversion errors when a right-hand color cannot be brought into the
    /// left color's space, or [`ColorError::PaletteTooLarge`] when the result
    /// cannot be allocated.
    pub fn interpolate(&self, count: usize) -> Result<Palette, ColorError> {
        if count == 0 || self.len() < 2 {
            return Ok(self.clone());
        }

        let too_large =
            || ColorError::PaletteTooLarge(format!("{count} colors between each of {} pairs", self.len() - 1));
        let steps = i64::try_from(count)
            .ok()
            .and_then(|count| count.checked_add(1))
            .ok_or_else(too_large)?;
        let total = (self.len() - 1)
            .checked_mul(count)
            .and_then(|inserted| inserted.checked_add(self.len()))
            .ok_or_else(too_large)?;

        let mut colors = Vec::new();
        colors.try_reserve_exact(total).map_err(|_| too_large())?;
        let amounts = (1..steps)
            .map(|i| Decimal::from_rational(i, steps))
            .collect::<Result<Vec<_>, _>>()?;

        for pair in self.colors().windows(2) {
            let (start, end) = (&pair[0], &pair[1]);
            colors.push(start.clone());
            for amount in &amounts {
                colors.push(blend_colors(start, end, amount)?);
            }
        }
        colors.extend(self.last().cloned());

        tracing::trace!(from = self.len(), to = colors.len(), "interpolated palette");
        Ok(Palette::new(colors))
    }

    /// Replace the palette with [`Palette::interpolate`]'s result.
    ///
    /// # Errors
    ///
    /// See [`Palette::interpolate`]; on error the palette is unchanged.
    pub fn interpolate_in_place(&mut self, count: usize) -> Result<&mut Self, ColorError> {
        *self = self.interpolate(count)?;
        Ok(self)
    }

    /// `samples` colors spread evenly along the path through the palette.
    ///
    /// The first and last samples are the palette's endpoints. An empty
    /// palette or `samples == 0` yields an empty palette; a single color is
    /// repeated.
    ///
    /// # Errors
    ///
    /// Conversion errors while blending neighbours, or
    /// [`ColorError::PaletteTooLarge`] when `samples` cannot be indexed.
    pub fn resample(&self, samples: usize) -> Result<Palette, ColorError> {
        let Some(first) = self.first() else {
            return Ok(Palette::default());
        };
        if samples == 0 {
            return Ok(Palette::default());
        }
        if self.len() == 1 || samples == 1 {
            return Ok(std::iter::repeat(first.clone()).take(samples).collect());
        }

        let too_large = || ColorError::PaletteTooLarge(format!("{samples} samples"));
        let segments = i64::try_from(self.len() - 1).map_err(|_| too_large())?;
        let last_sample = i64::try_from(samples - 1).map_err(|_| too_large())?;
        if last_sample.checked_mul(segments).is_none() {
            return Err(too_large());
        }
        (0..=last_sample)
            .map(|i| {
                // Position along the path in segment units: i * segments / last_sample
                let scaled = i * segments;
                let segment = (scaled / last_sample).min(segments - 1);
                let offset = Decimal::from_rational(scaled - segment * last_sample, last_sample)?;
                let start: &Color = &self[segment as usize];
                let end: &Color = &self[segment as usize + 1];
                blend_colors(start, end, &offset)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color::from_rgb(r, g, b).unwrap()
    }

    fn red_blue() -> Palette {
        Palette::new(vec![rgb(1.0, 0.0, 0.0), rgb(0.0, 0.0, 1.0)])
    }

    #[test]
    fn test_interpolate_one_step() {
        let ramp = red_blue().interpolate(1).unwrap();
        assert_eq!(ramp.len(), 3);
        assert_eq!(ramp[0], rgb(1.0, 0.0, 0.0));
        assert_eq!(ramp[1], rgb(0.5, 0.0, 0.5));
        assert_eq!(ramp[2], rgb(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_interpolate_uses_exact_fractions() {
        // Hex channels are exact, so the blends stay exact too
        let ramp = Palette::from_hex(&["#ff0000", "#0000ff"]).unwrap().interpolate(2).unwrap();
        assert_eq!(ramp.len(), 4);
        let third = Decimal::from_rational(1, 3).unwrap();
        let two_thirds = Decimal::from_rational(2, 3).unwrap();
        assert_eq!(ramp[1].coordinates()[0], two_thirds);
        assert_eq!(ramp[1].coordinates()[2], third);
        assert_eq!(ramp[2].coordinates()[0], third);
        assert_eq!(ramp[2].coordinates()[2], two_thirds);
        assert_eq!(ramp[1].to_string(), "srgb(0.667, 0.0, 0.333)");
    }

    #[test]
    fn test_interpolate_across_several_pairs() {
        let palette = Palette::new(vec![rgb(0.0, 0.0, 0.0), rgb(1.0, 1.0, 1.0), rgb(1.0, 0.0, 0.0)]);
        let ramp = palette.interpolate(3).unwrap();
        assert_eq!(ramp.len(), 9);
        assert_eq!(ramp[4], rgb(1.0, 1.0, 1.0));
        assert_eq!(ramp[8], rgb(1.0, 0.0, 0.0));
        assert_eq!(ramp[2], rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_interpolate_degenerate_inputs() {
        let empty = Palette::default();
        assert_eq!(empty.interpolate(3).unwrap(), empty);

        let single = Palette::new(vec![rgb(0.2, 0.3, 0.4)]);
        assert_eq!(single.interpolate(3).unwrap(), single);

        assert_eq!(red_blue().interpolate(0).unwrap(), red_blue());
    }

    #[test]
    fn test_interpolate_alpha() {
        let palette = Palette::new(vec![
            rgb(1.0, 0.0, 0.0).with_alpha(0.2).unwrap(),
            rgb(0.0, 0.0, 1.0).with_alpha(0.6).unwrap(),
        ]);
        let ramp = palette.interpolate(1).unwrap();
        assert_eq!(ramp[1].alpha(), &Decimal::parse("0.4").unwrap());
    }

    #[test]
    fn test_oversized_requests_fail_cleanly() {
        assert!(matches!(
            red_blue().interpolate(usize::MAX),
            Err(ColorError::PaletteTooLarge(_))
        ));

        let mut palette = red_blue();
        assert!(palette.interpolate_in_place(usize::MAX).is_err());
        assert_eq!(palette, red_blue());

        assert!(matches!(
            red_blue().resample(usize::MAX),
            Err(ColorError::PaletteTooLarge(_))
        ));
    }

    #[test]
    fn test_interpolate_in_place() {
        let mut palette = red_blue();
        palette.interpolate_in_place(1).unwrap();
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn test_resample() {
        let samples = red_blue().resample(5).unwrap();
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], rgb(1.0, 0.0, 0.0));
        assert_eq!(samples[2], rgb(0.5, 0.0, 0.5));
        assert_eq!(samples[4], rgb(0.0, 0.0, 1.0));

        let three = Palette::new(vec![rgb(0.0, 0.0, 0.0), rgb(1.0, 1.0, 1.0), rgb(1.0, 0.0, 0.0)]);
        let picked = three.resample(3).unwrap();
        assert_eq!(picked, three);

        assert!(red_blue().resample(0).unwrap().is_empty());
        assert!(Palette::default().resample(4).unwrap().is_empty());
        let single = Palette::new(vec![rgb(0.1, 0.2, 0.3)]).resample(3).unwrap();
        assert_eq!(single.len(), 3);
        assert!(single.iter().all(|c| c == &rgb(0.1, 0.2, 0.3)));
    }
}
