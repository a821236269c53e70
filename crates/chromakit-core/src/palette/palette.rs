//! Ordered color collection with sorting and aggregate operations.

use std::ops::Index;
use std::slice::SliceIndex;

use crate::color::{blend_colors, Color};
use crate::decimal::{to_decimal, Decimal, DecimalError};
use crate::error::ColorError;
use crate::space::ColorSpace;

/// An ordered sequence of colors. Duplicates are allowed.
///
/// Operations that derive a new palette (`interpolate`, `sort_by_*`,
/// luminance adjustments) leave the receiver untouched; the `*_in_place`
/// variants and the mutators (`add`, `remove`, `clear`) change it.
///
/// # Example
///
/// ```
/// use chromakit_core::{Color, Palette};
///
/// let mut palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
/// palette.add(Color::from_rgb(1, 0, 0).unwrap());
/// assert_eq!(palette.len(), 3);
///
/// let average = palette.average().unwrap().unwrap();
/// assert_eq!(average.color_space().name(), "oklab");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Build a palette from hex strings.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidHex`] for the first string that does not parse.
    pub fn from_hex(hexes: &[&str]) -> Result<Self, ColorError> {
        hexes.iter().map(|hex| Color::from_hex(hex)).collect()
    }

    /// Append a color.
    pub fn add(&mut self, color: Color) -> &mut Self {
        self.colors.push(color);
        self
    }

    /// Remove every color equal to `color`.
    pub fn remove(&mut self, color: &Color) -> &mut Self {
        self.colors.retain(|c| c != color);
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.colors.clear();
        self
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    pub fn first(&self) -> Option<&Color> {
        self.colors.first()
    }

    pub fn last(&self) -> Option<&Color> {
        self.colors.last()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// A sub-palette, or `None` if the range is out of bounds.
    ///
    /// ```
    /// use chromakit_core::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000", "#888", "#fff"]).unwrap();
    /// assert_eq!(palette.slice(1..).unwrap().len(), 2);
    /// assert!(palette.slice(2..5).is_none());
    /// ```
    pub fn slice<R>(&self, range: R) -> Option<Palette>
    where
        R: SliceIndex<[Color], Output = [Color]>,
    {
        self.colors.get(range).map(|colors| Palette::new(colors.to_vec()))
    }

    pub fn map(&self, f: impl FnMut(&Color) -> Color) -> Palette {
        self.colors.iter().map(f).collect()
    }

    /// Like [`Palette::map`] for fallible color operations.
    ///
    /// # Errors
    ///
    /// The first error `f` returns.
    pub fn try_map(
        &self,
        f: impl FnMut(&Color) -> Result<Color, ColorError>,
    ) -> Result<Palette, ColorError> {
        self.colors.iter().map(f).collect()
    }

    pub fn into_vec(self) -> Vec<Color> {
        self.colors
    }

    fn sorted_by_key(
        &self,
        key: impl Fn(&Color) -> Result<Decimal, ColorError>,
    ) -> Result<Palette, ColorError> {
        let mut keyed = self
            .colors
            .iter()
            .map(|color| Ok((key(color)?, color.clone())))
            .collect::<Result<Vec<_>, ColorError>>()?;
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(keyed.into_iter().map(|(_, color)| color).collect())
    }

    /// Colors ordered by Oklab lightness, darkest first. The sort is stable.
    ///
    /// # Errors
    ///
    /// Conversion errors for any color.
    pub fn sort_by_lightness(&self) -> Result<Palette, ColorError> {
        self.sorted_by_key(Color::lightness)
    }

    /// Colors ordered by Oklch chroma, most neutral first. The sort is stable.
    ///
    /// # Errors
    ///
    /// Conversion errors for any color.
    pub fn sort_by_chroma(&self) -> Result<Palette, ColorError> {
        self.sorted_by_key(Color::chroma)
    }

    /// Fold [`Color::blend`] over the palette from left to right:
    /// `((c0 ⊕ c1) ⊕ c2) ⊕ …`. `None` for an empty palette.
    ///
    /// # Errors
    ///
    /// Conversion errors, or [`ColorError::Decimal`] for a non-finite amount.
    pub fn blend_all<T>(&self, amount: T) -> Result<Option<Color>, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        let amount = to_decimal(amount)?;
        let Some((first, rest)) = self.colors.split_first() else {
            return Ok(None);
        };
        let mut result = first.clone();
        for color in rest {
            result = blend_colors(&result, color, &amount)?;
        }
        Ok(Some(result))
    }

    /// Mean of the Oklab coordinates and alpha, as an Oklab color. `None` for
    /// an empty palette.
    ///
    /// # Errors
    ///
    /// Conversion errors for any color.
    pub fn average(&self) -> Result<Option<Color>, ColorError> {
        let Some((first, rest)) = self.colors.split_first() else {
            return Ok(None);
        };
        let (space, mut sums, mut alpha) = first.to_oklab()?.into_parts();
        for color in rest {
            let oklab = color.to_oklab()?;
            for (sum, coordinate) in sums.iter_mut().zip(oklab.coordinates()) {
                *sum = &*sum + coordinate;
            }
            alpha = alpha + oklab.alpha();
        }

        let count = Decimal::from(self.colors.len() as u64);
        let coordinates = sums
            .iter()
            .map(|sum| sum.checked_div(&count))
            .collect::<Result<Vec<_>, _>>()?;
        let alpha = alpha.checked_div(&count)?;
        Ok(Some(Color::new(space, coordinates, alpha)?))
    }

    /// Convert every color into the space registered as `space`.
    ///
    /// # Errors
    ///
    /// [`ColorError::UnknownColorSpace`] or a conversion error.
    pub fn to_color_space(&self, space: &str) -> Result<Palette, ColorError> {
        let space = ColorSpace::find(space)?;
        self.try_map(|color| color.convert_to(&space))
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.colors[index]
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Extend<Color> for Palette {
    fn extend<I: IntoIterator<Item = Color>>(&mut self, iter: I) {
        self.colors.extend(iter);
    }
}

impl IntoIterator for Palette {
    type Item = Color;
    type IntoIter = std::vec::IntoIter<Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color::from_rgb(r, g, b).unwrap()
    }

    fn primaries() -> Palette {
        Palette::new(vec![rgb(1.0, 0.0, 0.0), rgb(0.0, 1.0, 0.0), rgb(0.0, 0.0, 1.0)])
    }

    #[test]
    fn test_palette_basic_operations() {
        let mut palette = primaries();
        assert_eq!(palette.len(), 3);
        assert!(!palette.is_empty());
        assert_eq!(palette[0], rgb(1.0, 0.0, 0.0));
        assert_eq!(palette.first(), Some(&rgb(1.0, 0.0, 0.0)));
        assert_eq!(palette.last(), Some(&rgb(0.0, 0.0, 1.0)));
        assert_eq!(palette.get(3), None);

        palette.add(rgb(1.0, 0.0, 0.0)).add(rgb(0.5, 0.5, 0.5));
        assert_eq!(palette.len(), 5);
        palette.remove(&rgb(1.0, 0.0, 0.0));
        assert_eq!(palette.len(), 3);
        palette.clear();
        assert!(palette.is_empty());
    }

    #[test]
    fn test_slice_and_map() {
        let palette = primaries();
        let tail = palette.slice(1..).unwrap();
        assert_eq!(tail.colors(), &palette.colors()[1..]);
        assert!(palette.slice(..4).is_none());

        let faded = palette.map(|c| c.with_alpha(0.5).unwrap());
        assert!(faded.iter().all(|c| c.alpha() == &Decimal::parse("0.5").unwrap()));

        let lab = palette.to_color_space("oklab").unwrap();
        assert!(lab.iter().all(|c| c.color_space().name() == "oklab"));
    }

    #[test]
    fn test_from_hex_reports_bad_entry() {
        assert_eq!(
            Palette::from_hex(&["#000", "nope"]).unwrap_err(),
            ColorError::InvalidHex("nope".into())
        );
    }

    #[test]
    fn test_sort_by_lightness() {
        let palette = Palette::new(vec![rgb(1.0, 1.0, 1.0), rgb(0.0, 0.0, 0.0), rgb(0.5, 0.5, 0.5)]);
        let sorted = palette.sort_by_lightness().unwrap();
        assert_eq!(
            sorted.into_vec(),
            vec![rgb(0.0, 0.0, 0.0), rgb(0.5, 0.5, 0.5), rgb(1.0, 1.0, 1.0)]
        );
    }

    #[test]
    fn test_sort_by_chroma() {
        let palette = Palette::new(vec![rgb(1.0, 0.0, 0.0), rgb(0.5, 0.5, 0.5), rgb(0.6, 0.4, 0.4)]);
        let sorted = palette.sort_by_chroma().unwrap();
        assert_eq!(sorted[0], rgb(0.5, 0.5, 0.5));
        assert_eq!(sorted[2], rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_blend_all_folds_left() {
        let palette = primaries();
        let folded = palette.blend_all(0.5).unwrap().unwrap();
        // ((r ⊕ g) ⊕ b) = (0.25, 0.25, 0.5)
        assert_eq!(folded, rgb(0.25, 0.25, 0.5));
        assert_eq!(Palette::default().blend_all(0.5).unwrap(), None);
    }

    #[test]
    fn test_average() {
        let palette = Palette::new(vec![
            Color::from_oklab(0.2, 0.1, 0.0).unwrap(),
            Color::from_oklab(0.6, -0.1, 0.2).unwrap().with_alpha(0.5).unwrap(),
        ]);
        let average = palette.average().unwrap().unwrap();
        assert_eq!(average.to_string(), "oklab(0.4, 0.0, 0.1, 0.75)");
        assert_eq!(Palette::default().average().unwrap(), None);
    }

    #[test]
    fn test_iteration_and_collection() {
        let palette: Palette = primaries().into_iter().rev().collect();
        assert_eq!(palette[0], rgb(0.0, 0.0, 1.0));
        let mut count = 0;
        for _ in &palette {
            count += 1;
        }
        assert_eq!(count, 3);

        let mut extended = Palette::from(vec![rgb(0.0, 0.0, 0.0)]);
        extended.extend(primaries());
        assert_eq!(extended.len(), 4);
    }
}
