//! The [`Color`] value type and its numeric factories.

use std::fmt;
use std::sync::Arc;

use crate::decimal::{to_decimal, Decimal, DecimalError};
use crate::error::ColorError;
use crate::space::{self, ColorModel, ColorSpace};

/// A color: a color space, one coordinate per space coordinate name, and an
/// alpha value.
///
/// Colors are values. Operations such as [`blend`](Color::blend) or
/// [`to_oklab`](Color::to_oklab) return new colors; the `*_in_place`
/// variants replace the receiver's contents instead.
///
/// Equality is structural: same space name, same coordinates, same alpha.
///
/// ```
/// use chromakit_core::Color;
///
/// let red = Color::from_rgb(1, 0, 0).unwrap();
/// assert_eq!(red.to_string(), "srgb(1.0, 0.0, 0.0)");
///
/// let faded = red.with_alpha(0.5).unwrap();
/// assert_eq!(faded.to_string(), "srgb(1.0, 0.0, 0.0, 0.5)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    space: Arc<ColorSpace>,
    coordinates: Vec<Decimal>,
    alpha: Decimal,
}

impl Color {
    /// Bind coordinates and alpha to a space.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::CoordinateArityMismatch`] if the number of
    /// coordinates differs from the space's coordinate count.
    pub fn new(
        space: Arc<ColorSpace>,
        coordinates: Vec<Decimal>,
        alpha: Decimal,
    ) -> Result<Self, ColorError> {
        if coordinates.len() != space.arity() {
            return Err(ColorError::CoordinateArityMismatch {
                space: space.name().to_string(),
                expected: space.arity(),
                actual: coordinates.len(),
            });
        }
        Ok(Self {
            space,
            coordinates,
            alpha,
        })
    }

    /// Like [`Color::new`] with an alpha of 1.
    ///
    /// # Errors
    ///
    /// See [`Color::new`].
    pub fn opaque(space: Arc<ColorSpace>, coordinates: Vec<Decimal>) -> Result<Self, ColorError> {
        Self::new(space, coordinates, Decimal::one())
    }

    /// Like [`Color::new`], looking the space up by name.
    ///
    /// # Errors
    ///
    /// [`ColorError::UnknownColorSpace`] or
    /// [`ColorError::CoordinateArityMismatch`].
    pub fn in_space(
        space_name: &str,
        coordinates: Vec<Decimal>,
        alpha: Decimal,
    ) -> Result<Self, ColorError> {
        Self::new(ColorSpace::find(space_name)?, coordinates, alpha)
    }

    fn from_triple<T>(space_name: &str, coordinates: [T; 3]) -> Result<Self, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        let coordinates = coordinates
            .into_iter()
            .map(to_decimal)
            .collect::<Result<Vec<_>, _>>()?;
        Self::in_space(space_name, coordinates, Decimal::one())
    }

    /// An opaque sRGB color from gamma-encoded channels in `0..=1`.
    ///
    /// # Errors
    ///
    /// [`ColorError::Decimal`] if a channel is not a finite number.
    pub fn from_rgb<T>(red: T, green: T, blue: T) -> Result<Self, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        Self::from_triple(space::SRGB, [red, green, blue])
    }

    /// An opaque linear-light RGB color.
    ///
    /// # Errors
    ///
    /// [`ColorError::Decimal`] if a channel is not a finite number.
    pub fn from_lrgb<T>(red: T, green: T, blue: T) -> Result<Self, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        Self::from_triple(space::LRGB, [red, green, blue])
    }

    /// An opaque Oklab color.
    ///
    /// # Errors
    ///
    /// [`ColorError::Decimal`] if a coordinate is not a finite number.
    pub fn from_oklab<T>(lightness: T, a: T, b: T) -> Result<Self, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        Self::from_triple(space::OKLAB, [lightness, a, b])
    }

    /// An opaque Oklch color; `hue` in degrees.
    ///
    /// # Errors
    ///
    /// [`ColorError::Decimal`] if a coordinate is not a finite number.
    pub fn from_oklch<T>(lightness: T, chroma: T, hue: T) -> Result<Self, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        Self::from_triple(space::OKLCH, [lightness, chroma, hue])
    }

    /// An opaque HSL color; `hue` in degrees, saturation and lightness in
    /// `0..=1`.
    ///
    /// # Errors
    ///
    /// [`ColorError::Decimal`] if a coordinate is not a finite number.
    pub fn from_hsl<T>(hue: T, saturation: T, lightness: T) -> Result<Self, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        Self::from_triple(space::HSL, [hue, saturation, lightness])
    }

    /// An opaque HSV color. All three coordinates, hue included, are
    /// fractions in `0..=1`.
    ///
    /// # Errors
    ///
    /// [`ColorError::CoordinateOutOfRange`] if a coordinate is outside
    /// `0..=1`, [`ColorError::Decimal`] if it is not a finite number.
    pub fn from_hsv<T>(hue: T, saturation: T, value: T) -> Result<Self, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        let color = Self::from_triple(space::HSV, [hue, saturation, value])?;
        let (zero, one) = (Decimal::zero(), Decimal::one());
        for (name, coordinate) in color.space.coordinates().iter().zip(&color.coordinates) {
            if *coordinate < zero || *coordinate > one {
                return Err(ColorError::CoordinateOutOfRange {
                    coordinate: name.clone(),
                    value: coordinate.to_string(),
                    min: zero.to_string(),
                    max: one.to_string(),
                });
            }
        }
        Ok(color)
    }

    pub fn color_space(&self) -> &Arc<ColorSpace> {
        &self.space
    }

    pub fn color_model(&self) -> &ColorModel {
        self.space.color_model()
    }

    pub fn coordinates(&self) -> &[Decimal] {
        &self.coordinates
    }

    pub fn alpha(&self) -> &Decimal {
        &self.alpha
    }

    /// A coordinate by its name in this color's space.
    pub fn coordinate(&self, name: &str) -> Option<&Decimal> {
        self.space
            .coordinate_index(name)
            .map(|index| &self.coordinates[index])
    }

    /// The same color with another alpha.
    ///
    /// # Errors
    ///
    /// [`ColorError::Decimal`] if `alpha` is not a finite number.
    pub fn with_alpha<T>(&self, alpha: T) -> Result<Color, ColorError>
    where
        T: TryInto<Decimal>,
        DecimalError: From<T::Error>,
    {
        Ok(Color {
            space: Arc::clone(&self.space),
            coordinates: self.coordinates.clone(),
            alpha: to_decimal(alpha)?,
        })
    }

    /// Same coordinates and alpha, bound to another space of equal arity.
    pub(crate) fn rebind(self, space: Arc<ColorSpace>) -> Result<Color, ColorError> {
        Color::new(space, self.coordinates, self.alpha)
    }

    pub(crate) fn replace_with(&mut self, other: Color) -> &mut Self {
        *self = other;
        self
    }

    pub fn into_parts(self) -> (Arc<ColorSpace>, Vec<Decimal>, Decimal) {
        (self.space, self.coordinates, self.alpha)
    }
}

impl fmt::Display for Color {
    /// `space(c1, c2, c3[, alpha])`, numbers rounded to three places. Alpha
    /// is omitted when it is exactly 1.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.space.name())?;
        for (i, coordinate) in self.coordinates.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", coordinate.round(3))?;
        }
        if self.alpha != Decimal::one() {
            write!(f, ", {}", self.alpha.round(3))?;
        }
        f.write_str(")")
    }
}
