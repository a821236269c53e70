//! Conversion methods and per-model accessors on [`Color`].

use std::sync::Arc;

use super::Color;
use crate::convert::ConverterRegistry;
use crate::decimal::Decimal;
use crate::error::ColorError;
use crate::space::{self, ColorSpace};

impl Color {
    /// Convert into `space` through the global converter registry.
    ///
    /// # Errors
    ///
    /// See [`ConverterRegistry::convert`].
    pub fn convert_to(&self, space: &Arc<ColorSpace>) -> Result<Color, ColorError> {
        ConverterRegistry::global().convert(self, space)
    }

    /// Convert into the space registered as `name`.
    ///
    /// # Errors
    ///
    /// [`ColorError::UnknownColorSpace`] for an unregistered name, otherwise
    /// see [`ConverterRegistry::convert`].
    pub fn to_color_space(&self, name: &str) -> Result<Color, ColorError> {
        self.convert_to(&ColorSpace::find(name)?)
    }

    /// Replace this color with its conversion into `name`.
    ///
    /// # Errors
    ///
    /// Same as [`Color::to_color_space`]; on error the color is unchanged.
    pub fn convert_in_place(&mut self, name: &str) -> Result<&mut Self, ColorError> {
        let converted = self.to_color_space(name)?;
        Ok(self.replace_with(converted))
    }

    /// # Errors
    ///
    /// See [`Color::to_color_space`].
    pub fn to_srgb(&self) -> Result<Color, ColorError> {
        self.to_color_space(space::SRGB)
    }

    /// Same as [`Color::to_srgb`].
    ///
    /// # Errors
    ///
    /// See [`Color::to_color_space`].
    pub fn to_rgb(&self) -> Result<Color, ColorError> {
        self.to_srgb()
    }

    /// # Errors
    ///
    /// See [`Color::to_color_space`].
    pub fn to_lrgb(&self) -> Result<Color, ColorError> {
        self.to_color_space(space::LRGB)
    }

    /// # Errors
    ///
    /// See [`Color::to_color_space`].
    pub fn to_oklab(&self) -> Result<Color, ColorError> {
        self.to_color_space(space::OKLAB)
    }

    /// # Errors
    ///
    /// See [`Color::to_color_space`].
    pub fn to_oklch(&self) -> Result<Color, ColorError> {
        self.to_color_space(space::OKLCH)
    }

    /// # Errors
    ///
    /// See [`Color::to_color_space`].
    pub fn to_hsv(&self) -> Result<Color, ColorError> {
        self.to_color_space(space::HSV)
    }

    /// # Errors
    ///
    /// See [`Color::to_color_space`].
    pub fn to_hsl(&self) -> Result<Color, ColorError> {
        self.to_color_space(space::HSL)
    }

    pub fn to_srgb_in_place(&mut self) -> Result<&mut Self, ColorError> {
        self.convert_in_place(space::SRGB)
    }

    pub fn to_lrgb_in_place(&mut self) -> Result<&mut Self, ColorError> {
        self.convert_in_place(space::LRGB)
    }

    pub fn to_oklab_in_place(&mut self) -> Result<&mut Self, ColorError> {
        self.convert_in_place(space::OKLAB)
    }

    pub fn to_oklch_in_place(&mut self) -> Result<&mut Self, ColorError> {
        self.convert_in_place(space::OKLCH)
    }

    fn coordinate_in(&self, space_name: &str, index: usize) -> Result<Decimal, ColorError> {
        let converted = self.to_color_space(space_name)?;
        let (_, mut coordinates, _) = converted.into_parts();
        Ok(coordinates.swap_remove(index))
    }

    /// sRGB red channel.
    pub fn red(&self) -> Result<Decimal, ColorError> {
        self.coordinate_in(space::SRGB, 0)
    }

    /// sRGB green channel.
    pub fn green(&self) -> Result<Decimal, ColorError> {
        self.coordinate_in(space::SRGB, 1)
    }

    /// sRGB blue channel.
    pub fn blue(&self) -> Result<Decimal, ColorError> {
        self.coordinate_in(space::SRGB, 2)
    }

    /// Linear red channel.
    pub fn lred(&self) -> Result<Decimal, ColorError> {
        self.coordinate_in(space::LRGB, 0)
    }

    /// Linear green channel.
    pub fn lgreen(&self) -> Result<Decimal, ColorError> {
        self.coordinate_in(space::LRGB, 1)
    }

    /// Linear blue channel.
    pub fn lblue(&self) -> Result<Decimal, ColorError> {
        self.coordinate_in(space::LRGB, 2)
    }

    /// Oklab lightness.
    pub fn lightness(&self) -> Result<Decimal, ColorError> {
        self.coordinate_in(space::OKLAB, 0)
    }

    /// Oklab green–red axis.
    pub fn a(&self) -> Result<Decimal, ColorError> {
        self.coordinate_in(space::OKLAB, 1)
    }

    /// Oklab blue–yellow axis.
    pub fn b(&self) -> Result<Decimal, ColorError> {
        self.coordinate_in(space::OKLAB, 2)
    }

    /// Oklch chroma.
    pub fn chroma(&self) -> Result<Decimal, ColorError> {
        self.coordinate_in(space::OKLCH, 1)
    }

    /// Oklch hue in degrees.
    pub fn hue(&self) -> Result<Decimal, ColorError> {
        self.coordinate_in(space::OKLCH, 2)
    }
}
