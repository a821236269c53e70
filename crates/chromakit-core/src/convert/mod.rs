//! Converter graph between color models.
//!
//! Each registered [`Converter`] maps colors of one [`ColorModel`] to another.
//! [`ConverterRegistry::convert`] looks up the direct edge between the source
//! color's model and the target space's model; there is no multi-hop search,
//! so every supported path is registered explicitly (composite paths chain
//! the primitives below).
//!
//! | Primitive        | Module        |
//! |------------------|---------------|
//! | sRGB ↔ linear    | `gamma`       |
//! | linear ↔ Oklab   | `oklab`       |
//! | Oklab ↔ Oklch    | `oklch`       |
//! | sRGB ↔ HSV       | `hsv`         |
//! | sRGB ↔ HSL       | `hsl`         |
//!
//! Every converter keeps alpha untouched and performs its arithmetic with the
//! color's coordinates as left operands, so results carry the input
//! precision.

mod composite;
mod gamma;
mod hsl;
mod hsv;
mod oklab;
mod oklch;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::color::Color;
use crate::decimal::Decimal;
use crate::error::ColorError;
use crate::space::{ColorModel, ColorSpace};

static GLOBAL: Lazy<ConverterRegistry> = Lazy::new(ConverterRegistry::with_standard_converters);

/// A conversion from one color model to another.
///
/// Implemented for any `Fn(&Color) -> Result<Color, ColorError>`, so plain
/// functions and closures register directly.
pub trait Converter: Send + Sync {
    fn convert(&self, color: &Color) -> Result<Color, ColorError>;
}

impl<F> Converter for F
where
    F: Fn(&Color) -> Result<Color, ColorError> + Send + Sync,
{
    fn convert(&self, color: &Color) -> Result<Color, ColorError> {
        self(color)
    }
}

type ModelPair = (ColorModel, ColorModel);

/// Registry of converters keyed by `(from, to)` model pairs.
#[derive(Default)]
pub struct ConverterRegistry {
    converters: RwLock<HashMap<ModelPair, Arc<dyn Converter>>>,
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("pairs", &self.pairs())
            .finish()
    }
}

impl ConverterRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in converter.
    pub fn with_standard_converters() -> Self {
        let registry = Self::new();
        let m = |from: &ColorModel, to: &ColorModel| (from.clone(), to.clone());
        let standard: [(ModelPair, Arc<dyn Converter>); 30] = [
            (m(&ColorModel::SRGB, &ColorModel::LRGB), Arc::new(gamma::srgb_to_lrgb)),
            (m(&ColorModel::LRGB, &ColorModel::SRGB), Arc::new(gamma::lrgb_to_srgb)),
            (m(&ColorModel::LRGB, &ColorModel::OKLAB), Arc::new(oklab::lrgb_to_oklab)),
            (m(&ColorModel::OKLAB, &ColorModel::LRGB), Arc::new(oklab::oklab_to_lrgb)),
            (m(&ColorModel::OKLAB, &ColorModel::OKLCH), Arc::new(oklch::oklab_to_oklch)),
            (m(&ColorModel::OKLCH, &ColorModel::OKLAB), Arc::new(oklch::oklch_to_oklab)),
            (m(&ColorModel::SRGB, &ColorModel::HSV), Arc::new(hsv::srgb_to_hsv)),
            (m(&ColorModel::HSV, &ColorModel::SRGB), Arc::new(hsv::hsv_to_srgb)),
            (m(&ColorModel::SRGB, &ColorModel::HSL), Arc::new(hsl::srgb_to_hsl)),
            (m(&ColorModel::HSL, &ColorModel::SRGB), Arc::new(hsl::hsl_to_srgb)),
            (m(&ColorModel::SRGB, &ColorModel::OKLAB), Arc::new(composite::srgb_to_oklab)),
            (m(&ColorModel::OKLAB, &ColorModel::SRGB), Arc::new(composite::oklab_to_srgb)),
            (m(&ColorModel::SRGB, &ColorModel::OKLCH), Arc::new(composite::srgb_to_oklch)),
            (m(&ColorModel::OKLCH, &ColorModel::SRGB), Arc::new(composite::oklch_to_srgb)),
            (m(&ColorModel::LRGB, &ColorModel::OKLCH), Arc::new(composite::lrgb_to_oklch)),
            (m(&ColorModel::OKLCH, &ColorModel::LRGB), Arc::new(composite::oklch_to_lrgb)),
            (m(&ColorModel::HSV, &ColorModel::OKLAB), Arc::new(composite::hsv_to_oklab)),
            (m(&ColorModel::HSV, &ColorModel::OKLCH), Arc::new(composite::hsv_to_oklch)),
            (m(&ColorModel::HSL, &ColorModel::OKLAB), Arc::new(composite::hsl_to_oklab)),
            (m(&ColorModel::HSL, &ColorModel::OKLCH), Arc::new(composite::hsl_to_oklch)),
            (m(&ColorModel::HSV, &ColorModel::HSL), Arc::new(composite::hsv_to_hsl)),
            (m(&ColorModel::HSL, &ColorModel::HSV), Arc::new(composite::hsl_to_hsv)),
            (m(&ColorModel::HSV, &ColorModel::LRGB), Arc::new(composite::hsv_to_lrgb)),
            (m(&ColorModel::HSL, &ColorModel::LRGB), Arc::new(composite::hsl_to_lrgb)),
            (m(&ColorModel::OKLAB, &ColorModel::HSV), Arc::new(composite::oklab_to_hsv)),
            (m(&ColorModel::OKLAB, &ColorModel::HSL), Arc::new(composite::oklab_to_hsl)),
            (m(&ColorModel::OKLCH, &ColorModel::HSV), Arc::new(composite::oklch_to_hsv)),
            (m(&ColorModel::OKLCH, &ColorModel::HSL), Arc::new(composite::oklch_to_hsl)),
            (m(&ColorModel::LRGB, &ColorModel::HSV), Arc::new(composite::lrgb_to_hsv)),
            (m(&ColorModel::LRGB, &ColorModel::HSL), Arc::new(composite::lrgb_to_hsl)),
        ];
        {
            let mut converters = registry
                .converters
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            converters.extend(standard);
        }
        registry
    }

    /// The process-wide registry, populated with the built-in converters on
    /// first use.
    pub fn global() -> &'static ConverterRegistry {
        &GLOBAL
    }

    /// Register a converter, replacing any previous one for the same pair.
    pub fn register<C>(&self, from: ColorModel, to: ColorModel, converter: C)
    where
        C: Converter + 'static,
    {
        tracing::debug!(from = %from, to = %to, "Registered converter");
        self.converters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((from, to), Arc::new(converter));
    }

    /// The converter for a model pair, if any.
    pub fn find(&self, from: &ColorModel, to: &ColorModel) -> Option<Arc<dyn Converter>> {
        self.converters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(from.clone(), to.clone()))
            .cloned()
    }

    /// Every registered `(from, to)` pair, sorted.
    pub fn pairs(&self) -> Vec<ModelPair> {
        let mut pairs: Vec<ModelPair> = self
            .converters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        pairs.sort();
        pairs
    }

    /// Convert `color` into `target`.
    ///
    /// A color already in `target` is returned as an equal copy. A color of
    /// the same model is re-bound to `target` without arithmetic. Otherwise
    /// the direct converter for the model pair runs; if it lands in another
    /// space of the target's model, the result is re-bound to `target`.
    ///
    /// # Errors
    ///
    /// [`ColorError::NoConverterFound`] if no converter joins the two
    /// models, or whatever the converter itself reports.
    pub fn convert(&self, color: &Color, target: &Arc<ColorSpace>) -> Result<Color, ColorError> {
        if color.color_space() == target {
            return Ok(color.clone());
        }
        let from = color.color_model();
        let to = target.color_model();
        if from == to {
            return color.clone().rebind(Arc::clone(target));
        }

        let converter = self
            .find(from, to)
            .ok_or_else(|| ColorError::NoConverterFound {
                from: from.to_string(),
                to: to.to_string(),
            })?;
        tracing::trace!(from = %color.color_space(), to = %target, "Converting color");

        let converted = converter.convert(color)?;
        if converted.color_space() != target && converted.color_model() == to {
            return converted.rebind(Arc::clone(target));
        }
        Ok(converted)
    }
}

/// Convert `color` into the space registered as `target`, using the global
/// converter registry.
///
/// ```
/// use chromakit_core::{convert, Color};
///
/// let red = Color::from_rgb(1, 0, 0).unwrap();
/// let oklch = convert(&red, "oklch").unwrap();
/// assert_eq!(oklch.color_space().name(), "oklch");
/// ```
///
/// # Errors
///
/// [`ColorError::UnknownColorSpace`] for an unregistered target, otherwise
/// see [`ConverterRegistry::convert`].
pub fn convert(color: &Color, target: &str) -> Result<Color, ColorError> {
    let target = ColorSpace::find(target)?;
    ConverterRegistry::global().convert(color, &target)
}

/// Fail with [`ColorError::WrongSourceColorModel`] unless `color` belongs to
/// `expected`.
pub(crate) fn expect_model(color: &Color, expected: &ColorModel) -> Result<(), ColorError> {
    if color.color_model() != expected {
        return Err(ColorError::WrongSourceColorModel {
            color: color.to_string(),
            expected: expected.to_string(),
            actual: color.color_model().to_string(),
        });
    }
    Ok(())
}

/// The three coordinates of a color from a three-coordinate model.
pub(crate) fn components(color: &Color) -> Result<(&Decimal, &Decimal, &Decimal), ColorError> {
    match color.coordinates() {
        [x, y, z] => Ok((x, y, z)),
        other => Err(ColorError::CoordinateArityMismatch {
            space: color.color_space().name().to_string(),
            expected: 3,
            actual: other.len(),
        }),
    }
}

/// A color in the named standard space carrying `source`'s alpha.
pub(crate) fn output(
    space_name: &str,
    coordinates: [Decimal; 3],
    source: &Color,
) -> Result<Color, ColorError> {
    Color::in_space(space_name, coordinates.into(), source.alpha().clone())
}
