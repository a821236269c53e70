//! sRGB transfer function (IEC 61966-2-1).
//!
//! Both directions are sign-preserving: a negative channel is mapped through
//! the curve by magnitude and keeps its sign, so out-of-gamut intermediates
//! survive a round trip.

use once_cell::sync::Lazy;

use super::{components, expect_model, output};
use crate::color::Color;
use crate::decimal::Decimal;
use crate::error::ColorError;
use crate::space::{ColorModel, LRGB, SRGB};

/// Encoded values at or below this are on the linear segment.
static ENCODED_KNEE: Lazy<Decimal> = Lazy::new(|| Decimal::from_scaled(4045, 5));
/// Linear values at or below this are on the linear segment.
static LINEAR_KNEE: Lazy<Decimal> = Lazy::new(|| Decimal::from_scaled(31308, 7));
static SLOPE: Lazy<Decimal> = Lazy::new(|| Decimal::from_scaled(1292, 2));
static OFFSET: Lazy<Decimal> = Lazy::new(|| Decimal::from_scaled(55, 3));
static SCALE: Lazy<Decimal> = Lazy::new(|| Decimal::from_scaled(1055, 3));

fn sign_preserving(
    channel: &Decimal,
    curve: impl Fn(&Decimal) -> Result<Decimal, ColorError>,
) -> Result<Decimal, ColorError> {
    if channel.is_negative() {
        Ok(-curve(&channel.abs())?)
    } else {
        curve(channel)
    }
}

fn decode(channel: &Decimal) -> Result<Decimal, ColorError> {
    sign_preserving(channel, |c| {
        if *c <= *ENCODED_KNEE {
            Ok(c.checked_div(&SLOPE)?)
        } else {
            Ok((c + &*OFFSET).checked_div(&SCALE)?.pow_ratio(12, 5)?)
        }
    })
}

fn encode(channel: &Decimal) -> Result<Decimal, ColorError> {
    sign_preserving(channel, |c| {
        if *c <= *LINEAR_KNEE {
            Ok(c * &*SLOPE)
        } else {
            Ok(c.pow_ratio(5, 12)? * &*SCALE - &*OFFSET)
        }
    })
}

/// Gamma-encoded sRGB to linear RGB.
pub(crate) fn srgb_to_lrgb(color: &Color) -> Result<Color, ColorError> {
    expect_model(color, &ColorModel::SRGB)?;
    let (r, g, b) = components(color)?;
    output(LRGB, [decode(r)?, decode(g)?, decode(b)?], color)
}

/// Linear RGB to gamma-encoded sRGB.
pub(crate) fn lrgb_to_srgb(color: &Color) -> Result<Color, ColorError> {
    expect_model(color, &ColorModel::LRGB)?;
    let (r, g, b) = components(color)?;
    output(SRGB, [encode(r)?, encode(g)?, encode(b)?], color)
}
