//! sRGB ↔ HSV.
//!
//! All three HSV coordinates are fractions in `[0, 1]`; hue is a fraction of
//! a full turn rather than degrees.

use once_cell::sync::Lazy;

use super::{components, expect_model, output};
use crate::color::Color;
use crate::decimal::Decimal;
use crate::error::ColorError;
use crate::space::{ColorModel, HSV, SRGB};

static SIX: Lazy<Decimal> = Lazy::new(|| Decimal::from(6));
static ONE: Lazy<Decimal> = Lazy::new(Decimal::one);

/// Hue sector in `[0, 6)` of the dominant channel, shared with HSL.
pub(super) fn hue_sector(
    (r, g, b): (&Decimal, &Decimal, &Decimal),
    max: &Decimal,
    delta: &Decimal,
) -> Result<Decimal, ColorError> {
    let sector = if max == r {
        (g - b).checked_div(delta)?.checked_rem(&SIX)?
    } else if max == g {
        (b - r).checked_div(delta)? + 2
    } else {
        (r - g).checked_div(delta)? + 4
    };
    Ok(sector)
}

pub(crate) fn srgb_to_hsv(color: &Color) -> Result<Color, ColorError> {
    expect_model(color, &ColorModel::SRGB)?;
    let rgb @ (r, g, b) = components(color)?;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max.is_zero() {
        delta.zeroed()
    } else {
        delta.checked_div(max)?
    };
    let hue = if delta.is_zero() {
        delta.zeroed()
    } else {
        hue_sector(rgb, max, &delta)?.checked_div(&SIX)?.checked_rem(&ONE)?
    };
    output(HSV, [hue, saturation, max.clone()], color)
}

pub(crate) fn hsv_to_srgb(color: &Color) -> Result<Color, ColorError> {
    expect_model(color, &ColorModel::HSV)?;
    let (h, s, v) = components(color)?;

    let scaled = h.checked_rem(&ONE)? * 6;
    let sector = scaled.floor();
    let f = &scaled - &sector;

    let p = v * (1 - s);
    let q = v * (1 - s * &f);
    let t = v * (1 - s * (1 - &f));
    let v = v.clone();

    let rgb = match sector.to_i64() {
        Some(0) => [v, t, p],
        Some(1) => [q, v, p],
        Some(2) => [p, v, t],
        Some(3) => [p, q, v],
        Some(4) => [t, p, v],
        _ => [v, p, q],
    };
    output(SRGB, rgb, color)
}
