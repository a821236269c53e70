//! sRGB ↔ HSL. Hue in degrees `[0, 360)`, saturation and lightness in
//! `[0, 1]`.

use once_cell::sync::Lazy;

use super::hsv::hue_sector;
use super::{components, expect_model, output};
use crate::color::Color;
use crate::decimal::Decimal;
use crate::error::ColorError;
use crate::space::{ColorModel, HSL, SRGB};

static SIXTY: Lazy<Decimal> = Lazy::new(|| Decimal::from(60));
static FULL_TURN: Lazy<Decimal> = Lazy::new(|| Decimal::from(360));

pub(crate) fn srgb_to_hsl(color: &Color) -> Result<Color, ColorError> {
    expect_model(color, &ColorModel::SRGB)?;
    let rgb @ (r, g, b) = components(color)?;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let lightness = (max + min).checked_div(&Decimal::from(2))?;

    if delta.is_zero() {
        return output(HSL, [delta.zeroed(), delta.zeroed(), lightness], color);
    }

    // Lightness of exactly 0 or 1 only happens outside the gamut
    let spread = 1 - (&lightness * 2 - 1).abs();
    let saturation = if spread.is_zero() {
        delta.zeroed()
    } else {
        delta.checked_div(&spread)?
    };
    let hue = (hue_sector(rgb, max, &delta)? * &*SIXTY).checked_rem(&FULL_TURN)?;
    output(HSL, [hue, saturation, lightness], color)
}

pub(crate) fn hsl_to_srgb(color: &Color) -> Result<Color, ColorError> {
    expect_model(color, &ColorModel::HSL)?;
    let (h, s, l) = components(color)?;

    let chroma = (1 - (l * 2 - 1).abs()) * s;
    let scaled = h.checked_rem(&FULL_TURN)?.checked_div(&SIXTY)?;
    let sector = scaled.floor();
    let x = &chroma * (1 - (scaled.checked_rem(&Decimal::from(2))? - 1).abs());
    let m = l - chroma.checked_div(&Decimal::from(2))?;
    let zero = chroma.zeroed();

    let [r, g, b] = match sector.to_i64() {
        Some(0) => [chroma, x, zero],
        Some(1) => [x, chroma, zero],
        Some(2) => [zero, chroma, x],
        Some(3) => [zero, x, chroma],
        Some(4) => [x, zero, chroma],
        _ => [chroma, zero, x],
    };
    output(SRGB, [r + &m, g + &m, b + &m], color)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(color: &Color, expected: [f64; 3]) {
        let got = [0, 1, 2].map(|i| color.coordinates()[i].to_f64());
        for (g, e) in got.iter().zip(expected) {
            assert!((g - e).abs() < 1e-12, "got {got:?}, expected {expected:?}");
        }
    }

    #[test]
    fn test_primaries_to_hsl() {
        assert_close(&srgb_to_hsl(&Color::from_rgb(1, 0, 0).unwrap()).unwrap(), [0.0, 1.0, 0.5]);
        assert_close(&srgb_to_hsl(&Color::from_rgb(0, 1, 0).unwrap()).unwrap(), [120.0, 1.0, 0.5]);
        assert_close(&srgb_to_hsl(&Color::from_rgb(0, 0, 1).unwrap()).unwrap(), [240.0, 1.0, 0.5]);
        assert_close(&srgb_to_hsl(&Color::from_rgb(1, 0, 1).unwrap()).unwrap(), [300.0, 1.0, 0.5]);
    }

    #[test]
    fn test_hsl_to_rgb() {
        assert_close(&hsl_to_srgb(&Color::from_hsl(120.0, 1.0, 0.5).unwrap()).unwrap(), [0.0, 1.0, 0.0]);
        assert_close(&hsl_to_srgb(&Color::from_hsl(240.0, 1.0, 0.25).unwrap()).unwrap(), [0.0, 0.0, 0.5]);
        assert_close(&hsl_to_srgb(&Color::from_hsl(0.0, 0.0, 0.75).unwrap()).unwrap(), [0.75, 0.75, 0.75]);
        // 360 wraps to red
        assert_close(&hsl_to_srgb(&Color::from_hsl(360.0, 1.0, 0.5).unwrap()).unwrap(), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_gray_has_no_saturation() {
        let hsl = srgb_to_hsl(&Color::from_rgb(0.4, 0.4, 0.4).unwrap()).unwrap();
        assert_close(&hsl, [0.0, 0.0, 0.4]);
    }

    #[test]
    fn test_out_of_gamut_lightness_has_no_saturation() {
        let bright = Color::from_rgb("1.5", "0.5", "0.5").unwrap();
        let hsl = srgb_to_hsl(&bright).unwrap();
        assert_close(&hsl, [0.0, 0.0, 1.0]);

        let dark = Color::from_rgb("-0.5", "0.5", "0.0").unwrap();
        assert!(srgb_to_hsl(&dark).unwrap().coordinates()[1].is_zero());
    }

    #[test]
    fn test_tiny_negative_hue_wraps_to_zero() {
        let almost_red = Color::from_rgb("1", "0", "0.000000000000000000000000000001").unwrap();
        let hsl = srgb_to_hsl(&almost_red).unwrap();
        let hue = &hsl.coordinates()[0];
        assert!(*hue < Decimal::from(360), "hue {hue}");
        assert!(hue.is_zero(), "hue {hue}");
    }

    #[test]
    fn test_round_trip() {
        for (r, g, b) in [(0.9, 0.3, 0.1), (0.2, 0.8, 0.6), (0.1, 0.2, 0.7)] {
            let original = Color::from_rgb(r, g, b).unwrap();
            let back = hsl_to_srgb(&srgb_to_hsl(&original).unwrap()).unwrap();
            assert_close(&back, [r, g, b]);
        }
    }

    #[test]
    fn test_alpha_is_preserved() {
        let color = Color::from_rgb(0.3, 0.6, 0.9).unwrap().with_alpha(0.25).unwrap();
        let converted = srgb_to_hsl(&color).unwrap();
        assert_eq!(converted.alpha(), color.alpha());
        assert_eq!(hsl_to_srgb(&converted).unwrap().alpha(), color.alpha());
    }
}
