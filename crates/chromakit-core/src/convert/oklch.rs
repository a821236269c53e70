//! Oklab ↔ Oklch (polar form, hue in degrees).

use once_cell::sync::Lazy;

use super::{components, expect_model, output};
use crate::color::Color;
use crate::decimal::Decimal;
use crate::error::ColorError;
use crate::space::{ColorModel, OKLAB, OKLCH};

static FULL_TURN: Lazy<Decimal> = Lazy::new(|| Decimal::from(360));

/// Oklab to Oklch. Hue lands in `[0, 360)`; achromatic colors get hue 0.
pub(crate) fn oklab_to_oklch(color: &Color) -> Result<Color, ColorError> {
    expect_model(color, &ColorModel::OKLAB)?;
    let (l, a, b) = components(color)?;

    let chroma = (a * a + b * b).sqrt()?;
    let mut hue = Decimal::atan2(b, a)?.to_degrees();
    if hue.is_negative() {
        // A tiny negative angle plus 360 can round up to exactly 360
        hue = (hue + &*FULL_TURN).checked_rem(&FULL_TURN)?;
    }
    output(OKLCH, [l.clone(), chroma, hue], color)
}

/// Oklch to Oklab. Hue is reduced modulo 360 first, so `h` and `h + 360`
/// give identical results.
pub(crate) fn oklch_to_oklab(color: &Color) -> Result<Color, ColorError> {
    expect_model(color, &ColorModel::OKLCH)?;
    let (l, c, h) = components(color)?;

    let radians = h.checked_rem(&FULL_TURN)?.to_radians();
    let a = c * radians.cos()?;
    let b = c * radians.sin()?;
    output(OKLAB, [l.clone(), a, b], color)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(value: &Decimal, expected: f64, tolerance: f64) -> bool {
        (value.to_f64() - expected).abs() < tolerance
    }

    #[test]
    fn test_red_to_oklch() {
        let red = Color::from_oklab("0.62796", "0.22486", "0.12585").unwrap();
        let lch = oklab_to_oklch(&red).unwrap();
        let [l, c, h] = [0, 1, 2].map(|i| lch.coordinates()[i].to_f64());
        assert_eq!(l, 0.62796);
        assert!((c - 0.257682).abs() < 1e-5, "chroma {c}");
        assert!((h - 29.2349).abs() < 1e-3, "hue {h}");
    }

    #[test]
    fn test_negative_hue_wraps() {
        let blue = Color::from_oklab(0.452, -0.032, -0.312).unwrap();
        let lch = oklab_to_oklch(&blue).unwrap();
        let hue = &lch.coordinates()[2];
        assert!(!hue.is_negative());
        assert!(approx(hue, 264.14, 0.01), "hue {hue}");
    }

    #[test]
    fn test_tiny_negative_hue_stays_below_full_turn() {
        let almost_red = Color::from_oklab("0.5", "0.1", "-0.00000000000000000000000000001").unwrap();
        let lch = oklab_to_oklch(&almost_red).unwrap();
        let hue = &lch.coordinates()[2];
        assert!(*hue < Decimal::from(360), "hue {hue}");
        assert!(!hue.is_negative());
        assert!(hue.is_zero(), "hue {hue}");
    }

    #[test]
    fn test_achromatic_has_zero_hue() {
        let gray = Color::from_oklab(0.5, 0.0, 0.0).unwrap();
        let lch = oklab_to_oklch(&gray).unwrap();
        assert!(lch.coordinates()[1].is_zero());
        assert!(lch.coordinates()[2].is_zero());
    }

    #[test]
    fn test_hue_zero_and_full_turn_match() {
        let at_zero = oklch_to_oklab(&Color::from_oklch(0.7, 0.1, 0.0).unwrap()).unwrap();
        let at_turn = oklch_to_oklab(&Color::from_oklch(0.7, 0.1, 360.0).unwrap()).unwrap();
        assert_eq!(at_zero.coordinates(), at_turn.coordinates());
        assert!(approx(&at_zero.coordinates()[1], 0.1, 1e-15));
        assert!(at_zero.coordinates()[2].is_zero());
    }

    #[test]
    fn test_round_trip() {
        let original = Color::from_oklab(0.6, -0.1, 0.05).unwrap();
        let back = oklch_to_oklab(&oklab_to_oklch(&original).unwrap()).unwrap();
        for (got, expected) in back.coordinates().iter().zip([0.6, -0.1, 0.05]) {
            assert!(approx(got, expected, 1e-12), "got {got}, expected {expected}");
        }
    }

    #[test]
    fn test_alpha_is_preserved() {
        let color = Color::from_oklch(0.7, 0.1, 120.0).unwrap().with_alpha("0.5").unwrap();
        let lab = oklch_to_oklab(&color).unwrap();
        assert_eq!(lab.alpha(), color.alpha());
        assert_eq!(oklab_to_oklch(&lab).unwrap().alpha(), color.alpha());
    }
}
