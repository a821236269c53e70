//! Registered multi-step paths, built by chaining primitives.

use super::{gamma, hsl, hsv, oklab, oklch};
use crate::color::Color;
use crate::error::ColorError;

macro_rules! chain {
    ($($(#[$doc:meta])* $name:ident: $first:path $(=> $rest:path)+;)+) => {
        $(
            $(#[$doc])*
            pub(crate) fn $name(color: &Color) -> Result<Color, ColorError> {
                let color = $first(color)?;
                $(let color = $rest(&color)?;)+
                Ok(color)
            }
        )+
    };
}

chain! {
    srgb_to_oklab: gamma::srgb_to_lrgb => oklab::lrgb_to_oklab;
    oklab_to_srgb: oklab::oklab_to_lrgb => gamma::lrgb_to_srgb;
    srgb_to_oklch: gamma::srgb_to_lrgb => oklab::lrgb_to_oklab => oklch::oklab_to_oklch;
    oklch_to_srgb: oklch::oklch_to_oklab => oklab::oklab_to_lrgb => gamma::lrgb_to_srgb;
    lrgb_to_oklch: oklab::lrgb_to_oklab => oklch::oklab_to_oklch;
    oklch_to_lrgb: oklch::oklch_to_oklab => oklab::oklab_to_lrgb;

    hsv_to_oklab: hsv::hsv_to_srgb => srgb_to_oklab;
    hsv_to_oklch: hsv::hsv_to_srgb => srgb_to_oklch;
    hsl_to_oklab: hsl::hsl_to_srgb => srgb_to_oklab;
    hsl_to_oklch: hsl::hsl_to_srgb => srgb_to_oklch;
    hsv_to_lrgb: hsv::hsv_to_srgb => gamma::srgb_to_lrgb;
    hsl_to_lrgb: hsl::hsl_to_srgb => gamma::srgb_to_lrgb;
    oklab_to_hsv: oklab_to_srgb => hsv::srgb_to_hsv;
    oklab_to_hsl: oklab_to_srgb => hsl::srgb_to_hsl;
    oklch_to_hsv: oklch_to_srgb => hsv::srgb_to_hsv;
    oklch_to_hsl: oklch_to_srgb => hsl::srgb_to_hsl;
    lrgb_to_hsv: gamma::lrgb_to_srgb => hsv::srgb_to_hsv;
    lrgb_to_hsl: gamma::lrgb_to_srgb => hsl::srgb_to_hsl;
    /// Both hue conventions meet in sRGB.
    hsv_to_hsl: hsv::hsv_to_srgb => hsl::srgb_to_hsl;
    hsl_to_hsv: hsl::hsl_to_srgb => hsv::srgb_to_hsv;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(color: &Color, expected: [f64; 3], tolerance: f64) -> bool {
        color
            .coordinates()
            .iter()
            .zip(expected)
            .all(|(got, e)| (got.to_f64() - e).abs() < tolerance)
    }

    #[test]
    fn test_red_to_oklab() {
        let red = srgb_to_oklab(&Color::from_rgb(1, 0, 0).unwrap()).unwrap();
        assert_eq!(red.color_space().name(), "oklab");
        assert!(approx(&red, [0.627955, 0.224863, 0.125846], 1e-5), "{red}");
    }

    #[test]
    fn test_srgb_oklch_round_trip() {
        let original = Color::from_rgb(0.8, 0.4, 0.2).unwrap();
        let lch = srgb_to_oklch(&original).unwrap();
        assert_eq!(lch.color_space().name(), "oklch");
        let back = oklch_to_srgb(&lch).unwrap();
        assert!(approx(&back, [0.8, 0.4, 0.2], 1e-6), "{back}");
    }

    #[test]
    fn test_lrgb_oklch_round_trip() {
        let original = Color::from_lrgb(0.3, 0.5, 0.1).unwrap();
        let back = oklch_to_lrgb(&lrgb_to_oklch(&original).unwrap()).unwrap();
        assert!(approx(&back, [0.3, 0.5, 0.1], 1e-6), "{back}");
    }

    #[test]
    fn test_hsv_hsl_agree() {
        let hsv = Color::from_hsv(0.5, 1.0, 1.0).unwrap();
        let hsl = hsv_to_hsl(&hsv).unwrap();
        assert!(approx(&hsl, [180.0, 1.0, 0.5], 1e-12), "{hsl}");
        let back = hsl_to_hsv(&hsl).unwrap();
        assert!(approx(&back, [0.5, 1.0, 1.0], 1e-12), "{back}");
    }

    #[test]
    fn test_hue_spaces_reach_oklab() {
        let from_hsv = hsv_to_oklab(&Color::from_hsv(0, 1, 1).unwrap()).unwrap();
        let from_hsl = hsl_to_oklab(&Color::from_hsl(0.0, 1.0, 0.5).unwrap()).unwrap();
        let direct = srgb_to_oklab(&Color::from_rgb(1, 0, 0).unwrap()).unwrap();
        assert_eq!(from_hsv, direct);
        assert!(approx(&from_hsl, [0.627955, 0.224863, 0.125846], 1e-5), "{from_hsl}");
        assert_eq!(hsl_to_oklch(&Color::from_hsl(0, 0, 1).unwrap()).unwrap().color_space().name(), "oklch");
        assert_eq!(hsv_to_oklch(&Color::from_hsv(0, 0, 1).unwrap()).unwrap().color_space().name(), "oklch");
    }

    #[test]
    fn test_composites_keep_alpha() {
        let color = Color::from_rgb(0.1, 0.5, 0.9).unwrap().with_alpha("0.7").unwrap();
        assert_eq!(srgb_to_oklch(&color).unwrap().alpha(), color.alpha());
        assert_eq!(srgb_to_oklab(&color).unwrap().alpha(), color.alpha());
        let lab = srgb_to_oklab(&color).unwrap();
        assert_eq!(oklab_to_srgb(&lab).unwrap().alpha(), color.alpha());
    }
}
