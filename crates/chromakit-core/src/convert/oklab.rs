//! Linear RGB ↔ Oklab.
//!
//! Uses the 2021-01-25 matrices from Björn Ottosson,
//! "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use once_cell::sync::Lazy;

use super::{components, expect_model, output};
use crate::color::Color;
use crate::decimal::Decimal;
use crate::error::ColorError;
use crate::space::{ColorModel, LRGB, OKLAB};

type Matrix = [[Decimal; 3]; 3];

/// Matrix entries scaled by 10^10.
const SCALE: u32 = 10;

// Linear sRGB -> LMS
const M1: [[i64; 3]; 3] = [
    [4_122_214_708, 5_363_325_363, 514_459_929],
    [2_119_034_982, 6_806_995_451, 1_073_969_566],
    [883_024_619, 2_817_188_376, 6_299_787_005],
];

// LMS' -> Lab
const M2: [[i64; 3]; 3] = [
    [2_104_542_553, 7_936_177_850, -40_720_468],
    [19_779_984_951, -24_285_922_050, 4_505_937_099],
    [259_040_371, 7_827_717_662, -8_086_757_660],
];

// Lab -> LMS'
const M2_INVERSE: [[i64; 3]; 3] = [
    [10_000_000_000, 3_963_377_774, 2_158_037_573],
    [10_000_000_000, -1_055_613_458, -638_541_728],
    [10_000_000_000, -894_841_775, -12_914_855_480],
];

// LMS -> linear sRGB
const M1_INVERSE: [[i64; 3]; 3] = [
    [40_767_416_621, -33_077_115_913, 2_309_699_292],
    [-12_684_380_046, 26_097_574_011, -3_413_193_965],
    [-41_960_863, -7_034_186_147, 17_076_147_010],
];

fn matrix(entries: &[[i64; 3]; 3]) -> Matrix {
    entries.map(|row| row.map(|entry| Decimal::from_scaled(entry, SCALE)))
}

static LMS_FROM_LINEAR: Lazy<Matrix> = Lazy::new(|| matrix(&M1));
static LAB_FROM_LMS: Lazy<Matrix> = Lazy::new(|| matrix(&M2));
static LMS_FROM_LAB: Lazy<Matrix> = Lazy::new(|| matrix(&M2_INVERSE));
static LINEAR_FROM_LMS: Lazy<Matrix> = Lazy::new(|| matrix(&M1_INVERSE));

/// `m · v`, with the vector components as left operands.
fn apply(m: &Matrix, v: [&Decimal; 3]) -> [Decimal; 3] {
    m.each_ref()
        .map(|row| v[0] * &row[0] + v[1] * &row[1] + v[2] * &row[2])
}

/// Linear RGB to Oklab.
pub(crate) fn lrgb_to_oklab(color: &Color) -> Result<Color, ColorError> {
    expect_model(color, &ColorModel::LRGB)?;
    let (r, g, b) = components(color)?;

    let [l, m, s] = apply(&LMS_FROM_LINEAR, [r, g, b]);
    let lms = [l.pow_ratio(1, 3)?, m.pow_ratio(1, 3)?, s.pow_ratio(1, 3)?];
    let lab = apply(&LAB_FROM_LMS, [&lms[0], &lms[1], &lms[2]]);

    output(OKLAB, lab, color)
}

/// Oklab to linear RGB. Negative channels are clamped to zero.
pub(crate) fn oklab_to_lrgb(color: &Color) -> Result<Color, ColorError> {
    expect_model(color, &ColorModel::OKLAB)?;
    let (l, a, b) = components(color)?;

    let [l_, m_, s_] = apply(&LMS_FROM_LAB, [l, a, b]);
    let lms = [l_.powi(3)?, m_.powi(3)?, s_.powi(3)?];
    let rgb = apply(&LINEAR_FROM_LMS, [&lms[0], &lms[1], &lms[2]])
        .map(|channel| if channel.is_negative() { channel.zeroed() } else { channel });

    output(LRGB, rgb, color)
}
