//! Rendering colors for stdout.

use chromakit_core::{gamut, Color, ColorModel, Decimal};

use crate::error::CliError;
use crate::models::OutputFormat;

/// Render `color` in the requested format.
pub fn format_color(color: &Color, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(color.to_string()),
        OutputFormat::Hex => hex(color),
        OutputFormat::Css => css(color),
    }
}

/// `#rrggbb`, with an alpha byte appended when the color is translucent.
fn hex(color: &Color) -> Result<String, CliError> {
    warn_if_clipped(color)?;
    let mut hex = color.rgb_hex()?;
    if !is_opaque(color) {
        hex.push_str(&format!("{:02x}", color.alpha_byte()));
    }
    Ok(hex)
}

/// CSS Color 4 notation. Oklab and Oklch colors keep their space; every
/// other space is clipped to sRGB and written as `rgb()`.
fn css(color: &Color) -> Result<String, CliError> {
    let model = color.color_model();
    let (name, channels) = if *model == ColorModel::OKLAB || *model == ColorModel::OKLCH {
        let channels = color.coordinates().iter().map(css_number).collect::<Vec<_>>();
        (model.as_str(), channels)
    } else {
        warn_if_clipped(color)?;
        let channels = color.rgb_array()?.iter().map(u8::to_string).collect::<Vec<_>>();
        ("rgb", channels)
    };

    let mut css = format!("{name}({}", channels.join(" "));
    if !is_opaque(color) {
        css.push_str(&format!(" / {}", css_number(color.alpha())));
    }
    css.push(')');
    Ok(css)
}

fn is_opaque(color: &Color) -> bool {
    *color.alpha() == Decimal::one()
}

fn warn_if_clipped(color: &Color) -> Result<(), CliError> {
    if !gamut::SRGB.contains(color)? {
        tracing::warn!(%color, "Color is outside the sRGB gamut, clipping");
    }
    Ok(())
}

/// At most four decimal places, without trailing zeros.
fn css_number(value: &Decimal) -> String {
    let text = value.round(4).to_string();
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}
