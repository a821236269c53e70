//! Color notation accepted on the command line.
//!
//! Two forms are recognised:
//!
//! - hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (the `#` is optional)
//! - functional: `space(c1, c2, c3[, alpha])`, where `space` is any registered
//!   color space name. Values may be separated by commas, whitespace or a
//!   CSS-style `/` before alpha, and may carry a `%` suffix (`50%` is `0.5`).

use chromakit_core::{create_color, Color, Decimal, DecimalContext};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CliError;

static HEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("valid regex"));

static FUNCTIONAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?<space>[A-Za-z][A-Za-z0-9_-]*)\s*\(\s*(?<values>[^()]*?)\s*\)$").expect("valid regex")
});

static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s,/]+").expect("valid regex"));

/// Parse a color argument, building every number at the context's precision.
pub fn parse_color(input: &str, context: &DecimalContext) -> Result<Color, CliError> {
    let trimmed = input.trim();

    if HEX_RE.is_match(trimmed) {
        let color = Color::from_hex(trimmed)?;
        let (space, coordinates, alpha) = color.into_parts();
        let coordinates = coordinates.iter().map(|c| context.apply(c)).collect();
        return Ok(Color::new(space, coordinates, context.apply(&alpha))?);
    }

    let captures = FUNCTIONAL_RE
        .captures(trimmed)
        .ok_or_else(|| CliError::InvalidColor(input.to_string()))?;
    let space = captures["space"].to_ascii_lowercase();
    let mut values = SEPARATOR_RE
        .split(&captures["values"])
        .filter(|value| !value.is_empty())
        .map(|value| parse_value(value, input, context))
        .collect::<Result<Vec<_>, _>>()?;

    if !(3..=4).contains(&values.len()) {
        return Err(CliError::WrongValueCount {
            input: input.to_string(),
            count: values.len(),
        });
    }
    let alpha = if values.len() == 4 {
        values.remove(3)
    } else {
        context.from_i64(1)
    };

    tracing::debug!(%space, input = %trimmed, "Parsed functional color");
    Ok(create_color(&space, values, alpha)?)
}

/// Parse a plain number at the context's precision, for amounts and factors.
pub fn parse_number(input: &str, context: &DecimalContext) -> Result<Decimal, CliError> {
    parse_value(input.trim(), input, context)
}

fn parse_value(value: &str, input: &str, context: &DecimalContext) -> Result<Decimal, CliError> {
    let invalid = || CliError::InvalidNumber {
        input: input.to_string(),
        value: value.to_string(),
    };
    match value.strip_suffix('%') {
        Some(number) => Ok(context.parse(number).map_err(|_| invalid())? / 100),
        None => context.parse(value).map_err(|_| invalid()),
    }
}
