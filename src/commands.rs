//! Subcommand implementations.
//!
//! Each command returns the lines to print, so the binary only handles
//! argument parsing and stdout.

use chromakit_core::{Color, ColorSpace, ColorSpaceRegistry, Decimal, DecimalContext, Palette};

use crate::error::CliError;
use crate::models::AppConfig;
use crate::output::format_color;
use crate::parsing::{parse_color, parse_number};

/// Blend amount when none is given.
pub const DEFAULT_BLEND_AMOUNT: &str = "0.5";

/// Lighten/darken amount when none is given.
pub const DEFAULT_LIGHTNESS_STEP: &str = "0.1";

/// Options for the `palette` subcommand
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteOptions {
    /// Colors inserted between each neighbouring pair
    pub interpolate: Option<usize>,
    /// Print only the Oklab average
    pub average: bool,
    /// Stretch lightness to cover [0, 1] first
    pub normalize: bool,
}

/// Resolved configuration plus the decimal context built from it.
#[derive(Debug, Clone)]
pub struct Session {
    config: AppConfig,
    context: DecimalContext,
}

impl Session {
    pub fn new(config: AppConfig) -> Self {
        let context = config.decimal_context();
        Self { config, context }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn context(&self) -> &DecimalContext {
        &self.context
    }

    fn parse(&self, input: &str) -> Result<Color, CliError> {
        parse_color(input, &self.context)
    }

    fn amount(&self, input: Option<&str>, default: &str) -> Result<Decimal, CliError> {
        parse_number(input.unwrap_or(default), &self.context)
    }

    fn render(&self, color: &Color) -> Result<String, CliError> {
        format_color(color, self.config.format)
    }

    /// Convert a color into the named space.
    pub fn convert(&self, input: &str, to: &str) -> Result<Vec<String>, CliError> {
        let color = self.parse(input)?;
        let converted = chromakit_core::convert(&color, to)?;
        Ok(vec![self.render(&converted)?])
    }

    /// Blend two colors, in the first color's space unless `space` is given.
    pub fn blend(
        &self,
        from: &str,
        to: &str,
        amount: Option<&str>,
        space: Option<&str>,
    ) -> Result<Vec<String>, CliError> {
        let (start, end) = (self.parse(from)?, self.parse(to)?);
        let amount = self.amount(amount, DEFAULT_BLEND_AMOUNT)?;
        let blended = match space {
            Some(space) => start.blend_in_space(&end, amount, space)?,
            None => start.blend(&end, amount)?,
        };
        Ok(vec![self.render(&blended)?])
    }

    pub fn lighten(&self, input: &str, amount: Option<&str>) -> Result<Vec<String>, CliError> {
        let color = self.parse(input)?;
        let lighter = color.lighten(self.amount(amount, DEFAULT_LIGHTNESS_STEP)?)?;
        Ok(vec![self.render(&lighter)?])
    }

    pub fn darken(&self, input: &str, amount: Option<&str>) -> Result<Vec<String>, CliError> {
        let color = self.parse(input)?;
        let darker = color.darken(self.amount(amount, DEFAULT_LIGHTNESS_STEP)?)?;
        Ok(vec![self.render(&darker)?])
    }

    /// Build a palette and apply normalization, interpolation and
    /// averaging, in that order.
    pub fn palette(&self, inputs: &[String], options: &PaletteOptions) -> Result<Vec<String>, CliError> {
        let mut palette = inputs
            .iter()
            .map(|input| self.parse(input))
            .collect::<Result<Palette, _>>()?;
        if palette.is_empty() {
            return Err(CliError::EmptyPalette);
        }

        if options.normalize {
            palette = palette.normalize_luminance()?;
        }
        if let Some(count) = options.interpolate {
            palette.interpolate_in_place(count)?;
        }
        if options.average {
            let average = palette.average()?.ok_or(CliError::EmptyPalette)?;
            return Ok(vec![self.render(&average)?]);
        }

        tracing::debug!(colors = palette.len(), "Rendering palette");
        palette.iter().map(|color| self.render(color)).collect()
    }

    /// One line per registered space name, aliases included.
    pub fn spaces(&self) -> Vec<String> {
        ColorSpaceRegistry::global()
            .entries()
            .into_iter()
            .map(|(name, space)| describe_space(&name, &space))
            .collect()
    }
}

fn describe_space(name: &str, space: &ColorSpace) -> String {
    let alias = if name == space.name() {
        String::new()
    } else {
        format!(" -> {}", space.name())
    };
    format!(
        "{name}{alias}: {} [{}, {}]",
        space.coordinates().join(", "),
        space.color_model(),
        space.white_point()
    )
}
