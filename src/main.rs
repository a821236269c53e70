use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chromakit::commands::{PaletteOptions, Session};
use chromakit::models::{AppConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "chromakit")]
#[command(about = "Convert, blend and lighten colors with decimal precision")]
struct Cli {
    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Significant digits for parsed input (overrides config and environment)
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    precision: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color into another color space
    Convert {
        /// Hex (#ff8800) or functional notation (oklab(0.7, 0.1, -0.05))
        color: String,

        /// Target color space name (see `chromakit spaces`)
        #[arg(long)]
        to: String,
    },
    /// Blend two colors
    Blend {
        /// Start color
        from: String,

        /// End color
        to: String,

        /// Blend amount: 0 gives the start color, 1 the end color
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,

        /// Blend in this space instead of the start color's
        #[arg(long)]
        space: Option<String>,
    },
    /// Raise Oklab lightness (result is an Oklab color)
    Lighten {
        color: String,

        /// Lightness to add, in [0, 1] units
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
    },
    /// Lower Oklab lightness (result is an Oklab color)
    Darken {
        color: String,

        /// Lightness to subtract, in [0, 1] units
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
    },
    /// Build a palette and print its colors
    Palette {
        #[arg(required = true)]
        colors: Vec<String>,

        /// Insert N blends between each neighbouring pair
        #[arg(long, value_name = "N")]
        interpolate: Option<usize>,

        /// Print only the average color
        #[arg(long)]
        average: bool,

        /// Stretch lightness to cover the full range
        #[arg(long)]
        normalize: bool,
    },
    /// List registered color spaces
    Spaces,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromakit=warn,chromakit_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).without_time())
        .init();

    let config = AppConfig::load().with_overrides(cli.precision, cli.format);
    tracing::debug!(precision = config.precision, format = ?config.format, "Resolved configuration");
    let session = Session::new(config);

    let lines = match cli.command {
        Commands::Convert { color, to } => session.convert(&color, &to)?,
        Commands::Blend {
            from,
            to,
            amount,
            space,
        } => session.blend(&from, &to, amount.as_deref(), space.as_deref())?,
        Commands::Lighten { color, amount } => session.lighten(&color, amount.as_deref())?,
        Commands::Darken { color, amount } => session.darken(&color, amount.as_deref())?,
        Commands::Palette {
            colors,
            interpolate,
            average,
            normalize,
        } => session.palette(
            &colors,
            &PaletteOptions {
                interpolate,
                average,
                normalize,
            },
        )?,
        Commands::Spaces => session.spaces(),
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}
