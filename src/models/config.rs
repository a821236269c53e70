use chromakit_core::{DecimalContext, DEFAULT_PRECISION};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the YAML config file.
pub const CONFIG_ENV: &str = "CHROMAKIT_CONFIG";

/// How colors are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `space(c1, c2, c3[, alpha])`, rounded to three places
    #[default]
    Text,
    /// `#rrggbb`, or `#rrggbbaa` for translucent colors
    Hex,
    /// CSS Color 4 functional notation
    Css,
}

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Significant digits for parsed input
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            format: OutputFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load from the file named by `CHROMAKIT_CONFIG`, then apply
    /// `CHROMAKIT_DECIMAL_PRECISION`. Defaults are used when neither is set.
    pub fn load() -> Self {
        let config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_from_path(&PathBuf::from(path)),
            None => Self::default(),
        };
        config.with_env_precision(std::env::var(DecimalContext::PRECISION_ENV).ok().as_deref())
    }

    /// Load configuration from a YAML file. Read or parse failures are
    /// logged and fall back to defaults.
    pub fn load_from_path(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        precision = config.precision,
                        format = ?config.format,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Override the precision from the environment variable's value. An
    /// invalid value is logged and ignored.
    pub fn with_env_precision(mut self, value: Option<&str>) -> Self {
        if let Some(raw) = value {
            match DecimalContext::parse_precision(raw) {
                Some(precision) => self.precision = precision,
                None => tracing::warn!(
                    value = %raw,
                    variable = DecimalContext::PRECISION_ENV,
                    "Invalid decimal precision, keeping {}",
                    self.precision
                ),
            }
        }
        self
    }

    /// Apply command-line flags, which win over file and environment.
    pub fn with_overrides(mut self, precision: Option<u32>, format: Option<OutputFormat>) -> Self {
        if let Some(precision) = precision {
            self.precision = precision;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    /// The decimal context used to parse user input.
    pub fn decimal_context(&self) -> DecimalContext {
        DecimalContext::new(self.precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.precision, 24);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.decimal_context().precision(), 24);
    }

    #[test]
    fn test_parse_full_config() {
        let config: AppConfig = serde_yaml::from_str("precision: 12\nformat: css\n").unwrap();

        assert_eq!(config.precision, 12);
        assert_eq!(config.format, OutputFormat::Css);
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("format: hex\n").unwrap();

        assert_eq!(config.precision, 24);
        assert_eq!(config.format, OutputFormat::Hex);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "precision: 8").unwrap();

        let config = AppConfig::load_from_path(file.path());
        assert_eq!(config.precision, 8);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_from_missing_path_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from_path(&dir.path().join("missing.yaml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_invalid_yaml_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "precision: [not, a, number]").unwrap();

        assert_eq!(AppConfig::load_from_path(file.path()), AppConfig::default());
    }

    #[test]
    fn test_env_precision_override() {
        let config = AppConfig::default().with_env_precision(Some("10"));
        assert_eq!(config.precision, 10);

        let config = AppConfig::default().with_env_precision(Some("zero"));
        assert_eq!(config.precision, 24);

        let config = AppConfig::default().with_env_precision(Some("0"));
        assert_eq!(config.precision, 24);

        let config = AppConfig::default().with_env_precision(Some(" 16 "));
        assert_eq!(config.precision, 16);

        let from_file = AppConfig::default().with_overrides(Some(9), None);
        assert_eq!(from_file.with_env_precision(Some("-1")).precision, 9);

        let config = AppConfig::default().with_env_precision(None);
        assert_eq!(config.precision, 24);
    }

    #[test]
    fn test_flags_win() {
        let config = AppConfig::default()
            .with_env_precision(Some("10"))
            .with_overrides(Some(6), Some(OutputFormat::Hex));
        assert_eq!(config.precision, 6);
        assert_eq!(config.format, OutputFormat::Hex);

        let config = AppConfig::default().with_overrides(None, None);
        assert_eq!(config, AppConfig::default());
    }
}
