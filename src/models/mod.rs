pub mod config;

pub use config::{AppConfig, OutputFormat, CONFIG_ENV};
