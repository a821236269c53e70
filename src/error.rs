use chromakit_core::{ColorError, DecimalError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid color notation: {0}")]
    InvalidColor(String),

    #[error("Invalid number {value:?} in {input}")]
    InvalidNumber { input: String, value: String },

    #[error("Expected 3 or 4 values in {input}, got {count}")]
    WrongValueCount { input: String, count: usize },

    #[error("Palette needs at least one color")]
    EmptyPalette,

    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    #[error("Decimal error: {0}")]
    Decimal(#[from] DecimalError),
}
