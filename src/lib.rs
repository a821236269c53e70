//! Chromakit
//!
//! Command-line front end for `chromakit-core`: parses color notation,
//! runs conversions and palette operations, and formats the results.
//! This library exposes modules for integration testing.

pub mod commands;
pub mod error;
pub mod models;
pub mod output;
pub mod parsing;
