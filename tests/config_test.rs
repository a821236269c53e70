//! Tests for configuration file, environment and flag precedence.

mod common;

use common::fixtures::{colors, config_file};
use common::TestCli;

#[test]
fn test_config_file_sets_format() {
    let config = config_file("format: hex\n");

    let output = TestCli::new()
        .config(config.path())
        .run(&["convert", colors::ORANGE, "--to", "oklab"]);

    common::assert_lines(&output, &["#ff8800"]);
}

#[test]
fn test_format_flag_overrides_config_file() {
    let config = config_file("format: hex\n");

    let output = TestCli::new()
        .config(config.path())
        .run(&["convert", colors::ORANGE, "--to", "srgb", "--format", "css"]);

    common::assert_lines(&output, &["rgb(255 136 0)"]);
}

#[test]
fn test_config_file_sets_precision() {
    let config = config_file("precision: 1\n");

    let output = TestCli::new()
        .config(config.path())
        .run(&["convert", "srgb(0.45, 0, 0)", "--to", "srgb"]);

    common::assert_lines(&output, &["srgb(0.5, 0.0, 0.0)"]);
}

#[test]
fn test_default_precision_keeps_input_digits() {
    let output = TestCli::new().run(&["convert", "srgb(0.45, 0, 0)", "--to", "srgb"]);

    common::assert_lines(&output, &["srgb(0.45, 0.0, 0.0)"]);
}

#[test]
fn test_env_precision_overrides_config_file() {
    let config = config_file("precision: 1\n");

    let output = TestCli::new()
        .config(config.path())
        .env("CHROMAKIT_DECIMAL_PRECISION", "24")
        .run(&["convert", "srgb(0.45, 0, 0)", "--to", "srgb"]);

    common::assert_lines(&output, &["srgb(0.45, 0.0, 0.0)"]);
}

#[test]
fn test_precision_flag_overrides_environment() {
    let output = TestCli::new()
        .env("CHROMAKIT_DECIMAL_PRECISION", "24")
        .run(&["--precision", "1", "convert", "srgb(0.45, 0, 0)", "--to", "srgb"]);

    common::assert_lines(&output, &["srgb(0.5, 0.0, 0.0)"]);
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let config = config_file("format: [broken\n");

    let output = TestCli::new()
        .config(config.path())
        .run(&["convert", colors::RED, "--to", "srgb"]);

    common::assert_lines(&output, &["srgb(1.0, 0.0, 0.0)"]);
    assert!(output.stderr.contains("Failed to parse config"), "{}", output.stderr);
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let output = TestCli::new()
        .config(&dir.path().join("absent.yaml"))
        .run(&["convert", colors::RED, "--to", "srgb"]);

    common::assert_lines(&output, &["srgb(1.0, 0.0, 0.0)"]);
}
