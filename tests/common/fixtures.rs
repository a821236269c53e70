//! Test fixtures and constants.

use std::io::Write;

/// Colors with well-known conversions
pub mod colors {
    pub const RED: &str = "#ff0000";
    pub const BLUE: &str = "#0000ff";
    pub const BLACK: &str = "#000000";
    pub const WHITE: &str = "#ffffff";
    pub const ORANGE: &str = "#ff8800";
}

/// Write a YAML config file that lives as long as the returned handle
pub fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create config file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config file");
    file
}
