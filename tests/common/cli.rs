//! Runs the compiled `chromakit` binary with an isolated environment.

use std::path::Path;
use std::process::Command;

/// Captured result of one binary invocation
pub struct CliOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CliOutput {
    /// Non-empty stdout lines
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().filter(|line| !line.is_empty()).collect()
    }
}

/// Builder for a `chromakit` invocation. Config and precision variables from
/// the outer environment are cleared so tests see only what they set.
pub struct TestCli {
    command: Command,
}

impl TestCli {
    pub fn new() -> Self {
        let mut command = Command::new(env!("CARGO_BIN_EXE_chromakit"));
        command
            .env_remove("CHROMAKIT_CONFIG")
            .env_remove("CHROMAKIT_DECIMAL_PRECISION")
            .env_remove("RUST_LOG");
        Self { command }
    }

    pub fn config(mut self, path: &Path) -> Self {
        self.command.env("CHROMAKIT_CONFIG", path);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.command.env(key, value);
        self
    }

    pub fn run(mut self, args: &[&str]) -> CliOutput {
        let output = self
            .command
            .args(args)
            .output()
            .expect("Failed to run chromakit binary");
        CliOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
