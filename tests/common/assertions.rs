//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use super::cli::CliOutput;

/// Assert the command succeeded
pub fn assert_success(output: &CliOutput) {
    assert!(
        output.success,
        "Expected success. stdout: {} stderr: {}",
        output.stdout, output.stderr
    );
}

/// Assert the command failed and its stderr mentions `needle`
pub fn assert_failure_mentions(output: &CliOutput, needle: &str) {
    assert!(
        !output.success,
        "Expected failure, got stdout: {}",
        output.stdout
    );
    assert!(
        output.stderr.contains(needle),
        "Expected stderr to mention {needle:?}, got: {}",
        output.stderr
    );
}

/// Assert the command succeeded and printed exactly these lines
pub fn assert_lines(output: &CliOutput, expected: &[&str]) {
    assert_success(output);
    assert_eq!(output.lines(), expected);
}
