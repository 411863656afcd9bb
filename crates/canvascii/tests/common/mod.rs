//! Shared helpers for driving the canvascii binary.

#![allow(dead_code)]

use assert_cmd::Command;

/// Environment variables that would otherwise leak into test runs.
const SCRUBBED_ENV: [&str; 4] = ["CANVASCII_STRICT", "CANVASCII_LOG", "NO_COLOR", "RUST_LOG"];

pub fn canvascii() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("canvascii"));
    for key in SCRUBBED_ENV {
        cmd.env_remove(key);
    }
    cmd
}

/// Runs with `args` and an empty stdin.
pub fn run(args: &[&str]) -> assert_cmd::assert::Assert {
    canvascii().args(args).write_stdin("").assert()
}

/// Runs with `args`, feeding `canvas` on stdin.
pub fn run_with_canvas(args: &[&str], canvas: &str) -> assert_cmd::assert::Assert {
    canvascii().args(args).write_stdin(canvas).assert()
}

/// A `height` x `width` canvas of background cells, as the program prints it.
pub fn blank(height: usize, width: usize) -> String {
    format!("{}\n", ".".repeat(width)).repeat(height)
}
