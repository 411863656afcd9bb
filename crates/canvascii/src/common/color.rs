//! ANSI styling for diagnostics written to stderr.

use std::io::IsTerminal;
use std::sync::OnceLock;

static NO_COLOR: OnceLock<bool> = OnceLock::new();

/// Decides once whether diagnostics are styled. `--no-color` and the
/// `NO_COLOR` variable both reach this through the command line.
pub fn init(no_color_flag: bool) {
    let _ = NO_COLOR.set(no_color_flag || !std::io::stderr().is_terminal());
}

pub fn is_disabled() -> bool {
    *NO_COLOR.get().unwrap_or(&true)
}

mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const DIM: &str = "\x1b[90m";
    pub const BOLD: &str = "\x1b[1m";
}

pub struct Colors;

fn paint(text: &str, prefix: &str) -> String {
    if is_disabled() {
        return text.to_string();
    }
    let mut out = String::with_capacity(prefix.len() + text.len() + codes::RESET.len());
    out.push_str(prefix);
    out.push_str(text);
    out.push_str(codes::RESET);
    out
}

impl Colors {
    pub fn error(text: &str) -> String {
        paint(text, codes::RED)
    }

    pub fn dim(text: &str) -> String {
        paint(text, codes::DIM)
    }

    pub fn bold(text: &str) -> String {
        paint(text, codes::BOLD)
    }
}
