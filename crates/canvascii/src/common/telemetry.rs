//! Log output for the canvascii binary.
//!
//! Logs go to stderr, so they never mix with a canvas written on stdout.
//! `RUST_LOG` selects what is logged; `CANVASCII_LOG` redirects it to a
//! file, appended through a background writer.

use std::io::IsTerminal;
use std::path::PathBuf;

use tracing::Span;
use tracing::info_span;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::commands::CanvasSource;
use crate::commands::Invocation;

pub const LOG_FILE_ENV: &str = "CANVASCII_LOG";

/// Keeps the background log writer alive until the program exits.
#[derive(Debug)]
pub struct TelemetryGuard {
    _guard: Option<WorkerGuard>,
}

struct LogSink {
    writer: BoxMakeWriter,
    guard: Option<WorkerGuard>,
    ansi: bool,
}

impl LogSink {
    fn stderr() -> Self {
        Self {
            writer: BoxMakeWriter::new(std::io::stderr),
            guard: None,
            ansi: std::io::stderr().is_terminal(),
        }
    }

    fn from_env() -> Self {
        let Some(path) = log_file_path_from_env() else {
            return Self::stderr();
        };
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                Self {
                    writer: BoxMakeWriter::new(non_blocking),
                    guard: Some(guard),
                    ansi: false,
                }
            }
            Err(err) => {
                eprintln!(
                    "Warning: failed to open log file {}: {}",
                    path.display(),
                    err
                );
                Self::stderr()
            }
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides `default_level`.
pub fn init_tracing(default_level: &str) -> TelemetryGuard {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let sink = LogSink::from_env();

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(sink.ansi)
        .with_writer(sink.writer)
        .try_init()
        .is_ok();

    TelemetryGuard {
        _guard: if installed { sink.guard } else { None },
    }
}

/// Span covering one run, so every log line names the canvas source and
/// how many drawing steps were requested.
pub fn invocation_span(invocation: &Invocation) -> Span {
    info_span!(
        "canvascii",
        source = source_label(&invocation.source),
        steps = invocation.steps.len(),
        policy = ?invocation.policy,
        show = invocation.show_only,
    )
}

fn source_label(source: &CanvasSource) -> &'static str {
    match source {
        CanvasSource::Blank(_) => "blank",
        CanvasSource::Stdin => "stdin",
    }
}

fn log_file_path_from_env() -> Option<PathBuf> {
    std::env::var_os(LOG_FILE_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
