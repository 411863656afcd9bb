//! Everything the program writes: the canvas on stdout, diagnostics on
//! stderr.

use std::io::{self, Write};

use canvascii_core::CanvasError;
use canvascii_core::CanvasSnapshot;
use canvascii_core::Grid;
use canvascii_core::render_color;
use canvascii_core::render_plain;

use crate::commands::OutputFormat;
use crate::commands::USAGE;
use crate::common::Colors;

/// How canvas cells are drawn in text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Plain,
    Color,
}

pub struct Presenter {
    format: OutputFormat,
}

impl Presenter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Writes the canvas. JSON output ignores `mode`.
    pub fn canvas<W: Write + ?Sized>(
        &self,
        grid: &Grid,
        mode: RenderMode,
        out: &mut W,
    ) -> io::Result<()> {
        match (self.format, mode) {
            (OutputFormat::Json, _) => {
                serde_json::to_writer_pretty(&mut *out, &CanvasSnapshot::of(grid))?;
                writeln!(out)?;
            }
            (OutputFormat::Text, RenderMode::Plain) => render_plain(grid, out)?,
            (OutputFormat::Text, RenderMode::Color) => render_color(grid, out)?,
        }
        out.flush()
    }

    pub fn error<W: Write + ?Sized>(&self, err: &CanvasError, out: &mut W) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &err.to_json())?;
                writeln!(out)?;
            }
            OutputFormat::Text => {
                writeln!(out, "{} {}", Colors::error("Error:"), err)?;
                writeln!(out, "{} {}", Colors::bold("Usage:"), USAGE)?;
                writeln!(out, "{}", Colors::dim("[...]"))?;
                writeln!(out, "{} {}", Colors::dim("Suggestion:"), err.suggestion())?;
            }
        }
        out.flush()
    }
}
