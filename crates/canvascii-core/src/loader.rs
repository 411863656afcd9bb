//! Canvas construction: blank canvases and row-oriented text input.

use std::io::BufRead;

use tracing::debug;

use crate::error::{CanvasError, Result};
use crate::grid::{Grid, MAX_HEIGHT, validate_dimensions};
use crate::pixel::Pixel;

impl Grid {
    /// Creates a canvas of `height` rows and `width` columns filled with
    /// background pixels, using the default pen.
    pub fn blank(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(CanvasError::invalid_value("-n"));
        }
        validate_dimensions(height, width)?;
        Ok(Grid::from_rows(
            height,
            width,
            vec![Pixel::Background; height * width],
        ))
    }

    /// Parses a canvas from text, one row per line.
    ///
    /// The first line fixes the width. Ingestion stops at the first invalid
    /// line: a width mismatch, a pixel outside the alphabet, or a row past
    /// the height limit. An empty input gives an empty canvas. Widths count
    /// bytes; an offending pixel is reported as the decoded character.
    pub fn load<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0usize;
        let mut line = Vec::new();

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            let row = strip_terminator(&line);
            let found = row.len();

            match width {
                None => {
                    validate_dimensions(0, found)?;
                    width = Some(found);
                }
                Some(expected) if expected != found => {
                    return Err(CanvasError::NonRectangularCanvas {
                        line: height + 1,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }

            for c in String::from_utf8_lossy(row).chars() {
                cells.push(Pixel::from_char(c)?);
            }

            height += 1;
            if height > MAX_HEIGHT {
                return Err(CanvasError::CanvasTooHigh { height });
            }
        }

        let width = width.unwrap_or(0);
        validate_dimensions(height, width)?;
        debug!(height, width, "canvas loaded");
        Ok(Grid::from_rows(height, width, cells))
    }

    /// Convenience wrapper around [`Grid::load`] for in-memory text.
    pub fn parse(text: &str) -> Result<Self> {
        Self::load(text.as_bytes())
    }
}

/// Removes exactly one trailing line terminator (`\n` or `\r\n`).
fn strip_terminator(line: &[u8]) -> &[u8] {
    match line.strip_suffix(b"\n") {
        Some(rest) => rest.strip_suffix(b"\r").unwrap_or(rest),
        None => line,
    }
}
