//! Text output of a canvas: plain characters, ANSI background colors, or a
//! serializable snapshot.

use std::io::{self, Write};

use serde::Serialize;

use crate::grid::{CanvasView, Grid};
use crate::pixel::Pixel;

mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const BACKGROUND_PREFIX: &str = "\x1b[4";
}

/// Writes each row verbatim followed by a newline.
pub fn render_plain<V, W>(view: &V, out: &mut W) -> io::Result<()>
where
    V: CanvasView + ?Sized,
    W: Write + ?Sized,
{
    let mut line = String::with_capacity(view.width() + 1);
    for row in 0..view.height() {
        line.clear();
        for col in 0..view.width() {
            if let Some(pixel) = view.pixel(row, col) {
                line.push(pixel.as_char());
            }
        }
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// Writes each cell as a space on the background color of its pen digit.
/// Background cells reset the color first; every row ends with a reset.
pub fn render_color<V, W>(view: &V, out: &mut W) -> io::Result<()>
where
    V: CanvasView + ?Sized,
    W: Write + ?Sized,
{
    let mut line = String::new();
    for row in 0..view.height() {
        line.clear();
        for col in 0..view.width() {
            match view.pixel(row, col) {
                Some(Pixel::Mark(pen)) => {
                    line.push_str(codes::BACKGROUND_PREFIX);
                    line.push(pen.as_char());
                    line.push('m');
                }
                Some(Pixel::Background) => line.push_str(codes::RESET),
                None => continue,
            }
            line.push(' ');
        }
        line.push_str(codes::RESET);
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// Serializable copy of a canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanvasSnapshot {
    pub height: usize,
    pub width: usize,
    pub pen: char,
    pub rows: Vec<String>,
}

impl CanvasSnapshot {
    pub fn of(grid: &Grid) -> Self {
        Self {
            height: grid.height(),
            width: grid.width(),
            pen: grid.pen().as_char(),
            rows: grid
                .rows()
                .map(|row| row.iter().map(|p| p.as_char()).collect())
                .collect(),
        }
    }
}
