use tracing::trace;

use crate::error::{CanvasError, Result};
use crate::pixel::{Pen, Pixel};
use crate::shape::Point;

pub const MAX_HEIGHT: usize = 40;
pub const MAX_WIDTH: usize = 80;

/// Read-only access to a rectangular field of pixels.
pub trait CanvasView {
    fn height(&self) -> usize;
    fn width(&self) -> usize;
    fn pixel(&self, row: usize, col: usize) -> Option<Pixel>;
}

/// Fails when a canvas exceeds the platform limits. Height is checked first.
pub fn validate_dimensions(height: usize, width: usize) -> Result<()> {
    if height > MAX_HEIGHT {
        return Err(CanvasError::CanvasTooHigh { height });
    }
    if width > MAX_WIDTH {
        return Err(CanvasError::CanvasTooWide { width });
    }
    Ok(())
}

/// The drawing surface: a row-major buffer of pixels and the current pen.
///
/// A `Grid` only ever holds valid pixels and every row has `width` cells;
/// both are established by the loader and preserved by every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Pixel>,
    pen: Pen,
}

impl Grid {
    pub(crate) fn from_rows(height: usize, width: usize, cells: Vec<Pixel>) -> Self {
        debug_assert_eq!(cells.len(), height * width);
        Self {
            height,
            width,
            cells,
            pen: Pen::default(),
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    pub fn set_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.offset(point).is_some()
    }

    pub fn row(&self, row: usize) -> Option<&[Pixel]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        (0..self.height).filter_map(move |row| self.row(row))
    }

    /// Number of cells that are not background.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|p| !p.is_background()).count()
    }

    fn offset(&self, point: Point) -> Option<usize> {
        let row = usize::try_from(point.row).ok()?;
        let col = usize::try_from(point.col).ok()?;
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Writes the pen at `point`. Returns `false`, leaving the grid
    /// untouched, when the point lies outside the canvas.
    pub(crate) fn stamp(&mut self, point: Point) -> bool {
        match self.offset(point) {
            Some(offset) => {
                self.cells[offset] = Pixel::Mark(self.pen);
                true
            }
            None => {
                trace!(row = point.row, col = point.col, "stamp outside canvas");
                false
            }
        }
    }

    pub(crate) fn fill_row(&mut self, row: usize) {
        let pixel = Pixel::Mark(self.pen);
        let start = row * self.width;
        self.cells[start..start + self.width].fill(pixel);
    }

    pub(crate) fn fill_col(&mut self, col: usize) {
        let pixel = Pixel::Mark(self.pen);
        for row in 0..self.height {
            self.cells[row * self.width + col] = pixel;
        }
    }
}

impl CanvasView for Grid {
    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }

    fn pixel(&self, row: usize, col: usize) -> Option<Pixel> {
        self.get(row, col)
    }
}
