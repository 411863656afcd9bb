//! Rasterization of drawing primitives onto a [`Grid`].
//!
//! Shapes describe their cells through iterators; the grid stamps those
//! cells with its current pen. A drawing call either completes or fails
//! before any cell is written.

mod circle;
mod line;
mod rect;

pub use circle::CircleCells;
pub use line::SegmentCells;

use std::ops::Range;

use thiserror::Error;
use tracing::debug;

use crate::grid::Grid;
use crate::shape::{Circle, Point, Rectangle, Segment};

/// What to do with shape cells that fall outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Skip outside cells and draw the visible part.
    #[default]
    Clip,
    /// Refuse to draw a shape that does not fit entirely.
    Reject,
}

/// The drawable area of a canvas, in signed shape coordinates.
///
/// Shapes use it to skip the parts of their outline that cannot land on
/// the canvas, so a huge shape costs no more than the canvas it is drawn
/// on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub height: i64,
    pub width: i64,
}

impl Window {
    pub const fn new(height: i64, width: i64) -> Self {
        Self { height, width }
    }

    pub fn rows(&self) -> Range<i64> {
        0..self.height
    }

    pub fn cols(&self) -> Range<i64> {
        0..self.width
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rows().contains(&point.row) && self.cols().contains(&point.col)
    }
}

/// A drawing reached outside the canvas.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutOfBounds {
    #[error("row {row} is outside the canvas (height {height})")]
    Row { row: usize, height: usize },
    #[error("column {col} is outside the canvas (width {width})")]
    Column { col: usize, width: usize },
    #[error("cell ({}, {}) is outside the canvas", .0.row, .0.col)]
    Cell(Point),
}

impl Grid {
    /// Fills row `row` with the pen.
    pub fn draw_horizontal(&mut self, row: usize) -> Result<(), OutOfBounds> {
        if row >= self.height() {
            return Err(OutOfBounds::Row {
                row,
                height: self.height(),
            });
        }
        self.fill_row(row);
        Ok(())
    }

    /// Fills column `col` with the pen.
    pub fn draw_vertical(&mut self, col: usize) -> Result<(), OutOfBounds> {
        if col >= self.width() {
            return Err(OutOfBounds::Column {
                col,
                width: self.width(),
            });
        }
        self.fill_col(col);
        Ok(())
    }

    pub fn window(&self) -> Window {
        Window::new(self.height() as i64, self.width() as i64)
    }

    pub fn draw_rectangle(
        &mut self,
        rect: &Rectangle,
        policy: BoundsPolicy,
    ) -> Result<usize, OutOfBounds> {
        self.ensure_fits(rect.cells(), policy)?;
        Ok(self.stamp_all(rect.cells_within(self.window())))
    }

    pub fn draw_segment(
        &mut self,
        segment: &Segment,
        policy: BoundsPolicy,
    ) -> Result<usize, OutOfBounds> {
        self.ensure_fits(segment.cells(), policy)?;
        Ok(self.stamp_all(segment.cells_within(self.window())))
    }

    pub fn draw_circle(
        &mut self,
        circle: &Circle,
        policy: BoundsPolicy,
    ) -> Result<usize, OutOfBounds> {
        self.ensure_fits(circle.cells(), policy)?;
        Ok(self.stamp_all(circle.cells_within(self.window())))
    }

    /// Stamps every cell of `cells`, returning how many stamps landed on
    /// the canvas. Under [`BoundsPolicy::Reject`] the whole sequence is
    /// checked before the first write.
    pub fn stamp_cells<I>(&mut self, cells: I, policy: BoundsPolicy) -> Result<usize, OutOfBounds>
    where
        I: Iterator<Item = Point> + Clone,
    {
        self.ensure_fits(cells.clone(), policy)?;
        Ok(self.stamp_all(cells))
    }

    /// Under [`BoundsPolicy::Reject`], fails on the first cell outside the
    /// canvas. A shape that leaves the canvas does so within a canvas
    /// length of its first cell, so the scan stays short.
    fn ensure_fits<I>(&self, mut cells: I, policy: BoundsPolicy) -> Result<(), OutOfBounds>
    where
        I: Iterator<Item = Point>,
    {
        if policy == BoundsPolicy::Reject {
            if let Some(outside) = cells.find(|p| !self.contains(*p)) {
                return Err(OutOfBounds::Cell(outside));
            }
        }
        Ok(())
    }

    fn stamp_all<I: Iterator<Item = Point>>(&mut self, cells: I) -> usize {
        let mut stamped = 0;
        let mut clipped = 0;
        for point in cells {
            if self.stamp(point) {
                stamped += 1;
            } else {
                clipped += 1;
            }
        }
        if clipped > 0 {
            debug!(stamped, clipped, "shape clipped to canvas");
        }
        stamped
    }
}
