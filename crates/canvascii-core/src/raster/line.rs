use std::ops::Range;

use super::Window;
use crate::shape::{Point, Segment};

/// Cells of a segment, as drawn by Bresenham's integer algorithm.
///
/// The row is the `x` axis and the column the `y` axis. Cells are indexed
/// by their step along the major axis; the minor offset at step `i` is
/// where Bresenham's error term places it, computed directly so a walk can
/// start anywhere along the segment. Iteration starts from the smaller
/// endpoint (row first, then column), so a segment and its reverse produce
/// the same cells.
#[derive(Debug, Clone)]
pub struct SegmentCells {
    start: Point,
    row_major: bool,
    major: i64,
    minor: i64,
    row_step: i64,
    col_step: i64,
    steps: Range<i64>,
}

impl SegmentCells {
    pub fn new(segment: Segment) -> Self {
        let (start, end) = if segment.a <= segment.b {
            (segment.a, segment.b)
        } else {
            (segment.b, segment.a)
        };

        let d_row = (end.row - start.row).abs();
        let d_col = (end.col - start.col).abs();
        let row_major = d_row >= d_col;
        let (major, minor) = if row_major {
            (d_row, d_col)
        } else {
            (d_col, d_row)
        };

        Self {
            start,
            row_major,
            major,
            minor,
            row_step: if start.row < end.row { 1 } else { -1 },
            col_step: if start.col < end.col { 1 } else { -1 },
            steps: 0..major + 1,
        }
    }

    /// Like [`SegmentCells::new`], restricted to the steps whose major
    /// coordinate falls inside `window`.
    pub fn within(segment: Segment, window: Window) -> Self {
        let mut cells = Self::new(segment);
        let (origin, step, limit) = if cells.row_major {
            (cells.start.row, cells.row_step, window.height)
        } else {
            (cells.start.col, cells.col_step, window.width)
        };

        let (first, end) = if step > 0 {
            (-origin, limit - origin)
        } else {
            (origin - limit + 1, origin + 1)
        };
        cells.steps = cells.steps.start.max(first)..cells.steps.end.min(end);
        cells
    }

    fn at(&self, step: i64) -> Point {
        let offset = minor_offset(step, self.major, self.minor);
        if self.row_major {
            Point::new(
                self.start.row + self.row_step * step,
                self.start.col + self.col_step * offset,
            )
        } else {
            Point::new(
                self.start.row + self.row_step * offset,
                self.start.col + self.col_step * step,
            )
        }
    }
}

/// `floor((2 * step * minor + major) / (2 * major))`, in 128-bit so that
/// extents near the `i32` limits cannot overflow.
fn minor_offset(step: i64, major: i64, minor: i64) -> i64 {
    if major == 0 {
        return 0;
    }
    let numerator = 2 * i128::from(step) * i128::from(minor) + i128::from(major);
    (numerator / (2 * i128::from(major))) as i64
}

impl Iterator for SegmentCells {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let step = self.steps.next()?;
        Some(self.at(step))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl Segment {
    pub fn cells(&self) -> SegmentCells {
        SegmentCells::new(*self)
    }

    pub fn cells_within(&self, window: Window) -> SegmentCells {
        SegmentCells::within(*self, window)
    }
}
