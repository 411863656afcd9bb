use std::ops::Range;

use super::Window;
use crate::shape::{Point, Rectangle};

const UNBOUNDED: Range<i64> = i64::MIN..i64::MAX;

fn overlap(a: Range<i64>, b: &Range<i64>) -> Range<i64> {
    a.start.max(b.start)..a.end.min(b.end)
}

impl Rectangle {
    /// Perimeter cells: top edge, bottom edge, then the left and right
    /// edges without their corners. Each cell is yielded once, so a
    /// rectangle one cell high or wide degenerates to a single line.
    pub fn cells(&self) -> impl Iterator<Item = Point> + Clone {
        self.edges(UNBOUNDED, UNBOUNDED)
    }

    /// The perimeter cells that lie inside `window`, in the same order.
    pub fn cells_within(&self, window: Window) -> impl Iterator<Item = Point> + Clone {
        self.edges(window.rows(), window.cols())
    }

    fn edges(&self, rows: Range<i64>, cols: Range<i64>) -> impl Iterator<Item = Point> + Clone {
        let Point { row: top, col: left } = self.origin;
        let Point {
            row: bottom,
            col: right,
        } = self.bottom_right();

        let (span, inner) = if self.is_empty() {
            (0..0, 0..0)
        } else {
            (
                overlap(left..right + 1, &cols),
                overlap(top + 1..bottom, &rows),
            )
        };
        let pick = |show: bool, range: &Range<i64>| if show { range.clone() } else { 0..0 };

        let top_edge = pick(rows.contains(&top), &span).map(move |col| Point::new(top, col));
        let bottom_edge = pick(self.height > 1 && rows.contains(&bottom), &span)
            .map(move |col| Point::new(bottom, col));
        let left_edge = pick(cols.contains(&left), &inner).map(move |row| Point::new(row, left));
        let right_edge = pick(self.width > 1 && cols.contains(&right), &inner)
            .map(move |row| Point::new(row, right));

        top_edge.chain(bottom_edge).chain(left_edge).chain(right_edge)
    }
}
