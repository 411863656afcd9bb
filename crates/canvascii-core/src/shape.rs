//! Drawing primitives.
//!
//! All shapes use `(row, col)` coordinates. Coordinates are signed because a
//! shape may legitimately reach past the canvas edges; extents are unsigned.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: i64,
    pub col: i64,
}

impl Point {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    pub const fn offset(self, d_row: i64, d_col: i64) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Outline rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub origin: Point,
    pub height: u32,
    pub width: u32,
}

impl Rectangle {
    pub const fn new(origin: Point, height: u32, width: u32) -> Self {
        Self {
            origin,
            height,
            width,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    pub fn bottom_right(&self) -> Point {
        self.origin
            .offset(i64::from(self.height) - 1, i64::from(self.width) - 1)
    }
}

/// A discrete segment between two endpoints, given in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    pub fn reversed(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: u32,
}

impl Circle {
    pub const fn new(center: Point, radius: u32) -> Self {
        Self { center, radius }
    }
}
