use super::Window;
use crate::shape::{Circle, Point};

/// Cells of a circle outline, computed with the integer midpoint algorithm.
///
/// Every step of the octant walk yields its eight mirror images, so cells
/// on the axes and diagonals repeat. A zero radius yields the center eight
/// times.
#[derive(Debug, Clone)]
pub struct CircleCells {
    center: Point,
    x: i64,
    y: i64,
    d: i64,
    octant: u8,
}

impl CircleCells {
    pub fn new(circle: Circle) -> Self {
        let radius = i64::from(circle.radius);
        Self {
            center: circle.center,
            x: 0,
            y: radius,
            d: 3 - 2 * radius,
            octant: 0,
        }
    }

    fn mirror(&self) -> Point {
        mirrors(self.center, self.x, self.y)[usize::from(self.octant)]
    }

    fn advance(&mut self) {
        if self.d < 0 {
            self.d += 4 * self.x + 6;
        } else {
            self.d += 4 * (self.x - self.y) + 10;
            self.y -= 1;
        }
        self.x += 1;
    }
}

impl Iterator for CircleCells {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.x > self.y {
            return None;
        }

        let point = self.mirror();
        self.octant += 1;
        if self.octant == 8 {
            self.octant = 0;
            self.advance();
        }
        Some(point)
    }
}

/// The eight images of the octant offset `(x, y)` around `center`.
fn mirrors(center: Point, x: i64, y: i64) -> [Point; 8] {
    [
        center.offset(x, y),
        center.offset(-x, y),
        center.offset(x, -y),
        center.offset(-x, -y),
        center.offset(y, x),
        center.offset(-y, x),
        center.offset(y, -x),
        center.offset(-y, -x),
    ]
}

/// The `y` the midpoint walk holds at step `x`, or `None` once the walk
/// has left its octant.
///
/// The decision variable at `(x, y)` is `F(x+1, y) + F(x+1, y-1)` with
/// `F(x, y) = x² + y² - r²`, so the walk keeps the largest `y` with
/// `y(y-1) <= r² - x² - 1`.
fn octant_height(radius: i64, x: i64) -> Option<i64> {
    if radius == 0 {
        return (x == 0).then_some(0);
    }
    let budget = i128::from(radius).pow(2) - i128::from(x).pow(2) - 1;
    if budget < 0 {
        return None;
    }
    let y = (1 + isqrt((1 + 4 * budget) as u128)) / 2;
    let y = i64::try_from(y).ok()?;
    (x <= y).then_some(y)
}

fn isqrt(n: u128) -> u128 {
    let mut root = (n as f64).sqrt() as u128;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

impl Circle {
    pub fn cells(&self) -> CircleCells {
        CircleCells::new(*self)
    }

    /// Cells of the outline that can land in `window`, plus their mirror
    /// images. Only the walk steps whose row or column offset matches a
    /// row or column of the window are visited, so the cost depends on the
    /// window and not on the radius.
    pub fn cells_within(&self, window: Window) -> impl Iterator<Item = Point> + Clone {
        let center = self.center;
        let radius = i64::from(self.radius);

        let mut steps: Vec<i64> = window
            .rows()
            .map(|row| (row - center.row).abs())
            .chain(window.cols().map(|col| (col - center.col).abs()))
            .collect();
        steps.sort_unstable();
        steps.dedup();

        steps
            .into_iter()
            .map_while(move |x| octant_height(radius, x).map(|y| (x, y)))
            .flat_map(move |(x, y)| mirrors(center, x, y))
    }
}
