//! Drawing operations as named by their command-line flags.

use tracing::debug;

use crate::error::{CanvasError, Result};
use crate::grid::Grid;
use crate::params;
use crate::pixel::Pen;
use crate::raster::BoundsPolicy;
use crate::shape::{Circle, Rectangle, Segment};

pub const PEN: &str = "-p";
pub const HORIZONTAL: &str = "-h";
pub const VERTICAL: &str = "-v";
pub const RECTANGLE: &str = "-r";
pub const SEGMENT: &str = "-l";
pub const CIRCLE: &str = "-c";

/// One parsed drawing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SetPen(Pen),
    Horizontal(usize),
    Vertical(usize),
    Rectangle(Rectangle),
    Segment(Segment),
    Circle(Circle),
}

impl Operation {
    /// Parses the value of a drawing flag.
    pub fn parse(flag: &str, value: &str) -> Result<Self> {
        let op = match flag {
            PEN => Operation::SetPen(Pen::parse(value, flag)?),
            HORIZONTAL => Operation::Horizontal(params::parse_index(value, flag)?),
            VERTICAL => Operation::Vertical(params::parse_index(value, flag)?),
            RECTANGLE => Operation::Rectangle(params::parse_rectangle(value, flag)?),
            SEGMENT => Operation::Segment(params::parse_segment(value, flag)?),
            CIRCLE => Operation::Circle(params::parse_circle(value, flag)?),
            other => return Err(CanvasError::UnrecognizedOption(other.to_string())),
        };
        Ok(op)
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Operation::SetPen(_) => PEN,
            Operation::Horizontal(_) => HORIZONTAL,
            Operation::Vertical(_) => VERTICAL,
            Operation::Rectangle(_) => RECTANGLE,
            Operation::Segment(_) => SEGMENT,
            Operation::Circle(_) => CIRCLE,
        }
    }

    /// Applies the operation to `grid`. Out-of-canvas drawings are
    /// reported as an invalid value of the operation's flag.
    pub fn apply(&self, grid: &mut Grid, policy: BoundsPolicy) -> Result<()> {
        let outcome = match self {
            Operation::SetPen(pen) => {
                grid.set_pen(*pen);
                Ok(())
            }
            Operation::Horizontal(row) => grid.draw_horizontal(*row),
            Operation::Vertical(col) => grid.draw_vertical(*col),
            Operation::Rectangle(rect) => grid.draw_rectangle(rect, policy).map(drop),
            Operation::Segment(segment) => grid.draw_segment(segment, policy).map(drop),
            Operation::Circle(circle) => grid.draw_circle(circle, policy).map(drop),
        };

        outcome.map_err(|e| {
            debug!(flag = self.flag(), error = %e, "operation rejected");
            CanvasError::invalid_value(self.flag())
        })?;
        debug!(op = ?self, pen = %grid.pen(), "operation applied");
        Ok(())
    }
}

/// Parses and applies a sequence of `(flag, value)` pairs in order,
/// stopping at the first failure.
pub fn apply_all<'a, I>(grid: &mut Grid, steps: I, policy: BoundsPolicy) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    for (flag, value) in steps {
        Operation::parse(flag, value)?.apply(grid, policy)?;
    }
    Ok(())
}
