//! Canvas model and rasterization engine for canvascii.
//!
//! A [`Grid`] is built blank or loaded from row-oriented text, mutated by
//! drawing [`Operation`]s (lines, rectangles, Bresenham segments, midpoint
//! circles) and finally rendered as plain text or ANSI colors.

#![deny(clippy::all)]

pub mod error;
mod grid;
mod loader;
pub mod ops;
pub mod params;
mod pixel;
pub mod raster;
pub mod render;
mod shape;

pub use error::CanvasError;
pub use error::Result;
pub use error::exit_codes;
pub use grid::CanvasView;
pub use grid::Grid;
pub use grid::MAX_HEIGHT;
pub use grid::MAX_WIDTH;
pub use grid::validate_dimensions;
pub use ops::Operation;
pub use ops::apply_all;
pub use pixel::BACKGROUND;
pub use pixel::Pen;
pub use pixel::Pixel;
pub use raster::BoundsPolicy;
pub use raster::OutOfBounds;
pub use raster::Window;
pub use render::CanvasSnapshot;
pub use render::render_color;
pub use render::render_plain;
pub use shape::Circle;
pub use shape::Point;
pub use shape::Rectangle;
pub use shape::Segment;
