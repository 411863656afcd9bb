//! Pixel alphabet: the background dot and the eight pen colors.

use std::fmt;

use crate::error::{CanvasError, Result};
use crate::params;

pub const BACKGROUND: char = '.';

/// A drawing color, one of the digits `0..=7`.
///
/// The digit doubles as the ANSI color index used by the color renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pen(u8);

impl Pen {
    pub const MAX: u8 = 7;

    pub fn new(index: u8) -> Option<Self> {
        (index <= Self::MAX).then_some(Pen(index))
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='7' => Some(Pen(c as u8 - b'0')),
            _ => None,
        }
    }

    /// Parses the value of a pen option.
    ///
    /// The whole token must be an integer between 0 and 7; the pen is then
    /// its first character, so `"07"` selects pen `0`.
    pub fn parse(token: &str, option: &str) -> Result<Self> {
        let value = params::parse_int(token, option)?;
        if !(0..=i64::from(Self::MAX)).contains(&value) {
            return Err(CanvasError::invalid_value(option));
        }
        token
            .chars()
            .next()
            .and_then(Pen::from_char)
            .ok_or_else(|| CanvasError::invalid_value(option))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl Default for Pen {
    fn default() -> Self {
        Pen(7)
    }
}

impl fmt::Display for Pen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One cell of a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pixel {
    #[default]
    Background,
    Mark(Pen),
}

impl Pixel {
    /// Validates a raw character: `'.'` or a digit between `'0'` and `'7'`.
    pub fn from_char(c: char) -> Result<Self> {
        if c == BACKGROUND {
            return Ok(Pixel::Background);
        }
        Pen::from_char(c)
            .map(Pixel::Mark)
            .ok_or(CanvasError::WrongPixel(c))
    }

    pub fn as_char(self) -> char {
        match self {
            Pixel::Background => BACKGROUND,
            Pixel::Mark(pen) => pen.as_char(),
        }
    }

    pub fn is_background(self) -> bool {
        matches!(self, Pixel::Background)
    }
}

impl From<Pen> for Pixel {
    fn from(pen: Pen) -> Self {
        Pixel::Mark(pen)
    }
}
