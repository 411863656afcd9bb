//! Canvas errors with structured context.
//!
//! Every failure the engine can detect maps to one variant here. The
//! process exit code of each variant is stable and matches the canvascii
//! error taxonomy (1 to 7), so scripts can tell failures apart.

use std::io;

use serde_json::{Value, json};
use thiserror::Error;

use crate::grid::{MAX_HEIGHT, MAX_WIDTH};

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const WRONG_PIXEL: i32 = 1;
    pub const CANVAS_TOO_HIGH: i32 = 2;
    pub const CANVAS_TOO_WIDE: i32 = 3;
    pub const CANVAS_NON_RECTANGULAR: i32 = 4;
    pub const UNRECOGNIZED_OPTION: i32 = 5;
    pub const MISSING_VALUE: i32 = 6;
    pub const INVALID_VALUE: i32 = 7;
    /// sysexits.h `EX_IOERR`.
    pub const IO_ERROR: i32 = 74;
}

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("wrong pixel value {0}")]
    WrongPixel(char),

    #[error("canvas is too high (max height: 40)")]
    CanvasTooHigh { height: usize },

    #[error("canvas is too wide (max width: 80)")]
    CanvasTooWide { width: usize },

    #[error("canvas should be rectangular")]
    NonRectangularCanvas {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognized option {0}")]
    UnrecognizedOption(String),

    #[error("missing value with option {option}")]
    MissingValue { option: String },

    #[error("incorrect value with option {option}")]
    InvalidValue { option: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CanvasError>;

impl CanvasError {
    pub fn missing_value(option: &str) -> Self {
        CanvasError::MissingValue {
            option: option.to_string(),
        }
    }

    pub fn invalid_value(option: &str) -> Self {
        CanvasError::InvalidValue {
            option: option.to_string(),
        }
    }

    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CanvasError::WrongPixel(_) => exit_codes::WRONG_PIXEL,
            CanvasError::CanvasTooHigh { .. } => exit_codes::CANVAS_TOO_HIGH,
            CanvasError::CanvasTooWide { .. } => exit_codes::CANVAS_TOO_WIDE,
            CanvasError::NonRectangularCanvas { .. } => exit_codes::CANVAS_NON_RECTANGULAR,
            CanvasError::UnrecognizedOption(_) => exit_codes::UNRECOGNIZED_OPTION,
            CanvasError::MissingValue { .. } => exit_codes::MISSING_VALUE,
            CanvasError::InvalidValue { .. } => exit_codes::INVALID_VALUE,
            CanvasError::Io(_) => exit_codes::IO_ERROR,
        }
    }

    /// Stable snake_case name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CanvasError::WrongPixel(_) => "wrong_pixel",
            CanvasError::CanvasTooHigh { .. } => "canvas_too_high",
            CanvasError::CanvasTooWide { .. } => "canvas_too_wide",
            CanvasError::NonRectangularCanvas { .. } => "canvas_non_rectangular",
            CanvasError::UnrecognizedOption(_) => "unrecognized_option",
            CanvasError::MissingValue { .. } => "missing_value",
            CanvasError::InvalidValue { .. } => "invalid_value",
            CanvasError::Io(_) => "io",
        }
    }

    /// Returns structured context about the error for debugging.
    pub fn context(&self) -> Value {
        match self {
            CanvasError::WrongPixel(pixel) => json!({ "pixel": pixel.to_string() }),
            CanvasError::CanvasTooHigh { height } => {
                json!({ "height": height, "max_height": MAX_HEIGHT })
            }
            CanvasError::CanvasTooWide { width } => {
                json!({ "width": width, "max_width": MAX_WIDTH })
            }
            CanvasError::NonRectangularCanvas {
                line,
                expected,
                found,
            } => json!({ "line": line, "expected_width": expected, "found_width": found }),
            CanvasError::UnrecognizedOption(option) => json!({ "option": option }),
            CanvasError::MissingValue { option } | CanvasError::InvalidValue { option } => {
                json!({ "option": option })
            }
            CanvasError::Io(e) => json!({ "reason": e.to_string() }),
        }
    }

    /// Returns a helpful suggestion for resolving the error.
    pub fn suggestion(&self) -> String {
        match self {
            CanvasError::WrongPixel(_) => {
                "Canvas rows may only contain '.' and the digits 0 to 7.".to_string()
            }
            CanvasError::CanvasTooHigh { .. } => {
                format!("Use at most {} rows.", MAX_HEIGHT)
            }
            CanvasError::CanvasTooWide { .. } => {
                format!("Use at most {} columns.", MAX_WIDTH)
            }
            CanvasError::NonRectangularCanvas { line, expected, .. } => format!(
                "Line {} must have the same width as the first line ({} columns).",
                line, expected
            ),
            CanvasError::UnrecognizedOption(_) => {
                "Run without arguments to see the supported options.".to_string()
            }
            CanvasError::MissingValue { option } => {
                format!("Option {} expects a value; see the usage line.", option)
            }
            CanvasError::InvalidValue { option } => format!(
                "Check the numbers given to {}: they must be integers within the canvas.",
                option
            ),
            CanvasError::Io(_) => "Check that stdin is readable and stdout is writable.".to_string(),
        }
    }

    /// Returns structured JSON representation of this error.
    pub fn to_json(&self) -> Value {
        json!({
            "code": self.exit_code(),
            "kind": self.kind(),
            "message": self.to_string(),
            "context": self.context(),
            "suggestion": self.suggestion()
        })
    }
}
