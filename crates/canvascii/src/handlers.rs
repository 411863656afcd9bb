//! Runs one invocation: builds the canvas, applies the drawing steps and
//! hands the result to the presenter.

use std::io::{BufRead, Write};

use tracing::debug;
use tracing::info;

use canvascii_core::CanvasError;
use canvascii_core::Grid;
use canvascii_core::apply_all;
use canvascii_core::params;

use crate::commands::CanvasSource;
use crate::commands::Invocation;
use crate::presenter::Presenter;
use crate::presenter::RenderMode;

const NEW_FLAG: &str = "-n";

fn build_canvas<R: BufRead>(source: &CanvasSource, input: R) -> Result<Grid, CanvasError> {
    match source {
        CanvasSource::Blank(dimensions) => {
            let (height, width) = params::parse_dimensions(dimensions, NEW_FLAG)?;
            Grid::blank(height, width)
        }
        CanvasSource::Stdin => Grid::load(input),
    }
}

/// Executes `inv`, reading the canvas from `input` when no `-n` was given
/// and writing the rendered canvas to `out`. Nothing is written on error.
pub fn handle_invocation<R, W>(inv: &Invocation, input: R, out: &mut W) -> Result<(), CanvasError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut grid = build_canvas(&inv.source, input)?;
    debug!(
        height = grid.height(),
        width = grid.width(),
        source = ?inv.source,
        "canvas ready"
    );

    let presenter = Presenter::new(inv.format);

    if inv.show_only {
        if !inv.steps.is_empty() {
            info!(skipped = inv.steps.len(), "show requested, drawing options ignored");
        }
        presenter.canvas(&grid, RenderMode::Plain, out)?;
        return Ok(());
    }

    apply_all(
        &mut grid,
        inv.steps.iter().map(|step| (step.flag, step.value.as_str())),
        inv.policy,
    )?;

    let mode = if inv.color {
        RenderMode::Color
    } else {
        RenderMode::Plain
    };
    presenter.canvas(&grid, mode, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use canvascii_core::BoundsPolicy;

    use super::*;
    use crate::commands::OutputFormat;
    use crate::commands::Step;

    fn invocation(source: CanvasSource, steps: &[(&'static str, &str)]) -> Invocation {
        Invocation {
            source,
            show_only: false,
            color: false,
            steps: steps
                .iter()
                .map(|&(flag, value)| Step {
                    flag,
                    value: value.to_string(),
                })
                .collect(),
            policy: BoundsPolicy::Clip,
            format: OutputFormat::Text,
            no_color: true,
        }
    }

    fn run(inv: &Invocation, input: &str) -> Result<String, CanvasError> {
        let mut out = Vec::new();
        handle_invocation(inv, input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_blank_canvas() {
        let inv = invocation(CanvasSource::Blank("2,3".to_string()), &[]);
        assert_eq!(run(&inv, "ignored").unwrap(), "...\n...\n");
    }

    #[test]
    fn test_stdin_canvas_with_steps() {
        let inv = invocation(CanvasSource::Stdin, &[("-p", "2"), ("-v", "0")]);
        assert_eq!(run(&inv, "...\n...\n").unwrap(), "2..\n2..\n");
    }

    #[test]
    fn test_show_skips_drawing() {
        let mut inv = invocation(CanvasSource::Stdin, &[("-h", "0")]);
        inv.show_only = true;
        assert_eq!(run(&inv, "1.\n.1\n").unwrap(), "1.\n.1\n");
    }

    #[test]
    fn test_color_mode() {
        let mut inv = invocation(CanvasSource::Blank("1,1".to_string()), &[("-h", "0")]);
        inv.color = true;
        assert_eq!(run(&inv, "").unwrap(), "\x1b[47m \x1b[0m\n");
    }

    #[test]
    fn test_bad_dimensions() {
        let inv = invocation(CanvasSource::Blank("0,4".to_string()), &[]);
        let err = run(&inv, "").unwrap_err();
        assert!(matches!(err, CanvasError::InvalidValue { ref option } if option == "-n"));
    }

    #[test]
    fn test_error_writes_nothing() {
        let inv = invocation(CanvasSource::Stdin, &[("-h", "0"), ("-h", "9")]);
        let mut out = Vec::new();
        let err = handle_invocation(&inv, "...\n".as_bytes(), &mut out).unwrap_err();
        assert_eq!(err.exit_code(), 7);
        assert!(out.is_empty());
    }

    #[test]
    fn test_strict_rejects_overflowing_shape() {
        let mut inv = invocation(CanvasSource::Blank("3,3".to_string()), &[("-c", "1,1,2")]);
        assert!(run(&inv, "").is_ok());
        inv.policy = BoundsPolicy::Reject;
        let err = run(&inv, "").unwrap_err();
        assert!(matches!(err, CanvasError::InvalidValue { ref option } if option == "-c"));
    }

    #[test]
    fn test_loader_errors_surface() {
        let inv = invocation(CanvasSource::Stdin, &[]);
        assert_eq!(run(&inv, "..\n.\n").unwrap_err().exit_code(), 4);
        assert_eq!(run(&inv, ".x\n").unwrap_err().exit_code(), 1);
    }
}
