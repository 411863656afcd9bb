//! Parsing of option values into numbers and shapes.
//!
//! This is the single place where the command-line coordinate order is
//! mapped onto [`Point`]: every option lists the row before the column.

use crate::error::{CanvasError, Result};
use crate::grid::validate_dimensions;
use crate::shape::{Circle, Point, Rectangle, Segment};

/// True for an optional leading `-` followed by one or more ASCII digits.
pub fn is_numeric(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a numeric token. Values beyond the `i32` range are rejected.
pub fn parse_int(token: &str, option: &str) -> Result<i64> {
    if !is_numeric(token) {
        return Err(CanvasError::invalid_value(option));
    }
    token
        .parse::<i32>()
        .map(i64::from)
        .map_err(|_| CanvasError::invalid_value(option))
}

fn parse_extent(value: i64, option: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| CanvasError::invalid_value(option))
}

/// Splits a comma-separated value into exactly `N` integers.
///
/// An empty value or too few items is a missing value; a non-numeric item
/// or trailing extra items is an invalid value.
fn parse_list<const N: usize>(value: &str, option: &str) -> Result<[i64; N]> {
    if value.is_empty() {
        return Err(CanvasError::missing_value(option));
    }

    let mut tokens = value.split(',');
    let mut out = [0i64; N];
    for slot in out.iter_mut() {
        let token = tokens
            .next()
            .ok_or_else(|| CanvasError::missing_value(option))?;
        *slot = parse_int(token, option)?;
    }

    if tokens.next().is_some() {
        return Err(CanvasError::invalid_value(option));
    }
    Ok(out)
}

/// `HEIGHT,WIDTH` for a new blank canvas. Both must be strictly positive
/// and within the canvas limits.
pub fn parse_dimensions(value: &str, option: &str) -> Result<(usize, usize)> {
    let [height, width] = parse_list::<2>(value, option)?;
    if height <= 0 || width <= 0 {
        return Err(CanvasError::invalid_value(option));
    }
    let (height, width) = (height as usize, width as usize);
    validate_dimensions(height, width)?;
    Ok((height, width))
}

/// A single non-negative row or column index.
pub fn parse_index(value: &str, option: &str) -> Result<usize> {
    let [index] = parse_list::<1>(value, option)?;
    usize::try_from(index).map_err(|_| CanvasError::invalid_value(option))
}

/// `ROW,COL,HEIGHT,WIDTH`.
pub fn parse_rectangle(value: &str, option: &str) -> Result<Rectangle> {
    let [row, col, height, width] = parse_list::<4>(value, option)?;
    Ok(Rectangle::new(
        Point::new(row, col),
        parse_extent(height, option)?,
        parse_extent(width, option)?,
    ))
}

/// `ROW1,COL1,ROW2,COL2`.
pub fn parse_segment(value: &str, option: &str) -> Result<Segment> {
    let [row1, col1, row2, col2] = parse_list::<4>(value, option)?;
    Ok(Segment::new(Point::new(row1, col1), Point::new(row2, col2)))
}

/// `ROW,COL,RADIUS`.
pub fn parse_circle(value: &str, option: &str) -> Result<Circle> {
    let [row, col, radius] = parse_list::<3>(value, option)?;
    Ok(Circle::new(Point::new(row, col), parse_extent(radius, option)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_invalid(result: Result<impl std::fmt::Debug>, expected: &str) -> bool {
        matches!(result, Err(CanvasError::InvalidValue { option }) if option == expected)
    }

    fn is_missing(result: Result<impl std::fmt::Debug>, expected: &str) -> bool {
        matches!(result, Err(CanvasError::MissingValue { option }) if option == expected)
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("0"));
        assert!(is_numeric("42"));
        assert!(is_numeric("-7"));
        assert!(is_numeric("007"));

        assert!(!is_numeric(""));
        assert!(!is_numeric("-"));
        assert!(!is_numeric("+3"));
        assert!(!is_numeric("3-"));
        assert!(!is_numeric("1.5"));
        assert!(!is_numeric(" 3"));
        assert!(!is_numeric("--3"));
    }

    #[test]
    fn test_parse_int_overflow() {
        assert_eq!(parse_int("2147483647", "-h").unwrap(), i64::from(i32::MAX));
        assert!(is_invalid(parse_int("2147483648", "-h"), "-h"));
        assert!(is_invalid(parse_int("99999999999999999999", "-h"), "-h"));
    }

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("5,10", "-n").unwrap(), (5, 10));
        assert_eq!(parse_dimensions("40,80", "-n").unwrap(), (40, 80));
    }

    #[test]
    fn test_parse_dimensions_errors() {
        assert!(is_missing(parse_dimensions("", "-n"), "-n"));
        assert!(is_missing(parse_dimensions("5", "-n"), "-n"));
        assert!(is_invalid(parse_dimensions("5,x", "-n"), "-n"));
        assert!(is_invalid(parse_dimensions("0,5", "-n"), "-n"));
        assert!(is_invalid(parse_dimensions("5,-1", "-n"), "-n"));
        assert!(is_invalid(parse_dimensions("5,5,5", "-n"), "-n"));
        assert!(is_invalid(parse_dimensions("5,,5", "-n"), "-n"));
        assert!(matches!(
            parse_dimensions("41,5", "-n"),
            Err(CanvasError::CanvasTooHigh { height: 41 })
        ));
        assert!(matches!(
            parse_dimensions("5,81", "-n"),
            Err(CanvasError::CanvasTooWide { width: 81 })
        ));
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("3", "-h").unwrap(), 3);
        assert!(is_invalid(parse_index("-1", "-h"), "-h"));
        assert!(is_invalid(parse_index("1,2", "-v"), "-v"));
        assert!(is_invalid(parse_index("abc", "-v"), "-v"));
        assert!(is_missing(parse_index("", "-v"), "-v"));
    }

    #[test]
    fn test_parse_rectangle_keeps_row_col_order() {
        let rect = parse_rectangle("1,2,3,4", "-r").unwrap();
        assert_eq!(rect.origin, Point::new(1, 2));
        assert_eq!(rect.height, 3);
        assert_eq!(rect.width, 4);
    }

    #[test]
    fn test_parse_rectangle_errors() {
        assert!(is_missing(parse_rectangle("1,2,3", "-r"), "-r"));
        assert!(is_invalid(parse_rectangle("1,2,-3,4", "-r"), "-r"));
        assert!(is_invalid(parse_rectangle("1,2,3,-4", "-r"), "-r"));
        assert!(is_invalid(parse_rectangle("1,2,3,4,5", "-r"), "-r"));
        assert!(parse_rectangle("-1,-2,0,0", "-r").is_ok());
    }

    #[test]
    fn test_parse_segment() {
        let seg = parse_segment("0,1,-2,3", "-l").unwrap();
        assert_eq!(seg.a, Point::new(0, 1));
        assert_eq!(seg.b, Point::new(-2, 3));
        assert!(is_missing(parse_segment("0,1,2", "-l"), "-l"));
        assert!(is_invalid(parse_segment("0,1,2,q", "-l"), "-l"));
    }

    #[test]
    fn test_parse_circle() {
        let circle = parse_circle("5,6,0", "-c").unwrap();
        assert_eq!(circle.center, Point::new(5, 6));
        assert_eq!(circle.radius, 0);
        assert!(is_invalid(parse_circle("5,6,-1", "-c"), "-c"));
        assert!(is_missing(parse_circle("5,6", "-c"), "-c"));
    }
}
