//! End-to-end tests of the canvascii binary.

mod common;

use std::time::Duration;

use common::blank;
use common::canvascii;
use common::run;
use common::run_with_canvas;
use predicates::prelude::*;

// =============================================================================
// Help and canvas sources
// =============================================================================

#[test]
fn test_no_arguments_prints_usage() {
    run(&[])
        .success()
        .stdout(predicate::str::contains("Usage: ./canvascii [-n HEIGHT,WIDTH]"))
        .stdout(predicate::str::contains("Drawing options"));
}

#[test]
fn test_long_help() {
    run(&["--help"])
        .success()
        .stdout(predicate::str::contains("--rectangle"));
}

#[test]
fn test_new_canvas() {
    run(&["-n", "3,5"]).success().stdout(blank(3, 5));
}

#[test]
fn test_new_canvas_at_limits() {
    run(&["-n", "40,80"]).success().stdout(blank(40, 80));
}

#[test]
fn test_new_ignores_stdin() {
    run_with_canvas(&["-n", "2,2"], "xyz\n")
        .success()
        .stdout(blank(2, 2));
}

#[test]
fn test_new_after_drawing_options() {
    run(&["-h", "0", "-n", "2,3"])
        .success()
        .stdout("777\n...\n");
}

#[test]
fn test_show_prints_stdin_canvas() {
    run_with_canvas(&["-s"], "..1\n2..\n")
        .success()
        .stdout("..1\n2..\n");
}

#[test]
fn test_show_ignores_drawing_options() {
    run_with_canvas(&["-h", "0", "-s"], "...\n...\n")
        .success()
        .stdout(blank(2, 3));
}

#[test]
fn test_crlf_canvas() {
    run_with_canvas(&["-s"], "..\r\n.5\r\n")
        .success()
        .stdout("..\n.5\n");
}

#[test]
fn test_empty_stdin_is_empty_canvas() {
    run_with_canvas(&["-s"], "").success().stdout("");
}

// =============================================================================
// Drawing
// =============================================================================

#[test]
fn test_horizontal_line_with_pen() {
    run(&["-n", "5,5", "-p", "3", "-h", "2"])
        .success()
        .stdout(".....\n.....\n33333\n.....\n.....\n");
}

#[test]
fn test_vertical_line_default_pen() {
    run(&["-n", "3,4", "-v", "1"])
        .success()
        .stdout(".7..\n.7..\n.7..\n");
}

#[test]
fn test_options_apply_in_order() {
    run(&["-n", "3,3", "-p", "1", "-h", "1", "-p", "2", "-v", "1"])
        .success()
        .stdout(".2.\n121\n.2.\n");
}

#[test]
fn test_rectangle() {
    run(&["-n", "4,6", "-r", "0,1,4,4"])
        .success()
        .stdout(".7777.\n.7..7.\n.7..7.\n.7777.\n");
}

#[test]
fn test_rectangle_is_clipped() {
    run(&["-n", "3,3", "-r", "-1,-1,3,3"])
        .success()
        .stdout(".7.\n77.\n...\n");
}

#[test]
fn test_segment() {
    run(&["-n", "5,5", "-l", "0,0,3,0"])
        .success()
        .stdout("7....\n7....\n7....\n7....\n.....\n");
}

#[test]
fn test_diagonal_segment_long_alias() {
    run(&["-n", "3,3", "--line", "2,0,0,2"])
        .success()
        .stdout("..7\n.7.\n7..\n");
}

#[test]
fn test_circle_radius_zero() {
    run(&["-n", "3,3", "-c", "1,1,0"])
        .success()
        .stdout("...\n.7.\n...\n");
}

#[test]
fn test_circle_radius_one() {
    run(&["-n", "3,3", "-p", "4", "-c", "1,1,1"])
        .success()
        .stdout(".4.\n4.4\n.4.\n");
}

#[test]
fn test_huge_circle_is_clipped() {
    canvascii()
        .args(["-n", "5,5", "-c", "2,2,2147483647"])
        .write_stdin("")
        .timeout(Duration::from_secs(5))
        .assert()
        .success()
        .stdout(blank(5, 5));
}

#[test]
fn test_huge_line_is_clipped() {
    canvascii()
        .args(["-n", "3,3", "-p", "2", "-l", "-2147483648,1,2147483647,1"])
        .write_stdin("")
        .timeout(Duration::from_secs(5))
        .assert()
        .success()
        .stdout(".2.\n.2.\n.2.\n");
}

#[test]
fn test_drawing_on_stdin_canvas() {
    run_with_canvas(&["-p", "0", "-h", "0"], "12\n34\n")
        .success()
        .stdout("00\n34\n");
}

#[test]
fn test_color_output() {
    run(&["-n", "1,2", "-p", "1", "-v", "0", "-k"])
        .success()
        .stdout("\x1b[41m \x1b[0m \x1b[0m\n");
}

#[test]
fn test_json_output() {
    let assert = run(&["-n", "2,2", "-p", "5", "-h", "1", "--format", "json"]).success();
    let value: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["height"], 2);
    assert_eq!(value["width"], 2);
    assert_eq!(value["pen"], "5");
    assert_eq!(value["rows"], serde_json::json!(["..", "55"]));
}

// =============================================================================
// Errors and exit codes
// =============================================================================

#[test]
fn test_wrong_pixel() {
    run_with_canvas(&["-s"], "..\n.a\n")
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Error: wrong pixel value a"))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_canvas_too_high() {
    run_with_canvas(&["-s"], &blank(41, 3))
        .code(2)
        .stderr(predicate::str::contains("canvas is too high (max height: 40)"));
}

#[test]
fn test_new_canvas_too_high() {
    run(&["-n", "41,10"]).code(2);
}

#[test]
fn test_canvas_too_wide() {
    run_with_canvas(&["-s"], &blank(2, 81))
        .code(3)
        .stderr(predicate::str::contains("canvas is too wide (max width: 80)"));
}

#[test]
fn test_non_rectangular() {
    run_with_canvas(&["-s"], "...\n..\n")
        .code(4)
        .stderr(predicate::str::contains("canvas should be rectangular"));
}

#[test]
fn test_unrecognized_option() {
    run(&["-n", "3,3", "-z"])
        .code(5)
        .stderr(predicate::str::contains("unrecognized option -z"));
}

#[test]
fn test_missing_value() {
    run(&["-n", "3,3", "-h"])
        .code(6)
        .stderr(predicate::str::contains("missing value with option -h"));
}

#[test]
fn test_missing_list_items() {
    run(&["-n", "3,3", "-c", "1,1"])
        .code(6)
        .stderr(predicate::str::contains("missing value with option -c"));
}

#[test]
fn test_invalid_pen() {
    run(&["-n", "3,3", "-p", "8"])
        .code(7)
        .stderr(predicate::str::contains("incorrect value with option -p"));
}

#[test]
fn test_line_outside_canvas() {
    run(&["-n", "3,3", "-v", "3"])
        .code(7)
        .stdout("")
        .stderr(predicate::str::contains("incorrect value with option -v"));
}

#[test]
fn test_non_numeric_dimensions() {
    run(&["-n", "3,x"])
        .code(7)
        .stderr(predicate::str::contains("incorrect value with option -n"));
}

#[test]
fn test_strict_rejects_overflowing_circle() {
    run(&["-n", "3,3", "--strict", "-c", "1,1,3"])
        .code(7)
        .stderr(predicate::str::contains("incorrect value with option -c"));
}

#[test]
fn test_strict_from_environment() {
    canvascii()
        .env("CANVASCII_STRICT", "true")
        .args(["-n", "3,3", "-l", "0,0,5,5"])
        .assert()
        .code(7);
}

#[test]
fn test_json_error() {
    let assert = run(&["-n", "3,3", "--format", "json", "-r", "0,0,-1,2"]).code(7);
    let value: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stderr).unwrap();
    assert_eq!(value["code"], 7);
    assert_eq!(value["kind"], "invalid_value");
}

#[test]
fn test_no_color_diagnostics() {
    run(&["--no-color", "-n", "0,3"])
        .code(7)
        .stderr(predicate::str::starts_with("Error: incorrect value with option -n"));
}

#[test]
fn test_debug_log_names_the_invocation() {
    canvascii()
        .env("RUST_LOG", "debug")
        .args(["-n", "2,2", "-h", "0", "-v", "1"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("77\n.7\n")
        .stderr(predicate::str::contains("canvascii{"))
        .stderr(predicate::str::contains("steps=2"));
}
