use std::io::{self, Write};

use canvascii::OutputFormat;
use canvascii::Parsed;
use canvascii::Presenter;
use canvascii::commands;
use canvascii::common::color_init;
use canvascii::common::init_tracing;
use canvascii::common::invocation_span;
use canvascii::handle_invocation;
use canvascii_core::CanvasError;
use canvascii_core::exit_codes;

fn main() {
    let telemetry = init_tracing("warn");
    let code = run();
    drop(telemetry);
    std::process::exit(code);
}

fn run() -> i32 {
    let invocation = match commands::parse(std::env::args_os()) {
        Ok(Parsed::Run(invocation)) => invocation,
        Ok(Parsed::Info(text)) => {
            let mut stdout = io::stdout().lock();
            let _ = stdout.write_all(text.as_bytes());
            let _ = stdout.flush();
            return exit_codes::OK;
        }
        Err(err) => {
            color_init(false);
            return report(&err, OutputFormat::Text);
        }
    };

    color_init(invocation.no_color);
    let _span = invocation_span(&invocation).entered();

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    match handle_invocation(&invocation, stdin, &mut stdout) {
        Ok(()) => exit_codes::OK,
        Err(err) => report(&err, invocation.format),
    }
}

fn report(err: &CanvasError, format: OutputFormat) -> i32 {
    tracing::debug!(kind = err.kind(), code = err.exit_code(), "exiting with error");
    let mut stderr = io::stderr().lock();
    if Presenter::new(format).error(err, &mut stderr).is_err() {
        eprintln!("Error: {}", err);
    }
    err.exit_code()
}
