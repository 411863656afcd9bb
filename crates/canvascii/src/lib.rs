//! Command-line front end for the canvascii drawing engine.

#![deny(clippy::all)]

pub mod commands;
pub mod common;
pub mod handlers;
pub mod presenter;

pub use commands::Invocation;
pub use commands::OutputFormat;
pub use commands::Parsed;
pub use handlers::handle_invocation;
pub use presenter::Presenter;
