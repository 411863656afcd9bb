pub mod color;
pub mod telemetry;

pub use color::Colors;
pub use color::init as color_init;
pub use telemetry::TelemetryGuard;
pub use telemetry::init_tracing;
pub use telemetry::invocation_span;
