//! Logging and diagnostics.

pub mod setup;

pub use setup::init_tracing;
