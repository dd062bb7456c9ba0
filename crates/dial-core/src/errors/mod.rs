//! Error handling for Dial.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod rational_error;
pub mod report_error;

pub use rational_error::RationalParseError;
pub use report_error::ReportError;
