//! Report generation errors.

/// Errors that can occur while rendering or emitting a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
