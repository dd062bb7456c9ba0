//! Report configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the ranked report.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportOptions {
    /// Number of top-ranked times kept per block. Default: 16.
    pub top_n: Option<usize>,
}

impl ReportOptions {
    /// Returns the effective block depth, defaulting to 16.
    pub fn effective_top_n(&self) -> usize {
        self.top_n.unwrap_or(16)
    }
}
