//! Reporters — output formats for the ranked analysis.

pub mod console;
pub mod json;

use dial_core::errors::ReportError;

use crate::engine::types::AnalysisReport;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &AnalysisReport) -> Result<String, ReportError>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "console" => Some(Box::new(console::ConsoleReporter)),
        "json" => Some(Box::new(json::JsonReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["console", "json"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_knows_every_format() {
        for &format in available_formats() {
            let reporter = create_reporter(format).expect("listed format must construct");
            assert_eq!(reporter.name(), format);
        }
        assert!(create_reporter("html").is_none());
    }
}
