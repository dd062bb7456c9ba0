//! JSON reporter — structured machine-readable output.

use serde_json::json;

use dial_core::errors::ReportError;

use super::Reporter;
use crate::engine::types::AnalysisReport;

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &AnalysisReport) -> Result<String, ReportError> {
        let sections: Vec<serde_json::Value> = report
            .sections
            .iter()
            .map(|section| {
                json!({
                    "model": section.model.name(),
                    "rankings": section.rankings.iter().map(|ranking| json!({
                        "metric": ranking.metric.name(),
                        "times": ranking.times.iter().map(|time| json!({
                            "hour": time.hour,
                            "minute": time.minute,
                            "second": time.second.to_string(),
                            "cost": time.cost.to_string(),
                        })).collect::<Vec<_>>(),
                    })).collect::<Vec<_>>(),
                })
            })
            .collect();

        let output = json!({
            "section_count": sections.len(),
            "sections": sections,
        });

        Ok(serde_json::to_string_pretty(&output)?)
    }
}
