//! Report data produced by the analysis engine.

use serde::{Deserialize, Serialize};

use crate::enumerate::types::{MotionModel, ScoredTime};
use crate::metrics::Metric;

/// Ranked times for one metric under one motion model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricRanking {
    pub metric: Metric,
    /// Best times, ascending by cost.
    pub times: Vec<ScoredTime>,
}

/// All metric rankings for one motion model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSection {
    pub model: MotionModel,
    pub rankings: Vec<MetricRanking>,
}

/// The full analysis: one section per motion model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub sections: Vec<ModelSection>,
}
