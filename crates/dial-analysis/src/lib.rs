//! dial-analysis: exact analysis of clock-hand spacing
//!
//! This crate answers one question: at which times are the hour, minute
//! and second hands of an analog clock spread most evenly around the
//! dial? It provides:
//! - Hands: hand positions and the gaps between adjacent hands
//! - Metrics: the two fairness scores minimized over clock times
//! - Symbolic: closed-form critical seconds for the sweeping hand
//! - Enumerate: exhaustive scoring over the 12-hour grid
//! - Engine: the pipeline driver producing ranked reports
//! - Report: console and JSON reporters

pub mod engine;
pub mod enumerate;
pub mod hands;
pub mod metrics;
pub mod report;
pub mod symbolic;

// Re-exports for convenience
pub use engine::{run_analysis, AnalysisReport, MetricRanking, ModelSection};
pub use enumerate::{MotionModel, ScoredTime};
pub use hands::{hand_angles, hand_positions, GapSet, HandPositions};
pub use metrics::Metric;
pub use symbolic::{critical_point_set, critical_points, SecondExpr};
