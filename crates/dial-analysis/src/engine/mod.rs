//! Pipeline driver — builds candidate sets, scores the grid, ranks results.

pub mod types;

use dial_core::config::ReportOptions;
use tracing::{debug, info};

use crate::enumerate::grid::{scored_times, ticking_candidates};
use crate::enumerate::types::MotionModel;
use crate::metrics::Metric;
use crate::symbolic::solver::critical_point_set;

pub use types::{AnalysisReport, MetricRanking, ModelSection};

/// Run the full analysis: both motion models, both metrics, ranked.
///
/// The sweeping candidate set is derived once and reused; the whole
/// computation is deterministic, so identical options yield identical
/// reports.
pub fn run_analysis(options: &ReportOptions) -> AnalysisReport {
    let top_n = options.effective_top_n();

    let sweeping = critical_point_set();
    info!(candidates = sweeping.len(), "sweeping candidate set ready");

    let mut sections = Vec::new();
    for model in [MotionModel::Sweeping, MotionModel::Ticking] {
        let candidates = match model {
            MotionModel::Sweeping => sweeping.clone(),
            MotionModel::Ticking => ticking_candidates(),
        };

        let mut rankings = Vec::new();
        for metric in [Metric::MaxMin, Metric::MinMax] {
            let mut times = scored_times(&candidates, metric);
            times.sort_unstable();
            times.truncate(top_n);
            debug!(
                model = model.name(),
                metric = metric.name(),
                kept = times.len(),
                "ranked block"
            );
            rankings.push(MetricRanking { metric, times });
        }
        sections.push(ModelSection { model, rankings });
    }

    AnalysisReport { sections }
}
