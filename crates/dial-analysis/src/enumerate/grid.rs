//! Exhaustive grid search over the 12-hour dial.

use dial_core::Rational;
use tracing::debug;

use super::types::ScoredTime;
use crate::metrics::Metric;
use crate::symbolic::expr::SecondExpr;

/// Candidate seconds for the ticking model: the whole seconds 0..=59.
pub fn ticking_candidates() -> Vec<SecondExpr> {
    (0..60)
        .map(|second| SecondExpr::constant(Rational::from_int(second)))
        .collect()
}

/// Score every candidate second for every hour and minute.
///
/// Candidates are substituted per (hour, minute); seconds outside
/// `[0, 60)` are discarded. 12 × 60 × |candidates| evaluations —
/// exactness matters more than speed at this scale.
pub fn scored_times(candidates: &[SecondExpr], metric: Metric) -> Vec<ScoredTime> {
    let upper = Rational::from_int(60);
    let mut times = Vec::new();

    for hour in 0..12u8 {
        for minute in 0..60u8 {
            for expr in candidates {
                let second = expr.eval(hour, minute);
                if second < Rational::ZERO || second >= upper {
                    continue;
                }
                let cost = metric.evaluate(hour, minute, second);
                times.push(ScoredTime {
                    cost,
                    hour,
                    minute,
                    second,
                });
            }
        }
    }

    debug!(
        metric = metric.name(),
        scored = times.len(),
        "grid enumeration complete"
    );
    times
}
