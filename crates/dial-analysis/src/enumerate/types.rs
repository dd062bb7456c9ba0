//! Core types for time enumeration.

use std::fmt;

use dial_core::Rational;
use serde::{Deserialize, Serialize};

/// How the second hand moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotionModel {
    /// Continuous second hand; extrema live at the critical expressions.
    Sweeping,
    /// The second hand rests on whole seconds only.
    Ticking,
}

impl MotionModel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sweeping => "Sweeping",
            Self::Ticking => "Ticking",
        }
    }
}

impl fmt::Display for MotionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A clock time with its metric cost.
///
/// Ordered by cost first, then hour, minute and second, so sorting a
/// batch ranks the best (lowest-cost) times first with a positional
/// tie-break. The field order carries that ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScoredTime {
    /// Metric cost; lower is better.
    pub cost: Rational,
    pub hour: u8,
    pub minute: u8,
    /// Second within the minute; fractional under the sweeping model.
    pub second: Rational,
}
