//! Fairness metrics over the gaps between hands.
//!
//! Both metrics are minimized; 0 would mean a perfect 120/120/120
//! split. `max_min` keeps the inherited "120 minus smallest gap" form:
//! it rewards pushing the worst (smallest) gap toward an even spread.

use std::fmt;

use dial_core::Rational;
use serde::{Deserialize, Serialize};

use crate::hands::angles::hand_angles;
use crate::hands::positions::hand_positions;

/// Scoring functions minimized over clock times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// 120 minus the smallest gap.
    MaxMin,
    /// Largest absolute deviation of any gap from 120°.
    MinMax,
}

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MaxMin => "max_min",
            Self::MinMax => "min_max",
        }
    }

    /// Evaluate this metric at a clock time.
    pub fn evaluate(&self, hour: u8, minute: u8, second: Rational) -> Rational {
        match self {
            Self::MaxMin => max_min(hour, minute, second),
            Self::MinMax => min_max(hour, minute, second),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// (120 minus) the minimum angle between clock hands.
pub fn max_min(hour: u8, minute: u8, second: Rational) -> Rational {
    let gaps = hand_angles(&hand_positions(hour, minute, second));
    Rational::from_int(120) - gaps.smallest()
}

/// Maximum deviation from 120° of the angles between clock hands.
pub fn min_max(hour: u8, minute: u8, second: Rational) -> Rational {
    let gaps = hand_angles(&hand_positions(hour, minute, second));
    gaps.max_deviation_from(Rational::from_int(120))
}
