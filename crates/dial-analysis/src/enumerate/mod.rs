//! Time enumeration — exhaustive scoring over the 12-hour grid.

pub mod grid;
pub mod types;

pub use grid::{scored_times, ticking_candidates};
pub use types::{MotionModel, ScoredTime};
