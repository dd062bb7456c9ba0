//! Symbolic critical-point derivation for the sweeping second hand.

pub mod expr;
pub mod solver;

pub use expr::{symbolic_hand_positions, PosExpr, SecondExpr};
pub use solver::{critical_point_set, critical_points};
