//! Critical-point generator for the sweeping second hand.
//!
//! Positions depend on the second piecewise-linearly through a sort, so
//! as the second hand sweeps, a metric extremum can only occur at the
//! second = 0 boundary, where two gap expressions become equal, or
//! where a gap expression crosses 120°. Gaps are formed for every
//! ordering of the three hands, and each pairing yields one linear
//! equation in s.

use dial_core::types::collections::FxHashSet;
use dial_core::Rational;
use tracing::debug;

use super::expr::{symbolic_hand_positions, PosExpr, SecondExpr};

/// Index orders of the three symbolic positions.
const PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// Every symbolic second at which a metric can attain a local extremum,
/// duplicates included. The second = 0 boundary is always yielded first.
pub fn critical_points() -> Vec<SecondExpr> {
    let positions = symbolic_hand_positions();
    let even = PosExpr::constant(Rational::from_int(120));
    let full_turn = PosExpr::constant(Rational::from_int(360));

    let mut points = vec![SecondExpr::constant(Rational::ZERO)];

    for [i, j, k] in PERMUTATIONS {
        let (x, y, z) = (positions[i], positions[j], positions[k]);
        let a = y - x;
        let b = z - y;
        let c = x - z + full_turn;

        for (lhs, rhs) in [(a, b), (a, c), (b, c), (a, even), (b, even), (c, even)] {
            if let Some(root) = solve_for_second(lhs - rhs) {
                points.push(root);
            }
        }
    }

    points
}

/// Deduplicated critical expressions, in first-seen order.
pub fn critical_point_set() -> Vec<SecondExpr> {
    let raw = critical_points();
    let raw_count = raw.len();

    let mut seen = FxHashSet::default();
    let deduped: Vec<SecondExpr> = raw.into_iter().filter(|expr| seen.insert(*expr)).collect();

    debug!(
        raw = raw_count,
        deduped = deduped.len(),
        "critical second expressions"
    );
    deduped
}

/// Solve `expr = 0` for s.
///
/// Returns `None` when the s term vanishes: the two sides are then
/// either identically equal or never equal, and contribute no
/// candidate either way.
fn solve_for_second(expr: PosExpr) -> Option<SecondExpr> {
    if expr.s_coef.is_zero() {
        return None;
    }
    Some(SecondExpr {
        h_coef: -expr.h_coef / expr.s_coef,
        m_coef: -expr.m_coef / expr.s_coef,
        constant: -expr.constant / expr.s_coef,
    })
}
