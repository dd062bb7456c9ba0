//! Linear symbolic forms over the free variables h, m, s.
//!
//! Hand positions are linear in all three variables and stay linear
//! through gap subtraction, so every equation the solver sees has the
//! closed form `s_coef·s + h_coef·h + m_coef·m + constant`. No general
//! symbolic-algebra engine is needed.

use std::ops::{Add, Sub};

use dial_core::Rational;

/// A hand position (or gap) as a linear form in h, m, s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosExpr {
    pub s_coef: Rational,
    pub h_coef: Rational,
    pub m_coef: Rational,
    pub constant: Rational,
}

impl PosExpr {
    /// A constant expression with no variable terms.
    pub fn constant(value: Rational) -> Self {
        Self {
            s_coef: Rational::ZERO,
            h_coef: Rational::ZERO,
            m_coef: Rational::ZERO,
            constant: value,
        }
    }
}

impl Add for PosExpr {
    type Output = PosExpr;

    fn add(self, rhs: PosExpr) -> PosExpr {
        PosExpr {
            s_coef: self.s_coef + rhs.s_coef,
            h_coef: self.h_coef + rhs.h_coef,
            m_coef: self.m_coef + rhs.m_coef,
            constant: self.constant + rhs.constant,
        }
    }
}

impl Sub for PosExpr {
    type Output = PosExpr;

    fn sub(self, rhs: PosExpr) -> PosExpr {
        PosExpr {
            s_coef: self.s_coef - rhs.s_coef,
            h_coef: self.h_coef - rhs.h_coef,
            m_coef: self.m_coef - rhs.m_coef,
            constant: self.constant - rhs.constant,
        }
    }
}

/// The three hand positions with hour, minute and second left free.
///
/// Same formulas as the numeric calculator: hour = 30h + m/2 + s/120,
/// minute = 6m + s/10, second = 6s.
pub fn symbolic_hand_positions() -> [PosExpr; 3] {
    [
        PosExpr {
            s_coef: Rational::new(1, 120),
            h_coef: Rational::from_int(30),
            m_coef: Rational::new(1, 2),
            constant: Rational::ZERO,
        },
        PosExpr {
            s_coef: Rational::new(1, 10),
            h_coef: Rational::ZERO,
            m_coef: Rational::from_int(6),
            constant: Rational::ZERO,
        },
        PosExpr {
            s_coef: Rational::from_int(6),
            h_coef: Rational::ZERO,
            m_coef: Rational::ZERO,
            constant: Rational::ZERO,
        },
    ]
}

/// A second-hand value as a function of hour and minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecondExpr {
    pub h_coef: Rational,
    pub m_coef: Rational,
    pub constant: Rational,
}

impl SecondExpr {
    /// A fixed second, independent of hour and minute.
    pub fn constant(value: Rational) -> Self {
        Self {
            h_coef: Rational::ZERO,
            m_coef: Rational::ZERO,
            constant: value,
        }
    }

    /// Substitute concrete hour and minute to get a concrete second.
    pub fn eval(&self, hour: u8, minute: u8) -> Rational {
        self.h_coef * Rational::from_int(i128::from(hour))
            + self.m_coef * Rational::from_int(i128::from(minute))
            + self.constant
    }
}
