//! Rational parse errors.

/// Errors from parsing a `Rational` out of its `p/q` text form.
#[derive(Debug, thiserror::Error)]
pub enum RationalParseError {
    #[error("Invalid integer component: {0}")]
    InvalidInteger(#[from] std::num::ParseIntError),

    #[error("Denominator must be non-zero")]
    ZeroDenominator,
}
