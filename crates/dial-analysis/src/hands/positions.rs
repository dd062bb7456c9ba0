//! Hand position calculator.

use dial_core::Rational;

use super::types::HandPositions;

/// Positions in `[0, 360)` of the hour, minute and second hands.
///
/// The hour hand advances continuously with minute and second, and the
/// minute hand advances continuously with second:
/// hour = 360·(h + m/60 + s/3600)/12, minute = 360·(m + s/60)/60,
/// second = 360·s/60. For hour in 0..12, minute in 0..60 and second in
/// `[0, 60)` no position reaches 360, so no wrapping is needed here.
pub fn hand_positions(hour: u8, minute: u8, second: Rational) -> HandPositions {
    let h = Rational::from_int(i128::from(hour));
    let m = Rational::from_int(i128::from(minute));

    HandPositions {
        hour: h * Rational::from_int(30)
            + m / Rational::from_int(2)
            + second / Rational::from_int(120),
        minute: m * Rational::from_int(6) + second / Rational::from_int(10),
        second: second * Rational::from_int(6),
    }
}
