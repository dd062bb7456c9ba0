use dial_analysis::hands::{hand_angles, hand_positions};
use dial_analysis::metrics::{max_min, min_max};
use dial_analysis::symbolic::critical_point_set;
use dial_core::Rational;
use proptest::prelude::*;

/// Arbitrary clock time with millisecond-resolution seconds.
fn clock_time() -> impl Strategy<Value = (u8, u8, Rational)> {
    (0u8..12, 0u8..60, 0i128..60_000)
        .prop_map(|(hour, minute, millis)| (hour, minute, Rational::new(millis, 1000)))
}

proptest! {
    #[test]
    fn gaps_are_non_negative_and_sum_to_360((hour, minute, second) in clock_time()) {
        let gaps = hand_angles(&hand_positions(hour, minute, second));
        let [a, b, c] = gaps.gaps;
        prop_assert!(a >= Rational::ZERO);
        prop_assert!(b >= Rational::ZERO);
        prop_assert!(c >= Rational::ZERO);
        prop_assert_eq!(a + b + c, Rational::from_int(360));
    }

    #[test]
    fn max_min_recomputes_from_gaps((hour, minute, second) in clock_time()) {
        let gaps = hand_angles(&hand_positions(hour, minute, second));
        let [a, b, c] = gaps.gaps;
        let expected = Rational::from_int(120) - a.min(b).min(c);
        prop_assert_eq!(max_min(hour, minute, second), expected);
    }

    #[test]
    fn min_max_recomputes_from_gaps((hour, minute, second) in clock_time()) {
        let gaps = hand_angles(&hand_positions(hour, minute, second));
        let center = Rational::from_int(120);
        let expected = gaps
            .gaps
            .iter()
            .map(|gap| (*gap - center).abs())
            .max()
            .unwrap();
        prop_assert_eq!(min_max(hour, minute, second), expected);
    }

    #[test]
    fn metrics_are_bounded((hour, minute, second) in clock_time()) {
        // The smallest gap is at most 120, so max_min lies in [0, 120];
        // no gap deviates from 120 by more than 240.
        let fairness = max_min(hour, minute, second);
        prop_assert!(fairness >= Rational::ZERO);
        prop_assert!(fairness <= Rational::from_int(120));

        let deviation = min_max(hour, minute, second);
        prop_assert!(deviation >= Rational::ZERO);
        prop_assert!(deviation <= Rational::from_int(240));
    }

    #[test]
    fn critical_expressions_filtered_to_valid_seconds(hour in 0u8..12, minute in 0u8..60) {
        let upper = Rational::from_int(60);
        for expr in critical_point_set() {
            let second = expr.eval(hour, minute);
            if second >= Rational::ZERO && second < upper {
                // In-range candidates must survive the full metric pipeline.
                let cost = max_min(hour, minute, second);
                prop_assert!(cost >= Rational::ZERO);
            }
        }
    }
}
