use dial_core::Rational;
use proptest::prelude::*;

fn rational() -> impl Strategy<Value = Rational> {
    (-1_000_000i128..1_000_000, 1i128..10_000).prop_map(|(num, den)| Rational::new(num, den))
}

proptest! {
    #[test]
    fn normalized_form(r in rational()) {
        prop_assert!(r.denom() > 0);
        prop_assert_eq!(r, Rational::new(r.numer(), r.denom()));
    }

    #[test]
    fn addition_commutes(a in rational(), b in rational()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn subtraction_inverts_addition(a in rational(), b in rational()) {
        prop_assert_eq!(a + b - b, a);
    }

    #[test]
    fn ordering_matches_difference_sign(a in rational(), b in rational()) {
        let diff = a - b;
        if a < b {
            prop_assert!(diff < Rational::ZERO);
        } else if a > b {
            prop_assert!(diff > Rational::ZERO);
        } else {
            prop_assert!(diff.is_zero());
        }
    }

    #[test]
    fn floor_fract_decomposition(r in rational()) {
        let rebuilt = Rational::from_int(r.floor()) + r.fract();
        prop_assert_eq!(rebuilt, r);
        prop_assert!(r.fract() >= Rational::ZERO);
        prop_assert!(r.fract() < Rational::from_int(1));
    }

    #[test]
    fn display_parse_roundtrip(r in rational()) {
        let parsed: Rational = r.to_string().parse().unwrap();
        prop_assert_eq!(parsed, r);
    }
}
