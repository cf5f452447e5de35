//! Property-based tests for the constants.

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use bigcast_core::{Float, Integer, Rational};
    use proptest::prelude::*;

    use crate::{e, phi, pi};

    const REFERENCE_PRECISION: usize = 2048;

    fn reference(cell: &'static OnceLock<Rational>, f: fn(usize) -> Float) -> &'static Rational {
        cell.get_or_init(|| f(REFERENCE_PRECISION).to_rational().unwrap())
    }

    // Spacing of `precision`-bit floats in [2, 4); every constant here lies
    // below 4.
    fn ulp(precision: usize) -> Rational {
        Rational::new(Integer::new(1), &Integer::new(1) << (precision - 2))
    }

    fn within_ulp(value: &Float, reference: &Rational, precision: usize) -> bool {
        (&value.to_rational().unwrap() - reference).abs() <= ulp(precision)
    }

    static PI: OnceLock<Rational> = OnceLock::new();
    static E: OnceLock<Rational> = OnceLock::new();
    static PHI: OnceLock<Rational> = OnceLock::new();

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn pi_is_accurate_at_any_precision(precision in 2usize..1024) {
            let value = pi(precision);
            prop_assert_eq!(value.precision(), precision);
            prop_assert!(within_ulp(&value, reference(&PI, pi), precision));
        }

        #[test]
        fn e_is_accurate_at_any_precision(precision in 2usize..1024) {
            let value = e(precision);
            prop_assert_eq!(value.precision(), precision);
            prop_assert!(within_ulp(&value, reference(&E, e), precision));
        }

        #[test]
        fn phi_is_accurate_at_any_precision(precision in 2usize..1024) {
            let value = phi(precision);
            prop_assert_eq!(value.precision(), precision);
            prop_assert!(within_ulp(&value, reference(&PHI, phi), precision));
        }
    }
}
