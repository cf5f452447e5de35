//! Property-based tests for the canonical value types.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Float, Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn decimal_literal_matches_native(a in any::<i64>()) {
            prop_assert_eq!(Integer::from_literal(&a.to_string()).unwrap(), Integer::new(a));
        }

        #[test]
        fn hex_literal_matches_native(a in any::<u64>()) {
            let src = format!("0x{a:x}");
            prop_assert_eq!(Integer::from_literal(&src).unwrap(), Integer::from(a));
        }

        #[test]
        fn be_bytes_match_native(a in any::<u64>()) {
            prop_assert_eq!(Integer::from_be_bytes(&a.to_be_bytes()), Integer::from(a));
        }

        #[test]
        fn div_mod_reconstructs(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let (q, r) = a.div_mod(&b);
            prop_assert!(!r.is_negative());
            prop_assert_eq!(r.cmp_abs(&b), std::cmp::Ordering::Less);
            prop_assert_eq!(&(&q * &b) + &r, a);
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }

        #[test]
        fn rational_multiplicative_inverse(
            num in non_zero_int(),
            den in non_zero_int()
        ) {
            use num_traits::One;
            let a = Rational::from_i64(num, den);
            let inv = a.recip().unwrap();
            let product = a * inv;
            prop_assert!(product.is_one());
        }

        #[test]
        fn rational_decimal_literal(whole in small_int(), frac in 0u32..1000u32) {
            let src = format!("{whole}.{frac:03}");
            let expected = Rational::from_i64(whole.abs() * 1000 + i64::from(frac), 1000);
            let expected = if src.starts_with('-') { -expected } else { expected };
            prop_assert_eq!(Rational::from_literal(&src).unwrap(), expected);
        }

        #[test]
        fn float_from_rational_matches_f64(num in small_int(), den in non_zero_int()) {
            // Correct rounding at 53 bits agrees with native division.
            let x = Float::from_rational(&Rational::from_i64(num, den), 53);
            prop_assert_eq!(x.to_f64(), num as f64 / den as f64);
        }

        #[test]
        fn float_to_rational_is_exact(x in -1.0e12f64..1.0e12f64) {
            let f = Float::from_f64(x).unwrap();
            let back = Float::from_rational(&f.to_rational().unwrap(), 53);
            prop_assert_eq!(back.to_f64(), x);
        }

        #[test]
        fn float_integer_detection(a in any::<i32>()) {
            let f = Float::from_f64(f64::from(a)).unwrap();
            prop_assert_eq!(f.to_integer_exact(), Some(Integer::from(a)));
            let half = Float::from_f64(f64::from(a) + 0.5).unwrap();
            prop_assert!(!half.is_integer());
        }
    }
}
