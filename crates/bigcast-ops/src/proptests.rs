//! Property-based tests checking the operation layer against native
//! arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::One;
    use proptest::prelude::*;

    use crate::int::*;
    use crate::rat::{add_rat, fma_rat, mul_rat};
    use bigcast_core::{Error, Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -10_000i64..10_000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-10_000i64..=-1i64), (1i64..=10_000i64)]
    }

    proptest! {
        #[test]
        fn truncated_division_matches_native(a in any::<i64>(), b in non_zero_int()) {
            prop_assert_eq!(quo_int(a, b).unwrap(), Integer::new(a / b));
            prop_assert_eq!(rem_int(a, b).unwrap(), Integer::new(a % b));
        }

        #[test]
        fn euclidean_division_matches_native(a in any::<i64>(), b in non_zero_int()) {
            let (q, r) = div_mod_int(a, b).unwrap();
            prop_assert_eq!(q, Integer::new(a.div_euclid(b)));
            prop_assert_eq!(r, Integer::new(a.rem_euclid(b)));
        }

        #[test]
        fn bitwise_matches_twos_complement(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(and_int(a, b).unwrap(), Integer::new(a & b));
            prop_assert_eq!(or_int(a, b).unwrap(), Integer::new(a | b));
            prop_assert_eq!(xor_int(a, b).unwrap(), Integer::new(a ^ b));
            prop_assert_eq!(and_not_int(a, b).unwrap(), Integer::new(a & !b));
            prop_assert_eq!(not_int(a).unwrap(), Integer::new(!a));
        }

        #[test]
        fn right_shift_is_arithmetic(a in any::<i64>(), n in 0u32..63) {
            prop_assert_eq!(rsh_int(a, n).unwrap(), Integer::new(a >> n));
        }

        #[test]
        fn gcd_ext_satisfies_bezout(a in small_int(), b in small_int()) {
            let (x, y, g) = gcd_ext_int(a, b).unwrap();
            prop_assert_eq!(&g, &gcd_int(a, b).unwrap());
            prop_assert_eq!(fma_int(a, &x, &mul_int(b, &y).unwrap()).unwrap(), g);
        }

        #[test]
        fn mod_inverse_inverts(g in small_int(), n in 2i64..10_000) {
            match mod_inverse_int(g, n) {
                Ok(inv) => prop_assert!(mod_int(&mul_int(g, &inv).unwrap(), n).unwrap().is_one()),
                Err(err) => {
                    prop_assert_eq!(err, Error::NotInvertible);
                    prop_assert!(!gcd_int(g, n).unwrap().is_one());
                }
            }
        }

        #[test]
        fn exp_mod_matches_repeated_multiplication(
            x in small_int(),
            y in 0u32..40,
            m in non_zero_int()
        ) {
            let mut expected = Integer::new(1);
            for _ in 0..y {
                expected = mod_int(&mul_int(&expected, x).unwrap(), m).unwrap();
            }
            let expected = mod_int(&expected, m).unwrap();
            prop_assert_eq!(exp_mod_int(x, y, m).unwrap(), expected);
        }

        #[test]
        fn fma_rat_is_exact(a in small_int(), b in non_zero_int(), c in small_int()) {
            let x = Rational::from_i64(a, b);
            let y = Rational::from_i64(c, b);
            let expected = add_rat(&mul_rat(&x, &y).unwrap(), &x).unwrap();
            prop_assert_eq!(fma_rat(&x, &y, &x).unwrap(), expected);
        }
    }
}
