//! Property-based tests for coercion and classification.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        extract_integer, is_integer_like, to_float, to_integer, to_rat_frac, to_rational,
    };
    use bigcast_core::{Float, Integer, Rational};

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(i64::MIN..=-1i64), (1i64..=i64::MAX)]
    }

    proptest! {
        #[test]
        fn native_integers_match_their_decimal_literals(
            a in any::<i8>(),
            b in any::<i16>(),
            c in any::<i32>(),
            d in any::<i64>(),
            e in any::<isize>(),
            f in any::<u8>(),
            g in any::<u16>(),
            h in any::<u32>(),
            i in any::<u64>(),
            j in any::<usize>()
        ) {
            prop_assert_eq!(to_integer(a).unwrap(), to_integer(&a.to_string()).unwrap());
            prop_assert_eq!(to_integer(b).unwrap(), to_integer(&b.to_string()).unwrap());
            prop_assert_eq!(to_integer(c).unwrap(), to_integer(&c.to_string()).unwrap());
            prop_assert_eq!(to_integer(d).unwrap(), to_integer(&d.to_string()).unwrap());
            prop_assert_eq!(to_integer(e).unwrap(), to_integer(&e.to_string()).unwrap());
            prop_assert_eq!(to_integer(f).unwrap(), to_integer(&f.to_string()).unwrap());
            prop_assert_eq!(to_integer(g).unwrap(), to_integer(&g.to_string()).unwrap());
            prop_assert_eq!(to_integer(h).unwrap(), to_integer(&h.to_string()).unwrap());
            prop_assert_eq!(to_integer(i).unwrap(), to_integer(&i.to_string()).unwrap());
            prop_assert_eq!(to_integer(j).unwrap(), to_integer(&j.to_string()).unwrap());
        }

        #[test]
        fn integer_round_trip(a in any::<i64>(), shift in 0usize..200) {
            let x = &Integer::new(a) << shift;
            prop_assert_eq!(to_integer(&x).unwrap(), x);
        }

        #[test]
        fn rational_sources_agree(a in any::<i32>()) {
            let expected = Rational::from(a);
            prop_assert_eq!(to_rational(a).unwrap(), expected.clone());
            prop_assert_eq!(to_rational(f64::from(a)).unwrap(), expected.clone());
            prop_assert_eq!(to_rational(&a.to_string()).unwrap(), expected);
        }

        #[test]
        fn f64_to_float_is_exact(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
            prop_assert_eq!(to_float(x).unwrap().to_f64(), x);
        }

        #[test]
        fn integral_doubles_are_integer_like(a in -(1i64 << 53)..(1i64 << 53)) {
            #[allow(clippy::cast_precision_loss)]
            let x = a as f64;
            prop_assert!(is_integer_like(x));
            prop_assert_eq!(extract_integer(x).unwrap(), Integer::new(a));
        }

        #[test]
        fn floats_with_fractions_are_not_integer_like(a in -1_000_000i64..1_000_000) {
            #[allow(clippy::cast_precision_loss)]
            let x = a as f64 + 0.25;
            prop_assert!(!is_integer_like(x));
            let f = Float::from_f64(x).unwrap();
            prop_assert!(!is_integer_like(&f));
        }

        #[test]
        fn fraction_paths_agree(a in any::<i64>(), b in non_zero_int()) {
            let fast = to_rat_frac(a, b).unwrap();
            // Literals are never integer-like, so this takes the general path.
            let general = to_rat_frac(&a.to_string(), &b.to_string()).unwrap();
            prop_assert_eq!(fast, general);
        }
    }
}
