//! Coercion behaviour seen from outside the crate.

use bigcast_coerce::{
    float_operand, integer_operand, is_integer_like, set_float, set_integer, set_rat_frac,
    set_rational, to_float, to_integer, to_rat_frac, to_rational,
};
use bigcast_core::precision::DEFAULT_PRECISION;
use bigcast_core::{Error, Float, Integer, NumberKind, Rational, Word};

#[test]
fn every_integer_source_kind() {
    let words: [Word; 2] = [5, 1];
    let expected = (&Integer::new(1) << (Word::BITS as usize)) + Integer::new(5);

    assert_eq!(to_integer(&words[..]).unwrap(), expected);
    assert_eq!(to_integer(&[0x01u8, 0x00][..]).unwrap(), Integer::new(256));
    assert_eq!(to_integer(&[][..] as &[u8]).unwrap(), Integer::new(0));
    assert_eq!(to_integer("0o17").unwrap(), Integer::new(15));
    assert_eq!(to_integer("017").unwrap(), Integer::new(15));
    assert_eq!(to_integer("-0b1_0").unwrap(), Integer::new(-2));
    assert_eq!(to_integer(usize::MAX).unwrap(), Integer::from(usize::MAX));
}

#[test]
fn literal_failures_name_the_family() {
    assert_eq!(
        to_integer("1_000"),
        Err(Error::parse(NumberKind::Integer, "1_000"))
    );
    assert_eq!(
        to_rational("1/2x"),
        Err(Error::parse(NumberKind::Rational, "1/2x"))
    );
    assert_eq!(to_float("pi"), Err(Error::parse(NumberKind::Float, "pi")));
}

#[test]
fn setters_leave_destination_on_failure() {
    let mut n = Integer::new(3);
    let mut r = Rational::from_i64(1, 3);
    let mut f = Float::from_f64(0.5).unwrap();

    assert!(set_integer(&mut n, "x").is_err());
    assert!(set_rational(&mut r, f64::NAN).is_err());
    assert!(set_float(&mut f, "nope").is_err());
    assert!(set_rat_frac(&mut r, 1, 0).is_err());

    assert_eq!(n, Integer::new(3));
    assert_eq!(r, Rational::from_i64(1, 3));
    assert_eq!(f.to_f64(), 0.5);
}

#[test]
fn canonical_operands_are_borrowed() {
    let n = Integer::new(12);
    let f = Float::from_f64(1.25).unwrap();
    assert!(std::ptr::eq(&*integer_operand(&n).unwrap(), &n));
    assert!(std::ptr::eq(&*float_operand(&f).unwrap(), &f));
}

#[test]
fn long_literals_widen_precision() {
    let src = "3.14159265358979323846264338327950288419716939937510";
    let f = to_float(src).unwrap();
    assert!(f.precision() > DEFAULT_PRECISION);
    assert_eq!(f.to_f64(), std::f64::consts::PI);
}

#[test]
fn classification_table() {
    let big = Integer::new(123);
    let third = to_float(&Rational::from_i64(1, 3)).unwrap();
    for (like, label) in [
        (is_integer_like(-5), "-5"),
        (is_integer_like(0), "0"),
        (is_integer_like(7), "7"),
        (is_integer_like(&big), "Integer(123)"),
    ] {
        assert!(like, "{label}");
    }
    assert!(!is_integer_like(3.5));
    assert!(!is_integer_like(&third));
}

#[test]
fn fraction_fast_path_cases() {
    for (x, y) in [(6, 3), (-7, 2), (0, 5)] {
        let direct = Rational::new(Integer::new(x), Integer::new(y));
        assert_eq!(to_rat_frac(x, y).unwrap(), direct);
    }
}
