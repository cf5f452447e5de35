//! Integer operations over coercible operands.
//!
//! Division comes in two families: `quo`/`rem` truncate toward zero, while
//! `div`/`mod` are Euclidean and always leave a non-negative remainder.

use std::borrow::Cow;
use std::cmp::Ordering;

use bigcast_coerce::{integer_operand, IntSource};
use bigcast_core::{Error, Integer, Result};
use num_traits::{One, Zero};
use rand::RngCore;

/// Returns `x + y`.
///
/// # Errors
///
/// Returns any coercion error of the operands.
pub fn add_int<'a>(x: impl Into<IntSource<'a>>, y: impl Into<IntSource<'a>>) -> Result<Integer> {
    let (x, y) = (integer_operand(x)?, integer_operand(y)?);
    Ok(&*x + &*y)
}

/// Returns `x - y`.
///
/// # Errors
///
/// Returns any coercion error of the operands.
pub fn sub_int<'a>(x: impl Into<IntSource<'a>>, y: impl Into<IntSource<'a>>) -> Result<Integer> {
    let (x, y) = (integer_operand(x)?, integer_operand(y)?);
    Ok(&*x - &*y)
}

/// Returns `x * y`.
///
/// # Errors
///
/// Returns any coercion error of the operands.
pub fn mul_int<'a>(x: impl Into<IntSource<'a>>, y: impl Into<IntSource<'a>>) -> Result<Integer> {
    let (x, y) = (integer_operand(x)?, integer_operand(y)?);
    Ok(&*x * &*y)
}

/// Returns `x / y` truncated toward zero.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `y` is zero.
pub fn quo_int<'a>(x: impl Into<IntSource<'a>>, y: impl Into<IntSource<'a>>) -> Result<Integer> {
    let (x, y) = (integer_operand(x)?, divisor_operand(y)?);
    Ok(&*x / &*y)
}

/// Returns the remainder of [`quo_int`], which has the sign of `x`.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `y` is zero.
pub fn rem_int<'a>(x: impl Into<IntSource<'a>>, y: impl Into<IntSource<'a>>) -> Result<Integer> {
    let (x, y) = (integer_operand(x)?, divisor_operand(y)?);
    Ok(&*x % &*y)
}

/// Returns the truncated quotient and remainder together.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `y` is zero.
pub fn quo_rem_int<'a>(
    x: impl Into<IntSource<'a>>,
    y: impl Into<IntSource<'a>>,
) -> Result<(Integer, Integer)> {
    let (x, y) = (integer_operand(x)?, divisor_operand(y)?);
    Ok(x.quo_rem(&y))
}

/// Returns the Euclidean quotient of `x` and `y`.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `y` is zero.
pub fn div_int<'a>(x: impl Into<IntSource<'a>>, y: impl Into<IntSource<'a>>) -> Result<Integer> {
    div_mod_int(x, y).map(|(q, _)| q)
}

/// Returns the Euclidean remainder, in `[0, |y|)`.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `y` is zero.
pub fn mod_int<'a>(x: impl Into<IntSource<'a>>, y: impl Into<IntSource<'a>>) -> Result<Integer> {
    div_mod_int(x, y).map(|(_, r)| r)
}

/// Returns the Euclidean quotient and remainder together.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `y` is zero.
pub fn div_mod_int<'a>(
    x: impl Into<IntSource<'a>>,
    y: impl Into<IntSource<'a>>,
) -> Result<(Integer, Integer)> {
    let (x, y) = (integer_operand(x)?, divisor_operand(y)?);
    Ok(x.div_mod(&y))
}

/// Returns the inverse of `g` modulo `|n|`, in `[0, |n|)`.
///
/// # Errors
///
/// - [`Error::DivisionByZero`] if `n` is zero
/// - [`Error::NotInvertible`] if `g` and `n` are not coprime
pub fn mod_inverse_int<'a>(
    g: impl Into<IntSource<'a>>,
    n: impl Into<IntSource<'a>>,
) -> Result<Integer> {
    let (g, n) = (integer_operand(g)?, divisor_operand(n)?);
    mod_inverse(&g, &n.abs())
}

/// Returns a square root of `x` modulo the prime `p`.
///
/// Uses Tonelli–Shanks, with the direct exponentiation shortcut when
/// `p ≡ 3 (mod 4)`. The result `r` satisfies `r² ≡ x (mod p)`.
///
/// # Errors
///
/// - [`Error::DivisionByZero`] if `p` is zero
/// - [`Error::NoSquareRoot`] if `x` is not a quadratic residue modulo `p`
pub fn mod_sqrt_int<'a>(x: impl Into<IntSource<'a>>, p: impl Into<IntSource<'a>>) -> Result<Integer> {
    let (x, p) = (integer_operand(x)?, divisor_operand(p)?);
    let p = p.abs();
    let a = reduce(&x, &p);
    if a.is_zero() || p <= Integer::new(2) {
        return Ok(a);
    }

    let one = Integer::one();
    let half = &(&p - &one) >> 1;
    if !pow_mod(&a, &half, &p).is_one() {
        tracing::trace!(%a, %p, "not a quadratic residue");
        return Err(Error::NoSquareRoot);
    }

    let three = Integer::new(3);
    let root = if &p & &three == three {
        pow_mod(&a, &(&(&p + &one) >> 2), &p)
    } else {
        tonelli_shanks(&a, &p)?
    };

    // Guards against a composite modulus slipping through.
    if reduce(&(&root * &root), &p) != a {
        return Err(Error::NoSquareRoot);
    }
    Ok(root)
}

/// Returns `x^y`. Non-positive exponents yield 1.
///
/// # Errors
///
/// Returns any coercion error of the operands.
///
/// # Panics
///
/// Panics if `|x| > 1` and `y` does not fit in a `usize`.
pub fn exp_int<'a>(x: impl Into<IntSource<'a>>, y: impl Into<IntSource<'a>>) -> Result<Integer> {
    let (x, y) = (integer_operand(x)?, integer_operand(y)?);
    Ok(power(&x, &y))
}

/// Returns `x^y mod |m|`, in `[0, |m|)`.
///
/// A negative exponent raises the modular inverse of `x`. A zero modulus
/// falls back to [`exp_int`].
///
/// # Errors
///
/// Returns [`Error::NotInvertible`] if `y` is negative and `x` has no
/// inverse modulo `m`.
///
/// # Panics
///
/// Panics under the same conditions as [`exp_int`] when `m` is zero.
pub fn exp_mod_int<'a>(
    x: impl Into<IntSource<'a>>,
    y: impl Into<IntSource<'a>>,
    m: impl Into<IntSource<'a>>,
) -> Result<Integer> {
    let (x, y, m) = (integer_operand(x)?, integer_operand(y)?, integer_operand(m)?);
    if m.is_zero() {
        return Ok(power(&x, &y));
    }
    let modulus = m.abs();
    if y.is_negative() {
        let inverse = mod_inverse(&x, &modulus)?;
        return Ok(pow_mod(&inverse, &-&*y, &modulus));
    }
    Ok(pow_mod(&x, &y, &modulus))
}

/// Returns the greatest common divisor, never negative.
///
/// # Errors
///
/// Returns any coercion error of the operands.
pub fn gcd_int<'a>(x: impl Into<IntSource<'a>>, y: impl Into<IntSource<'a>>) -> Result<Integer> {
    let (x, y) = (integer_operand(x)?, integer_operand(y)?);
    Ok(x.gcd(&y))
}

/// Returns `(x, y, g)` with `g = gcd(a, b) >= 0` and `a·x + b·y = g`.
///
/// Both cofactors are zero when `a` and `b` are both zero.
///
/// # Errors
///
/// Returns any coercion error of the operands.
pub fn gcd_ext_int<'a>(
    a: impl Into<IntSource<'a>>,
    b: impl Into<IntSource<'a>>,
) -> Result<(Integer, Integer, Integer)> {
    let (a, b) = (integer_operand(a)?, integer_operand(b)?);
    Ok(ext_gcd(&a, &b))
}

/// Returns `|x|`.
///
/// # Errors
///
/// Returns any coercion error of the operand.
pub fn abs_int<'a>(x: impl Into<IntSource<'a>>) -> Result<Integer> {
    Ok(integer_operand(x)?.abs())
}

/// Returns `-x`.
///
/// # Errors
///
/// Returns any coercion error of the operand.
pub fn neg_int<'a>(x: impl Into<IntSource<'a>>) -> Result<Integer> {
    Ok(-&*integer_operand(x)?)
}

/// Compares `x` and `y`.
///
/// # Errors
///
/// Returns any coercion error of the operands.
pub fn cmp_int<'a>(x: impl Into<IntSource<'a>>, y: impl Into<IntSource<'a>>) -> Result<Ordering> {
    let (x, y) = (integer_operand(x)?, integer_operand(y)?);
    Ok(x.cmp(&y))
}

/// Compares `|x|` and `|y|`.
///
/// # Errors
///
/// Returns any coercion error of the operands.
pub fn cmp_abs_int<'a>(
    x: impl Into<IntSource<'a>>,
    y: impl Into<IntSource<'a>>,
) -> Result<Ordering> {
    let (x, y) = (integer_operand(x)?, integer_operand(y)?);
    Ok(x.cmp_abs(&y))
}

/// Returns `x & y` in two's complement.
///
/// # Errors
///
/// Returns any coercion error of the operands.
pub fn and_int<'a>(x: impl Into<IntSource<'a>>, y: impl Into<IntSource<'a>>) -> Result<Integer> {
    let (x, y) = (integer_operand(x)?, integer_operand(y)?);
    Ok(&*x & &*y)
}

/// Returns `x & !y` in two's complement.
///
/// # Errors
///
/// Returns any coercion error of the operands.
pub fn and_not_int<'a>(
    x: impl Into<IntSource<'a>>,
    y: impl Into<IntSource<'a>>,
) -> Result<Integer> {
    let (x, y) = (integer_operand(x)?, integer_operand(y)?);
    let mask = !&*y;
    Ok(&*x & &mask)
}

/// Returns `x | y` in two's complement.
///
/// # Errors
///
/// Returns any coercion error of the operands.
pub fn or_int<'a>(x: impl Into<IntSource<'a>>, y: impl Into<IntSource<'a>>) -> Result<Integer> {
    let (x, y) = (integer_operand(x)?, integer_operand(y)?);
    Ok(&*x | &*y)
}

/// Returns `x ^ y` in two's complement.
///
/// # Errors
///
/// Returns any coercion error of the operands.
pub fn xor_int<'a>(x: impl Into<IntSource<'a>>, y: impl Into<IntSource<'a>>) -> Result<Integer> {
    let (x, y) = (integer_operand(x)?, integer_operand(y)?);
    Ok(&*x ^ &*y)
}

/// Returns `!x`, that is `-x - 1`.
///
/// # Errors
///
/// Returns any coercion error of the operand.
pub fn not_int<'a>(x: impl Into<IntSource<'a>>) -> Result<Integer> {
    Ok(!&*integer_operand(x)?)
}

/// Returns `x << n`.
///
/// # Errors
///
/// Returns any coercion error of the operands.
///
/// # Panics
///
/// Panics if `n` is negative or does not fit in a `usize`.
pub fn lsh_int<'a>(x: impl Into<IntSource<'a>>, n: impl Into<IntSource<'a>>) -> Result<Integer> {
    let (x, n) = (integer_operand(x)?, integer_operand(n)?);
    Ok(&*x << shift_amount(&n))
}

/// Returns `x >> n`, rounding toward negative infinity.
///
/// # Errors
///
/// Returns any coercion error of the operands.
///
/// # Panics
///
/// Panics if `n` is negative or does not fit in a `usize`.
pub fn rsh_int<'a>(x: impl Into<IntSource<'a>>, n: impl Into<IntSource<'a>>) -> Result<Integer> {
    let (x, n) = (integer_operand(x)?, integer_operand(n)?);
    Ok(&*x >> shift_amount(&n))
}

/// Returns `x * y + z`.
///
/// # Errors
///
/// Returns any coercion error of the operands.
pub fn fma_int<'a>(
    x: impl Into<IntSource<'a>>,
    y: impl Into<IntSource<'a>>,
    z: impl Into<IntSource<'a>>,
) -> Result<Integer> {
    let (x, y, z) = (integer_operand(x)?, integer_operand(y)?, integer_operand(z)?);
    Ok(&*x * &*y + &*z)
}

/// Draws an integer uniformly from `[0, n)`.
///
/// # Errors
///
/// Returns [`Error::NonPositiveBound`] if `n <= 0`.
pub fn rand_int<'a, R: RngCore + ?Sized>(
    rng: &mut R,
    n: impl Into<IntSource<'a>>,
) -> Result<Integer> {
    let bound = integer_operand(n)?;
    if bound.signum() <= 0 {
        return Err(Error::NonPositiveBound);
    }

    // Rejection sampling over the bound's bit length accepts at least half
    // of the draws.
    let bits = bound.bit_len();
    let mut bytes = vec![0u8; bits.div_ceil(8)];
    let top_mask = 0xffu8 >> (bytes.len() * 8 - bits);
    loop {
        rng.fill_bytes(&mut bytes);
        bytes[0] &= top_mask;
        let candidate = Integer::from_be_bytes(&bytes);
        if candidate < *bound {
            return Ok(candidate);
        }
    }
}

fn divisor_operand<'a>(y: impl Into<IntSource<'a>>) -> Result<Cow<'a, Integer>> {
    let y = integer_operand(y)?;
    if y.is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(y)
}

fn shift_amount(n: &Integer) -> usize {
    match n.to_usize() {
        Some(shift) => shift,
        None => panic!("shift amount {n} is negative or too large"),
    }
}

/// Euclidean residue of `x` modulo a positive `modulus`.
fn reduce(x: &Integer, modulus: &Integer) -> Integer {
    x.div_mod(modulus).1
}

fn power(base: &Integer, exp: &Integer) -> Integer {
    if exp.signum() <= 0 {
        return Integer::one();
    }
    if base.cmp_abs(&Integer::one()) != Ordering::Greater {
        // 0, 1 and -1 stay bounded for any exponent.
        return if base.is_negative() && !exp.is_even() {
            base.clone()
        } else {
            base.abs()
        };
    }
    match exp.to_usize() {
        Some(exp) => base.pow(exp),
        None => panic!("exponent {exp} is too large"),
    }
}

/// Square-and-multiply over a positive modulus and non-negative exponent.
fn pow_mod(base: &Integer, exp: &Integer, modulus: &Integer) -> Integer {
    let mut base = reduce(base, modulus);
    let mut exp = exp.clone();
    let mut result = reduce(&Integer::one(), modulus);

    while !exp.is_zero() {
        if !exp.is_even() {
            result = reduce(&(&result * &base), modulus);
        }
        base = reduce(&(&base * &base), modulus);
        exp = &exp >> 1;
    }

    result
}

fn ext_gcd(a: &Integer, b: &Integer) -> (Integer, Integer, Integer) {
    if a.is_zero() && b.is_zero() {
        return (Integer::zero(), Integer::zero(), Integer::zero());
    }

    let (mut r, mut new_r) = (a.clone(), b.clone());
    let (mut s, mut new_s) = (Integer::one(), Integer::zero());
    let (mut t, mut new_t) = (Integer::zero(), Integer::one());

    while !new_r.is_zero() {
        let quotient = &r / &new_r;
        let next_r = &r - &(&quotient * &new_r);
        let next_s = &s - &(&quotient * &new_s);
        let next_t = &t - &(&quotient * &new_t);
        r = std::mem::replace(&mut new_r, next_r);
        s = std::mem::replace(&mut new_s, next_s);
        t = std::mem::replace(&mut new_t, next_t);
    }

    if r.is_negative() {
        (-s, -t, -r)
    } else {
        (s, t, r)
    }
}

fn mod_inverse(g: &Integer, modulus: &Integer) -> Result<Integer> {
    let residue = reduce(g, modulus);
    let (x, _, gcd) = ext_gcd(&residue, modulus);
    if !gcd.is_one() {
        return Err(Error::NotInvertible);
    }
    Ok(reduce(&x, modulus))
}

fn tonelli_shanks(a: &Integer, p: &Integer) -> Result<Integer> {
    let one = Integer::one();
    let p_minus_one = p - &one;
    let half = &p_minus_one >> 1;

    let mut q = p_minus_one.clone();
    let mut s = 0usize;
    while q.is_even() {
        q = &q >> 1;
        s += 1;
    }

    let mut z = Integer::new(2);
    while pow_mod(&z, &half, p) != p_minus_one {
        z = z + &one;
        if &z >= p {
            return Err(Error::NoSquareRoot);
        }
    }

    let mut m = s;
    let mut c = pow_mod(&z, &q, p);
    let mut t = pow_mod(a, &q, p);
    let mut root = pow_mod(a, &(&(&q + &one) >> 1), p);

    while !t.is_one() {
        // Least i with t^(2^i) = 1.
        let mut i = 0;
        let mut squared = t.clone();
        while !squared.is_one() {
            squared = reduce(&(&squared * &squared), p);
            i += 1;
            if i == m {
                return Err(Error::NoSquareRoot);
            }
        }

        let mut b = c;
        for _ in 0..m - i - 1 {
            b = reduce(&(&b * &b), p);
        }
        m = i;
        c = reduce(&(&b * &b), p);
        t = reduce(&(&t * &c), p);
        root = reduce(&(&root * &b), p);
    }

    Ok(root)
}
