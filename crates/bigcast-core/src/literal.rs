//! Decimal literal scanning shared by the rational and float parsers.

use dashu::integer::{IBig, UBig};

/// Largest accepted decimal exponent magnitude, after the fraction digits
/// are folded in. Larger scales would need a `10^|exponent|` of unbounded
/// size.
pub(crate) const MAX_DECIMAL_EXPONENT: usize = 1_000_000;

/// A scanned decimal literal `significand * 10^exponent`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DecimalLiteral {
    pub significand: IBig,
    pub exponent: isize,
    /// Significant mantissa digits, at least 1.
    pub digits: usize,
}

impl DecimalLiteral {
    /// Scans `[+-]? digits? ('.' digits?)? ([eE] [+-]? digits)?` with at
    /// least one mantissa digit. Returns `None` on anything else, including
    /// an exponent whose magnitude exceeds [`MAX_DECIMAL_EXPONENT`].
    pub fn parse(src: &str) -> Option<Self> {
        let (negative, body) = match src.as_bytes().first()? {
            b'+' => (false, &src[1..]),
            b'-' => (true, &src[1..]),
            _ => (false, src),
        };
        let (mantissa, exponent) = match body.find(['e', 'E']) {
            Some(at) => (&body[..at], parse_exponent(&body[at + 1..])?),
            None => (body, 0),
        };
        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }

        let all_digits = format!("{whole}{fraction}");
        let magnitude = UBig::from_str_radix(&all_digits, 10).ok()?;
        let significant = all_digits.trim_start_matches('0').len().max(1);
        let exponent = exponent.checked_sub(isize::try_from(fraction.len()).ok()?)?;
        if exponent.unsigned_abs() > MAX_DECIMAL_EXPONENT {
            return None;
        }
        let significand = IBig::from(magnitude);
        Some(Self {
            significand: if negative { -significand } else { significand },
            exponent,
            digits: significant,
        })
    }
}

fn parse_exponent(src: &str) -> Option<isize> {
    let digits = src.strip_prefix(['+', '-']).unwrap_or(src);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    src.parse().ok()
}
