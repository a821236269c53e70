//! Literal parsing, significant-digit rounding and plain ("F") formatting
//! for [`BigRational`] values.

use num::{BigInt, BigRational, One, Signed, Zero};

/// Largest decimal exponent accepted in a literal (`1e4096`).
const MAX_LITERAL_EXPONENT: i64 = 4096;

/// Upper bound on fractional digits emitted by [`format_plain`].
const MAX_FORMAT_PLACES: usize = 8192;

/// `10^exp` as an exact rational.
pub(crate) fn pow10(exp: i64) -> BigRational {
    let magnitude = num::pow(BigInt::from(10u32), exp.unsigned_abs() as usize);
    if exp >= 0 {
        BigRational::from_integer(magnitude)
    } else {
        BigRational::new(BigInt::one(), magnitude)
    }
}

fn digit_count(n: &BigInt) -> i64 {
    n.magnitude().to_string().len() as i64
}

/// Decimal exponent `e` such that `10^(e-1) <= |value| < 10^e`.
///
/// `value` must be non-zero.
fn decimal_exponent(value: &BigRational) -> i64 {
    let value = value.abs();
    let mut exponent = digit_count(value.numer()) - digit_count(value.denom());
    while value >= pow10(exponent) {
        exponent += 1;
    }
    while value < pow10(exponent - 1) {
        exponent -= 1;
    }
    exponent
}

/// Round to `digits` significant digits, half away from zero.
pub(crate) fn round_significant(value: &BigRational, digits: u32) -> BigRational {
    if value.is_zero() {
        return BigRational::zero();
    }
    let shift = i64::from(digits) - decimal_exponent(value);
    let scale = pow10(shift);
    (value * &scale).round() / scale
}

/// Round to `places` fractional digits, half away from zero. Negative
/// `places` rounds to tens, hundreds, ...
pub(crate) fn round_fractional(value: &BigRational, places: i64) -> BigRational {
    let scale = pow10(places);
    (value * &scale).round() / scale
}

/// Parse a decimal literal: optional sign, digits with an optional
/// fractional part, optional exponent. Surrounding whitespace is ignored.
pub(crate) fn parse(literal: &str) -> Option<BigRational> {
    let literal = literal.trim();
    let (negative, body) = match literal.as_bytes().first()? {
        b'-' => (true, &literal[1..]),
        b'+' => (false, &literal[1..]),
        _ => (false, literal),
    };

    let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
        Some(pos) => (&body[..pos], body[pos + 1..].parse::<i64>().ok()?),
        None => (body, 0),
    };
    if exponent.abs() > MAX_LITERAL_EXPONENT {
        return None;
    }

    let (int_digits, frac_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }
    if !int_digits
        .bytes()
        .chain(frac_digits.bytes())
        .all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let digits = format!("{int_digits}{frac_digits}");
    let mantissa = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    let value = BigRational::from_integer(mantissa) * pow10(exponent - frac_digits.len() as i64);
    Some(if negative { -value } else { value })
}

/// Positional notation with at least one fractional digit and no exponent:
/// `42` renders as `42.0`, `1/1000` as `0.001`.
///
/// `value` should have a terminating decimal expansion (callers round first).
pub(crate) fn format_plain(value: &BigRational) -> String {
    let ten = BigRational::from_integer(BigInt::from(10u32));
    let mut scaled = value.abs();
    let mut places = 0usize;
    while !scaled.is_integer() && places < MAX_FORMAT_PLACES {
        scaled = scaled * &ten;
        places += 1;
    }

    let digits = scaled.round().to_integer().to_string();
    let (int_part, frac_part) = if places == 0 {
        (digits, "0".to_string())
    } else {
        let padded = format!("{digits:0>width$}", width = places + 1);
        let split = padded.len() - places;
        (padded[..split].to_string(), padded[split..].to_string())
    };

    let sign = if value.is_negative() { "-" } else { "" };
    format!("{sign}{int_part}.{frac_part}")
}
