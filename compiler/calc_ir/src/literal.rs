//! Numeral grammar.
//!
//! ```text
//! integer  = [sign] ( "0x" hex+ | "0b" bin+ | "0o" oct+ | "0" oct+ | dec+ )
//! fraction = [sign] dec+ "/" dec+
//! decimal  = [sign] ( dec+ ["." dec*] | "." dec+ ) [("e" | "E") [sign] dec+]
//! ```
//!
//! Prefixes are case-insensitive. Decimals are converted exactly; nothing
//! here ever goes through floating point.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::Value;

/// Decimal exponents beyond this magnitude are rejected.
const MAX_DECIMAL_EXPONENT: u64 = 1_000_000;

/// Parse a numeral into an exact value.
///
/// Returns `None` for anything outside the numeral grammar, including a
/// fraction with a zero denominator.
pub fn parse_const(text: &str) -> Option<Value> {
    let (_, unsigned) = split_sign(text);
    let hex = strip_prefix_ci(unsigned, "0x").is_some();
    if text.contains(['.', '/']) || (!hex && text.contains(['e', 'E'])) {
        parse_rational(text)
    } else {
        parse_integer(text).map(Value::Int)
    }
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&text[prefix.len()..])
    } else {
        None
    }
}

fn parse_integer(text: &str) -> Option<BigInt> {
    let (negative, digits) = split_sign(text);
    let (radix, body) = if let Some(rest) = strip_prefix_ci(digits, "0x") {
        (16, rest)
    } else if let Some(rest) = strip_prefix_ci(digits, "0b") {
        (2, rest)
    } else if let Some(rest) = strip_prefix_ci(digits, "0o") {
        (8, rest)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (8, &digits[1..])
    } else {
        (10, digits)
    };
    let magnitude = parse_digits(body, radix)?;
    Some(if negative { -magnitude } else { magnitude })
}

fn parse_digits(body: &str, radix: u32) -> Option<BigInt> {
    if body.is_empty() || !body.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    BigInt::parse_bytes(body.as_bytes(), radix)
}

fn parse_rational(text: &str) -> Option<Value> {
    if let Some((numer, denom)) = text.split_once('/') {
        let (negative, numer) = split_sign(numer);
        let numer = parse_digits(numer, 10)?;
        let denom = parse_digits(denom, 10)?;
        if denom.is_zero() {
            return None;
        }
        let numer = if negative { -numer } else { numer };
        return Some(Value::from_ratio(BigRational::new(numer, denom)));
    }
    parse_decimal(text)
}

fn parse_decimal(text: &str) -> Option<Value> {
    let (negative, rest) = split_sign(text);
    let (mantissa, exponent) = match rest.find(['e', 'E']) {
        Some(at) => (&rest[..at], Some(&rest[at + 1..])),
        None => (rest, None),
    };
    let (whole, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits = format!("{whole}{frac}");
    let numer = parse_digits(&digits, 10)?;
    let mut scale = -i64::try_from(frac.len()).ok()?;
    if let Some(exponent) = exponent {
        let (exp_negative, exp_digits) = split_sign(exponent);
        if exp_digits.is_empty() || !exp_digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let magnitude: i64 = exp_digits.parse().ok()?;
        scale = scale.checked_add(if exp_negative { -magnitude } else { magnitude })?;
    }
    if scale.unsigned_abs() > MAX_DECIMAL_EXPONENT {
        return None;
    }

    let power = BigInt::from(10u32).pow(u32::try_from(scale.unsigned_abs()).ok()?);
    let ratio = if scale >= 0 {
        BigRational::from_integer(numer * power)
    } else {
        BigRational::new(numer, power)
    };
    Some(Value::from_ratio(if negative { -ratio } else { ratio }))
}
