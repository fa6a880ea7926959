//! Binary and ternary operator implementations for the evaluator.
//!
//! Provides direct enum-based dispatch. The operator set is closed, so
//! pattern matching is preferred over trait objects for exhaustiveness
//! checking. Operands arrive owned; `left` was deeper on the stack.
//!
//! # Families
//!
//! - Numeric (`ADD SUB MUL QUO`): mixed operands promote to rationals,
//!   results demote when whole.
//! - Integer-only (`AND ANDNOT OR XOR GCD`, the division family, shifts,
//!   `MODINV`, `BINOMIAL`, `MULRANGE`, `FRAC`): any non-integer operand is a
//!   type mismatch.

use calc_diagnostic::EvalError;
use calc_ir::{BigInt, BigRational, Op, Value, ValueKind};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::EvalResult;

/// Evaluate a binary operation using direct pattern matching.
pub fn evaluate_binary(op: Op, left: Value, right: Value) -> EvalResult {
    match op {
        Op::Add => numeric(op, left, right, |b, a| b + a, |b, a| b + a),
        Op::Sub => numeric(op, left, right, |b, a| b - a, |b, a| b - a),
        Op::Mul => numeric(op, left, right, |b, a| b * a, |b, a| b * a),
        Op::Quo => quotient(left, right),

        Op::And => integer(op, left, right, |b, a| b & a),
        Op::AndNot => integer(op, left, right, |b, a| b & !a),
        Op::Or => integer(op, left, right, |b, a| b | a),
        Op::Xor => integer(op, left, right, |b, a| b ^ a),
        Op::Gcd => integer(op, left, right, |b, a| b.gcd(&a)),

        Op::Div => division(op, left, right, |b, a| div_rem_euclid(&b, &a).0),
        Op::Mod => division(op, left, right, |b, a| div_rem_euclid(&b, &a).1),
        Op::Rem => division(op, left, right, |b, a| b % a),

        Op::ModInverse => {
            let (value, modulus) = int_pair(op, left, right)?;
            mod_inverse(&value, &modulus).map(Value::Int)
        }
        Op::Lsh => shift(op, left, right, |b, n| b << n),
        Op::Rsh => shift(op, left, right, |b, n| b >> n),
        Op::Binomial => bounded(op, left, right, binomial),
        Op::MulRange => bounded(op, left, right, mul_range),

        Op::Frac => {
            let (numer, denom) = int_pair(op, left, right)?;
            if denom.is_zero() {
                return Err(EvalError::DivisionByZero { op });
            }
            Ok(Value::from_ratio(BigRational::new(numer, denom)))
        }

        _ => Err(EvalError::internal(format!("{op} is not a binary operator"))),
    }
}

/// `EXP`: `base ** exponent`, reduced modulo `|modulus|` when one is given.
///
/// A modulus of `Absent` or zero means plain exponentiation. A negative
/// exponent yields the exact reciprocal of the positive power and does not
/// combine with a modulus.
pub fn evaluate_exp(base: Value, exponent: Value, modulus: Value) -> EvalResult {
    const OP: Op = Op::Exp;
    let base = int_operand(OP, base)?;
    let exponent = int_operand(OP, exponent)?;
    let modulus = match modulus {
        Value::Absent => None,
        Value::Int(m) if m.is_zero() => None,
        Value::Int(m) => Some(m),
        other => return Err(EvalError::type_mismatch(OP, ValueKind::Integer, other.kind())),
    };

    if exponent.is_negative() {
        if modulus.is_some() {
            return Err(EvalError::type_mismatch(OP, ValueKind::Absent, ValueKind::Integer));
        }
        if base.is_zero() {
            return Err(EvalError::DivisionByZero { op: OP });
        }
        let power = pow(&base, &-exponent)?;
        return Ok(Value::from_ratio(BigRational::new(BigInt::one(), power)));
    }

    match modulus {
        Some(m) => Ok(Value::Int(base.modpow(&exponent, &m.abs()))),
        None => pow(&base, &exponent).map(Value::Int),
    }
}

// Operand extraction

fn int_operand(op: Op, value: Value) -> EvalResult<BigInt> {
    match value {
        Value::Int(i) => Ok(i),
        other => Err(EvalError::type_mismatch(op, ValueKind::Integer, other.kind())),
    }
}

fn int_pair(op: Op, left: Value, right: Value) -> EvalResult<(BigInt, BigInt)> {
    Ok((int_operand(op, left)?, int_operand(op, right)?))
}

fn ratio_operand(op: Op, value: Value) -> EvalResult<BigRational> {
    let kind = value.kind();
    value
        .into_ratio()
        .ok_or_else(|| EvalError::type_mismatch(op, ValueKind::Rational, kind))
}

// Families

/// Integer fast path, otherwise promote both sides and demote the result.
fn numeric(
    op: Op,
    left: Value,
    right: Value,
    ints: impl FnOnce(&BigInt, &BigInt) -> BigInt,
    rats: impl FnOnce(BigRational, BigRational) -> BigRational,
) -> EvalResult {
    if let (Value::Int(b), Value::Int(a)) = (&left, &right) {
        return Ok(Value::Int(ints(b, a)));
    }
    let b = ratio_operand(op, left)?;
    let a = ratio_operand(op, right)?;
    Ok(Value::from_ratio(rats(b, a)))
}

fn quotient(left: Value, right: Value) -> EvalResult {
    const OP: Op = Op::Quo;
    if let (Value::Int(b), Value::Int(a)) = (&left, &right) {
        if a.is_zero() {
            return Err(EvalError::DivisionByZero { op: OP });
        }
        return Ok(Value::from_ratio(BigRational::new(b.clone(), a.clone())));
    }
    let b = ratio_operand(OP, left)?;
    let a = ratio_operand(OP, right)?;
    if a.is_zero() {
        return Err(EvalError::DivisionByZero { op: OP });
    }
    Ok(Value::from_ratio(b / a))
}

fn integer(op: Op, left: Value, right: Value, f: impl FnOnce(BigInt, BigInt) -> BigInt) -> EvalResult {
    let (b, a) = int_pair(op, left, right)?;
    Ok(Value::Int(f(b, a)))
}

/// Integer operation with a divisor that must be non-zero.
fn division(op: Op, left: Value, right: Value, f: impl FnOnce(BigInt, BigInt) -> BigInt) -> EvalResult {
    let (b, a) = int_pair(op, left, right)?;
    if a.is_zero() {
        return Err(EvalError::DivisionByZero { op });
    }
    Ok(Value::Int(f(b, a)))
}

/// Shift with an amount that must be non-negative and fit `usize`.
fn shift(op: Op, left: Value, right: Value, f: impl FnOnce(BigInt, usize) -> BigInt) -> EvalResult {
    let (b, a) = int_pair(op, left, right)?;
    let amount = a.to_usize().ok_or(EvalError::Overflow { op })?;
    Ok(Value::Int(f(b, amount)))
}

/// Operation on two operands that must fit `i64`.
fn bounded(op: Op, left: Value, right: Value, f: fn(i64, i64) -> BigInt) -> EvalResult {
    let (b, a) = int_pair(op, left, right)?;
    match (b.to_i64(), a.to_i64()) {
        (Some(b), Some(a)) => Ok(Value::Int(f(b, a))),
        _ => Err(EvalError::Overflow { op }),
    }
}

// Integer algorithms

/// Euclidean division: the remainder is never negative.
fn div_rem_euclid(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let (q, r) = a.div_rem(b);
    if r.is_negative() {
        if b.is_positive() {
            (q - 1, r + b)
        } else {
            (q + 1, r - b)
        }
    } else {
        (q, r)
    }
}

/// Inverse of `value` modulo `|modulus|`, in `[0, |modulus|)`.
fn mod_inverse(value: &BigInt, modulus: &BigInt) -> EvalResult<BigInt> {
    if modulus.is_zero() {
        return Err(EvalError::DivisionByZero { op: Op::ModInverse });
    }
    let m = modulus.abs();
    let (mut old_r, mut r) = (value.mod_floor(&m), m.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }
    if !old_r.is_one() {
        return Err(EvalError::NotInvertible);
    }
    Ok(old_s.mod_floor(&m))
}

/// `base ** exponent` for a non-negative exponent.
///
/// Only bases 0 and ±1 accept exponents beyond `u32`.
fn pow(base: &BigInt, exponent: &BigInt) -> EvalResult<BigInt> {
    if base.is_zero() {
        return Ok(if exponent.is_zero() { BigInt::one() } else { BigInt::zero() });
    }
    if base.abs().is_one() {
        return Ok(if base.is_negative() && exponent.is_odd() {
            -BigInt::one()
        } else {
            BigInt::one()
        });
    }
    let exponent = exponent.to_u32().ok_or(EvalError::Overflow { op: Op::Exp })?;
    Ok(base.pow(exponent))
}

/// `n choose k`; zero outside `0 <= k <= n`.
fn binomial(n: i64, k: i64) -> BigInt {
    if k < 0 || k > n {
        return BigInt::zero();
    }
    let k = k.min(n - k);
    let mut acc = BigInt::one();
    for i in 0..k {
        acc = acc * (n - i) / (i + 1);
    }
    acc
}

/// Product of every integer in `[a, b]`; 1 for an empty range.
fn mul_range(a: i64, b: i64) -> BigInt {
    if a > b {
        return BigInt::one();
    }
    if a <= 0 && b >= 0 {
        return BigInt::zero();
    }
    (a..=b).fold(BigInt::one(), |acc, i| acc * i)
}

#[cfg(test)]
mod tests;
