//! Unary operator implementations for the evaluator.
//!
//! `ABS`, `NEG`, `INV` and the rounding operators accept either numeric
//! kind; `NOT` is integer-only. Rounding, `NUM` and `DENOM` always produce
//! integers.

use calc_diagnostic::EvalError;
use calc_ir::{BigInt, BigRational, Op, Value, ValueKind};
use num_traits::{One, Signed, Zero};

use crate::EvalResult;

/// Evaluate a unary operation using direct pattern matching.
pub fn evaluate_unary(op: Op, value: Value) -> EvalResult {
    if op.arity() != 1 {
        return Err(EvalError::internal(format!("{op} is not a unary operator")));
    }
    match (op, value) {
        (_, Value::Absent) => Err(EvalError::type_mismatch(op, expected(op), ValueKind::Absent)),

        (Op::Abs, Value::Int(i)) => Ok(Value::Int(i.abs())),
        (Op::Abs, Value::Rat(r)) => Ok(Value::Rat(r.abs())),
        (Op::Neg, Value::Int(i)) => Ok(Value::Int(-i)),
        (Op::Neg, Value::Rat(r)) => Ok(Value::Rat(-r)),

        (Op::Not, Value::Int(i)) => Ok(Value::Int(!i)),
        (Op::Not, other) => Err(EvalError::type_mismatch(op, ValueKind::Integer, other.kind())),

        (Op::Denom, Value::Int(_)) => Ok(Value::Int(BigInt::one())),
        (Op::Denom, Value::Rat(r)) => Ok(Value::Int(r.denom().clone())),
        (Op::Num, Value::Int(i)) => Ok(Value::Int(i)),
        (Op::Num, Value::Rat(r)) => Ok(Value::Int(r.numer().clone())),

        (Op::Inv, Value::Int(i)) if i.is_zero() => Err(EvalError::DivisionByZero { op }),
        (Op::Inv, Value::Rat(r)) if r.is_zero() => Err(EvalError::DivisionByZero { op }),
        (Op::Inv, Value::Int(i)) => Ok(Value::from_ratio(BigRational::new(BigInt::one(), i))),
        (Op::Inv, Value::Rat(r)) => Ok(Value::from_ratio(r.recip())),

        (Op::Trunc | Op::Floor | Op::Ceil, Value::Int(i)) => Ok(Value::Int(i)),
        (Op::Trunc, Value::Rat(r)) => Ok(Value::Int(r.trunc().to_integer())),
        (Op::Floor, Value::Rat(r)) => Ok(Value::Int(r.floor().to_integer())),
        (Op::Ceil, Value::Rat(r)) => Ok(Value::Int(r.ceil().to_integer())),

        (op, value) => Err(EvalError::type_mismatch(op, expected(op), value.kind())),
    }
}

/// Operand kind an operator needs, for mismatch reports.
fn expected(op: Op) -> ValueKind {
    match op {
        Op::Not => ValueKind::Integer,
        _ => ValueKind::Rational,
    }
}
