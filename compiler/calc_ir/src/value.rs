//! Exact numeric values.
//!
//! A [`Value`] is an arbitrary-precision integer, a rational in lowest terms,
//! or the `Absent` sentinel that fills the optional modulus slot of `EXP`.
//!
//! # Normalization
//!
//! A `Rat` with denominator 1 is never observable: everything that builds a
//! rational goes through [`Value::from_ratio`], which demotes it to `Int`.
//! `BigRational` itself keeps lowest terms and a positive denominator.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// Operand kind, used in type-mismatch diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueKind {
    Integer,
    Rational,
    Absent,
}

impl ValueKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "int",
            Self::Rational => "rat",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An exact value on the evaluation stack or in a constant pool.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Value {
    Int(BigInt),
    /// Always in lowest terms with a denominator greater than 1.
    Rat(BigRational),
    Absent,
}

impl Value {
    /// Integer value.
    #[inline]
    pub fn int(value: impl Into<BigInt>) -> Self {
        Value::Int(value.into())
    }

    /// Rational value, demoted to `Int` when the denominator is 1.
    pub fn from_ratio(ratio: BigRational) -> Self {
        if ratio.is_integer() {
            Value::Int(ratio.to_integer())
        } else {
            Value::Rat(ratio)
        }
    }

    /// Exact fraction `numer / denom`; `None` when `denom` is zero.
    pub fn fraction(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Option<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return None;
        }
        Some(Self::from_ratio(BigRational::new(numer.into(), denom)))
    }

    /// Restore the demotion invariant on a value built directly from `Rat`.
    #[must_use]
    pub fn normalize(self) -> Self {
        match self {
            Value::Rat(r) => Value::from_ratio(r),
            other => other,
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Integer,
            Value::Rat(_) => ValueKind::Rational,
            Value::Absent => ValueKind::Absent,
        }
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// True only for the integer 1.
    pub fn is_one(&self) -> bool {
        matches!(self, Value::Int(i) if i.is_one())
    }

    /// True for a zero integer; rationals are never zero.
    pub fn is_zero(&self) -> bool {
        matches!(self, Value::Int(i) if i.is_zero())
    }

    /// Widen to a rational. `Absent` has no numeric value.
    pub fn into_ratio(self) -> Option<BigRational> {
        match self {
            Value::Int(i) => Some(BigRational::from_integer(i)),
            Value::Rat(r) => Some(r),
            Value::Absent => None,
        }
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(BigInt::from(value))
    }
}

impl From<BigRational> for Value {
    fn from(value: BigRational) -> Self {
        Value::from_ratio(value)
    }
}

/// Renders in the numeral grammar: `42`, `-3/4`, or `<nil>` for `Absent`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Rat(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Value::Absent => f.write_str("<nil>"),
        }
    }
}
