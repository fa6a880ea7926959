use super::*;
use pretty_assertions::assert_eq;

fn int(i: i64) -> Value {
    Value::int(i)
}

fn frac(n: i64, d: i64) -> Value {
    Value::fraction(n, d).unwrap()
}

fn binary(op: Op, left: Value, right: Value) -> Value {
    evaluate_binary(op, left, right).unwrap()
}

fn big(text: &str) -> Value {
    Value::Int(text.parse().unwrap())
}

#[test]
fn test_numeric_promotion_and_demotion() {
    assert_eq!(binary(Op::Add, int(2), int(3)), int(5));
    assert_eq!(binary(Op::Add, frac(1, 2), frac(1, 3)), frac(5, 6));
    assert_eq!(binary(Op::Add, frac(1, 2), frac(1, 2)), int(1));
    assert_eq!(binary(Op::Sub, int(1), frac(1, 4)), frac(3, 4));
    assert_eq!(binary(Op::Mul, frac(2, 3), int(3)), int(2));
}

#[test]
fn test_quotient() {
    assert_eq!(binary(Op::Quo, int(6), int(3)), int(2));
    assert_eq!(binary(Op::Quo, int(1), int(-2)), frac(-1, 2));
    assert_eq!(binary(Op::Quo, frac(1, 2), frac(1, 4)), int(2));
    assert_eq!(
        evaluate_binary(Op::Quo, int(1), int(0)),
        Err(EvalError::DivisionByZero { op: Op::Quo })
    );
    assert_eq!(
        evaluate_binary(Op::Quo, frac(1, 2), int(0)),
        Err(EvalError::DivisionByZero { op: Op::Quo })
    );
}

#[test]
fn test_bitwise_twos_complement() {
    assert_eq!(binary(Op::And, int(12), int(10)), int(8));
    assert_eq!(binary(Op::Or, int(12), int(10)), int(14));
    assert_eq!(binary(Op::Xor, int(12), int(10)), int(6));
    assert_eq!(binary(Op::AndNot, int(12), int(10)), int(4));
    assert_eq!(binary(Op::And, int(-1), int(255)), int(255));
    assert_eq!(binary(Op::AndNot, int(-8), int(3)), int(-8));
}

#[test]
fn test_integer_ops_reject_rationals() {
    assert_eq!(
        evaluate_binary(Op::And, frac(1, 2), int(1)),
        Err(EvalError::type_mismatch(Op::And, ValueKind::Integer, ValueKind::Rational))
    );
    assert_eq!(
        evaluate_binary(Op::Gcd, int(4), Value::Absent),
        Err(EvalError::type_mismatch(Op::Gcd, ValueKind::Integer, ValueKind::Absent))
    );
    assert_eq!(
        evaluate_binary(Op::Add, int(4), Value::Absent),
        Err(EvalError::type_mismatch(Op::Add, ValueKind::Rational, ValueKind::Absent))
    );
}

#[test]
fn test_division_family() {
    // Euclidean
    assert_eq!(binary(Op::Div, int(-7), int(2)), int(-4));
    assert_eq!(binary(Op::Mod, int(-7), int(2)), int(1));
    assert_eq!(binary(Op::Div, int(-7), int(-2)), int(4));
    assert_eq!(binary(Op::Mod, int(-7), int(-2)), int(1));
    assert_eq!(binary(Op::Div, int(7), int(-2)), int(-3));
    // Truncated
    assert_eq!(binary(Op::Rem, int(-7), int(2)), int(-1));
    assert_eq!(binary(Op::Rem, int(7), int(-2)), int(1));

    for op in [Op::Div, Op::Mod, Op::Rem] {
        assert_eq!(evaluate_binary(op, int(5), int(0)), Err(EvalError::DivisionByZero { op }));
    }
}

#[test]
fn test_gcd_is_non_negative() {
    assert_eq!(binary(Op::Gcd, int(-12), int(18)), int(6));
    assert_eq!(binary(Op::Gcd, int(0), int(-5)), int(5));
    assert_eq!(binary(Op::Gcd, int(0), int(0)), int(0));
}

#[test]
fn test_mod_inverse() {
    assert_eq!(binary(Op::ModInverse, int(3), int(7)), int(5));
    assert_eq!(binary(Op::ModInverse, int(-3), int(7)), int(2));
    assert_eq!(binary(Op::ModInverse, int(3), int(-7)), int(5));
    assert_eq!(binary(Op::ModInverse, int(5), int(1)), int(0));
    assert_eq!(
        evaluate_binary(Op::ModInverse, int(2), int(4)),
        Err(EvalError::NotInvertible)
    );
    assert_eq!(
        evaluate_binary(Op::ModInverse, int(2), int(0)),
        Err(EvalError::DivisionByZero { op: Op::ModInverse })
    );
}

#[test]
fn test_shifts() {
    assert_eq!(binary(Op::Lsh, int(3), int(4)), int(48));
    assert_eq!(binary(Op::Rsh, int(48), int(4)), int(3));
    assert_eq!(binary(Op::Rsh, int(-7), int(1)), int(-4));
    assert_eq!(
        evaluate_binary(Op::Lsh, int(1), int(-1)),
        Err(EvalError::Overflow { op: Op::Lsh })
    );
    assert_eq!(
        evaluate_binary(Op::Rsh, int(1), big("100000000000000000000000")),
        Err(EvalError::Overflow { op: Op::Rsh })
    );
}

#[test]
fn test_binomial() {
    assert_eq!(binary(Op::Binomial, int(5), int(2)), int(10));
    assert_eq!(binary(Op::Binomial, int(52), int(5)), int(2_598_960));
    assert_eq!(binary(Op::Binomial, int(5), int(0)), int(1));
    assert_eq!(binary(Op::Binomial, int(5), int(6)), int(0));
    assert_eq!(binary(Op::Binomial, int(5), int(-1)), int(0));
    assert_eq!(
        evaluate_binary(Op::Binomial, big("9223372036854775808"), int(1)),
        Err(EvalError::Overflow { op: Op::Binomial })
    );
}

#[test]
fn test_mul_range() {
    assert_eq!(binary(Op::MulRange, int(1), int(5)), int(120));
    assert_eq!(binary(Op::MulRange, int(5), int(1)), int(1));
    assert_eq!(binary(Op::MulRange, int(-2), int(3)), int(0));
    assert_eq!(binary(Op::MulRange, int(-3), int(-1)), int(-6));
    assert_eq!(binary(Op::MulRange, int(-4), int(-1)), int(24));
    assert_eq!(
        evaluate_binary(Op::MulRange, big("-9223372036854775809"), int(1)),
        Err(EvalError::Overflow { op: Op::MulRange })
    );
}

#[test]
fn test_frac() {
    assert_eq!(binary(Op::Frac, int(6), int(-4)), frac(-3, 2));
    assert_eq!(binary(Op::Frac, int(6), int(3)), int(2));
    assert_eq!(
        evaluate_binary(Op::Frac, int(1), int(0)),
        Err(EvalError::DivisionByZero { op: Op::Frac })
    );
}

#[test]
fn test_exp_plain() {
    assert_eq!(evaluate_exp(int(2), int(10), Value::Absent), Ok(int(1024)));
    assert_eq!(evaluate_exp(int(2), int(10), int(0)), Ok(int(1024)));
    assert_eq!(evaluate_exp(int(-3), int(3), Value::Absent), Ok(int(-27)));
    assert_eq!(evaluate_exp(int(7), int(0), Value::Absent), Ok(int(1)));
}

#[test]
fn test_exp_negative_exponent() {
    assert_eq!(evaluate_exp(int(2), int(-3), Value::Absent), Ok(frac(1, 8)));
    assert_eq!(evaluate_exp(int(-2), int(-3), Value::Absent), Ok(frac(-1, 8)));
    assert_eq!(evaluate_exp(int(1), int(-5), Value::Absent), Ok(int(1)));
    assert_eq!(
        evaluate_exp(int(0), int(-1), Value::Absent),
        Err(EvalError::DivisionByZero { op: Op::Exp })
    );
    assert_eq!(
        evaluate_exp(int(2), int(-3), int(5)),
        Err(EvalError::type_mismatch(Op::Exp, ValueKind::Absent, ValueKind::Integer))
    );
}

#[test]
fn test_exp_modular() {
    assert_eq!(evaluate_exp(int(4), int(13), int(497)), Ok(int(445)));
    assert_eq!(evaluate_exp(int(-2), int(3), int(5)), Ok(int(2)));
    assert_eq!(evaluate_exp(int(3), int(4), int(-5)), Ok(int(1)));
}

#[test]
fn test_exp_overflow_and_trivial_bases() {
    let huge = big("4294967296");
    assert_eq!(
        evaluate_exp(int(2), huge.clone(), Value::Absent),
        Err(EvalError::Overflow { op: Op::Exp })
    );
    assert_eq!(evaluate_exp(int(-1), huge.clone(), Value::Absent), Ok(int(1)));
    assert_eq!(evaluate_exp(int(0), huge.clone(), Value::Absent), Ok(int(0)));
    assert_eq!(evaluate_exp(int(2), huge, int(3)), Ok(int(1)));
}

#[test]
fn test_exp_type_errors() {
    assert_eq!(
        evaluate_exp(frac(1, 2), int(2), Value::Absent),
        Err(EvalError::type_mismatch(Op::Exp, ValueKind::Integer, ValueKind::Rational))
    );
    assert_eq!(
        evaluate_exp(int(2), int(2), frac(1, 2)),
        Err(EvalError::type_mismatch(Op::Exp, ValueKind::Integer, ValueKind::Rational))
    );
}

#[test]
fn test_not_binary() {
    assert!(matches!(
        evaluate_binary(Op::Neg, int(1), int(2)),
        Err(EvalError::Internal { .. })
    ));
}
