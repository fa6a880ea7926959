// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Property-based tests for the compile / optimize / evaluate pipeline.

use calc_eval::{evaluate_binary, evaluate_unary};
use calcule::{compile_infix, compile_postfix, evaluate, optimize, render, Op, Value};
use proptest::prelude::*;
use rustc_hash::FxHashMap;

// ============================================================================
// Strategies
// ============================================================================

/// Integers and proper fractions.
fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-50i64..=50).prop_map(Value::int),
        (-50i64..=50, 1i64..=12).prop_map(|(n, d)| Value::fraction(n, d).unwrap()),
    ]
}

fn arb_bindings() -> impl Strategy<Value = FxHashMap<String, Value>> {
    (arb_value(), arb_value(), arb_value()).prop_map(|(x, y, z)| {
        let mut vars = FxHashMap::default();
        vars.insert("x".to_owned(), x);
        vars.insert("y".to_owned(), y);
        vars.insert("z".to_owned(), z);
        vars
    })
}

fn arb_constant() -> impl Strategy<Value = String> {
    prop_oneof![
        (0i64..=20).prop_map(|n| n.to_string()),
        Just("1".to_owned()),
        Just("1/2".to_owned()),
    ]
}

fn arb_leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_constant(),
        Just("x".to_owned()),
        Just("y".to_owned()),
        Just("z".to_owned()),
    ]
}

/// Infix source over the numeric operators, with enough `1`, `NEG` and
/// `INV` to trigger the simplifier.
fn arb_infix() -> impl Strategy<Value = String> {
    arb_tree(arb_leaf().boxed())
}

/// Infix source with no free variables.
fn arb_closed_infix() -> impl Strategy<Value = String> {
    arb_tree(arb_constant().boxed())
}

fn arb_tree(leaf: BoxedStrategy<String>) -> impl Strategy<Value = String> {
    leaf.prop_recursive(5, 48, 3, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(vec!["+", "-", "*", "/"]), inner.clone())
                .prop_map(|(a, op, b)| format!("({a} {op} {b})")),
            (prop::sample::select(vec!["-", "+"]), inner.clone())
                .prop_map(|(op, a)| format!("{op}({a})")),
            (
                prop::sample::select(vec!["inv", "abs", "floor", "ceil", "trunc", "num", "denom"]),
                inner.clone()
            )
                .prop_map(|(f, a)| format!("{f}({a})")),
            (inner.clone(), inner).prop_map(|(a, b)| format!("exp(trunc({a}) % 5, trunc({b}) % 4)")),
        ]
    })
}

fn arb_numeric_op() -> impl Strategy<Value = Op> {
    prop::sample::select(vec![Op::Add, Op::Sub, Op::Mul, Op::Quo])
}

fn arb_unary_op() -> impl Strategy<Value = Op> {
    prop::sample::select(vec![
        Op::Abs,
        Op::Neg,
        Op::Inv,
        Op::Denom,
        Op::Num,
        Op::Trunc,
        Op::Floor,
        Op::Ceil,
    ])
}

fn is_normalized(value: &Value) -> bool {
    match value {
        Value::Rat(r) => !r.is_integer(),
        _ => true,
    }
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// No operator returns a rational with denominator 1.
    #[test]
    fn binary_results_normalized(op in arb_numeric_op(), a in arb_value(), b in arb_value()) {
        if let Ok(value) = evaluate_binary(op, a, b) {
            prop_assert!(is_normalized(&value), "{op}: {value:?}");
        }
    }

    #[test]
    fn unary_results_normalized(op in arb_unary_op(), a in arb_value()) {
        if let Ok(value) = evaluate_unary(op, a) {
            prop_assert!(is_normalized(&value), "{op}: {value:?}");
        }
    }

    /// Folded constants keep the normalization invariant.
    #[test]
    fn folded_constants_normalized(source in arb_infix()) {
        let expr = optimize(&compile_infix(&source).unwrap());
        for value in expr.consts() {
            prop_assert!(is_normalized(value), "{source}: {value:?}");
        }
    }

    /// Rendering reads back through the postfix compiler unchanged.
    #[test]
    fn render_round_trip(source in arb_infix()) {
        let expr = compile_infix(&source).unwrap();
        let compiled = compile_postfix(&render(&expr)).unwrap();
        prop_assert_eq!(compiled.warning, None);
        prop_assert_eq!(&compiled.expr, &expr, "{}", source);

        let optimized = optimize(&expr);
        let reparsed = compile_postfix(&render(&optimized)).unwrap().into_expr();
        prop_assert_eq!(&reparsed, &optimized, "{}", source);
    }

    /// The round-tripped expression evaluates identically.
    #[test]
    fn render_round_trip_evaluates(source in arb_infix(), vars in arb_bindings()) {
        let expr = compile_infix(&source).unwrap();
        let reparsed = compile_postfix(&render(&expr)).unwrap().into_expr();
        prop_assert_eq!(evaluate(&expr, &vars), evaluate(&reparsed, &vars));
    }

    /// Evaluation leaves the expression and the bindings as they were.
    #[test]
    fn evaluation_idempotent(source in arb_infix(), vars in arb_bindings()) {
        let expr = compile_infix(&source).unwrap();
        let expr_before = expr.clone();
        let vars_before = vars.clone();

        let first = evaluate(&expr, &vars);
        let second = evaluate(&expr, &vars);
        prop_assert_eq!(first, second);
        prop_assert_eq!(&expr, &expr_before);
        prop_assert_eq!(&vars, &vars_before);
    }

    /// Every successful evaluation survives optimization.
    #[test]
    fn optimize_preserves_results(source in arb_infix(), vars in arb_bindings()) {
        let expr = compile_infix(&source).unwrap();
        if let Ok(expected) = evaluate(&expr, &vars) {
            let optimized = optimize(&expr);
            prop_assert_eq!(evaluate(&optimized, &vars), Ok(expected), "{} => {}", source, render(&optimized));
        }
    }

    /// Closed expressions give the same result with no bindings at all.
    #[test]
    fn optimize_preserves_closed_results(source in arb_closed_infix()) {
        let expr = compile_infix(&source).unwrap();
        if let Ok(expected) = evaluate(&expr, &()) {
            prop_assert_eq!(evaluate(&optimize(&expr), &()), Ok(expected), "{}", source);
        }
    }
}
