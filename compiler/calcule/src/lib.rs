//! Calcule - exact-arithmetic expression compiler.
//!
//! Expressions are compiled once into a flat instruction sequence and
//! evaluated any number of times against variable bindings. Arithmetic is
//! exact: integers are unbounded and quotients stay rational.
//!
//! # Architecture
//!
//! ```text
//! infix text ──► compile_infix ──┐
//!                                ├──► CompiledExpr ──► optimize ──► evaluate ──► BigRational
//! postfix text ─► compile_postfix┘         │
//!                                          └──► render ──► postfix text
//! ```
//!
//! ```
//! use calcule::{compile_infix, evaluate, optimize, Value};
//! use rustc_hash::FxHashMap;
//!
//! let expr = optimize(&compile_infix("x * (1/2 + 1/3)").unwrap());
//! let mut vars = FxHashMap::default();
//! vars.insert("x".to_owned(), Value::int(12));
//! assert_eq!(evaluate(&expr, &vars).unwrap().to_string(), "10");
//! ```

pub mod cli;

pub use calc_diagnostic::{CompileError, ErrorCode, EvalError};
pub use calc_eval::{evaluate, Bindings};
pub use calc_ir::{parse_const, BigInt, BigRational, CompiledExpr, Op, Span, Value, ValueKind};
pub use calc_opt::optimize;
pub use calc_parse::{compile_infix, compile_postfix, Compiled};

/// Front end selection.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Syntax {
    #[default]
    Infix,
    Postfix,
}

/// Compile `source` with the chosen front end.
///
/// Only the postfix front end produces warnings.
pub fn compile(source: &str, syntax: Syntax) -> Result<Compiled, CompileError> {
    match syntax {
        Syntax::Infix => compile_infix(source).map(|expr| Compiled {
            expr,
            warning: None,
        }),
        Syntax::Postfix => compile_postfix(source),
    }
}

/// Render `expr` as postfix text that [`compile_postfix`] reads back.
pub fn render(expr: &CompiledExpr) -> String {
    expr.render()
}

/// Format a result exactly: `n`, or `n/d` in lowest terms.
pub fn format_ratio(value: &BigRational) -> String {
    Value::from_ratio(value.clone()).to_string()
}
