//! Stack-machine evaluator for calcule.
//!
//! # Architecture
//!
//! - [`evaluate`]: runs a [`CompiledExpr`](calc_ir::CompiledExpr) against
//!   caller [`Bindings`] and widens the single result to a rational
//! - [`apply`]: executes one non-leaf operator against a value stack; the
//!   optimizer folds constants through it on a scratch stack
//! - `operators` / `unary_operators`: per-operator numeric semantics,
//!   dispatched by matching on the closed [`Op`](calc_ir::Op) set
//!
//! Values read from the constant pool or the bindings are cloned before
//! they reach the stack. Evaluation never writes to either, so a compiled
//! expression can be evaluated any number of times.

mod bindings;
mod machine;
mod operators;
mod unary_operators;

pub use bindings::Bindings;
pub use machine::{apply, evaluate};
pub use operators::{evaluate_binary, evaluate_exp};
pub use unary_operators::evaluate_unary;

use calc_diagnostic::EvalError;
use calc_ir::Value;

/// Result of evaluating one operator.
pub type EvalResult<T = Value> = Result<T, EvalError>;
