//! Error reporting for calcule.
//!
//! Every failure carries a stable [`ErrorCode`] so it can be searched for and
//! matched on independently of its message text:
//!
//! - [`CompileError`]: raised by the infix and postfix front ends
//! - [`EvalError`]: raised by the evaluator
//!
//! Errors are plain values returned to the immediate caller. Nothing in the
//! pipeline retries or recovers from them.

mod error_code;
mod errors;

pub use error_code::ErrorCode;
pub use errors::{CompileError, EvalError};
