//! Front-end and evaluator error types.

use calc_ir::{Op, Span, ValueKind};
use thiserror::Error;

use crate::ErrorCode;

/// Failure to compile expression text into the linear form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CompileError {
    /// A token or call target no front end recognizes.
    #[error("bad token `{text}` at position {}", .span.start)]
    BadToken { text: String, span: Span },

    /// A call with the wrong number of arguments.
    #[error("bad call to `{callee}`; needed {} args, found {found}", arg_count(*.min, *.max))]
    BadCall {
        callee: String,
        min: usize,
        max: usize,
        found: usize,
        span: Span,
    },

    /// Malformed infix syntax.
    #[error("{message}")]
    Syntax { message: String, span: Span },

    /// A postfix token needs more operands than the stack holds.
    #[error("insufficient arguments to {token} before position {pos}")]
    StackUnderflow { token: String, pos: usize },

    /// The postfix stream left extra values on the stack.
    ///
    /// Non-fatal: the compiled expression is still returned alongside it.
    #[error("expression ends with {depth} values on stack")]
    TrailingStack { depth: usize },

    /// A reserved operator was named.
    #[error("{op} is not implemented")]
    NotImplemented { op: Op, span: Span },
}

fn arg_count(min: usize, max: usize) -> String {
    if min == max {
        min.to_string()
    } else {
        format!("{min} to {max}")
    }
}

impl CompileError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CompileError::BadToken { .. } => ErrorCode::E0001,
            CompileError::Syntax { .. } => ErrorCode::E1001,
            CompileError::BadCall { .. } => ErrorCode::E1002,
            CompileError::StackUnderflow { .. } => ErrorCode::E1003,
            CompileError::TrailingStack { .. } => ErrorCode::E1004,
            CompileError::NotImplemented { .. } => ErrorCode::E1005,
        }
    }

    /// Source range the error points at, if it has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            CompileError::BadToken { span, .. }
            | CompileError::BadCall { span, .. }
            | CompileError::Syntax { span, .. }
            | CompileError::NotImplemented { span, .. } => Some(*span),
            CompileError::StackUnderflow { token, pos } => {
                Some(Span::from_range(*pos..pos.saturating_add(token.len())))
            }
            CompileError::TrailingStack { .. } => None,
        }
    }

    /// True for conditions that still yield a usable expression.
    pub fn is_warning(&self) -> bool {
        matches!(self, CompileError::TrailingStack { .. })
    }
}

/// Failure while executing a compiled expression.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("missing var {name}")]
    MissingVar { name: String },

    #[error("incorrect type for {op}; needed {expected}, found {found}")]
    TypeMismatch {
        op: Op,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("overflow in {op}")]
    Overflow { op: Op },

    #[error("division by zero in {op}")]
    DivisionByZero { op: Op },

    #[error("no modular inverse exists")]
    NotInvertible,

    #[error("{op} is not implemented")]
    NotImplemented { op: Op },

    #[error("empty expression")]
    EmptyExpression,

    /// Malformed instruction sequence. Never produced by compiler output.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::MissingVar { .. } => ErrorCode::E2001,
            EvalError::TypeMismatch { .. } => ErrorCode::E2002,
            EvalError::Overflow { .. } => ErrorCode::E2003,
            EvalError::DivisionByZero { .. } => ErrorCode::E2004,
            EvalError::NotInvertible => ErrorCode::E2005,
            EvalError::NotImplemented { .. } => ErrorCode::E2006,
            EvalError::EmptyExpression => ErrorCode::E2007,
            EvalError::Internal { .. } => ErrorCode::E9001,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        EvalError::Internal {
            message: message.into(),
        }
    }

    pub fn type_mismatch(op: Op, expected: ValueKind, found: ValueKind) -> Self {
        EvalError::TypeMismatch {
            op,
            expected,
            found,
        }
    }
}
