//! One-pass postfix compiler.
//!
//! No tree is built. A running depth counter stands in for the stack: pushes
//! raise it, an operator of arity `n` needs `n` values and leaves one.

use calc_diagnostic::CompileError;
use calc_ir::{CompiledExpr, Op, Value};
use calc_lexer::{words, WordKind};
use tracing::debug;

/// Result of a postfix compilation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compiled {
    pub expr: CompiledExpr,
    /// Non-fatal condition found while compiling. Currently only
    /// [`CompileError::TrailingStack`].
    pub warning: Option<CompileError>,
}

impl Compiled {
    /// Discard any warning, keeping the expression.
    pub fn into_expr(self) -> CompiledExpr {
        self.expr
    }

    /// Treat a warning as an error.
    pub fn deny_warnings(self) -> Result<CompiledExpr, CompileError> {
        match self.warning {
            Some(warning) => Err(warning),
            None => Ok(self.expr),
        }
    }
}

/// Compile postfix token text into the linear form.
///
/// Fails on the first bad token or stack underflow. A stream that leaves
/// more than one value still compiles, with a trailing-stack warning.
pub fn compile_postfix(source: &str) -> Result<Compiled, CompileError> {
    let mut expr = CompiledExpr::new();
    let mut depth: usize = 0;

    for word in words(source) {
        let word = word?;
        match word.kind {
            WordKind::Op(Op::Nop) => expr.push_op(Op::Nop),
            WordKind::Op(op) => {
                let arity = op.arity();
                if depth < arity.max(1) {
                    return Err(CompileError::StackUnderflow {
                        token: word.text.to_owned(),
                        pos: word.pos,
                    });
                }
                depth = depth - arity + op.pushes();
                expr.push_op(op);
            }
            WordKind::Ident(name) => {
                expr.push_load(name);
                depth += 1;
            }
            WordKind::Nil => {
                expr.push_const(Value::Absent);
                depth += 1;
            }
            WordKind::Const(value) => {
                expr.push_const(value);
                depth += 1;
            }
        }
    }

    debug!(ops = expr.len(), depth, "compiled postfix expression");
    let warning = (depth > 1).then_some(CompileError::TrailingStack { depth });
    Ok(Compiled { expr, warning })
}
