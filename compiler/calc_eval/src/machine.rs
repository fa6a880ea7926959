//! The stack machine.

use std::slice;

use calc_diagnostic::EvalError;
use calc_ir::{BigRational, CompiledExpr, Op, Value, ValueKind};
use tracing::trace;

use crate::operators::{evaluate_binary, evaluate_exp};
use crate::unary_operators::evaluate_unary;
use crate::{Bindings, EvalResult};

/// Evaluate `expr` against `bindings`.
///
/// Stops at the first failing instruction. On success the bottom value of
/// the stack is returned widened to a rational; an expression compiled
/// with a trailing-stack warning yields its first value.
#[tracing::instrument(level = "trace", skip_all, fields(ops = expr.len()))]
pub fn evaluate<B: Bindings + ?Sized>(
    expr: &CompiledExpr,
    bindings: &B,
) -> Result<BigRational, EvalError> {
    let mut machine = Machine::new(expr);
    for &op in expr.ops() {
        machine.step(op, bindings)?;
    }
    machine.finish(expr.ops().last().copied().unwrap_or(Op::Nop))
}

/// Execute one non-leaf operator against `stack`.
///
/// Pops the operator's operands, leftmost deepest, and pushes its result.
/// `LOAD` and `CONST` need a pool and are rejected here.
pub fn apply(op: Op, stack: &mut Vec<Value>) -> Result<(), EvalError> {
    let result = match op {
        Op::Nop => return Ok(()),
        Op::Load | Op::Const => {
            return Err(EvalError::internal(format!("{op} applied without a pool entry")));
        }
        Op::Rand => return Err(EvalError::NotImplemented { op }),
        Op::Exp => {
            let modulus = pop(stack, op)?;
            let exponent = pop(stack, op)?;
            let base = pop(stack, op)?;
            evaluate_exp(base, exponent, modulus)?
        }
        _ if op.arity() == 1 => evaluate_unary(op, pop(stack, op)?)?,
        _ => {
            let right = pop(stack, op)?;
            let left = pop(stack, op)?;
            evaluate_binary(op, left, right)?
        }
    };
    stack.push(result);
    Ok(())
}

fn pop(stack: &mut Vec<Value>, op: Op) -> EvalResult {
    stack
        .pop()
        .ok_or_else(|| EvalError::internal(format!("stack underflow at {op}")))
}

/// Per-evaluation state: the value stack and the pool cursors.
struct Machine<'e> {
    stack: Vec<Value>,
    names: slice::Iter<'e, String>,
    consts: slice::Iter<'e, Value>,
}

impl<'e> Machine<'e> {
    fn new(expr: &'e CompiledExpr) -> Self {
        Machine {
            stack: Vec::with_capacity(expr.len()),
            names: expr.names().iter(),
            consts: expr.consts().iter(),
        }
    }

    fn step<B: Bindings + ?Sized>(&mut self, op: Op, bindings: &B) -> Result<(), EvalError> {
        trace!(%op, depth = self.stack.len(), "step");
        match op {
            Op::Load => {
                let name = self
                    .names
                    .next()
                    .ok_or_else(|| EvalError::internal("LOAD past the end of the name pool"))?;
                match bindings.lookup(name) {
                    Some(value) if !value.is_absent() => self.stack.push(value.clone().normalize()),
                    _ => return Err(EvalError::MissingVar { name: name.clone() }),
                }
            }
            Op::Const => {
                let value = self
                    .consts
                    .next()
                    .ok_or_else(|| EvalError::internal("CONST past the end of the constant pool"))?;
                self.stack.push(value.clone().normalize());
            }
            op => apply(op, &mut self.stack)?,
        }
        Ok(())
    }

    /// The bottom value is the result. Values above it are left by a
    /// trailing-stack expression and ignored.
    fn finish(self, last: Op) -> Result<BigRational, EvalError> {
        let depth = self.stack.len();
        if depth > 1 {
            trace!(depth, "ignoring values above the result");
        }
        let Some(value) = self.stack.into_iter().next() else {
            return Err(EvalError::EmptyExpression);
        };
        let kind = value.kind();
        value
            .into_ratio()
            .ok_or_else(|| EvalError::type_mismatch(last, ValueKind::Rational, kind))
    }
}
