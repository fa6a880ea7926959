//! The linear instruction form.
//!
//! A [`CompiledExpr`] is a flat operator sequence plus two side pools. Each
//! `LOAD` consumes the next entry of `names`, each `CONST` the next entry of
//! `consts`, strictly in emission order. The sequence is built once by a
//! front end (or by re-linearizing an optimized tree) and is read-only
//! afterwards: evaluation only ever borrows it.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::{Op, Value};

/// A compiled expression, ready for evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompiledExpr {
    ops: Vec<Op>,
    names: Vec<String>,
    consts: Vec<Value>,
}

impl CompiledExpr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for roughly `ops` instructions.
    pub fn with_capacity(ops: usize) -> Self {
        CompiledExpr {
            ops: Vec::with_capacity(ops),
            names: Vec::new(),
            consts: Vec::new(),
        }
    }

    /// Append an operator that takes no pool entry.
    ///
    /// `LOAD` and `CONST` must go through [`push_load`](Self::push_load) and
    /// [`push_const`](Self::push_const) so the pools stay in step.
    pub fn push_op(&mut self, op: Op) {
        debug_assert!(!op.is_leaf(), "{op} must be pushed with its pool entry");
        self.ops.push(op);
    }

    /// Append a `LOAD` of `name`.
    pub fn push_load(&mut self, name: impl Into<String>) {
        self.ops.push(Op::Load);
        self.names.push(name.into());
    }

    /// Append a `CONST` of `value`.
    pub fn push_const(&mut self, value: Value) {
        self.ops.push(Op::Const);
        self.consts.push(value);
    }

    #[inline]
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Variable names, one per `LOAD`, in execution order.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Constants, one per `CONST`, in execution order.
    #[inline]
    pub fn consts(&self) -> &[Value] {
        &self.consts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Distinct variable names in first-use order.
    pub fn vars(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.names
            .iter()
            .map(String::as_str)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Render as a space-separated postfix token stream.
    ///
    /// Variables render as `(name)`, constants in the numeral grammar and
    /// absent constants as `<nil>`, so the postfix compiler reads the output
    /// back into an equivalent sequence.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompiledExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = self.names.iter();
        let mut consts = self.consts.iter();
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match op {
                Op::Load => match names.next() {
                    Some(name) => write!(f, "({name})")?,
                    None => f.write_str("(?)")?,
                },
                Op::Const => match consts.next() {
                    Some(value) => write!(f, "{value}")?,
                    None => f.write_str("?")?,
                },
                op => f.write_str(op.token())?,
            }
        }
        Ok(())
    }
}
