//! Syntax arena for parsed infix expressions.
//!
//! Nodes refer to their operands by [`ExprId`] instead of boxing them. The
//! arena lives only as long as one compilation.

use calc_ir::{Op, Span, Value};
use smallvec::SmallVec;

/// Index of a node in an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct ExprId(u32);

impl ExprId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ExprKind {
    Var(String),
    Const(Value),
    /// Operator applied to operands in source order. Unary `+` is `Nop`.
    Apply {
        op: Op,
        args: SmallVec<[ExprId; 3]>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Default, Debug)]
pub(crate) struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let id = ExprId(u32::try_from(self.exprs.len()).unwrap_or(u32::MAX));
        self.exprs.push(Expr { kind, span });
        id
    }

    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    pub fn span(&self, id: ExprId) -> Span {
        self.get(id).span
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }
}
