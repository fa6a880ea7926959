//! Lowering from the syntax arena to the linear form.

use calc_ir::CompiledExpr;
use calc_stack::ensure_sufficient_stack;

use crate::syntax::{ExprArena, ExprId, ExprKind};

/// Emit `root` post-order: every operand before the operator using it.
pub(crate) fn lower(arena: &ExprArena, root: ExprId) -> CompiledExpr {
    let mut out = CompiledExpr::with_capacity(arena.len());
    emit(arena, root, &mut out);
    out
}

fn emit(arena: &ExprArena, id: ExprId, out: &mut CompiledExpr) {
    ensure_sufficient_stack(|| match &arena.get(id).kind {
        ExprKind::Var(name) => out.push_load(name.as_str()),
        ExprKind::Const(value) => out.push_const(value.clone()),
        ExprKind::Apply { op, args } => {
            for &arg in args {
                emit(arena, arg, out);
            }
            out.push_op(*op);
        }
    });
}
