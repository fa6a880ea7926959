//! Re-linearization of an optimized tree.

use calc_ir::{CompiledExpr, Op};
use calc_stack::ensure_sufficient_stack;

use crate::tree::{Leaf, NodeId, Tree};

/// Emit every root post-order, in root order.
pub fn linearize(tree: &Tree) -> CompiledExpr {
    let mut out = CompiledExpr::new();
    for &root in tree.roots() {
        emit(tree, root, &mut out);
    }
    out
}

fn emit(tree: &Tree, id: NodeId, out: &mut CompiledExpr) {
    ensure_sufficient_stack(|| {
        let node = tree.node(id);
        match (&node.leaf, node.op) {
            (Some(Leaf::Name(name)), _) => out.push_load(name.as_str()),
            (Some(Leaf::Const(value)), _) => out.push_const(value.clone()),
            (None, Op::Nop) => {}
            (None, op) => {
                for &child in &node.children {
                    emit(tree, child, out);
                }
                out.push_op(op);
            }
        }
    });
}
