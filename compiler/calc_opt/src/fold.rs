//! Constant folding.
//!
//! Bottom-up: once a node's operands are all `CONST` leaves, the operator
//! runs on a scratch stack through the evaluator. A failure (division by
//! zero, a type mismatch, an overflow) leaves the node as it was, so the
//! error still surfaces when the expression is evaluated.

use calc_eval::apply;
use calc_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::tree::{NodeId, Tree};

/// Fold every foldable subtree. Returns the number of nodes folded.
pub fn fold_constants(tree: &mut Tree) -> usize {
    let mut folded = 0;
    for root in tree.roots().to_vec() {
        fold(tree, root, &mut folded);
    }
    folded
}

fn fold(tree: &mut Tree, id: NodeId, folded: &mut usize) {
    ensure_sufficient_stack(|| {
        let children = tree.node(id).children.clone();
        for &child in &children {
            fold(tree, child, folded);
        }
        if children.is_empty() {
            return;
        }

        let mut stack = Vec::with_capacity(children.len());
        for &child in &children {
            match tree.const_value(child) {
                Some(value) => stack.push(value.clone()),
                None => return,
            }
        }
        let op = tree.op(id);
        match apply(op, &mut stack) {
            Ok(()) if stack.len() == 1 => {
                if let Some(value) = stack.pop() {
                    trace!(%op, %value, "folded");
                    tree.set_const(id, value);
                    *folded += 1;
                }
            }
            Ok(()) => {}
            Err(err) => trace!(%op, %err, "left unfolded"),
        }
    });
}
