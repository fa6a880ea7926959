//! Algebraic simplification.
//!
//! Bottom-up, one look per node. A rewrite can expose a new match at the
//! same node; it is not re-examined, so some nested identities need a
//! second `optimize` to reduce fully.
//!
//! | Pattern | Rewrite |
//! |---------|---------|
//! | `NEG(NEG x)` | `x` |
//! | `INV(INV x)` | `x` |
//! | `NEG(SUB a b)` | `SUB(b a)` |
//! | `MUL(NEG a, NEG b)`, `QUO(NEG a, NEG b)` | same op on `a b` |
//! | `MUL(a, INV b)` | `QUO(a b)` |
//! | `MUL(INV a, b)` | `QUO(b a)` |
//! | `QUO(INV a, INV b)` | `QUO(b a)` |
//! | `QUO(a, INV b)` | `MUL(a b)` |
//! | `MUL(x, 1)`, `MUL(1, x)`, `QUO(x, 1)` | `x` |
//! | `QUO(1, x)` | `INV(x)` |
//!
//! The rewrites preserve every successful result. They can remove a
//! failure: `INV(INV 0)` becomes `0`.

use calc_ir::Op;
use calc_stack::ensure_sufficient_stack;
use smallvec::smallvec;

use crate::tree::{NodeId, Tree};

/// Simplify every node once. Returns the number of rewrites.
pub fn simplify(tree: &mut Tree) -> usize {
    let mut rewrites = 0;
    for root in tree.roots().to_vec() {
        visit(tree, root, &mut rewrites);
    }
    rewrites
}

fn visit(tree: &mut Tree, id: NodeId, rewrites: &mut usize) {
    ensure_sufficient_stack(|| {
        let children = tree.node(id).children.clone();
        for child in children {
            visit(tree, child, rewrites);
        }
        if rewrite(tree, id) {
            *rewrites += 1;
        }
    });
}

/// Operand of `id` when `id` is the unary operator `op`.
fn unwrap_unary(tree: &Tree, id: NodeId, op: Op) -> Option<NodeId> {
    if tree.op(id) == op {
        tree.child(id, 0)
    } else {
        None
    }
}

fn rewrite(tree: &mut Tree, id: NodeId) -> bool {
    match tree.op(id) {
        Op::Neg => {
            let Some(inner) = tree.child(id, 0) else {
                return false;
            };
            if let Some(x) = unwrap_unary(tree, inner, Op::Neg) {
                tree.replace(id, x);
                return true;
            }
            if tree.op(inner) == Op::Sub {
                if let (Some(a), Some(b)) = (tree.child(inner, 0), tree.child(inner, 1)) {
                    tree.set_children(inner, smallvec![b, a]);
                    tree.replace(id, inner);
                    return true;
                }
            }
            false
        }
        Op::Inv => {
            let x = tree
                .child(id, 0)
                .and_then(|inner| unwrap_unary(tree, inner, Op::Inv));
            match x {
                Some(x) => {
                    tree.replace(id, x);
                    true
                }
                None => false,
            }
        }
        op @ (Op::Mul | Op::Quo) => {
            let (Some(left), Some(right)) = (tree.child(id, 0), tree.child(id, 1)) else {
                return false;
            };
            rewrite_product(tree, id, op, left, right)
        }
        _ => false,
    }
}

fn rewrite_product(tree: &mut Tree, id: NodeId, op: Op, left: NodeId, right: NodeId) -> bool {
    let neg = (unwrap_unary(tree, left, Op::Neg), unwrap_unary(tree, right, Op::Neg));
    if let (Some(a), Some(b)) = neg {
        tree.set_children(id, smallvec![a, b]);
        return true;
    }

    let inv = (unwrap_unary(tree, left, Op::Inv), unwrap_unary(tree, right, Op::Inv));
    match (op, inv) {
        (Op::Quo, (Some(a), Some(b))) => {
            tree.set_children(id, smallvec![b, a]);
            return true;
        }
        (Op::Mul, (_, Some(b))) => {
            tree.set_op(id, Op::Quo);
            tree.set_children(id, smallvec![left, b]);
            return true;
        }
        (Op::Mul, (Some(a), None)) => {
            tree.set_op(id, Op::Quo);
            tree.set_children(id, smallvec![right, a]);
            return true;
        }
        (Op::Quo, (None, Some(b))) => {
            tree.set_op(id, Op::Mul);
            tree.set_children(id, smallvec![left, b]);
            return true;
        }
        _ => {}
    }

    if tree.is_one(right) {
        tree.replace(id, left);
        return true;
    }
    if tree.is_one(left) {
        match op {
            Op::Mul => tree.replace(id, right),
            _ => {
                tree.set_op(id, Op::Inv);
                tree.set_children(id, smallvec![right]);
            }
        }
        return true;
    }
    false
}
