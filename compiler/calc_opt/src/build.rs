//! Tree reconstruction from the linear form.
//!
//! The sequence is consumed from the end: each operator pulls as many
//! preceding subtrees as its arity, leaves pull their pool entry from the
//! back of the pool. `NOP` has no stack effect and produces no node.

use std::iter::Rev;
use std::slice;

use calc_ir::{CompiledExpr, Op, Value};
use calc_stack::ensure_sufficient_stack;
use smallvec::SmallVec;

use crate::tree::{Leaf, NodeId, Tree};

/// Rebuild the tree (or forest) for `expr`.
///
/// Returns `None` if the sequence is not well-formed: an operator without
/// enough operands or a leaf without a pool entry. Compiler output never
/// hits this.
pub fn build(expr: &CompiledExpr) -> Option<Tree> {
    let mut builder = Builder {
        tree: Tree::new(),
        ops: expr.ops(),
        pos: expr.ops().len(),
        names: expr.names().iter().rev(),
        consts: expr.consts().iter().rev(),
    };
    while builder.skip_nops() > 0 {
        let root = builder.build_node()?;
        builder.tree.push_root(root);
    }
    builder.tree.reverse_roots();
    Some(builder.tree)
}

struct Builder<'e> {
    tree: Tree,
    ops: &'e [Op],
    /// Number of instructions not yet consumed.
    pos: usize,
    names: Rev<slice::Iter<'e, String>>,
    consts: Rev<slice::Iter<'e, Value>>,
}

impl Builder<'_> {
    fn skip_nops(&mut self) -> usize {
        while self.pos > 0 && self.ops[self.pos - 1] == Op::Nop {
            self.pos -= 1;
        }
        self.pos
    }

    fn build_node(&mut self) -> Option<NodeId> {
        ensure_sufficient_stack(|| {
            if self.skip_nops() == 0 {
                return None;
            }
            self.pos -= 1;
            let op = self.ops[self.pos];
            let id = match op {
                Op::Load => {
                    let name = self.names.next()?.clone();
                    self.tree.leaf(op, Leaf::Name(name))
                }
                Op::Const => {
                    let value = self.consts.next()?.clone();
                    self.tree.leaf(op, Leaf::Const(value))
                }
                _ => {
                    let mut children: SmallVec<[NodeId; 3]> = SmallVec::new();
                    for _ in 0..op.arity() {
                        children.push(self.build_node()?);
                    }
                    children.reverse();
                    self.tree.branch(op, children)
                }
            };
            Some(id)
        })
    }
}
