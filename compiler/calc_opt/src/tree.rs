//! Arena-allocated expression tree.
//!
//! Nodes are addressed by [`NodeId`]. Children are owned through their
//! parent's child slots; the parent link is a plain index used to find the
//! slot when a node is replaced. Replaced and detached nodes stay in the
//! arena, unreachable, until the tree is dropped.

use calc_ir::{Op, Value};
use smallvec::SmallVec;

/// Index of a node in a [`Tree`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Payload of a `LOAD` or `CONST` node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Leaf {
    Name(String),
    Const(Value),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub op: Op,
    pub leaf: Option<Leaf>,
    /// Operands in left-to-right order; `op.arity()` of them.
    pub children: SmallVec<[NodeId; 3]>,
    pub parent: Option<NodeId>,
}

/// A forest of expression trees. Usually one root; a sequence that leaves
/// several values on the stack rebuilds into several.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub(crate) fn push_root(&mut self, id: NodeId) {
        self.roots.push(id);
    }

    pub(crate) fn reverse_roots(&mut self) {
        self.roots.reverse();
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn op(&self, id: NodeId) -> Op {
        self.node(id).op
    }

    #[inline]
    pub fn child(&self, id: NodeId, slot: usize) -> Option<NodeId> {
        self.node(id).children.get(slot).copied()
    }

    /// Constant held by a `CONST` node.
    pub fn const_value(&self, id: NodeId) -> Option<&Value> {
        match &self.node(id).leaf {
            Some(Leaf::Const(value)) => Some(value),
            _ => None,
        }
    }

    /// True for a `CONST` node holding exactly the integer 1.
    pub fn is_one(&self, id: NodeId) -> bool {
        self.const_value(id).is_some_and(Value::is_one)
    }

    pub fn leaf(&mut self, op: Op, leaf: Leaf) -> NodeId {
        self.alloc(Node {
            op,
            leaf: Some(leaf),
            children: SmallVec::new(),
            parent: None,
        })
    }

    /// Allocate an operator node and link its children to it.
    pub fn branch(&mut self, op: Op, children: SmallVec<[NodeId; 3]>) -> NodeId {
        let id = self.alloc(Node {
            op,
            leaf: None,
            children: SmallVec::new(),
            parent: None,
        });
        self.set_children(id, children);
        id
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(node);
        id
    }

    /// Change the operator of an existing node in place.
    pub fn set_op(&mut self, id: NodeId, op: Op) {
        self.nodes[id.index()].op = op;
    }

    /// Replace all children of `id`, detaching the old ones.
    pub fn set_children(&mut self, id: NodeId, children: SmallVec<[NodeId; 3]>) {
        let old = std::mem::replace(&mut self.nodes[id.index()].children, children);
        for child in old {
            self.nodes[child.index()].parent = None;
        }
        for i in 0..self.nodes[id.index()].children.len() {
            let child = self.nodes[id.index()].children[i];
            self.nodes[child.index()].parent = Some(id);
        }
    }

    /// Turn `id` into a `CONST` leaf holding `value`, detaching its children.
    pub fn set_const(&mut self, id: NodeId, value: Value) {
        self.set_children(id, SmallVec::new());
        let node = &mut self.nodes[id.index()];
        node.op = Op::Const;
        node.leaf = Some(Leaf::Const(value));
    }

    /// Put `new` in the position `old` occupies, in its parent or among the
    /// roots. `old` is left detached.
    pub fn replace(&mut self, old: NodeId, new: NodeId) {
        let parent = self.nodes[old.index()].parent.take();
        match parent {
            Some(p) => {
                for slot in &mut self.nodes[p.index()].children {
                    if *slot == old {
                        *slot = new;
                    }
                }
            }
            None => {
                for root in &mut self.roots {
                    if *root == old {
                        *root = new;
                    }
                }
            }
        }
        self.nodes[new.index()].parent = parent;
    }
}
