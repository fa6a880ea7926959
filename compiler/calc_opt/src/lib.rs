//! Optimizer for calcule.
//!
//! # Pipeline
//!
//! ```text
//! CompiledExpr -> build -> Tree -> fold_constants -> simplify -> linearize -> CompiledExpr
//! ```
//!
//! - [`build`]: rebuilds the operator tree from the linear form
//! - [`fold_constants`]: evaluates subtrees whose operands are all constants
//! - [`simplify`]: one bottom-up pass of algebraic identities
//! - [`linearize`]: emits the tree back post-order
//!
//! The input expression is never modified. For every binding where the
//! input evaluates successfully, the output evaluates to the same value.

mod build;
mod fold;
mod linearize;
mod simplify;
mod tree;

pub use build::build;
pub use fold::fold_constants;
pub use linearize::linearize;
pub use simplify::simplify;
pub use tree::{Leaf, Node, NodeId, Tree};

use calc_ir::CompiledExpr;
use tracing::debug;

/// Optimize `expr` into a new, equivalent expression.
///
/// A sequence that cannot be rebuilt into a tree is returned unchanged.
pub fn optimize(expr: &CompiledExpr) -> CompiledExpr {
    let Some(mut tree) = build(expr) else {
        debug!(ops = expr.len(), "malformed sequence, not optimized");
        return expr.clone();
    };
    let folded = fold_constants(&mut tree);
    let simplified = simplify(&mut tree);
    let out = linearize(&tree);
    debug!(folded, simplified, before = expr.len(), after = out.len(), "optimized");
    out
}
