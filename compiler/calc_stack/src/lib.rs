//! Stack growth for recursive compiler passes.
//!
//! The infix parser, lowering, the tree builder, both optimizer passes and
//! the re-linearizer recurse once per nesting level of the expression.
//! Input such as `((((((...))))))` or a postfix stream of ten thousand
//! chained `NEG`s would otherwise exhaust the main thread's stack.
//!
//! Native targets grow the stack on demand with `stacker`; WASM calls
//! straight through.
//!
//! # Sizing
//!
//! Each pass calls the guard once per level, so the red zone must hold the
//! deepest stretch of frames between two guard calls. For calcule that is
//! the parser's `parse_binary` → `parse_unary` → `parse_primary` →
//! `parse_call` chain, or a fold step running a bignum operator through
//! `calc_eval::apply`. Both are a few kilobytes; 128KB covers them with a
//! wide margin. Segments are 1MB, so a 20,000-level expression costs a
//! handful of allocations.

/// Grow the stack when less than this much remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment.
const SEGMENT: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the red zone has been reached.
///
/// Wrap the body of any function that recurses on expression depth:
///
/// ```text
/// fn emit(&mut self, node: NodeId) {
///     ensure_sufficient_stack(|| {
///         for child in self.children(node) {
///             self.emit(child);
///         }
///         self.push_op(node);
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
