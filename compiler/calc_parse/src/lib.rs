//! Front ends for calcule.
//!
//! Both compilers produce a [`CompiledExpr`](calc_ir::CompiledExpr) that is
//! directly executable: operands are always emitted before the operator
//! that consumes them.
//!
//! - [`compile_infix`]: conventional expression syntax with Go operator
//!   precedence and function calls for the extended operators. Parsed into a
//!   syntax arena, then lowered post-order.
//! - [`compile_postfix`]: whitespace-delimited postfix tokens, compiled in a
//!   single pass with a running stack-depth check and no tree.

mod calls;
mod lower;
mod parser;
mod postfix;
mod syntax;

pub use parser::compile_infix;
pub use postfix::{compile_postfix, Compiled};
