//! Calcule IR - shared data model for the calcule compiler.
//!
//! # Contents
//!
//! - [`Op`]: the closed operator set, with arity and postfix spellings
//! - [`Value`]: exact numeric values (`Int`, `Rat`, `Absent`)
//! - [`CompiledExpr`]: the linear instruction form with its name and
//!   constant pools, plus its postfix rendering
//! - [`parse_const`]: the numeral grammar shared by both front ends and the CLI
//! - [`Span`]: byte ranges for diagnostics
//!
//! # Pipeline Position
//!
//! ```text
//! text -> calc_parse -> CompiledExpr -> calc_opt (optional) -> calc_eval -> BigRational
//! ```

mod expr;
mod literal;
mod op;
mod span;
mod value;

pub use expr::CompiledExpr;
pub use literal::parse_const;
pub use op::Op;
pub use span::Span;
pub use value::{Value, ValueKind};

pub use num_bigint::BigInt;
pub use num_rational::BigRational;
