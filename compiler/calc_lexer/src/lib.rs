//! Tokenizers for both calcule front ends.
//!
//! - [`lex`]: infix source to a [`Token`] list terminated by `Eof`, via logos
//! - [`words`]: postfix source to classified [`Word`]s, one per
//!   whitespace-delimited word

mod infix;
mod postfix;

pub use infix::{lex, Token, TokenKind};
pub use postfix::{words, Word, WordKind, Words};
