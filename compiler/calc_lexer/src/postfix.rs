//! Postfix word lexer.
//!
//! Words are maximal runs of non-whitespace. Each is classified in order:
//! operator token, identifier, nil sentinel, numeral. Anything else is a
//! bad token. Identifiers may be wrapped in parentheses to escape operator
//! keywords, so `(mod)` is a variable while `mod` is the operator.

use calc_diagnostic::CompileError;
use calc_ir::{parse_const, Op, Span, Value};

/// Classified postfix word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordKind {
    Op(Op),
    Ident(String),
    /// `_` or `<nil>`: an absent constant.
    Nil,
    Const(Value),
}

/// A postfix word with its byte offset in the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word<'src> {
    pub kind: WordKind,
    pub text: &'src str,
    pub pos: usize,
}

/// Iterator over the classified words of a postfix expression.
///
/// Yields `Err` for the first word that fits no class; the caller is
/// expected to stop there.
pub struct Words<'src> {
    source: &'src str,
    offset: usize,
}

/// Split `source` into classified postfix words.
pub fn words(source: &str) -> Words<'_> {
    Words { source, offset: 0 }
}

impl<'src> Iterator for Words<'src> {
    type Item = Result<Word<'src>, CompileError>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.source[self.offset..];
        let start = self.offset + rest.find(|c: char| !c.is_whitespace())?;
        let tail = &self.source[start..];
        let len = tail.find(char::is_whitespace).unwrap_or(tail.len());
        let text = &tail[..len];
        self.offset = start + len;
        Some(classify(text, start))
    }
}

fn classify(text: &str, pos: usize) -> Result<Word<'_>, CompileError> {
    let kind = if let Some(op) = Op::from_token(text) {
        WordKind::Op(op)
    } else if let Some(name) = ident(text) {
        WordKind::Ident(name.to_owned())
    } else if text == "_" || text.eq_ignore_ascii_case("<nil>") {
        WordKind::Nil
    } else if let Some(value) = parse_const(text) {
        WordKind::Const(value)
    } else {
        return Err(CompileError::BadToken {
            text: text.to_owned(),
            span: Span::from_range(pos..pos + text.len()),
        });
    };
    Ok(Word { kind, text, pos })
}

/// Bare `_` is the nil sentinel, but `(_)` names a variable.
fn ident(text: &str) -> Option<&str> {
    let name = match text.strip_prefix('(') {
        Some(inner) => inner.strip_suffix(')')?,
        None if text == "_" => return None,
        None => text,
    };
    let mut chars = name.chars();
    let first = chars.next()?;
    let valid = |c: char| c.is_alphanumeric() || c == '_';
    if first.is_numeric() || !valid(first) || !chars.all(valid) {
        return None;
    }
    Some(name)
}
