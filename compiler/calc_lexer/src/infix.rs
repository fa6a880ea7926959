//! Infix tokenizer using logos.
//!
//! Besides the tokens the grammar uses, comparison and logical operators,
//! string and character literals, selectors and brackets are recognized
//! as [`TokenKind::Unsupported`] so the parser can name them in its error.

use calc_ir::Span;
use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"[_\p{L}][_\p{L}\p{Nd}]*")]
    Ident,

    // Numerals. The parser validates the text with the numeral grammar.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"0[xXbBoO][0-9a-zA-Z_]*")]
    Number,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("&^")]
    AmpCaret,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,

    #[token("==")]
    #[token("!=")]
    #[token("<")]
    #[token("<=")]
    #[token(">")]
    #[token(">=")]
    #[token("&&")]
    #[token("||")]
    #[token("!")]
    #[token("<-")]
    #[token("=")]
    #[token(":")]
    #[token(".")]
    #[token("[")]
    #[token("]")]
    #[token("{")]
    #[token("}")]
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)+'")]
    #[regex(r"`[^`]*`")]
    Unsupported,
}

/// Kind of an infix token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Ident,
    Number,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Amp,
    AmpCaret,
    Pipe,
    Caret,
    Shl,
    Shr,
    LParen,
    RParen,
    Comma,
    /// Recognized, but not part of the expression grammar.
    Unsupported,
    /// Text logos could not match at all.
    Error,
    Eof,
}

impl TokenKind {
    /// Human-readable description for parse errors.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Percent => "`%`",
            TokenKind::Amp => "`&`",
            TokenKind::AmpCaret => "`&^`",
            TokenKind::Pipe => "`|`",
            TokenKind::Caret => "`^`",
            TokenKind::Shl => "`<<`",
            TokenKind::Shr => "`>>`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Comma => "`,`",
            TokenKind::Unsupported => "unsupported token",
            TokenKind::Error => "invalid character",
            TokenKind::Eof => "end of input",
        }
    }
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Ident => TokenKind::Ident,
            RawToken::Number => TokenKind::Number,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Percent => TokenKind::Percent,
            RawToken::Amp => TokenKind::Amp,
            RawToken::AmpCaret => TokenKind::AmpCaret,
            RawToken::Pipe => TokenKind::Pipe,
            RawToken::Caret => TokenKind::Caret,
            RawToken::Shl => TokenKind::Shl,
            RawToken::Shr => TokenKind::Shr,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Unsupported => TokenKind::Unsupported,
        }
    }
}

/// A token with its byte range in the source.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Source text of this token.
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        source.get(self.span.to_range()).unwrap_or("")
    }
}

/// Lex all tokens from the source. The list always ends with `Eof`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);
    while let Some(result) = logos.next() {
        let span = Span::from_range(logos.span());
        let kind = match result {
            Ok(raw) => TokenKind::from(raw),
            Err(()) => TokenKind::Error,
        };
        tokens.push(Token::new(kind, span));
    }
    let end = Span::from_range(source.len()..source.len());
    tokens.push(Token::new(TokenKind::Eof, end));
    tokens
}

#[cfg(test)]
mod tests;
