use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

fn texts(source: &str) -> Vec<&str> {
    lex(source).iter().map(|t| t.text(source)).collect()
}

#[test]
fn test_lex_basic() {
    assert_eq!(
        kinds("x + 1/2"),
        vec![
            TokenKind::Ident,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Slash,
            TokenKind::Number,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_compound_operators() {
    assert_eq!(
        kinds("a &^ b << 2 >> c & d"),
        vec![
            TokenKind::Ident,
            TokenKind::AmpCaret,
            TokenKind::Ident,
            TokenKind::Shl,
            TokenKind::Number,
            TokenKind::Shr,
            TokenKind::Ident,
            TokenKind::Amp,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_numerals() {
    assert_eq!(
        texts("0x1F 1.5e-3 .25 5. 0b101 1e9"),
        vec!["0x1F", "1.5e-3", ".25", "5.", "0b101", "1e9", ""]
    );
}

#[test]
fn test_lex_hex_does_not_swallow_exponent_sign() {
    assert_eq!(texts("0x1e-3"), vec!["0x1e", "-", "3", ""]);
}

#[test]
fn test_lex_call() {
    assert_eq!(
        kinds("exp(2, -3)"),
        vec![
            TokenKind::Ident,
            TokenKind::LParen,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::Minus,
            TokenKind::Number,
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_unsupported() {
    for source in ["==", "<=", "&&", "!", "\"str\"", "'c'", "a.b", "[", "`raw`"] {
        assert!(
            kinds(source).contains(&TokenKind::Unsupported),
            "{source} should lex as unsupported"
        );
    }
}

#[test]
fn test_lex_error_and_spans() {
    let tokens = lex("1 $ 2");
    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].span, Span::new(2, 3));
    assert_eq!(tokens[3].span, Span::new(5, 5));
}

#[test]
fn test_lex_unicode_ident() {
    assert_eq!(kinds("π_2"), vec![TokenKind::Ident, TokenKind::Eof]);
}
