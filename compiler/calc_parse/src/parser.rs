//! Recursive-descent infix parser.
//!
//! Precedence follows Go, all binary operators left-associative:
//!
//! | Level | Operators |
//! |-------|-----------|
//! | 5 | `*` `/` `%` `<<` `>>` `&` `&^` |
//! | 4 | `+` `-` `|` `^` |
//!
//! Unary `+`, `-` and `^` bind tighter than any binary operator.

use calc_diagnostic::CompileError;
use calc_ir::{parse_const, CompiledExpr, Op, Span, Value};
use calc_lexer::{lex, Token, TokenKind};
use calc_stack::ensure_sufficient_stack;
use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace};

use crate::calls;
use crate::lower::lower;
use crate::syntax::{ExprArena, ExprId, ExprKind};

/// Lowest binary precedence level.
const LOWEST_PREC: u8 = 4;

/// Compile infix expression text into the linear form.
pub fn compile_infix(source: &str) -> Result<CompiledExpr, CompileError> {
    let tokens = lex(source);
    let mut parser = Parser::new(source, &tokens);
    let root = parser.parse_expr()?;
    parser.expect_eof()?;
    let expr = lower(&parser.arena, root);
    debug!(ops = expr.len(), vars = expr.vars().len(), "compiled infix expression");
    Ok(expr)
}

struct Parser<'src> {
    source: &'src str,
    tokens: &'src [Token],
    pos: usize,
    arena: ExprArena,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, tokens: &'src [Token]) -> Self {
        Parser {
            source,
            tokens,
            pos: 0,
            arena: ExprArena::new(),
        }
    }

    // ===== Token access =====

    fn current(&self) -> Token {
        match self.tokens.get(self.pos).or(self.tokens.last()) {
            Some(token) => *token,
            None => Token::new(TokenKind::Eof, Span::DUMMY),
        }
    }

    fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |token| token.kind)
    }

    fn text(&self, token: Token) -> &'src str {
        token.text(self.source)
    }

    fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    fn consume(&mut self, kind: TokenKind) -> Result<Token, CompileError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&format!("expected {}", kind.describe())))
        }
    }

    fn expect_eof(&self) -> Result<(), CompileError> {
        if self.check(TokenKind::Eof) {
            Ok(())
        } else {
            Err(self.unexpected("expected operator"))
        }
    }

    /// Error for the current token. Tokens outside the grammar are bad
    /// tokens; anything else is misplaced and reported as a syntax error.
    fn unexpected(&self, expected: &str) -> CompileError {
        let token = self.current();
        match token.kind {
            TokenKind::Unsupported | TokenKind::Error => CompileError::BadToken {
                text: self.text(token).to_owned(),
                span: token.span,
            },
            kind => CompileError::Syntax {
                message: format!("{expected}, found {}", kind.describe()),
                span: token.span,
            },
        }
    }

    fn alloc_apply(&mut self, op: Op, args: SmallVec<[ExprId; 3]>, span: Span) -> ExprId {
        self.arena.alloc(ExprKind::Apply { op, args }, span)
    }

    // ===== Grammar =====

    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow
    /// on deeply nested expressions.
    fn parse_expr(&mut self) -> Result<ExprId, CompileError> {
        ensure_sufficient_stack(|| self.parse_binary(LOWEST_PREC))
    }

    fn binary_op(&self) -> Option<(Op, u8)> {
        let op = match self.current_kind() {
            TokenKind::Star => Op::Mul,
            TokenKind::Slash => Op::Quo,
            TokenKind::Percent => Op::Rem,
            TokenKind::Shl => Op::Lsh,
            TokenKind::Shr => Op::Rsh,
            TokenKind::Amp => Op::And,
            TokenKind::AmpCaret => Op::AndNot,
            TokenKind::Plus => Op::Add,
            TokenKind::Minus => Op::Sub,
            TokenKind::Pipe => Op::Or,
            TokenKind::Caret => Op::Xor,
            _ => return None,
        };
        let prec = match op {
            Op::Add | Op::Sub | Op::Or | Op::Xor => 4,
            _ => 5,
        };
        Some((op, prec))
    }

    fn parse_binary(&mut self, min_prec: u8) -> Result<ExprId, CompileError> {
        let mut left = self.parse_unary()?;

        while let Some((op, prec)) = self.binary_op() {
            if prec < min_prec {
                break;
            }
            self.advance();
            let right = self.parse_binary(prec + 1)?;
            let span = self.arena.span(left).merge(self.arena.span(right));
            left = self.alloc_apply(op, smallvec![left, right], span);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<ExprId, CompileError> {
        let op = match self.current_kind() {
            TokenKind::Plus => Op::Nop,
            TokenKind::Minus => Op::Neg,
            TokenKind::Caret => Op::Not,
            _ => return self.parse_primary(),
        };
        let start = self.advance().span;
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = start.merge(self.arena.span(operand));
        Ok(self.alloc_apply(op, smallvec![operand], span))
    }

    fn parse_primary(&mut self) -> Result<ExprId, CompileError> {
        let token = self.current();
        trace!(pos = self.pos, kind = token.kind.describe(), "parse_primary");
        match token.kind {
            TokenKind::Number => {
                self.advance();
                let text = self.text(token);
                match parse_const(text) {
                    Some(value) => Ok(self.arena.alloc(ExprKind::Const(value), token.span)),
                    None => Err(CompileError::BadToken {
                        text: text.to_owned(),
                        span: token.span,
                    }),
                }
            }
            TokenKind::Ident if self.peek_kind() == TokenKind::LParen => self.parse_call(),
            TokenKind::Ident => {
                self.advance();
                let name = self.text(token).to_owned();
                Ok(self.arena.alloc(ExprKind::Var(name), token.span))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.consume(TokenKind::RParen)?;
                Ok(inner)
            }
            _ => Err(self.unexpected("expected expression")),
        }
    }

    /// `name(arg, ...)`, with the current token on `name`.
    fn parse_call(&mut self) -> Result<ExprId, CompileError> {
        let name_token = self.advance();
        let name = self.text(name_token);
        let Some(callee) = calls::lookup(name) else {
            return Err(CompileError::BadToken {
                text: name.to_owned(),
                span: name_token.span,
            });
        };
        if callee.op == Op::Rand {
            return Err(CompileError::NotImplemented {
                op: callee.op,
                span: name_token.span,
            });
        }
        self.consume(TokenKind::LParen)?;

        let mut args: SmallVec<[ExprId; 3]> = SmallVec::new();
        while !self.check(TokenKind::RParen) {
            args.push(self.parse_expr()?);
            if !self.check(TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        let close = self.consume(TokenKind::RParen)?;
        let span = name_token.span.merge(close.span);

        let found = args.len();
        if found < callee.min_args || found > callee.max_args {
            return Err(CompileError::BadCall {
                callee: name.to_owned(),
                min: callee.min_args,
                max: callee.max_args,
                found,
                span,
            });
        }
        if callee.op == Op::Exp && found == 2 {
            let absent = Span::new(close.span.start, close.span.start);
            args.push(self.arena.alloc(ExprKind::Const(Value::Absent), absent));
        }
        Ok(self.alloc_apply(callee.op, args, span))
    }
}
