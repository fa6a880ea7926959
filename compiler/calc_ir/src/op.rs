//! The closed operator set.
//!
//! Every instruction in a [`CompiledExpr`](crate::CompiledExpr) is one `Op`.
//! Operands are taken from the evaluation stack, leftmost operand deepest.
//!
//! | Arity | Operators |
//! |-------|-----------|
//! | 0 (push) | `LOAD` `CONST` |
//! | 1 | `ABS` `NEG` `NOT` `DENOM` `INV` `NUM` `TRUNC` `FLOOR` `CEIL` |
//! | 2 | `ADD` `SUB` `MUL` `QUO` `AND` `ANDNOT` `OR` `XOR` `DIV` `MOD` `REM` `GCD` `MODINV` `LSH` `RSH` `BINOMIAL` `MULRANGE` `FRAC` |
//! | 3 | `EXP` (third operand may be absent) |
//! | none | `NOP` |
//!
//! `RAND` is reserved: it has a spelling for rendering but no front end
//! emits it and the evaluator rejects it.

use std::fmt;

/// An instruction of the linear form.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Op {
    Nop,

    // Pushes
    Load,
    Const,

    // Unary
    Abs,
    Neg,
    Not,
    Denom,
    Inv,
    Num,
    Trunc,
    Floor,
    Ceil,

    // Binary, numeric
    Add,
    Sub,
    Mul,
    Quo,

    // Binary, integer only
    And,
    AndNot,
    Or,
    Xor,
    Div,
    Mod,
    Rem,
    Gcd,
    ModInverse,
    Lsh,
    Rsh,
    Binomial,
    MulRange,
    Frac,

    // Ternary
    Exp,

    // Reserved
    Rand,
}

impl Op {
    /// Number of operands popped from the stack.
    pub const fn arity(self) -> usize {
        match self {
            Self::Nop | Self::Load | Self::Const | Self::Rand => 0,
            Self::Abs
            | Self::Neg
            | Self::Not
            | Self::Denom
            | Self::Inv
            | Self::Num
            | Self::Trunc
            | Self::Floor
            | Self::Ceil => 1,
            Self::Exp => 3,
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Quo
            | Self::And
            | Self::AndNot
            | Self::Or
            | Self::Xor
            | Self::Div
            | Self::Mod
            | Self::Rem
            | Self::Gcd
            | Self::ModInverse
            | Self::Lsh
            | Self::Rsh
            | Self::Binomial
            | Self::MulRange
            | Self::Frac => 2,
        }
    }

    /// Number of values pushed back onto the stack.
    pub const fn pushes(self) -> usize {
        match self {
            Self::Nop => 0,
            _ => 1,
        }
    }

    /// `LOAD` and `CONST` consume a pool entry and become tree leaves.
    pub const fn is_leaf(self) -> bool {
        matches!(self, Self::Load | Self::Const)
    }

    /// Canonical keyword, also used in error messages.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Nop => "NOP",
            Self::Load => "LOAD",
            Self::Const => "CONST",
            Self::Abs => "ABS",
            Self::Neg => "NEG",
            Self::Not => "NOT",
            Self::Denom => "DENOM",
            Self::Inv => "INV",
            Self::Num => "NUM",
            Self::Trunc => "TRUNC",
            Self::Floor => "FLOOR",
            Self::Ceil => "CEIL",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Quo => "QUO",
            Self::And => "AND",
            Self::AndNot => "ANDNOT",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::Rem => "REM",
            Self::Gcd => "GCD",
            Self::ModInverse => "MODINV",
            Self::Lsh => "LSH",
            Self::Rsh => "RSH",
            Self::Binomial => "BINOMIAL",
            Self::MulRange => "MULRANGE",
            Self::Frac => "FRAC",
            Self::Exp => "EXP",
            Self::Rand => "RAND",
        }
    }

    /// Symbolic spelling, for the operators that have one.
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            Self::Add => Some("+"),
            Self::Sub => Some("-"),
            Self::Mul => Some("*"),
            Self::Quo => Some("/"),
            Self::And => Some("&"),
            Self::AndNot => Some("&^"),
            Self::Or => Some("|"),
            Self::Xor => Some("^"),
            Self::Rem => Some("%"),
            Self::Lsh => Some("<<"),
            Self::Rsh => Some(">>"),
            _ => None,
        }
    }

    /// Spelling used when rendering an instruction as a postfix token.
    ///
    /// `LOAD` and `CONST` render their pool entry instead; the keyword
    /// returned for them here is not accepted back by the postfix lexer.
    pub const fn token(self) -> &'static str {
        match self.symbol() {
            Some(sym) => sym,
            None => self.keyword(),
        }
    }

    /// Look up a postfix operator token, case-insensitively.
    ///
    /// Accepts symbols and keywords. `LOAD`, `CONST` and `RAND` are not
    /// operator tokens; those words lex as identifiers.
    pub fn from_token(word: &str) -> Option<Op> {
        if let Some(op) = Self::from_symbol(word) {
            return Some(op);
        }
        let op = match word.to_ascii_uppercase().as_str() {
            "NOP" => Self::Nop,
            "ABS" => Self::Abs,
            "NEG" => Self::Neg,
            "NOT" => Self::Not,
            "DENOM" => Self::Denom,
            "INV" => Self::Inv,
            "NUM" => Self::Num,
            "TRUNC" => Self::Trunc,
            "FLOOR" => Self::Floor,
            "CEIL" => Self::Ceil,
            "ADD" => Self::Add,
            "SUB" => Self::Sub,
            "MUL" => Self::Mul,
            "QUO" => Self::Quo,
            "AND" => Self::And,
            "ANDNOT" => Self::AndNot,
            "OR" => Self::Or,
            "XOR" => Self::Xor,
            "DIV" => Self::Div,
            "MOD" => Self::Mod,
            "REM" => Self::Rem,
            "GCD" => Self::Gcd,
            "MODINV" | "MODINVERSE" => Self::ModInverse,
            "LSH" => Self::Lsh,
            "RSH" => Self::Rsh,
            "BINOMIAL" => Self::Binomial,
            "MULRANGE" => Self::MulRange,
            "FRAC" => Self::Frac,
            "EXP" => Self::Exp,
            _ => return None,
        };
        Some(op)
    }

    fn from_symbol(word: &str) -> Option<Op> {
        let op = match word {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Quo,
            "&" => Self::And,
            "&^" => Self::AndNot,
            "|" => Self::Or,
            "^" => Self::Xor,
            "%" => Self::Rem,
            "<<" => Self::Lsh,
            ">>" => Self::Rsh,
            _ => return None,
        };
        Some(op)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
