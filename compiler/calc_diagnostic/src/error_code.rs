use std::fmt;

/// Error codes for all calcule diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Token errors (either front end)
/// - E1xxx: Parser and postfix compiler errors
/// - E2xxx: Evaluation errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Token Errors (E0xxx)
    /// Unrecognized token or call target
    E0001,

    // Parser Errors (E1xxx)
    /// Malformed expression syntax
    E1001,
    /// Wrong argument count in a call
    E1002,
    /// Postfix token needs more operands than are on the stack
    E1003,
    /// Postfix stream left more than one value (warning)
    E1004,
    /// Reserved operator
    E1005,

    // Evaluation Errors (E2xxx)
    /// Variable missing from the bindings
    E2001,
    /// Operand has the wrong kind
    E2002,
    /// Operand exceeds a native-width bound
    E2003,
    /// Division or modulus by zero
    E2004,
    /// No modular inverse exists
    E2005,
    /// Reserved operator executed
    E2006,
    /// Nothing to evaluate
    E2007,

    // Internal Errors (E9xxx)
    /// Malformed instruction sequence
    E9001,
}

impl ErrorCode {
    /// Check if this is a parser error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is an evaluation error (E2xxx range).
    pub fn is_eval_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Token
            ErrorCode::E0001 => "E0001",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            // Evaluation
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            // Internal
            ErrorCode::E9001 => "E9001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
