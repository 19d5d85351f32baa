use thiserror::Error;

/// Parse-time failures. Every fallible entry point in this crate fails with
/// exactly one of these; evaluation and differentiation never fail.
///
/// Positions are byte offsets into the source string.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("expression is empty")]
    EmptyExpression,

    #[error("unexpected character at position {pos}")]
    UnexpectedCharacter { pos: usize },

    #[error("invalid operation token at position {pos}: {token}")]
    InvalidOperationToken { pos: usize, token: String },

    #[error("expected closing bracket at position {pos}, found {found}")]
    MissingClosingBracket { pos: usize, found: String },

    #[error("operator \"{symbol}\" expects {expected} operands, got {actual}")]
    ArityMismatch {
        symbol: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("operator \"{symbol}\" expects {expected} operands, only {available} on the stack")]
    StackUnderflow {
        symbol: &'static str,
        expected: usize,
        available: usize,
    },

    #[error("unknown variable: {token}")]
    UnknownVariable { token: String },

    #[error("malformed expression: {remaining} values left after reduction")]
    MalformedExpression { remaining: usize },
}
