//! The lexical scanner.
//!
//! Scanning is total: any finite input either produces a complete token
//! vector or a single positioned [`ParseError`]; there is no partial
//! success.

use crate::error::ParseError;
use crate::operators::{self, OperatorDefinition};
use crate::var::Var;
use std::sync::Arc;

/// What a token is. Operator tokens carry their registry definition, so
/// later stages never look the symbol up again.
#[derive(Debug, Clone)]
pub enum TokenKind {
    LeftBracket,
    RightBracket,
    Operation(Arc<OperatorDefinition>),
    Number(i64),
    Variable(Var),
}

impl TokenKind {
    /// Source-shaped rendering, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::LeftBracket => "(".to_string(),
            TokenKind::RightBracket => ")".to_string(),
            TokenKind::Operation(def) => def.symbol.to_string(),
            TokenKind::Number(value) => value.to_string(),
            TokenKind::Variable(var) => var.name().to_string(),
        }
    }
}

impl PartialEq for TokenKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TokenKind::LeftBracket, TokenKind::LeftBracket) => true,
            (TokenKind::RightBracket, TokenKind::RightBracket) => true,
            (TokenKind::Operation(a), TokenKind::Operation(b)) => a.symbol == b.symbol,
            (TokenKind::Number(a), TokenKind::Number(b)) => a == b,
            (TokenKind::Variable(a), TokenKind::Variable(b)) => a == b,
            _ => false,
        }
    }
}

/// A token plus the byte offset of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize,
}

/// Converts source text into an ordered token sequence.
///
/// Rules:
/// - ASCII spaces separate tokens and are otherwise ignored;
/// - `(`, `)`, `+`, `-`, `*`, `/` are single-character tokens, even when
///   adjacent to letters or digits;
/// - a maximal digit run is an unsigned integer literal;
/// - a run starting with a letter extends over letters and digits (so
///   keywords like `sumrec2` scan as one word) and must name a registered
///   operator or one of the variables `x`, `y`, `z`;
/// - anything else is an unexpected character.
pub fn scan(input: &str) -> Result<Vec<Token>, ParseError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        match bytes[pos] {
            b' ' => pos += 1,
            b'(' => {
                tokens.push(Token {
                    kind: TokenKind::LeftBracket,
                    pos: start,
                });
                pos += 1;
            }
            b')' => {
                tokens.push(Token {
                    kind: TokenKind::RightBracket,
                    pos: start,
                });
                pos += 1;
            }
            b'+' | b'-' | b'*' | b'/' => {
                let symbol = &input[pos..pos + 1];
                let def = operators::lookup(symbol).ok_or_else(|| {
                    ParseError::InvalidOperationToken {
                        pos: start,
                        token: symbol.to_string(),
                    }
                })?;
                tokens.push(Token {
                    kind: TokenKind::Operation(Arc::clone(def)),
                    pos: start,
                });
                pos += 1;
            }
            b'0'..=b'9' => {
                while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                    pos += 1;
                }
                let value = input[start..pos]
                    .parse::<i64>()
                    .map_err(|_| ParseError::UnexpectedCharacter { pos: start })?;
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    pos: start,
                });
            }
            c if c.is_ascii_alphabetic() => {
                pos += 1;
                while pos < bytes.len() && bytes[pos].is_ascii_alphanumeric() {
                    pos += 1;
                }
                let word = &input[start..pos];
                let kind = if let Some(def) = operators::lookup(word) {
                    TokenKind::Operation(Arc::clone(def))
                } else if let Some(var) = Var::from_name(word) {
                    TokenKind::Variable(var)
                } else {
                    return Err(ParseError::InvalidOperationToken {
                        pos: start,
                        token: word.to_string(),
                    });
                };
                tokens.push(Token { kind, pos: start });
            }
            _ => return Err(ParseError::UnexpectedCharacter { pos }),
        }
    }

    Ok(tokens)
}
