//! The bracketed parser: recursive descent over the scanner's token
//! stream, under a prefix-or-postfix grammar switch.
//!
//! ```text
//! expr             := '(' group ')' | NUMBER | VARIABLE
//! group (prefix)   := OPERATION arg*
//! group (postfix)  := arg* OPERATION
//! ```

use crate::error::ParseError;
use crate::expr::Expr;
use crate::operators::OperatorDefinition;
use crate::scanner::{scan, Token, TokenKind};
use std::sync::Arc;

/// Where the operator sits inside a bracketed group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// Operator immediately after `(`.
    Prefix,
    /// Operator immediately before `)`.
    Postfix,
}

/// Parses a fully bracketed expression in the given notation.
pub fn parse(input: &str, notation: Notation) -> Result<Expr, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    let tokens = scan(input)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        end: input.len(),
        notation,
    };
    let expr = parser.parse_expr()?;
    if let Some(token) = parser.peek() {
        return Err(ParseError::UnexpectedCharacter { pos: token.pos });
    }
    Ok(expr)
}

/// Parses bracketed prefix notation, e.g. `(+ x 1)`.
pub fn parse_prefix(input: &str) -> Result<Expr, ParseError> {
    parse(input, Notation::Prefix)
}

/// Parses bracketed postfix notation, e.g. `(x 1 +)`.
pub fn parse_postfix(input: &str) -> Result<Expr, ParseError> {
    parse(input, Notation::Postfix)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Byte length of the source, reported as the position of
    /// end-of-input errors.
    end: usize,
    notation: Notation,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        match self.next() {
            Some(Token {
                kind: TokenKind::LeftBracket,
                ..
            }) => self.parse_group(),
            Some(Token {
                kind: TokenKind::Number(value),
                ..
            }) => Ok(Expr::Const(value as f64)),
            Some(Token {
                kind: TokenKind::Variable(var),
                ..
            }) => Ok(Expr::Variable(var)),
            Some(token) => Err(ParseError::UnexpectedCharacter { pos: token.pos }),
            None => Err(ParseError::UnexpectedCharacter { pos: self.end }),
        }
    }

    /// Parses the inside of a bracketed group, the `(` already consumed.
    fn parse_group(&mut self) -> Result<Expr, ParseError> {
        let def = match self.notation {
            Notation::Prefix => Some(self.expect_operation()?),
            Notation::Postfix => None,
        };

        let mut args = Vec::new();
        loop {
            let starts_expr = !matches!(
                self.peek().map(|token| &token.kind),
                None | Some(TokenKind::RightBracket) | Some(TokenKind::Operation(_))
            );
            if !starts_expr {
                break;
            }
            args.push(self.parse_expr()?);
        }

        let def = match def {
            Some(def) => def,
            None => self.expect_operation()?,
        };
        self.expect_closing()?;
        Expr::op(&def, args)
    }

    fn expect_operation(&mut self) -> Result<Arc<OperatorDefinition>, ParseError> {
        match self.next() {
            Some(Token {
                kind: TokenKind::Operation(def),
                ..
            }) => Ok(def),
            Some(token) => Err(ParseError::InvalidOperationToken {
                pos: token.pos,
                token: token.kind.describe(),
            }),
            None => Err(ParseError::InvalidOperationToken {
                pos: self.end,
                token: "end of input".to_string(),
            }),
        }
    }

    fn expect_closing(&mut self) -> Result<(), ParseError> {
        match self.next() {
            Some(Token {
                kind: TokenKind::RightBracket,
                ..
            }) => Ok(()),
            Some(token) => Err(ParseError::MissingClosingBracket {
                pos: token.pos,
                found: token.kind.describe(),
            }),
            None => Err(ParseError::MissingClosingBracket {
                pos: self.end,
                found: "end of input".to_string(),
            }),
        }
    }
}
