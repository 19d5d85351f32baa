//! Arithmetic expression trees over three variables.
//!
//! Expressions arrive as text in one of three surface notations
//! (bracketed prefix `(+ x 1)`, bracketed postfix `(x 1 +)`, or flat
//! postfix `x 1 +`) and become one immutable tree type that can be
//! evaluated numerically, differentiated symbolically, and rendered back
//! to prefix or postfix text.
//!
//! # Example
//!
//! ```
//! use expr_tree::{parse_prefix, Var};
//!
//! let expr = parse_prefix("(+ x (* 2 y))").unwrap();
//! assert_eq!(expr.evaluate(1.0, 3.0, 0.0), 7.0);
//! assert_eq!(expr.postfix(), "x 2 y * +");
//!
//! let dy = expr.diff(Var::Y);
//! assert_eq!(dy.evaluate(1.0, 3.0, 0.0), 2.0);
//! ```

pub mod diff;
pub mod error;
pub mod evaluate;
pub mod expr;
pub mod operators;
pub mod parser;
pub mod rpn;
pub mod scanner;
pub mod var;

pub use error::ParseError;
pub use expr::Expr;
pub use operators::{lookup, operators_map, OperatorDefinition, OperatorMap, OPERATORS};
pub use parser::{parse, parse_postfix, parse_prefix, Notation};
pub use rpn::parse_flat_postfix;
pub use scanner::{scan, Token, TokenKind};
pub use var::Var;
