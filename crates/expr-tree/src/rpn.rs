//! The flat postfix (RPN) parser: a stack reducer over whitespace-split
//! words, no brackets and no scanner.

use crate::error::ParseError;
use crate::expr::Expr;
use crate::operators;
use crate::var::Var;

/// Parses bracket-free postfix notation, e.g. `x 2 * 1 +`.
///
/// Words are taken in order: a registered operator symbol pops its arity
/// worth of operands (oldest first) and pushes the resulting node; an
/// integer literal pushes a constant; `x`/`y`/`z` push variable
/// references. Any other word is rejected, as are operator underflow and
/// anything but exactly one value remaining at the end.
pub fn parse_flat_postfix(input: &str) -> Result<Expr, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut stack: Vec<Expr> = Vec::new();
    for word in input.split_whitespace() {
        if let Some(def) = operators::lookup(word) {
            if stack.len() < def.arity {
                return Err(ParseError::StackUnderflow {
                    symbol: def.symbol,
                    expected: def.arity,
                    available: stack.len(),
                });
            }
            // split_off keeps push order, so the oldest of the k operands
            // becomes the first child.
            let args = stack.split_off(stack.len() - def.arity);
            stack.push(Expr::op(def, args)?);
        } else if let Ok(value) = word.parse::<i64>() {
            stack.push(Expr::Const(value as f64));
        } else if let Some(var) = Var::from_name(word) {
            stack.push(Expr::Variable(var));
        } else {
            return Err(ParseError::UnknownVariable {
                token: word.to_string(),
            });
        }
    }

    let result = stack.pop();
    if !stack.is_empty() {
        return Err(ParseError::MalformedExpression {
            remaining: stack.len() + 1,
        });
    }
    result.ok_or(ParseError::EmptyExpression)
}
