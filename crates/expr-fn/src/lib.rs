//! Closure-based expression evaluator.
//!
//! The lightweight sibling of `expr-tree`: an expression is not a tree
//! but a plain function of the three variable bindings, composed out of
//! smaller functions at parse time. There is nothing to differentiate or
//! render, so this variant can carry the positional extrema operators
//! (`argMin*`/`argMax*`) that have no derivative. Only this variant does.
//!
//! # Example
//!
//! ```
//! let f = expr_fn::parse("x y z argMin3").unwrap();
//! assert_eq!(f(3.0, 1.0, 2.0), 1.0);
//! ```

use expr_tree::{ParseError, Var};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// A compiled expression: a function of the three variable bindings.
pub type ExprFn = Arc<dyn Fn(f64, f64, f64) -> f64 + Send + Sync>;

/// A constant expression.
pub fn cnst(value: f64) -> ExprFn {
    Arc::new(move |_, _, _| value)
}

/// A reference to one of the three variable slots.
pub fn variable(var: Var) -> ExprFn {
    Arc::new(move |x, y, z| [x, y, z][var.index()])
}

fn binary(op: fn(f64, f64) -> f64, a: ExprFn, b: ExprFn) -> ExprFn {
    Arc::new(move |x, y, z| op(a(x, y, z), b(x, y, z)))
}

pub fn add(a: ExprFn, b: ExprFn) -> ExprFn {
    binary(|a, b| a + b, a, b)
}

pub fn subtract(a: ExprFn, b: ExprFn) -> ExprFn {
    binary(|a, b| a - b, a, b)
}

pub fn multiply(a: ExprFn, b: ExprFn) -> ExprFn {
    binary(|a, b| a * b, a, b)
}

pub fn divide(a: ExprFn, b: ExprFn) -> ExprFn {
    binary(|a, b| a / b, a, b)
}

pub fn negate(a: ExprFn) -> ExprFn {
    Arc::new(move |x, y, z| -a(x, y, z))
}

/// Evaluates every operand and returns the zero-based index of the one
/// `better` prefers. Comparison is strict, so ties keep the leftmost
/// operand.
fn extremum(better: fn(f64, f64) -> bool, args: Vec<ExprFn>) -> ExprFn {
    Arc::new(move |x, y, z| {
        let mut best = 0usize;
        let mut best_value = args[0](x, y, z);
        for (i, arg) in args.iter().enumerate().skip(1) {
            let value = arg(x, y, z);
            if better(value, best_value) {
                best = i;
                best_value = value;
            }
        }
        best as f64
    })
}

/// Index of the minimal operand.
pub fn arg_min(args: Vec<ExprFn>) -> ExprFn {
    extremum(|value, best| value < best, args)
}

/// Index of the maximal operand.
pub fn arg_max(args: Vec<ExprFn>) -> ExprFn {
    extremum(|value, best| value > best, args)
}

type BuildFn = fn(&[ExprFn]) -> ExprFn;

struct FnOperator {
    symbol: &'static str,
    arity: usize,
    build: BuildFn,
}

fn build_add(args: &[ExprFn]) -> ExprFn {
    add(args[0].clone(), args[1].clone())
}

fn build_subtract(args: &[ExprFn]) -> ExprFn {
    subtract(args[0].clone(), args[1].clone())
}

fn build_multiply(args: &[ExprFn]) -> ExprFn {
    multiply(args[0].clone(), args[1].clone())
}

fn build_divide(args: &[ExprFn]) -> ExprFn {
    divide(args[0].clone(), args[1].clone())
}

fn build_negate(args: &[ExprFn]) -> ExprFn {
    negate(args[0].clone())
}

fn build_arg_min(args: &[ExprFn]) -> ExprFn {
    arg_min(args.to_vec())
}

fn build_arg_max(args: &[ExprFn]) -> ExprFn {
    arg_max(args.to_vec())
}

static OPERATORS: Lazy<HashMap<&'static str, FnOperator>> = Lazy::new(|| {
    [
        FnOperator { symbol: "+", arity: 2, build: build_add },
        FnOperator { symbol: "-", arity: 2, build: build_subtract },
        FnOperator { symbol: "*", arity: 2, build: build_multiply },
        FnOperator { symbol: "/", arity: 2, build: build_divide },
        FnOperator { symbol: "negate", arity: 1, build: build_negate },
        FnOperator { symbol: "argMin3", arity: 3, build: build_arg_min },
        FnOperator { symbol: "argMax3", arity: 3, build: build_arg_max },
        FnOperator { symbol: "argMin5", arity: 5, build: build_arg_min },
        FnOperator { symbol: "argMax5", arity: 5, build: build_arg_max },
    ]
    .into_iter()
    .map(|op| (op.symbol, op))
    .collect()
});

/// Named constant words this variant's parser recognizes.
static CONSTANTS: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| [("one", 1.0), ("two", 2.0)].into_iter().collect());

/// Parses bracket-free postfix notation into a compiled closure.
///
/// Same word rules as `expr_tree::parse_flat_postfix`, plus the constant
/// words `one` and `two`, and with the extrema operators available.
pub fn parse(input: &str) -> Result<ExprFn, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut stack: Vec<ExprFn> = Vec::new();
    for word in input.split_whitespace() {
        if let Some(&value) = CONSTANTS.get(word) {
            stack.push(cnst(value));
        } else if let Some(op) = OPERATORS.get(word) {
            if stack.len() < op.arity {
                return Err(ParseError::StackUnderflow {
                    symbol: op.symbol,
                    expected: op.arity,
                    available: stack.len(),
                });
            }
            let args = stack.split_off(stack.len() - op.arity);
            stack.push((op.build)(&args));
        } else if let Ok(value) = word.parse::<i64>() {
            stack.push(cnst(value as f64));
        } else if let Some(var) = Var::from_name(word) {
            stack.push(variable(var));
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
