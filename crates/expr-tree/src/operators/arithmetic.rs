//! The primitive arithmetic operators: `+`, `-`, `*`, `/`, `negate`.
//!
//! Their differentiation rules are the textbook ones (sum, difference,
//! product, quotient), built out of the same primitive operators applied
//! to the original operands and their derivatives.

use super::OperatorDefinition;
use crate::diff::{add, divide, multiply, negate, subtract};
use crate::expr::Expr;
use crate::var::Var;
use once_cell::sync::Lazy;
use std::sync::Arc;

fn add_eval(args: &[f64]) -> f64 {
    args[0] + args[1]
}

fn subtract_eval(args: &[f64]) -> f64 {
    args[0] - args[1]
}

fn multiply_eval(args: &[f64]) -> f64 {
    args[0] * args[1]
}

fn divide_eval(args: &[f64]) -> f64 {
    args[0] / args[1]
}

fn negate_eval(args: &[f64]) -> f64 {
    -args[0]
}

fn add_diff(v: Var, args: &[Expr]) -> Expr {
    add(args[0].diff(v), args[1].diff(v))
}

fn subtract_diff(v: Var, args: &[Expr]) -> Expr {
    subtract(args[0].diff(v), args[1].diff(v))
}

// (a * b)' = a' * b + a * b'
fn multiply_diff(v: Var, args: &[Expr]) -> Expr {
    add(
        multiply(args[0].diff(v), args[1].clone()),
        multiply(args[0].clone(), args[1].diff(v)),
    )
}

// (a / b)' = (a' * b - a * b') / (b * b)
fn divide_diff(v: Var, args: &[Expr]) -> Expr {
    divide(
        subtract(
            multiply(args[0].diff(v), args[1].clone()),
            multiply(args[0].clone(), args[1].diff(v)),
        ),
        multiply(args[1].clone(), args[1].clone()),
    )
}

fn negate_diff(v: Var, args: &[Expr]) -> Expr {
    negate(args[0].diff(v))
}

pub static ADD: Lazy<Arc<OperatorDefinition>> = Lazy::new(|| {
    Arc::new(OperatorDefinition {
        symbol: "+",
        arity: 2,
        eval: add_eval,
        diff: add_diff,
    })
});

pub static SUBTRACT: Lazy<Arc<OperatorDefinition>> = Lazy::new(|| {
    Arc::new(OperatorDefinition {
        symbol: "-",
        arity: 2,
        eval: subtract_eval,
        diff: subtract_diff,
    })
});

pub static MULTIPLY: Lazy<Arc<OperatorDefinition>> = Lazy::new(|| {
    Arc::new(OperatorDefinition {
        symbol: "*",
        arity: 2,
        eval: multiply_eval,
        diff: multiply_diff,
    })
});

pub static DIVIDE: Lazy<Arc<OperatorDefinition>> = Lazy::new(|| {
    Arc::new(OperatorDefinition {
        symbol: "/",
        arity: 2,
        eval: divide_eval,
        diff: divide_diff,
    })
});

pub static NEGATE: Lazy<Arc<OperatorDefinition>> = Lazy::new(|| {
    Arc::new(OperatorDefinition {
        symbol: "negate",
        arity: 1,
        eval: negate_eval,
        diff: negate_diff,
    })
});

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::clone(&ADD),
        Arc::clone(&SUBTRACT),
        Arc::clone(&MULTIPLY),
        Arc::clone(&DIVIDE),
        Arc::clone(&NEGATE),
    ]
}
