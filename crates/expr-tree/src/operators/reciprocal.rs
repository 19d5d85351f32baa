//! The reciprocal-sum family: `sumrecN` and `hmeanN` for N in 2..=5.
//!
//! `sumrecN` evaluates the sum of reciprocals of its N operands;
//! `hmeanN` evaluates their harmonic mean, `N / sum(1/arg)`.
//!
//! These are macro operators: neither has a closed-form derivative of its
//! own. Differentiation expands the operator into the equivalent tree of
//! `+` / `/` / constant nodes and differentiates the expansion, so the
//! primitive rules do all the work.

use super::{DiffFn, EvalFn, OperatorDefinition};
use crate::diff::{add, divide};
use crate::expr::Expr;
use crate::var::Var;
use std::sync::Arc;

fn sumrec_eval(args: &[f64]) -> f64 {
    args.iter().map(|value| 1.0 / value).sum()
}

fn hmean_eval(args: &[f64]) -> f64 {
    args.len() as f64 / sumrec_eval(args)
}

/// `0 + 1/arg1 + ... + 1/argN` spelled with primitive nodes only.
fn reciprocal_sum(args: &[Expr]) -> Expr {
    args.iter().fold(Expr::Const(0.0), |sum, arg| {
        add(sum, divide(Expr::Const(1.0), arg.clone()))
    })
}

fn sumrec_diff(v: Var, args: &[Expr]) -> Expr {
    reciprocal_sum(args).diff(v)
}

fn hmean_diff(v: Var, args: &[Expr]) -> Expr {
    divide(Expr::Const(args.len() as f64), reciprocal_sum(args)).diff(v)
}

fn define(symbol: &'static str, arity: usize, eval: EvalFn, diff: DiffFn) -> Arc<OperatorDefinition> {
    Arc::new(OperatorDefinition {
        symbol,
        arity,
        eval,
        diff,
    })
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        define("sumrec2", 2, sumrec_eval, sumrec_diff),
        define("sumrec3", 3, sumrec_eval, sumrec_diff),
        define("sumrec4", 4, sumrec_eval, sumrec_diff),
        define("sumrec5", 5, sumrec_eval, sumrec_diff),
        define("hmean2", 2, hmean_eval, hmean_diff),
        define("hmean3", 3, hmean_eval, hmean_diff),
        define("hmean4", 4, hmean_eval, hmean_diff),
        define("hmean5", 5, hmean_eval, hmean_diff),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sumrec_eval() {
        assert_eq!(sumrec_eval(&[2.0, 4.0]), 0.75);
        assert_eq!(sumrec_eval(&[1.0, 1.0, 1.0, 1.0, 1.0]), 5.0);
    }

    #[test]
    fn test_hmean_eval() {
        assert_eq!(hmean_eval(&[2.0, 2.0]), 2.0);
        assert!((hmean_eval(&[3.0, 3.0, 3.0]) - 3.0).abs() < 1e-12);
        // hmean2(1, 3) = 2 / (1 + 1/3) = 1.5
        assert!((hmean_eval(&[1.0, 3.0]) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_expansion_renders_as_primitives() {
        let expansion = reciprocal_sum(&[Expr::Variable(Var::X), Expr::Variable(Var::Y)]);
        assert_eq!(expansion.prefix(), "(+ (+ 0 (/ 1 x)) (/ 1 y))");
    }
}
