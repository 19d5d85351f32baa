//! The operator registry.
//!
//! Every operator the language knows is described by one
//! [`OperatorDefinition`]: its surface symbol, its arity, a numeric
//! evaluator, and a differentiation rule. The registry is assembled once
//! per process and never mutated afterwards; parsers and trees share the
//! definitions through `Arc`.
//!
//! The positional-extrema operators (`argMin*`/`argMax*`) are deliberately
//! absent here: they have no derivative, so they live only in the
//! closure-based evaluator crate.

pub mod arithmetic;
pub mod reciprocal;

use crate::expr::Expr;
use crate::var::Var;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// Numeric evaluator: one value per operand, in operand order.
pub type EvalFn = fn(&[f64]) -> f64;

/// Differentiation rule: receives the target variable and the original,
/// undifferentiated operands, and builds the derivative tree. Each rule
/// calls `.diff()` on whichever operands its formula needs.
pub type DiffFn = fn(Var, &[Expr]) -> Expr;

/// An operator definition. Immutable once constructed.
#[derive(Debug)]
pub struct OperatorDefinition {
    pub symbol: &'static str,
    pub arity: usize,
    pub eval: EvalFn,
    pub diff: DiffFn,
}

/// Map of operator symbol -> definition.
pub type OperatorMap = HashMap<&'static str, Arc<OperatorDefinition>>;

/// Builds the full operator map from every operator family.
pub fn operators_map() -> OperatorMap {
    arithmetic::operators()
        .into_iter()
        .chain(reciprocal::operators())
        .map(|def| (def.symbol, def))
        .collect()
}

/// The process-wide registry. Fixed at first use.
pub static OPERATORS: Lazy<OperatorMap> = Lazy::new(operators_map);

/// Looks up an operator by its surface symbol.
pub fn lookup(symbol: &str) -> Option<&Arc<OperatorDefinition>> {
    OPERATORS.get(symbol)
}
