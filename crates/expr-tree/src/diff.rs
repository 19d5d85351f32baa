//! Symbolic differentiation of expression trees.
//!
//! `Expr::diff` handles the leaves and dispatches operator nodes to the
//! rule registered for the operator. The node builders at the bottom are
//! what the rules use to assemble derivative trees; they construct
//! primitive-operator nodes with statically known arity.

use crate::expr::Expr;
use crate::operators::{arithmetic, OperatorDefinition};
use crate::var::Var;
use std::sync::Arc;

impl Expr {
    /// Differentiates the tree with respect to `v`, building a wholly new
    /// tree. The receiver is left untouched and can be differentiated
    /// again, with respect to any variable.
    pub fn diff(&self, v: Var) -> Expr {
        match self {
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Variable(var) => {
                if *var == v {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Op { def, args } => (def.diff)(v, args),
        }
    }
}

fn node(def: &Arc<OperatorDefinition>, args: Vec<Expr>) -> Expr {
    debug_assert_eq!(args.len(), def.arity);
    Expr::Op {
        def: Arc::clone(def),
        args,
    }
}

pub(crate) fn add(a: Expr, b: Expr) -> Expr {
    node(&arithmetic::ADD, vec![a, b])
}

pub(crate) fn subtract(a: Expr, b: Expr) -> Expr {
    node(&arithmetic::SUBTRACT, vec![a, b])
}

pub(crate) fn multiply(a: Expr, b: Expr) -> Expr {
    node(&arithmetic::MULTIPLY, vec![a, b])
}

pub(crate) fn divide(a: Expr, b: Expr) -> Expr {
    node(&arithmetic::DIVIDE, vec![a, b])
}

pub(crate) fn negate(a: Expr) -> Expr {
    node(&arithmetic::NEGATE, vec![a])
}
