//! Numeric evaluation of expression trees.

use crate::expr::Expr;

impl Expr {
    /// Evaluates the tree with the three variable slots bound to
    /// `(x, y, z)`.
    ///
    /// Evaluation is total: domain issues such as division by zero follow
    /// IEEE-754 semantics (infinities, NaN) instead of raising. Syntax is
    /// validated at parse time, numbers are never validated.
    pub fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        match self {
            Expr::Const(value) => *value,
            Expr::Variable(var) => [x, y, z][var.index()],
            Expr::Op { def, args } => {
                let values: Vec<f64> = args.iter().map(|arg| arg.evaluate(x, y, z)).collect();
                (def.eval)(&values)
            }
        }
    }
}
