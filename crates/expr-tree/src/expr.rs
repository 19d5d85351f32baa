//! The expression tree node model and its renderers.

use crate::error::ParseError;
use crate::operators::OperatorDefinition;
use crate::var::Var;
use std::fmt;
use std::sync::Arc;

/// A node of an expression tree. Immutable after construction:
/// differentiation and parsing always build new nodes.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A numeric constant.
    Const(f64),
    /// A reference to one of the three variable slots.
    Variable(Var),
    /// An operator applied to `def.arity` operands.
    Op {
        def: Arc<OperatorDefinition>,
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Builds an operator node, validating the operand count against the
    /// operator's registered arity. This is the only way parsers construct
    /// interior nodes, so a malformed node can never exist.
    pub fn op(def: &Arc<OperatorDefinition>, args: Vec<Expr>) -> Result<Expr, ParseError> {
        if args.len() != def.arity {
            return Err(ParseError::ArityMismatch {
                symbol: def.symbol,
                expected: def.arity,
                actual: args.len(),
            });
        }
        Ok(Expr::Op {
            def: Arc::clone(def),
            args,
        })
    }

    /// Renders the tree in bracket-free postfix form: operands first,
    /// space-separated, operator symbol last. Leaves render as their
    /// literal value or name.
    pub fn postfix(&self) -> String {
        match self {
            Expr::Const(value) => format_const(*value),
            Expr::Variable(var) => var.name().to_string(),
            Expr::Op { def, args } => {
                let mut out = String::new();
                for arg in args {
                    out.push_str(&arg.postfix());
                    out.push(' ');
                }
                out.push_str(def.symbol);
                out
            }
        }
    }

    /// Renders the tree in fully bracketed prefix form:
    /// `(symbol operand ...)`.
    pub fn prefix(&self) -> String {
        match self {
            Expr::Const(value) => format_const(*value),
            Expr::Variable(var) => var.name().to_string(),
            Expr::Op { def, args } => {
                let mut out = String::from("(");
                out.push_str(def.symbol);
                for arg in args {
                    out.push(' ');
                    out.push_str(&arg.prefix());
                }
                out.push(')');
                out
            }
        }
    }
}

/// Canonical constant text: integer form for integral values, standard
/// float text otherwise.
fn format_const(value: f64) -> String {
    if value.is_finite() && value == value.trunc() {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// `Display` is the postfix rendering.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.postfix())
    }
}

/// Structural equality: operator nodes compare by symbol and operands.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Expr::Const(a), Expr::Const(b)) => a == b,
            (Expr::Variable(a), Expr::Variable(b)) => a == b,
            (
                Expr::Op { def: a, args: x },
                Expr::Op { def: b, args: y },
            ) => a.symbol == b.symbol && x == y,
            _ => false,
        }
    }
}
