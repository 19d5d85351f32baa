use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// One of the three fixed variable slots.
///
/// Every expression is a function of exactly three variables, bound
/// positionally at evaluation time: `x` is the first argument, `y` the
/// second, `z` the third.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Var {
    X,
    Y,
    Z,
}

impl Var {
    /// All slots, in binding order.
    pub const ALL: [Var; 3] = [Var::X, Var::Y, Var::Z];

    /// The positional slot this variable is bound to.
    pub fn index(self) -> usize {
        match self {
            Var::X => 0,
            Var::Y => 1,
            Var::Z => 2,
        }
    }

    /// The surface name of the variable.
    pub fn name(self) -> &'static str {
        match self {
            Var::X => "x",
            Var::Y => "y",
            Var::Z => "z",
        }
    }

    /// Looks up a variable by its surface name.
    pub fn from_name(name: &str) -> Option<Var> {
        match name {
            "x" => Some(Var::X),
            "y" => Some(Var::Y),
            "z" => Some(Var::Z),
            _ => None,
        }
    }
}

impl FromStr for Var {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Var::from_name(s).ok_or_else(|| ParseError::UnknownVariable {
            token: s.to_string(),
        })
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
