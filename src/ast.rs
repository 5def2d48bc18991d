use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;
use crate::types::{Op, Var, NOT};

/// A propositional formula as an owned tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    Var(Var),
    Not(Box<Expr>),
    Binary(Op, Box<Expr>, Box<Expr>),
    /// A fragment with no connective and no variable, kept verbatim.
    Opaque(String),
}

impl Expr {
    pub fn var(name: char) -> Self {
        Expr::Var(Var::new(name))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(value: Self) -> Self {
        Expr::Not(Box::new(value))
    }

    pub fn binary(op: Op, lhs: Self, rhs: Self) -> Self {
        Expr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Depth of the expression tree (0 for leaves).
    pub fn depth(&self) -> usize {
        match self {
            Expr::Var(_) | Expr::Opaque(_) => 0,
            Expr::Not(e) => 1 + e.depth(),
            Expr::Binary(_, l, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Size of the expression tree (number of nodes).
    pub fn size(&self) -> usize {
        match self {
            Expr::Var(_) | Expr::Opaque(_) => 1,
            Expr::Not(e) => 1 + e.size(),
            Expr::Binary(_, l, r) => 1 + l.size() + r.size(),
        }
    }

    /// Evaluate the expression under `assignment`.
    ///
    /// Unassigned variables and opaque fragments are false.
    pub fn eval(&self, assignment: &Assignment) -> bool {
        match self {
            Expr::Var(v) => assignment.get(*v).unwrap_or(false),
            Expr::Not(e) => !e.eval(assignment),
            Expr::Binary(op, l, r) => op.apply(l.eval(assignment), r.eval(assignment)),
            Expr::Opaque(_) => false,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(v) => write!(f, "{}", v),
            Expr::Not(e) => write!(f, "{}{}", NOT, e),
            Expr::Binary(op, l, r) => write!(f, "({} {} {})", l, op, r),
            Expr::Opaque(text) => write!(f, "⟨{}⟩", text),
        }
    }
}
