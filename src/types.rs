//! Type-safe wrappers for propositional variables, connectives and literals.
//!
//! This module provides newtype wrappers that keep variable names, binary
//! connectives and literals distinct from the raw characters they are
//! written with.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Negation glyph used when rendering formulas and normal forms.
pub const NOT: char = '¬';

/// ASCII alias for negation, accepted on input.
pub const NOT_ASCII: char = '~';

/// Returns `true` if `c` denotes negation.
pub fn is_negation(c: char) -> bool {
    c == NOT || c == NOT_ASCII
}

/// A propositional variable, named by a single ASCII letter.
///
/// # Invariants
///
/// - The name is always an ASCII alphabetic character.
/// - Ordering follows the character order, so `A < B < ... < Z < a < ... < z`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Var(char);

impl Var {
    /// Creates a new variable with the given name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not an ASCII letter.
    pub fn new(name: char) -> Self {
        assert!(name.is_ascii_alphabetic(), "Variable names must be ASCII letters, got {:?}", name);
        Var(name)
    }

    /// Creates a variable if `name` is an ASCII letter.
    pub fn try_new(name: char) -> Option<Self> {
        if name.is_ascii_alphabetic() {
            Some(Var(name))
        } else {
            None
        }
    }

    /// Returns the variable name.
    pub fn name(self) -> char {
        self.0
    }

    /// Returns the positive literal of this variable.
    pub fn pos(self) -> Literal {
        Literal::new(self, false)
    }

    /// Returns the negative literal of this variable.
    pub fn neg(self) -> Literal {
        Literal::new(self, true)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Var> for char {
    fn from(var: Var) -> Self {
        var.0
    }
}

/// A binary connective.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Op {
    /// Conjunction, `∧`.
    And,
    /// Disjunction, `∨`.
    Or,
    /// Material implication, `→`.
    Implies,
    /// Biconditional, `↔`.
    Iff,
    /// Exclusive or, `⊕`.
    Xor,
    /// Sheffer stroke (NAND), `↑`.
    Nand,
    /// Peirce arrow (NOR), `↓`.
    Nor,
}

impl Op {
    pub const ALL: [Op; 7] = [Op::And, Op::Or, Op::Implies, Op::Iff, Op::Xor, Op::Nand, Op::Nor];

    /// Parses a connective from its glyph.
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '∧' => Some(Op::And),
            '∨' => Some(Op::Or),
            '→' => Some(Op::Implies),
            '↔' => Some(Op::Iff),
            '⊕' => Some(Op::Xor),
            '↑' => Some(Op::Nand),
            '↓' => Some(Op::Nor),
            _ => None,
        }
    }

    /// Returns the glyph of this connective.
    pub fn glyph(self) -> char {
        match self {
            Op::And => '∧',
            Op::Or => '∨',
            Op::Implies => '→',
            Op::Iff => '↔',
            Op::Xor => '⊕',
            Op::Nand => '↑',
            Op::Nor => '↓',
        }
    }

    /// Binding rank, loosest (1) to tightest (4).
    ///
    /// ```text
    /// ↔ (1) < → (2) < {∨, ⊕, ↓} (3) < {∧, ↑} (4)
    /// ```
    pub fn rank(self) -> u8 {
        match self {
            Op::Iff => 1,
            Op::Implies => 2,
            Op::Or | Op::Xor | Op::Nor => 3,
            Op::And | Op::Nand => 4,
        }
    }

    /// Applies the connective to two truth values.
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Op::And => left && right,
            Op::Or => left || right,
            Op::Implies => !left || right,
            Op::Iff => left == right,
            Op::Xor => left != right,
            Op::Nand => !(left && right),
            Op::Nor => !(left || right),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A literal: a variable or its negation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Literal {
    var: Var,
    negated: bool,
}

impl Literal {
    pub fn new(var: Var, negated: bool) -> Self {
        Literal { var, negated }
    }

    pub fn var(self) -> Var {
        self.var
    }

    pub fn is_negated(self) -> bool {
        self.negated
    }

    /// Parses a literal such as `P`, `¬P` or `~P`, ignoring surrounding whitespace.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let mut chars = text.chars();
        let first = chars.next()?;
        let (negated, rest) = if is_negation(first) {
            (true, chars.as_str().trim_start())
        } else {
            (false, text)
        };
        let mut rest = rest.chars();
        let var = Var::try_new(rest.next()?)?;
        if rest.next().is_some() {
            return None;
        }
        Some(Literal::new(var, negated))
    }

    /// Truth value of the literal given the value of its variable.
    pub fn eval(self, value: bool) -> bool {
        value != self.negated
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "{}{}", NOT, self.var)
        } else {
            write!(f, "{}", self.var)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_ordering() {
        let mut vars = vec![Var::new('R'), Var::new('P'), Var::new('Q')];
        vars.sort();
        assert_eq!(vars, vec![Var::new('P'), Var::new('Q'), Var::new('R')]);
    }

    #[test]
    #[should_panic]
    fn test_var_rejects_non_letter() {
        Var::new('1');
    }

    #[test]
    fn test_op_glyph_roundtrip() {
        for op in Op::ALL {
            assert_eq!(Op::from_glyph(op.glyph()), Some(op));
        }
        assert_eq!(Op::from_glyph('('), None);
        assert_eq!(Op::from_glyph(NOT), None);
    }

    #[test]
    fn test_op_ranks() {
        assert!(Op::Iff.rank() < Op::Implies.rank());
        assert!(Op::Implies.rank() < Op::Or.rank());
        assert_eq!(Op::Or.rank(), Op::Xor.rank());
        assert_eq!(Op::Or.rank(), Op::Nor.rank());
        assert!(Op::Or.rank() < Op::And.rank());
        assert_eq!(Op::And.rank(), Op::Nand.rank());
    }

    #[test]
    fn test_op_apply() {
        let cases = [(true, true), (true, false), (false, true), (false, false)];
        let expected = [
            (Op::And, [true, false, false, false]),
            (Op::Or, [true, true, true, false]),
            (Op::Implies, [true, false, true, true]),
            (Op::Iff, [true, false, false, true]),
            (Op::Xor, [false, true, true, false]),
            (Op::Nand, [false, true, true, true]),
            (Op::Nor, [false, false, false, true]),
        ];
        for (op, column) in expected {
            for ((l, r), want) in cases.iter().zip(column) {
                assert_eq!(op.apply(*l, *r), want, "{} {} {}", l, op, r);
            }
        }
    }

    #[test]
    fn test_literal_parse() {
        assert_eq!(Literal::parse("P"), Some(Var::new('P').pos()));
        assert_eq!(Literal::parse(" ¬Q "), Some(Var::new('Q').neg()));
        assert_eq!(Literal::parse("~R"), Some(Var::new('R').neg()));
        assert_eq!(Literal::parse("PQ"), None);
        assert_eq!(Literal::parse(""), None);
        assert_eq!(Literal::parse("¬"), None);
    }

    #[test]
    fn test_literal_display() {
        assert_eq!(Var::new('P').pos().to_string(), "P");
        assert_eq!(Var::new('P').neg().to_string(), "¬P");
    }
}
