//! Canonical normal forms read off a truth table.
//!
//! - **CNF** has one clause (maxterm) per false row. A variable appears negated
//!   if it is true in that row, so the clause is false exactly there.
//! - **DNF** has one term (minterm) per true row. A variable appears plain if it
//!   is true in that row, so the term is true exactly there.
//!
//! Terms are stored as text, e.g. `(¬P∨Q)`, and can be re-checked against any
//! row with [`evaluate_clause`] and [`evaluate_conjunctive_term`].

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;
use crate::table::{Row, TruthTable};
use crate::types::{Literal, Op};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum NormalFormKind {
    /// Conjunction of clauses.
    Cnf,
    /// Disjunction of conjunctive terms.
    Dnf,
}

impl NormalFormKind {
    /// Connective joining literals inside a term.
    pub fn inner(self) -> Op {
        match self {
            NormalFormKind::Cnf => Op::Or,
            NormalFormKind::Dnf => Op::And,
        }
    }

    /// Connective joining terms.
    pub fn outer(self) -> Op {
        match self {
            NormalFormKind::Cnf => Op::And,
            NormalFormKind::Dnf => Op::Or,
        }
    }

    /// Description of the table that has no normal form of this kind.
    pub fn invalid_marker(self) -> &'static str {
        match self {
            NormalFormKind::Cnf => "Tautology (always true)",
            NormalFormKind::Dnf => "Contradiction (always false)",
        }
    }
}

/// A CNF or DNF as an ordered list of term texts.
///
/// A normal form without terms is invalid: the CNF of a tautology or the
/// DNF of a contradiction.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct NormalForm {
    kind: NormalFormKind,
    terms: Vec<String>,
}

impl NormalForm {
    pub fn kind(&self) -> NormalFormKind {
        self.kind
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_valid(&self) -> bool {
        !self.terms.is_empty()
    }

    /// The joined formula, or the invalid marker.
    pub fn formula(&self) -> String {
        if self.is_valid() {
            let sep = self.kind.outer().glyph().to_string();
            self.terms.join(sep.as_str())
        } else {
            self.kind.invalid_marker().to_string()
        }
    }

    /// Evaluates the normal form under `assignment`, `None` if invalid.
    pub fn eval(&self, assignment: &Assignment) -> Option<bool> {
        if !self.is_valid() {
            return None;
        }
        let value = match self.kind {
            NormalFormKind::Cnf => self.terms.iter().all(|t| evaluate_clause(t, assignment)),
            NormalFormKind::Dnf => self.terms.iter().any(|t| evaluate_conjunctive_term(t, assignment)),
        };
        Some(value)
    }
}

impl fmt::Display for NormalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formula())
    }
}

fn term(kind: NormalFormKind, table: &TruthTable, row: &Row) -> String {
    let literals: Vec<String> = table
        .variables()
        .iter()
        .map(|&v| {
            let value = row.assignment().get(v).unwrap_or(false);
            let lit = match kind {
                NormalFormKind::Cnf => Literal::new(v, value),
                NormalFormKind::Dnf => Literal::new(v, !value),
            };
            lit.to_string()
        })
        .collect();
    let sep = kind.inner().glyph().to_string();
    format!("({})", literals.join(sep.as_str()))
}

fn synthesize(kind: NormalFormKind, table: &TruthTable) -> NormalForm {
    let wanted = kind == NormalFormKind::Dnf;
    let terms: Vec<String> = table
        .rows()
        .iter()
        .filter(|r| r.result() == wanted)
        .map(|r| term(kind, table, r))
        .collect();
    debug!("{:?}({:?}) => {} terms", kind, table.formula(), terms.len());
    NormalForm { kind, terms }
}

/// Conjunctive normal form: one clause per false row.
pub fn cnf(table: &TruthTable) -> NormalForm {
    synthesize(NormalFormKind::Cnf, table)
}

/// Disjunctive normal form: one conjunctive term per true row.
pub fn dnf(table: &TruthTable) -> NormalForm {
    synthesize(NormalFormKind::Dnf, table)
}

fn eval_literals<'a>(term: &'a str, sep: char, assignment: &'a Assignment) -> impl Iterator<Item = bool> + 'a {
    term.split(sep).map(move |text| {
        let text = text.trim_matches(|c: char| c == '(' || c == ')' || c.is_whitespace());
        match Literal::parse(text) {
            Some(lit) => lit.eval(assignment.get(lit.var()).unwrap_or(false)),
            None => {
                warn!("not a literal: {:?}", text);
                false
            }
        }
    })
}

/// Evaluates a clause such as `(¬P∨Q)`: true if any literal is true.
pub fn evaluate_clause(clause: &str, assignment: &Assignment) -> bool {
    let mut values = eval_literals(clause, Op::Or.glyph(), assignment);
    values.any(|b| b)
}

/// Evaluates a conjunctive term such as `(P∧¬Q)`: true if every literal is true.
pub fn evaluate_conjunctive_term(term: &str, assignment: &Assignment) -> bool {
    let mut values = eval_literals(term, Op::And.glyph(), assignment);
    values.all(|b| b)
}
