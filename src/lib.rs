//! # truth-table-rs: Truth tables for propositional formulas
//!
//! **`truth-table-rs`** evaluates propositional formulas written with the usual glyphs
//! and produces their full truth table, the sub-expressions evaluated along the way,
//! and the canonical CNF and DNF read off the table.
//!
//! ## Syntax
//!
//! - **Variables**: single ASCII letters (`P`, `Q`, ...). Every letter in the text is a variable.
//! - **Negation**: `¬` (or `~`), binding tighter than every binary connective.
//! - **Binary connectives**, loosest to tightest:
//!   `↔` < `→` < {`∨`, `⊕`, `↓`} < {`∧`, `↑`}.
//!   Equal-rank chains split at their leftmost operator, so `P→Q→R` is `P→(Q→R)`.
//! - **Parentheses** group as usual.
//!
//! Malformed fragments (e.g. `PQ` or a missing operand) are tolerated and evaluate to false,
//! unless strict mode is requested via [`TableConfig`][crate::table::TableConfig].
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_table_rs::table::build;
//!
//! let table = build("P→Q").unwrap();
//!
//! assert_eq!(table.num_rows(), 4);
//! assert_eq!(table.results(), vec![true, false, true, true]);
//!
//! assert_eq!(table.cnf().to_string(), "(¬P∨Q)");
//! assert_eq!(table.dnf().to_string(), "(P∧Q)∨(¬P∧Q)∨(¬P∧¬Q)");
//! ```
//!
//! ## Core Components
//!
//! - **[`formula`]**: parsing into an expression arena, sub-expression extraction, evaluation.
//! - **[`table`]**: truth-table construction over all assignments.
//! - **[`normal_form`]**: CNF/DNF synthesis and term checking.
//! - **[`export`]**: tab-separated and plain-text rendering.

pub mod assignment;
pub mod ast;
pub mod error;
pub mod export;
pub mod formula;
pub mod normal_form;
pub mod parse;
pub mod table;
pub mod types;

pub use crate::assignment::Assignment;
pub use crate::error::Error;
pub use crate::formula::{decompose, evaluate, Formula};
pub use crate::normal_form::{cnf, dnf, evaluate_clause, evaluate_conjunctive_term, NormalForm};
pub use crate::table::{build, build_with_config, TableConfig, TruthTable};
