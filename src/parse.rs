//! Scanning primitives for formula text.
//!
//! Formulas are never tokenized. Instead, every fragment is inspected directly:
//! outer parentheses are stripped while they wrap the whole fragment, and the
//! main connective is found by a single right-to-left scan at bracket depth 0.
//!
//! # Main connective
//!
//! The main connective is the depth-0 binary operator with the lowest
//! [rank][crate::types::Op::rank]. Among operators of equal rank, the leftmost
//! occurrence wins, so a chain of equal-rank operators is split at its first
//! operator:
//!
//! ```text
//! P→Q→R   = P→(Q→R)
//! P∧Q∨R   = (P∧Q)∨R
//! P⊕Q→P∨Q∧R = (P⊕Q)→(P∨(Q∧R))
//! ```

use std::collections::BTreeSet;

use log::debug;

use crate::types::{is_negation, Op, Var};

/// Returns the sorted, deduplicated variables occurring in `text`.
///
/// Every ASCII letter counts as a variable, wherever it appears.
pub fn variables(text: &str) -> Vec<Var> {
    text.chars()
        .filter_map(Var::try_new)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Checks whether the parentheses at both ends of `text` enclose all of it.
///
/// The depth must never return to 0 before the final character.
fn is_fully_wrapped(text: &str) -> bool {
    if !(text.starts_with('(') && text.ends_with(')')) {
        return false;
    }
    let last = text.len() - 1;
    let mut depth: i32 = 0;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if depth == 0 && i < last {
            return false;
        }
    }
    true
}

/// Trims `text` and strips outer parentheses for as long as they wrap the whole fragment.
pub fn strip_parens(text: &str) -> &str {
    let mut text = text.trim();
    while is_fully_wrapped(text) {
        text = text[1..text.len() - 1].trim();
    }
    text
}

/// Finds the main connective of `text`, returning its byte offset and operator.
///
/// Only operators at bracket depth 0 are considered.
pub fn main_connective(text: &str) -> Option<(usize, Op)> {
    let mut depth: i32 = 0;
    let mut best: Option<(usize, Op)> = None;
    for (i, c) in text.char_indices().rev() {
        match c {
            ')' => depth += 1,
            '(' => depth -= 1,
            _ if depth == 0 => {
                if let Some(op) = Op::from_glyph(c) {
                    if best.map_or(true, |(_, b)| op.rank() <= b.rank()) {
                        best = Some((i, op));
                    }
                }
            }
            _ => {}
        }
    }
    best
}

/// Splits `text` around its main connective into `(left, op, right)`.
pub fn split_binary(text: &str) -> Option<(&str, Op, &str)> {
    let (pos, op) = main_connective(text)?;
    let left = &text[..pos];
    let right = &text[pos + op.glyph().len_utf8()..];
    debug!("split({:?}) => {:?} {} {:?}", text, left, op, right);
    Some((left, op, right))
}

/// Returns the operand if `text` starts with a negation sign.
pub fn strip_negation(text: &str) -> Option<&str> {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if is_negation(c) => Some(chars.as_str()),
        _ => None,
    }
}

/// Returns the variable if `text` is exactly one letter.
pub fn single_var(text: &str) -> Option<Var> {
    let mut chars = text.chars();
    let var = Var::try_new(chars.next()?)?;
    if chars.next().is_none() {
        Some(var)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_variables_sorted_unique() {
        let vars = variables("(Q∧P)∨¬Q→R");
        assert_eq!(vars, vec![Var::new('P'), Var::new('Q'), Var::new('R')]);
    }

    #[test]
    fn test_variables_ignore_other_chars() {
        assert_eq!(variables("1∧(2)"), vec![]);
        assert_eq!(variables("P1∧P2"), vec![Var::new('P')]);
    }

    #[test]
    fn test_strip_parens() {
        assert_eq!(strip_parens("  (P∧Q) "), "P∧Q");
        assert_eq!(strip_parens("((( P )))"), "P");
        assert_eq!(strip_parens("(P)∧(Q)"), "(P)∧(Q)");
        assert_eq!(strip_parens("((P)∧(Q))"), "(P)∧(Q)");
        assert_eq!(strip_parens("()"), "");
    }

    #[test]
    fn test_main_connective_precedence() {
        let text = "P⊕Q→P∨Q∧R";
        let (left, op, right) = split_binary(text).unwrap();
        assert_eq!((left, op, right), ("P⊕Q", Op::Implies, "P∨Q∧R"));
        let (left, op, right) = split_binary(right).unwrap();
        assert_eq!((left, op, right), ("P", Op::Or, "Q∧R"));
    }

    #[test]
    fn test_main_connective_leftmost_on_ties() {
        assert_eq!(split_binary("P→Q→R"), Some(("P", Op::Implies, "Q→R")));
        assert_eq!(split_binary("P∨Q⊕R"), Some(("P", Op::Or, "Q⊕R")));
        assert_eq!(split_binary("P↑Q∧R"), Some(("P", Op::Nand, "Q∧R")));
    }

    #[test]
    fn test_main_connective_ignores_nested() {
        assert_eq!(split_binary("(P↔Q)∧R"), Some(("(P↔Q)", Op::And, "R")));
        assert_eq!(main_connective("(P∨Q)"), None);
        assert_eq!(main_connective("¬(P∨Q)"), None);
    }

    #[test]
    fn test_iff_is_loosest() {
        assert_eq!(split_binary("P→Q↔Q∨P"), Some(("P→Q", Op::Iff, "Q∨P")));
    }

    #[test]
    fn test_strip_negation() {
        assert_eq!(strip_negation("¬P"), Some("P"));
        assert_eq!(strip_negation("~(P∧Q)"), Some("(P∧Q)"));
        assert_eq!(strip_negation("P"), None);
    }

    #[test]
    fn test_single_var() {
        assert_eq!(single_var("P"), Some(Var::new('P')));
        assert_eq!(single_var("PQ"), None);
        assert_eq!(single_var("1"), None);
        assert_eq!(single_var(""), None);
    }
}
