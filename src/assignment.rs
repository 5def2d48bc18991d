use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Var;

/// A mapping from variables to truth values, ordered by variable.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    values: BTreeMap<Var, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the assignment of truth-table row `index` over `vars`.
    ///
    /// Row `i` encodes the binary value `2^n - 1 - i`, with the first
    /// variable as the most significant bit. Row 0 is all-true and the
    /// last row is all-false.
    pub fn from_row_index(vars: &[Var], index: usize) -> Self {
        let n = vars.len();
        debug_assert!(index < 1 << n);
        let bits = (1usize << n) - 1 - index;
        let values = vars
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, (bits >> (n - 1 - i)) & 1 == 1))
            .collect();
        Self { values }
    }

    pub fn get(&self, var: Var) -> Option<bool> {
        self.values.get(&var).copied()
    }

    /// Iterates over `(variable, value)` pairs in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (Var, bool)> + '_ {
        self.values.iter().map(|(&v, &b)| (v, b))
    }
}

impl FromIterator<(Var, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(char, bool); N]> for Assignment {
    fn from(pairs: [(char, bool); N]) -> Self {
        pairs.into_iter().map(|(c, b)| (Var::new(c), b)).collect()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (var, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", var, if value { 'T' } else { 'F' })?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(names: &str) -> Vec<Var> {
        names.chars().map(Var::new).collect()
    }

    #[test]
    fn test_row_index_order() {
        let vs = vars("PQ");
        let rows: Vec<_> = (0..4)
            .map(|i| {
                let a = Assignment::from_row_index(&vs, i);
                (a.get(Var::new('P')).unwrap(), a.get(Var::new('Q')).unwrap())
            })
            .collect();
        assert_eq!(rows, vec![(true, true), (true, false), (false, true), (false, false)]);
    }

    #[test]
    fn test_row_index_single_var() {
        let vs = vars("P");
        assert_eq!(Assignment::from_row_index(&vs, 0).get(Var::new('P')), Some(true));
        assert_eq!(Assignment::from_row_index(&vs, 1).get(Var::new('P')), Some(false));
    }

    #[test]
    fn test_missing_var() {
        let a = Assignment::from([('P', true)]);
        assert_eq!(a.get(Var::new('Q')), None);
    }

    #[test]
    fn test_display() {
        let a = Assignment::from([('Q', false), ('P', true)]);
        assert_eq!(a.to_string(), "P=T, Q=F");
    }
}
