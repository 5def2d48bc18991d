use log::debug;
use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;
use crate::error::{Error, Result};
use crate::formula::Formula;
use crate::normal_form::{self, NormalForm};
use crate::parse;
use crate::types::Var;

/// Default upper bound on the number of variables of a table.
pub const DEFAULT_MAX_VARIABLES: usize = 20;

/// Configuration for building truth tables.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Formulas with more variables are rejected (default: 20).
    pub max_variables: usize,
    /// Reject fragments with no connective and no variable (default: false).
    pub strict: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_variables: DEFAULT_MAX_VARIABLES,
            strict: false,
        }
    }
}

/// One row of a truth table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    assignment: Assignment,
    /// One value per sub-expression column.
    values: Vec<bool>,
    result: bool,
}

impl Row {
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Value of the whole formula in this row.
    pub fn result(&self) -> bool {
        self.result
    }
}

/// A complete truth table of a formula.
///
/// Row `i` assigns the binary value `2^n - 1 - i` to the variables, first
/// variable most significant: row 0 is all-true, the last row all-false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTable {
    formula: String,
    variables: Vec<Var>,
    sub_expressions: Vec<String>,
    rows: Vec<Row>,
}

/// Builds the truth table of `formula` with the default configuration.
pub fn build(formula: &str) -> Result<TruthTable> {
    build_with_config(formula, &TableConfig::default())
}

/// Builds the truth table of `formula`.
pub fn build_with_config(formula: &str, config: &TableConfig) -> Result<TruthTable> {
    debug!("build(formula = {:?}, config = {:?})", formula, config);

    let variables = parse::variables(formula);
    if variables.is_empty() {
        return Err(Error::NoVariables);
    }
    if variables.len() > config.max_variables {
        return Err(Error::TooManyVariables {
            count: variables.len(),
            limit: config.max_variables,
        });
    }

    let formula = if config.strict {
        Formula::parse_strict(formula)?
    } else {
        Formula::parse(formula)
    };

    let sub_expressions: Vec<String> = formula.sub_expressions().map(str::to_string).collect();
    let columns: Vec<_> = formula.columns().collect();
    let num_rows = 1usize << variables.len();
    debug!(
        "build: {} variables, {} sub-expressions, {} rows",
        variables.len(),
        sub_expressions.len(),
        num_rows
    );

    let rows = (0..num_rows)
        .map(|i| {
            let assignment = Assignment::from_row_index(&variables, i);
            let nodes = formula.eval_nodes(&assignment);
            let values = columns.iter().map(|idx| nodes[idx.index()]).collect();
            let result = nodes[formula.root().index()];
            Row {
                assignment,
                values,
                result,
            }
        })
        .collect();

    Ok(TruthTable {
        formula: formula.text().to_string(),
        variables,
        sub_expressions,
        rows,
    })
}

impl TruthTable {
    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn variables(&self) -> &[Var] {
        &self.variables
    }

    /// Column headers after the variables, ending with the whole formula.
    pub fn sub_expressions(&self) -> &[String] {
        &self.sub_expressions
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Index of the column for `sub_expression`, compared after trimming.
    pub fn column_index(&self, sub_expression: &str) -> Option<usize> {
        let key = sub_expression.trim();
        self.sub_expressions.iter().position(|s| s == key)
    }

    /// Value of `sub_expression` in row `row`.
    pub fn value(&self, row: usize, sub_expression: &str) -> Option<bool> {
        let column = self.column_index(sub_expression)?;
        self.rows.get(row).map(|r| r.values[column])
    }

    /// All values of `sub_expression`, top to bottom.
    pub fn column(&self, sub_expression: &str) -> Option<Vec<bool>> {
        let column = self.column_index(sub_expression)?;
        Some(self.rows.iter().map(|r| r.values[column]).collect())
    }

    /// Final results, top to bottom.
    pub fn results(&self) -> Vec<bool> {
        self.rows.iter().map(|r| r.result).collect()
    }

    /// Number of rows where the formula is true.
    pub fn true_count(&self) -> usize {
        self.rows.iter().filter(|r| r.result).count()
    }

    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|r| r.result)
    }

    pub fn is_contradiction(&self) -> bool {
        self.rows.iter().all(|r| !r.result)
    }

    /// Neither a tautology nor a contradiction.
    pub fn is_contingent(&self) -> bool {
        !self.is_tautology() && !self.is_contradiction()
    }

    /// One explanation line per row, e.g. `Row 1: P=T, Q=F → Result = T`.
    pub fn steps(&self) -> Vec<String> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                format!(
                    "Row {}: {} → Result = {}",
                    i + 1,
                    row.assignment,
                    if row.result { 'T' } else { 'F' }
                )
            })
            .collect()
    }

    pub fn cnf(&self) -> NormalForm {
        normal_form::cnf(self)
    }

    pub fn dnf(&self) -> NormalForm {
        normal_form::dnf(self)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::formula::evaluate;

    #[test]
    fn test_no_variables() {
        assert_eq!(build("").unwrap_err(), Error::NoVariables);
        assert_eq!(build("(1∧0)").unwrap_err(), Error::NoVariables);
    }

    #[test]
    fn test_too_many_variables() {
        let formula = "A∧B∧C∧D∧E∧F∧G∧H∧I∧J∧K∧L∧M∧N∧O∧P∧Q∧R∧S∧T∧U";
        assert_eq!(
            build(formula).unwrap_err(),
            Error::TooManyVariables { count: 21, limit: 20 }
        );
        let config = TableConfig {
            max_variables: 2,
            ..TableConfig::default()
        };
        assert!(build_with_config("P∨Q", &config).is_ok());
        assert!(build_with_config("P∨Q∨R", &config).is_err());
    }

    #[test]
    fn test_strict_mode() {
        let config = TableConfig {
            strict: true,
            ..TableConfig::default()
        };
        assert!(matches!(build_with_config("P∧QR", &config), Err(Error::Malformed { .. })));
        assert!(build("P∧QR").is_ok());
        assert_eq!(build_with_config("1∧2", &config).unwrap_err(), Error::NoVariables);
        assert_eq!(build_with_config("()", &config).unwrap_err(), Error::NoVariables);
    }

    #[test]
    fn test_row_order() {
        let table = build("P∧Q").unwrap();
        assert_eq!(table.num_rows(), 4);
        let p = Var::new('P');
        let q = Var::new('Q');
        let bits: Vec<_> = table
            .rows()
            .iter()
            .map(|r| (r.assignment().get(p).unwrap(), r.assignment().get(q).unwrap()))
            .collect();
        assert_eq!(bits, vec![(true, true), (true, false), (false, true), (false, false)]);
        assert_eq!(table.results(), vec![true, false, false, false]);
    }

    #[test]
    fn test_columns() {
        let table = build("¬P∨Q").unwrap();
        assert_eq!(table.sub_expressions(), &["¬P".to_string(), "¬P∨Q".to_string()]);
        assert_eq!(table.column("¬P"), Some(vec![false, false, true, true]));
        assert_eq!(table.column(" ¬P∨Q "), Some(vec![true, false, true, true]));
        assert_eq!(table.value(1, "¬P∨Q"), Some(false));
        assert_eq!(table.column("Q"), None);
    }

    #[test]
    fn test_rows_match_evaluation() {
        let formula = "(P→Q)∧(Q→R)→(P→R)";
        let table = build(formula).unwrap();
        assert!(table.is_tautology());
        for row in table.rows() {
            assert_eq!(evaluate(formula, row.assignment()), row.result());
            assert_eq!(row.values().last().copied(), Some(row.result()));
        }
    }

    #[test]
    fn test_classification() {
        assert!(build("P∨¬P").unwrap().is_tautology());
        assert!(build("P∧¬P").unwrap().is_contradiction());
        let table = build("P↔Q").unwrap();
        assert!(table.is_contingent());
        assert_eq!(table.true_count(), 2);
    }

    #[test]
    fn test_steps() {
        let table = build("P→Q").unwrap();
        assert_eq!(
            table.steps(),
            vec![
                "Row 1: P=T, Q=T → Result = T",
                "Row 2: P=T, Q=F → Result = F",
                "Row 3: P=F, Q=T → Result = T",
                "Row 4: P=F, Q=F → Result = T",
            ]
        );
    }

    #[test]
    fn test_serialize() {
        let table = build("¬P").unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["formula"], "¬P");
        assert_eq!(json["sub_expressions"][0], "¬P");
        assert_eq!(json["rows"][0]["result"], false);
        assert_eq!(json["rows"][1]["values"][0], true);
    }
}
