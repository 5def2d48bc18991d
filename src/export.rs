//! Rendering truth tables as text.
//!
//! # Examples
//!
//! ```
//! use truth_table_rs::export::{to_tsv, ExportConfig};
//! use truth_table_rs::table::build;
//!
//! let table = build("P∧Q").unwrap();
//! let tsv = to_tsv(&table, &ExportConfig::default());
//! assert_eq!(tsv.lines().next(), Some("P\tQ\tP∧Q"));
//! ```

use std::fmt::Write as _;

use crate::table::TruthTable;

/// Markers used to render truth values.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Marker for true (default: "T")
    pub true_marker: String,
    /// Marker for false (default: "F")
    pub false_marker: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            true_marker: "T".to_string(),
            false_marker: "F".to_string(),
        }
    }
}

impl ExportConfig {
    pub fn marker(&self, value: bool) -> &str {
        if value {
            &self.true_marker
        } else {
            &self.false_marker
        }
    }
}

fn header(table: &TruthTable) -> Vec<String> {
    table
        .variables()
        .iter()
        .map(|v| v.to_string())
        .chain(table.sub_expressions().iter().cloned())
        .collect()
}

fn cells<'a>(table: &'a TruthTable, config: &'a ExportConfig) -> impl Iterator<Item = Vec<&'a str>> + 'a {
    table.rows().iter().map(move |row| {
        table
            .variables()
            .iter()
            .map(|&v| config.marker(row.assignment().get(v).unwrap_or(false)))
            .chain(row.values().iter().map(|&b| config.marker(b)))
            .collect()
    })
}

/// Tab-separated rendering: a header of variables then sub-expressions, one line per row.
pub fn to_tsv(table: &TruthTable, config: &ExportConfig) -> String {
    let mut output = String::new();
    writeln!(output, "{}", header(table).join("\t")).unwrap();
    for row in cells(table, config) {
        writeln!(output, "{}", row.join("\t")).unwrap();
    }
    output
}

fn render_line(cells: &[&str], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{}{}", cell, " ".repeat(w - cell.chars().count())))
        .collect();
    padded.join(" | ").trim_end().to_string()
}

/// Aligned plain-text rendering for terminals.
///
/// ```text
/// P | Q | P∧Q
/// --+---+----
/// T | T | T
/// ```
pub fn to_text(table: &TruthTable, config: &ExportConfig) -> String {
    let header = header(table);
    let rows: Vec<Vec<&str>> = cells(table, config).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    let header: Vec<&str> = header.iter().map(String::as_str).collect();
    writeln!(output, "{}", render_line(&header, &widths)).unwrap();
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    writeln!(output, "{}", rule.join("-+-")).unwrap();
    for row in &rows {
        writeln!(output, "{}", render_line(row, &widths)).unwrap();
    }
    output
}
