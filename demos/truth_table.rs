//! Print the truth table, normal forms and evaluation steps of a formula.
//!
//! Run with: `cargo run --example truth_table -- "P⊕Q→P∨Q∧R"`

use clap::Parser;
use truth_table_rs::export::{to_text, to_tsv, ExportConfig};
use truth_table_rs::table::{build_with_config, TableConfig, DEFAULT_MAX_VARIABLES};
use truth_table_rs::Formula;

#[derive(Parser)]
#[command(name = "truth_table")]
#[command(about = "Truth tables, CNF and DNF of propositional formulas")]
struct Args {
    /// Formula, e.g. "(P→Q)∧¬R" (`~` is accepted for negation)
    formula: String,

    /// Print tab-separated values instead of an aligned table
    #[arg(long)]
    tsv: bool,

    /// Print the parsed tree
    #[arg(long)]
    tree: bool,

    /// Print one explanation line per row
    #[arg(long)]
    steps: bool,

    /// Reject fragments with no connective and no variable
    #[arg(long)]
    strict: bool,

    /// Maximum number of variables
    #[arg(long, default_value_t = DEFAULT_MAX_VARIABLES)]
    max_vars: usize,

    /// Marker for true
    #[arg(long, default_value = "T")]
    true_marker: String,

    /// Marker for false
    #[arg(long, default_value = "F")]
    false_marker: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Args::parse();

    let config = TableConfig {
        max_variables: args.max_vars,
        strict: args.strict,
    };
    let export = ExportConfig {
        true_marker: args.true_marker,
        false_marker: args.false_marker,
    };

    let table = build_with_config(&args.formula, &config)?;

    if args.tree {
        let tree = Formula::parse(&args.formula).to_expr();
        println!("Tree: {}", tree);
        println!("Depth: {}, nodes: {}", tree.depth(), tree.size());
        println!();
    }

    if args.tsv {
        print!("{}", to_tsv(&table, &export));
    } else {
        print!("{}", to_text(&table, &export));
    }
    println!();

    let kind = if table.is_tautology() {
        "tautology"
    } else if table.is_contradiction() {
        "contradiction"
    } else {
        "contingency"
    };
    println!("Classification: {} ({}/{} rows true)", kind, table.true_count(), table.num_rows());
    println!("CNF: {}", table.cnf());
    println!("DNF: {}", table.dnf());

    if args.steps {
        println!();
        for step in table.steps() {
            println!("{}", step);
        }
    }

    Ok(())
}
