//! Parsed formulas.
//!
//! A [`Formula`] is parsed once into an arena of nodes. Children always precede
//! their parents, so the arena is a post-order traversal of the tree and can be
//! evaluated in a single forward pass. Nodes are shared by fragment text:
//! parsing `(P∧Q)∨(P∧Q)` yields one node for `P∧Q`, referenced twice.
//!
//! The sub-expressions of a formula, in the order they are evaluated, are the
//! arena nodes that are not bare variables, followed by the whole formula.

use std::collections::HashMap;
use std::ops::Range;

use log::{debug, warn};

use crate::assignment::Assignment;
use crate::ast::Expr;
use crate::error::{Error, Result};
use crate::parse::{single_var, split_binary, strip_negation, strip_parens, variables};
use crate::types::{Op, Var};

/// Index of a node in a [`Formula`] arena.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Idx(usize);

impl Idx {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node of a parsed formula, referring to its children by index.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Node {
    Var(Var),
    Not(Idx),
    Binary(Op, Idx, Idx),
    Opaque,
}

#[derive(Debug, Clone)]
struct Entry {
    /// Span of the fragment in the source, trimmed and without wrapping parentheses.
    label: Range<usize>,
    node: Node,
}

#[derive(Debug, Clone)]
pub struct Formula {
    /// Source text as given; every label is a span of it.
    source: String,
    /// Span of the trimmed source.
    text: Range<usize>,
    variables: Vec<Var>,
    /// Topologically sorted nodes (children first), by construction.
    nodes: Vec<Entry>,
    root: Idx,
    /// Sub-expression columns: display span and the node computing it.
    columns: Vec<(Range<usize>, Idx)>,
}

/// Pending work of [`Builder::build`].
enum Task<'a> {
    /// Parse a fragment and push its node onto the done stack.
    Visit(&'a str),
    /// Pop the operand and push its negation.
    Not(&'a str),
    /// Pop both operands and push the binary node.
    Binary(&'a str, Op),
}

/// Builds the arena with an explicit work stack, so that deeply nested or
/// long chained formulas do not exhaust the call stack.
struct Builder<'a> {
    source: &'a str,
    nodes: Vec<Entry>,
    seen: HashMap<&'a str, Idx>,
}

impl<'a> Builder<'a> {
    fn span(&self, fragment: &str) -> Range<usize> {
        let start = fragment.as_ptr() as usize - self.source.as_ptr() as usize;
        debug_assert!(start + fragment.len() <= self.source.len());
        start..start + fragment.len()
    }

    fn push(&mut self, label: &'a str, node: Node) -> Idx {
        let idx = Idx(self.nodes.len());
        self.nodes.push(Entry {
            label: self.span(label),
            node,
        });
        self.seen.insert(label, idx);
        idx
    }

    fn build(&mut self) -> Idx {
        let mut tasks = vec![Task::Visit(self.source)];
        let mut done: Vec<Idx> = Vec::new();

        while let Some(task) = tasks.pop() {
            match task {
                Task::Visit(text) => {
                    let text = strip_parens(text);
                    if let Some(&idx) = self.seen.get(text) {
                        done.push(idx);
                    } else if let Some(var) = single_var(text) {
                        done.push(self.push(text, Node::Var(var)));
                    } else if let Some((left, op, right)) = split_binary(text) {
                        tasks.push(Task::Binary(text, op));
                        tasks.push(Task::Visit(right));
                        tasks.push(Task::Visit(left));
                    } else if let Some(operand) = strip_negation(text) {
                        tasks.push(Task::Not(text));
                        tasks.push(Task::Visit(operand));
                    } else {
                        if !text.is_empty() {
                            warn!("no connective found in {:?}, treating it as false", text);
                        }
                        done.push(self.push(text, Node::Opaque));
                    }
                }
                Task::Not(label) => {
                    let a = done.pop().expect("operand is built before its negation");
                    done.push(self.push(label, Node::Not(a)));
                }
                Task::Binary(label, op) => {
                    let b = done.pop().expect("right operand is built before its parent");
                    let a = done.pop().expect("left operand is built before its parent");
                    done.push(self.push(label, Node::Binary(op, a, b)));
                }
            }
        }

        debug_assert_eq!(done.len(), 1);
        done.pop().expect("the root is built last")
    }
}

impl Formula {
    /// Parses `text` leniently.
    ///
    /// Fragments without a connective or variable become opaque nodes that
    /// evaluate to false. Use [`Formula::parse_strict`] to reject them instead.
    pub fn parse(text: &str) -> Self {
        debug!("parse({:?})", text);

        let mut builder = Builder {
            source: text,
            nodes: Vec::new(),
            seen: HashMap::new(),
        };
        let root = builder.build();
        let trimmed = builder.span(text.trim());
        let nodes = builder.nodes;

        // A wrapped formula such as `(P∧Q)` lists its inner text before the
        // full text; a bare variable is never a column of its own.
        let mut columns: Vec<(Range<usize>, Idx)> = nodes
            .iter()
            .enumerate()
            .filter(|&(i, e)| {
                !e.label.is_empty() && !matches!(e.node, Node::Var(_)) && !(i == root.0 && e.label == trimmed)
            })
            .map(|(i, e)| (e.label.clone(), Idx(i)))
            .collect();
        columns.push((trimmed.clone(), root));

        Formula {
            variables: variables(text),
            source: text.to_string(),
            text: trimmed,
            nodes,
            root,
            columns,
        }
    }

    /// Parses `text`, failing on the first fragment with no connective and no variable.
    pub fn parse_strict(text: &str) -> Result<Self> {
        let formula = Self::parse(text);
        let malformed = formula.malformed().next().map(str::to_string);
        match malformed {
            Some(fragment) => Err(Error::Malformed { fragment }),
            None => Ok(formula),
        }
    }

    /// The formula text, trimmed.
    pub fn text(&self) -> &str {
        &self.source[self.text.clone()]
    }

    /// Sorted variables of the formula.
    pub fn variables(&self) -> &[Var] {
        &self.variables
    }

    pub fn root(&self) -> Idx {
        self.root
    }

    pub fn node(&self, idx: Idx) -> Node {
        self.nodes[idx.0].node
    }

    pub fn label(&self, idx: Idx) -> &str {
        &self.source[self.nodes[idx.0].label.clone()]
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Sub-expressions in evaluation order, ending with the whole formula.
    pub fn sub_expressions(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|(span, _)| &self.source[span.clone()])
    }

    /// Nodes computing each sub-expression, aligned with [`Formula::sub_expressions`].
    pub fn columns(&self) -> impl Iterator<Item = Idx> + '_ {
        self.columns.iter().map(|(_, idx)| *idx)
    }

    /// Fragments that were tolerated as opaque, in arena order.
    pub fn malformed(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes
            .iter()
            .filter(|e| e.node == Node::Opaque)
            .map(|e| &self.source[e.label.clone()])
    }

    /// Evaluates every node under `assignment`, in arena order.
    ///
    /// Unassigned variables and opaque nodes are false.
    pub fn eval_nodes(&self, assignment: &Assignment) -> Vec<bool> {
        let mut values: Vec<bool> = Vec::with_capacity(self.nodes.len());
        for entry in self.nodes.iter() {
            let value = match entry.node {
                Node::Var(v) => assignment.get(v).unwrap_or_else(|| {
                    warn!("variable {} is not assigned, treating it as false", v);
                    false
                }),
                Node::Not(a) => !values[a.0],
                Node::Binary(op, a, b) => op.apply(values[a.0], values[b.0]),
                Node::Opaque => false,
            };
            values.push(value);
        }
        values
    }

    /// Evaluates the formula under `assignment`.
    pub fn eval(&self, assignment: &Assignment) -> bool {
        self.eval_nodes(assignment)[self.root.0]
    }

    /// Evaluates every sub-expression under `assignment`, aligned with [`Formula::sub_expressions`].
    pub fn eval_columns(&self, assignment: &Assignment) -> Vec<bool> {
        let values = self.eval_nodes(assignment);
        self.columns().map(|idx| values[idx.0]).collect()
    }

    /// Converts the arena into an owned tree.
    pub fn to_expr(&self) -> Expr {
        self.expr_at(self.root)
    }

    fn expr_at(&self, idx: Idx) -> Expr {
        match self.node(idx) {
            Node::Var(v) => Expr::Var(v),
            Node::Not(a) => Expr::not(self.expr_at(a)),
            Node::Binary(op, a, b) => Expr::binary(op, self.expr_at(a), self.expr_at(b)),
            Node::Opaque => Expr::Opaque(self.label(idx).to_string()),
        }
    }
}

/// Returns the distinct sub-expressions of `formula`, innermost first, the whole formula last.
pub fn decompose(formula: &str) -> Vec<String> {
    Formula::parse(formula).sub_expressions().map(str::to_string).collect()
}

/// Evaluates `formula` under `assignment`.
pub fn evaluate(formula: &str, assignment: &Assignment) -> bool {
    Formula::parse(formula).eval(assignment)
}
