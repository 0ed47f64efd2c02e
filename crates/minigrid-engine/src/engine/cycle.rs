//! Circular reference tracking for expression cells.
//!
//! References between expression cells are only discovered while they are
//! being evaluated (A1 references B1, B1 references C1, C1 references A1).
//! The evaluator keeps the cells it is currently inside on an [`EvalStack`]
//! and refuses to re-enter one of them, which turns a would-be infinite
//! recursion into a circular reference error.

use std::collections::HashSet;

use super::CellRef;

/// Cells whose expressions are currently being evaluated, innermost last.
#[derive(Debug, Default)]
pub struct EvalStack {
    visiting: HashSet<CellRef>,
    path: Vec<CellRef>,
}

impl EvalStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, cell: &CellRef) -> bool {
        self.visiting.contains(cell)
    }

    /// Mark a cell as being evaluated.
    /// Returns false if it already was, i.e. the reference closes a cycle.
    pub fn enter(&mut self, cell: CellRef) -> bool {
        if !self.visiting.insert(cell) {
            return false;
        }
        self.path.push(cell);
        true
    }

    pub fn leave(&mut self, cell: &CellRef) {
        if self.visiting.remove(cell) {
            self.path.retain(|c| c != cell);
        }
    }

    /// The chain of cells from the outermost evaluation to the innermost.
    pub fn path(&self) -> &[CellRef] {
        &self.path
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
