//! The table: raw cells as loaded plus the computed view.
//!
//! Both maps are keyed by [`CellRef`] and ordered row-major. The raw map is
//! the source of truth; the computed map starts empty, is filled by
//! [`Table::compute_cells`], and also serves as the memo for expression
//! results during that pass.

use std::collections::BTreeMap;

use log::{debug, trace};

use super::eval::Evaluator;
use super::token::normalize;
use super::{Cell, CellKind, CellRef, EvalError, TableError};

/// Sparse, ordered cell storage.
pub type Grid = BTreeMap<CellRef, Cell>;

/// Exclusive upper bound on the number of rows.
pub const ROW_LIMIT: usize = 26;
/// Exclusive upper bound on the number of columns.
pub const COLUMN_LIMIT: usize = 9;

/// Rendered in place of a cell that has no computed value.
pub const EMPTY_CELL: &str = "null";

/// Counters from one [`Table::compute_cells`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComputeStats {
    /// Non-expression cells copied into the computed view.
    pub copied: usize,
    /// Expression cells in the raw map.
    pub expressions: usize,
    /// Expression evaluations performed (each cell at most once per pass).
    pub evaluations: usize,
    /// Expression cells that ended up as error cells.
    pub errors: usize,
}

#[derive(Clone, Debug)]
pub struct Table {
    width: usize,
    height: usize,
    raw: Grid,
    computed: Grid,
}

impl Table {
    pub fn new(width: usize, height: usize) -> Result<Table, TableError> {
        if height >= ROW_LIMIT {
            return Err(TableError::TooManyRows { max: ROW_LIMIT - 1 });
        }
        if width >= COLUMN_LIMIT {
            return Err(TableError::TooManyColumns {
                max: COLUMN_LIMIT - 1,
            });
        }
        if width == 0 {
            return Err(TableError::NoColumns);
        }

        Ok(Table {
            width,
            height,
            raw: Grid::new(),
            computed: Grid::new(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Address of `(row, col)`, checked against the table bounds.
    pub fn cell_ref(&self, row: usize, col: usize) -> Result<CellRef, TableError> {
        if row >= self.height || col >= self.width {
            return Err(TableError::OutOfBounds { row, col });
        }
        Ok(CellRef::new(row, col))
    }

    /// Parse `token` into the raw cell at `(row, col)`.
    ///
    /// A missing token, an empty one, or the literal `null` leaves the cell
    /// unset.
    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        token: Option<&str>,
    ) -> Result<(), TableError> {
        let cell_ref = self.cell_ref(row, col)?;

        let Some(token) = token.filter(|t| !t.is_empty() && *t != EMPTY_CELL) else {
            return Ok(());
        };

        let cell = Cell::parse(cell_ref, token)?;
        self.raw.insert(cell_ref, cell);
        Ok(())
    }

    pub fn raw_cell(&self, cell_ref: &CellRef) -> Option<&Cell> {
        self.raw.get(cell_ref)
    }

    pub fn computed_cell(&self, cell_ref: &CellRef) -> Option<&Cell> {
        self.computed.get(cell_ref)
    }

    pub fn raw_cells(&self) -> impl Iterator<Item = &Cell> {
        self.raw.values()
    }

    pub fn computed(&self) -> &Grid {
        &self.computed
    }

    /// Resolve every cell into the computed view.
    ///
    /// Non-expression cells are copied as-is, then each expression cell not
    /// already computed (as a dependency of an earlier one) is evaluated.
    /// Evaluation failures are stored as error cells and never returned.
    pub fn compute_cells(&mut self) -> ComputeStats {
        self.computed.clear();
        let mut stats = ComputeStats::default();

        for (cell_ref, cell) in &self.raw {
            if !cell.is_expression() {
                self.computed.insert(*cell_ref, cell.clone());
                stats.copied += 1;
            }
        }

        let mut evaluator = Evaluator::new(&self.raw, &mut self.computed);
        for cell in self.raw.values() {
            let CellKind::Expression(source) = cell.kind() else {
                continue;
            };
            stats.expressions += 1;

            let address = cell.address();
            if evaluator.is_computed(&address) {
                trace!("{} already computed as a dependency", address);
                continue;
            }
            // The error cell is already stored; nothing else to do with it.
            let _ = evaluator.evaluate_and_store(address, &normalize(source));
        }
        stats.evaluations = evaluator.evaluations;
        stats.errors = evaluator.failures;

        debug!(
            "computed {}x{} table: {} copied, {} expressions, {} errors",
            self.height, self.width, stats.copied, stats.expressions, stats.errors
        );
        stats
    }

    /// Evaluate one normalized expression as the value of `address` and
    /// store the outcome in the computed view.
    pub fn evaluate_and_store(
        &mut self,
        address: CellRef,
        expression: &str,
    ) -> Result<i64, EvalError> {
        Evaluator::new(&self.raw, &mut self.computed).evaluate_and_store(address, expression)
    }

    /// Rendered computed value at `(row, col)`, or `null`.
    pub fn display(&self, row: usize, col: usize) -> String {
        self.computed
            .get(&CellRef::new(row, col))
            .map(|cell| cell.to_string())
            .unwrap_or_else(|| EMPTY_CELL.to_string())
    }
}
