//! Table engine API.
//!
//! - [`Cell`], [`CellKind`] - Cell values parsed from raw tokens
//! - [`CellRef`] - Cell addressing (A1 notation <-> row/col indices)
//! - [`Table`], [`Grid`] - Raw and computed cell storage with bounds checks
//! - [`Token`], [`Operator`], [`tokenize`], [`normalize`] - Expression lexing
//! - [`EvalStack`] - Circular reference tracking during evaluation
//! - [`TableError`], [`EvalError`] - Load-time and cell-level failures

mod cell;
mod cell_ref;
mod cycle;
mod error;
mod eval;
mod table;
mod token;

pub use cell::{Cell, CellKind};
pub use cell_ref::CellRef;
pub use cycle::EvalStack;
pub use error::{EvalError, TableError};
pub use table::{COLUMN_LIMIT, ComputeStats, EMPTY_CELL, Grid, ROW_LIMIT, Table};
pub use token::{Operator, Token, normalize, tokenize};
