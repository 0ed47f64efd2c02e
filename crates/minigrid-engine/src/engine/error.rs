//! Error types for the table engine.
//!
//! [`TableError`] covers failures while building a table (bad dimensions,
//! out-of-range placement, unparseable tokens). [`EvalError`] covers
//! failures while evaluating a single expression cell; its message is what
//! ends up rendered after the `#` of an error cell.

use thiserror::Error;

use super::CellRef;

/// Errors raised while constructing a table or placing cells in it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Unknown data format")]
    Format { token: String },

    #[error("Table can't contain more than {max} rows")]
    TooManyRows { max: usize },

    #[error("Table can't contain more than {max} columns")]
    TooManyColumns { max: usize },

    #[error("Table must have at least one column")]
    NoColumns,

    #[error("Table bounds violation")]
    OutOfBounds { row: usize, col: usize },
}

/// Errors raised while evaluating an expression cell.
///
/// None of these abort a compute pass: each one is stored as an error cell
/// at the address that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Unfinished expression")]
    UnfinishedExpression,

    #[error("Not enough operands")]
    NotEnoughOperands,

    #[error("Unknown token in expression: {0}")]
    UnknownToken(String),

    #[error("Number is out of range: {0}")]
    NumberOutOfRange(String),

    #[error("Cell {0} is not defined")]
    UndefinedCell(String),

    #[error("Can't use text in expression! Cell {0}")]
    TextInExpression(CellRef),

    #[error("Expression error in cell {0}")]
    Propagated(CellRef),

    #[error("Circular reference in cell {0}")]
    CircularReference(CellRef),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow")]
    Overflow,
}
