//! Error types for Minigrid core.

use thiserror::Error;

use minigrid_engine::engine::TableError;

/// Errors that can occur while loading or saving a table.
#[derive(Error, Debug)]
pub enum MinigridError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Not enough rows in table: {row}")]
    MissingRows { row: usize },

    #[error("Not enough columns in table: {row},{col}")]
    MissingColumns { row: usize, col: usize },
}

pub type Result<T> = std::result::Result<T, MinigridError>;
