//! Parser for the table input format.
//!
//! ```text
//! 3 4
//! 12           =C2     3   'Sample
//! =A1+B1*C1/5  =A2*B1  =B3-C3  'Spread
//! 'Test        =4-3    5   'Sheet
//! ```
//!
//! The first line holds the height then the width. Each following line is
//! one row of whitespace-delimited cell tokens; `null` marks an empty cell.

use crate::error::{MinigridError, Result};
use log::{debug, warn};
use minigrid_engine::engine::{CellRef, Table};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Parse a table file
pub fn parse_table(path: &Path) -> Result<Table> {
    let content = fs::read_to_string(path)?;
    parse_table_content(&content)
}

/// Read and parse a table from any reader (e.g. standard input)
pub fn read_table<R: Read>(mut reader: R) -> Result<Table> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_table_content(&content)
}

/// Parse table content from a string
pub fn parse_table_content(content: &str) -> Result<Table> {
    let mut lines = content.lines();

    let header = lines.next().unwrap_or("");
    let mut dims = header.split_whitespace();
    let height = parse_dimension(dims.next(), "height")?;
    let width = parse_dimension(dims.next(), "width")?;

    let mut table = Table::new(width, height)?;
    debug!("reading {}x{} table", height, width);

    for row in 0..height {
        let Some(line) = lines.next() else {
            return Err(MinigridError::MissingRows { row });
        };

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < width {
            return Err(MinigridError::MissingColumns {
                row,
                col: tokens.len(),
            });
        }
        if tokens.len() > width {
            warn!(
                "row {}: ignoring {} tokens past column {}",
                row + 1,
                tokens.len() - width,
                width
            );
        }

        for (col, token) in tokens.into_iter().take(width).enumerate() {
            table
                .set_cell(row, col, Some(token))
                .map_err(|err| MinigridError::Parse {
                    line: row + 2,
                    message: format!("{} in cell {}: {}", err, CellRef::new(row, col), token),
                })?;
        }
    }

    Ok(table)
}

fn parse_dimension(value: Option<&str>, name: &str) -> Result<usize> {
    let Some(value) = value else {
        return Err(MinigridError::Parse {
            line: 1,
            message: format!("Expected table height and width, missing {}", name),
        });
    };

    value.parse::<usize>().map_err(|_| MinigridError::Parse {
        line: 1,
        message: format!("Invalid table {}: {}", name, value),
    })
}
