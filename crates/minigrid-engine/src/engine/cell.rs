//! Cell data structures for the table.
//!
//! - [`CellKind`] - What a cell holds (text, number, expression, or error)
//! - [`Cell`] - An addressed, immutable cell value
//!
//! A cell's kind is decided once, from the first character of its raw
//! token. Changing a value means building a new cell.

use std::fmt;

use super::{CellRef, TableError};

/// The type of content stored in a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellKind {
    Text(String),
    Number(i64),
    Expression(String),
    Error(String),
}

/// A cell in the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    address: CellRef,
    kind: CellKind,
}

impl Cell {
    /// Parse a raw input token into a cell.
    /// - `'text` -> Text (without the quote, may be empty)
    /// - `=expr` -> Expression (without the '=')
    /// - `#message` -> Error (without the '#')
    /// - digits -> Number
    ///
    /// Anything else is a [`TableError::Format`].
    pub fn parse(address: CellRef, token: &str) -> Result<Cell, TableError> {
        let kind = if let Some(text) = token.strip_prefix('\'') {
            CellKind::Text(text.to_string())
        } else if let Some(expression) = token.strip_prefix('=') {
            CellKind::Expression(expression.to_string())
        } else if let Some(message) = token.strip_prefix('#') {
            CellKind::Error(message.to_string())
        } else {
            let value = parse_number(token).ok_or_else(|| TableError::Format {
                token: token.to_string(),
            })?;
            CellKind::Number(value)
        };

        Ok(Cell { address, kind })
    }

    pub fn number(address: CellRef, value: i64) -> Cell {
        Cell {
            address,
            kind: CellKind::Number(value),
        }
    }

    pub fn error(address: CellRef, message: impl Into<String>) -> Cell {
        Cell {
            address,
            kind: CellKind::Error(message.into()),
        }
    }

    pub fn address(&self) -> CellRef {
        self.address
    }

    pub fn kind(&self) -> &CellKind {
        &self.kind
    }

    pub fn is_expression(&self) -> bool {
        matches!(self.kind, CellKind::Expression(_))
    }
}

/// Only plain ASCII digits are accepted; signs and whitespace are not.
fn parse_number(token: &str) -> Option<i64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<i64>().ok()
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CellKind::Text(text) => f.write_str(text),
            CellKind::Number(n) => write!(f, "{}", n),
            CellKind::Expression(expression) => f.write_str(expression),
            CellKind::Error(message) => write!(f, "#{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn a1() -> CellRef {
        CellRef::new(0, 0)
    }

    #[test]
    fn test_parse_number() {
        let cell = Cell::parse(a1(), "12").unwrap();
        assert_eq!(cell.kind(), &CellKind::Number(12));
        assert_eq!(cell.address(), a1());
    }

    #[test]
    fn test_parse_text() {
        let cell = Cell::parse(a1(), "'dummy").unwrap();
        assert_eq!(cell.kind(), &CellKind::Text("dummy".to_string()));
    }

    #[test]
    fn test_parse_empty_text() {
        let cell = Cell::parse(a1(), "'").unwrap();
        assert_eq!(cell.kind(), &CellKind::Text(String::new()));
        assert_eq!(cell.to_string(), "");
    }

    #[test]
    fn test_parse_expression() {
        let cell = Cell::parse(a1(), "=12+b2").unwrap();
        assert_eq!(cell.kind(), &CellKind::Expression("12+b2".to_string()));
        assert!(cell.is_expression());
    }

    #[test]
    fn test_parse_error() {
        let cell = Cell::parse(a1(), "#this is error").unwrap();
        assert_eq!(cell.kind(), &CellKind::Error("this is error".to_string()));
        assert_eq!(cell.to_string(), "#this is error");
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = Cell::parse(a1(), "!12").unwrap_err();
        assert_eq!(err.to_string(), "Unknown data format");
        assert_eq!(
            err,
            TableError::Format {
                token: "!12".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_signed_and_oversized_numbers() {
        assert!(Cell::parse(a1(), "-5").is_err());
        assert!(Cell::parse(a1(), "+5").is_err());
        assert!(Cell::parse(a1(), "99999999999999999999").is_err());
    }

    #[test]
    fn test_expression_renders_source_text() {
        let cell = Cell::parse(a1(), "=A2 + 3").unwrap();
        assert_eq!(cell.to_string(), "A2 + 3");
    }

    #[test]
    fn test_computed_cells_can_be_negative() {
        assert_eq!(Cell::number(a1(), -16).to_string(), "-16");
    }

    proptest! {
        #[test]
        fn number_renders_as_decimal(n in 0i64..=i64::MAX) {
            let cell = Cell::parse(a1(), &n.to_string()).unwrap();
            prop_assert_eq!(cell.to_string(), n.to_string());
        }

        #[test]
        fn text_renders_payload_unchanged(text in "\\PC*") {
            let cell = Cell::parse(a1(), &format!("'{}", text)).unwrap();
            prop_assert_eq!(cell.to_string(), text);
        }
    }
}
