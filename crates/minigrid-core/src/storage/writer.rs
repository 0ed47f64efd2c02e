//! Writer for computed tables.
//!
//! The default layout is a leading blank line, then one line per row with
//! every rendered cell followed by a tab (including the last one), lines
//! terminated by CRLF. Cells without a computed value render as `null`.

use crate::error::Result;
use minigrid_engine::engine::Table;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    CrLf,
    Lf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::CrLf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// Output layout options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Written after every cell, including the last one in a row.
    pub delimiter: String,
    pub line_ending: LineEnding,
    pub leading_blank_line: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            delimiter: "\t".to_string(),
            line_ending: LineEnding::CrLf,
            leading_blank_line: true,
        }
    }
}

/// Write a computed table to a file
pub fn write_table(path: &Path, table: &Table, options: &RenderOptions) -> Result<()> {
    let content = write_table_content(table, options);
    fs::write(path, content)?;
    Ok(())
}

/// Write a computed table to any writer (e.g. standard output)
pub fn write_table_to<W: Write>(
    out: &mut W,
    table: &Table,
    options: &RenderOptions,
) -> Result<()> {
    out.write_all(write_table_content(table, options).as_bytes())?;
    Ok(())
}

/// Render a computed table to a string
pub fn write_table_content(table: &Table, options: &RenderOptions) -> String {
    let eol = options.line_ending.as_str();
    let mut out = String::new();

    if options.leading_blank_line {
        out.push_str(eol);
    }

    for row in 0..table.height() {
        for col in 0..table.width() {
            out.push_str(&table.display(row, col));
            out.push_str(&options.delimiter);
        }
        out.push_str(eol);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::parse_table_content;
    use pretty_assertions::assert_eq;

    fn computed(content: &str) -> Table {
        let mut table = parse_table_content(content).unwrap();
        table.compute_cells();
        table
    }

    #[test]
    fn test_default_layout() {
        let table = computed("2 2\n1 2\n3 4\n");
        assert_eq!(
            write_table_content(&table, &RenderOptions::default()),
            "\r\n1\t2\t\r\n3\t4\t\r\n"
        );
    }

    #[test]
    fn test_missing_cells_render_null() {
        let table = computed("2 2\nnull 'aaa\n=4 null\n");
        assert_eq!(
            write_table_content(&table, &RenderOptions::default()),
            "\r\nnull\taaa\t\r\n4\tnull\t\r\n"
        );
    }

    #[test]
    fn test_uncomputed_table_renders_null() {
        let table = parse_table_content("1 2\n1 2\n").unwrap();
        assert_eq!(
            write_table_content(&table, &RenderOptions::default()),
            "\r\nnull\tnull\t\r\n"
        );
    }

    #[test]
    fn test_custom_options() {
        let table = computed("2 2\n1 =A1+1\n'x null\n");
        let options = RenderOptions {
            delimiter: ",".to_string(),
            line_ending: LineEnding::Lf,
            leading_blank_line: false,
        };
        assert_eq!(write_table_content(&table, &options), "1,2,\nx,null,\n");
    }

    #[test]
    fn test_empty_table() {
        let table = computed("0 3\n");
        assert_eq!(write_table_content(&table, &RenderOptions::default()), "\r\n");
    }

    #[test]
    fn test_write_table_to_writer() {
        let table = computed("1 1\n=6*7\n");
        let mut out = Vec::new();
        write_table_to(&mut out, &table, &RenderOptions::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\r\n42\t\r\n");
    }

    #[test]
    fn test_write_table_file() {
        let table = computed("1 2\n'a =2-5\n");
        let path = std::env::temp_dir().join("minigrid_writer_test.txt");
        write_table(&path, &table, &RenderOptions::default()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(content, "\r\na\t-3\t\r\n");
    }
}
