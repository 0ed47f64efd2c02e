use super::Document;
use crate::error::Result;
use crate::storage::{
    RenderOptions, parse_table, parse_table_content, read_table, write_table, write_table_content,
    write_table_to,
};
use log::debug;
use std::io::{Read, Write};
use std::path::Path;

impl Document {
    /// Load a table from a file
    pub fn load_file(path: &Path) -> Result<Self> {
        let table = parse_table(path)?;
        debug!("loaded {}", path.display());
        let mut document = Document::new(table);
        document.file_path = Some(path.to_path_buf());
        Ok(document)
    }

    /// Load a table from any reader (e.g. standard input)
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Document::new(read_table(reader)?))
    }

    /// Load a table from in-memory text
    pub fn from_content(content: &str) -> Result<Self> {
        Ok(Document::new(parse_table_content(content)?))
    }

    /// Render the computed table
    pub fn render(&self, options: &RenderOptions) -> String {
        write_table_content(&self.table, options)
    }

    /// Write the computed table to any writer
    pub fn write_to<W: Write>(&self, out: &mut W, options: &RenderOptions) -> Result<()> {
        write_table_to(out, &self.table, options)
    }

    /// Write the computed table to a file
    pub fn save_file(&self, path: &Path, options: &RenderOptions) -> Result<()> {
        write_table(path, &self.table, options)?;
        debug!("saved {}", path.display());
        Ok(())
    }
}
