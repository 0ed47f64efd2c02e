//! Storage module: table text reader and tab-delimited writer

mod parser;
mod writer;

pub use parser::{parse_table, parse_table_content, read_table};
pub use writer::{LineEnding, RenderOptions, write_table, write_table_content, write_table_to};
