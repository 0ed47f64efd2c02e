//! minigrid-core - document model + storage.

pub mod document;
pub mod error;
pub mod storage;

pub use document::Document;
pub use error::{MinigridError, Result};
pub use storage::{LineEnding, RenderOptions};

pub use minigrid_engine::engine::{CellRef, ComputeStats, Table};
