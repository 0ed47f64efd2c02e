use minigrid_engine::engine::{ComputeStats, Table};
use std::path::PathBuf;

/// A loaded table together with where it came from and its last compute pass.
#[derive(Debug)]
pub struct Document {
    /// The table (raw cells plus computed view)
    pub table: Table,
    /// Source file, if the table was read from disk
    pub file_path: Option<PathBuf>,
    /// Counters from the most recent compute pass
    pub stats: Option<ComputeStats>,
}

impl Document {
    pub fn new(table: Table) -> Self {
        Document {
            table,
            file_path: None,
            stats: None,
        }
    }

    /// Resolve all cells. Cell-level failures end up as error cells; this
    /// never fails as a whole.
    pub fn compute(&mut self) -> ComputeStats {
        let stats = self.table.compute_cells();
        self.stats = Some(stats);
        stats
    }

    pub fn is_computed(&self) -> bool {
        self.stats.is_some()
    }
}
