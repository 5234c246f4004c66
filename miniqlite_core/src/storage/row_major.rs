use crate::config::StorageLayout;
use crate::error::DbResult;
use crate::storage::engine::{TableStorage, retain_unflagged};
use crate::types::Row;
use crate::types::value::Value;

/// Rows stored contiguously, addressed by row then column.
#[derive(Debug, Default)]
pub struct RowMajorStorage {
    rows: Vec<Row>,
}

impl RowMajorStorage {
    /// Creates a new empty row-major store
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }
}

impl TableStorage for RowMajorStorage {
    fn layout(&self) -> StorageLayout {
        StorageLayout::RowMajor
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row)?.get(col)
    }

    fn push_row(&mut self, row: Row) -> DbResult<()> {
        self.rows.try_reserve(1)?;
        self.rows.push(row);
        Ok(())
    }

    fn set_cell(&mut self, row: usize, col: usize, value: Value) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    fn remove_rows(&mut self, doomed: &[bool]) -> usize {
        let before = self.rows.len();
        retain_unflagged(&mut self.rows, doomed);
        before - self.rows.len()
    }

    fn row(&self, row: usize, _width: usize) -> Option<Row> {
        self.rows.get(row).cloned()
    }
}
