use crate::config::StorageLayout;
use crate::error::DbResult;
use crate::storage::engine::{TableStorage, retain_unflagged};
use crate::types::Row;
use crate::types::value::Value;

/// One vector per column, addressed by column then row.
#[derive(Debug)]
pub struct ColumnMajorStorage {
    columns: Vec<Vec<Value>>,
    len: usize,
}

impl ColumnMajorStorage {
    pub fn new(width: usize) -> Self {
        Self {
            columns: (0..width).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    pub fn column(&self, col: usize) -> Option<&[Value]> {
        self.columns.get(col).map(Vec::as_slice)
    }
}

impl TableStorage for ColumnMajorStorage {
    fn layout(&self) -> StorageLayout {
        StorageLayout::ColumnMajor
    }

    fn row_count(&self) -> usize {
        self.len
    }

    fn cell(&self, row: usize, col: usize) -> Option<&Value> {
        self.columns.get(col)?.get(row)
    }

    fn push_row(&mut self, row: Row) -> DbResult<()> {
        // Columns stay equal length: reserve in all of them before pushing.
        for column in &mut self.columns {
            column.try_reserve(1)?;
        }
        for (column, value) in self.columns.iter_mut().zip(row) {
            column.push(value);
        }
        self.len += 1;
        Ok(())
    }

    fn set_cell(&mut self, row: usize, col: usize, value: Value) -> bool {
        match self.columns.get_mut(col).and_then(|c| c.get_mut(row)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    fn remove_rows(&mut self, doomed: &[bool]) -> usize {
        for column in &mut self.columns {
            retain_unflagged(column, doomed);
        }
        let removed = doomed.iter().take(self.len).filter(|d| **d).count();
        self.len -= removed;
        removed
    }
}
