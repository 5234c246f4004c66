use std::fmt::Debug;

use crate::config::StorageLayout;
use crate::error::DbResult;
use crate::types::Row;
use crate::types::value::Value;

/// Physical row storage for one table. Query code is written once against
/// this trait; the layouts differ only in where a cell lives.
pub trait TableStorage: Debug {
    /// Which layout backs this table
    fn layout(&self) -> StorageLayout;

    /// Number of stored rows
    fn row_count(&self) -> usize;

    /// Cell at (row, column), or `None` when out of range
    fn cell(&self, row: usize, col: usize) -> Option<&Value>;

    /// Appends a row. The caller guarantees its arity.
    fn push_row(&mut self, row: Row) -> DbResult<()>;

    /// Overwrites one cell, returning false when out of range
    fn set_cell(&mut self, row: usize, col: usize, value: Value) -> bool;

    /// Removes every row whose flag in `doomed` is set, keeping survivors in
    /// order. Returns the number removed.
    fn remove_rows(&mut self, doomed: &[bool]) -> usize;

    /// Materializes one row in column order.
    fn row(&self, row: usize, width: usize) -> Option<Row> {
        (0..width).map(|c| self.cell(row, c).cloned()).collect()
    }
}

pub(crate) fn retain_unflagged<T>(items: &mut Vec<T>, doomed: &[bool]) {
    let mut flags = doomed.iter().copied();
    items.retain(|_| !flags.next().unwrap_or(false));
}
