use crate::error::DbResult;
use crate::storage::catalog::Table;
use crate::types::Row;
use crate::types::value::{Value, parse_value};

/// Equality filter with the literal already converted to the column type.
/// `needle` is `None` when the literal does not convert, which matches no row.
pub(super) struct EqFilter {
    col: usize,
    needle: Option<Value>,
}

impl EqFilter {
    pub(super) fn resolve(table: &Table, column: &str, literal: &str) -> DbResult<Self> {
        let col = table.column_index(column)?;
        let dtype = table.schema().columns[col].dtype;
        let needle = parse_value(dtype, column, literal).ok();
        Ok(Self { col, needle })
    }

    pub(super) fn matches(&self, table: &Table, row: usize) -> bool {
        match (&self.needle, table.storage().cell(row, self.col)) {
            (Some(needle), Some(cell)) => cell_matches(cell, needle),
            _ => false,
        }
    }

    /// Positions of every matching row, in insertion order.
    pub(super) fn matching_rows(&self, table: &Table) -> DbResult<Vec<usize>> {
        let mut hits: Vec<usize> = Vec::new();
        if self.needle.is_none() {
            return Ok(hits);
        }
        for r in 0..table.row_count() {
            if self.matches(table, r) {
                hits.try_reserve(1)?;
                hits.push(r);
            }
        }
        Ok(hits)
    }
}

fn cell_matches(cell: &Value, needle: &Value) -> bool {
    match (cell, needle) {
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a == b,
        (Value::Text(a), Value::Text(b)) => a == b,
        _ => false,
    }
}

/// Resolves every requested name to a column position, failing on the first
/// unknown one.
pub(super) fn resolve_projection<S: AsRef<str>>(table: &Table, columns: &[S]) -> DbResult<Vec<usize>> {
    columns
        .iter()
        .map(|c| table.column_index(c.as_ref()))
        .collect()
}

pub(super) fn project_row(table: &Table, row: usize, positions: &[usize]) -> Option<Row> {
    positions
        .iter()
        .map(|&c| table.storage().cell(row, c).cloned())
        .collect()
}
