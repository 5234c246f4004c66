use tracing::debug;

use crate::error::DbResult;
use crate::storage::Catalog;
use crate::types::value::parse_value;

use super::filter_project::EqFilter;

/// Appends one row. Values are literals, one per column, in column order.
pub fn insert_row<S: AsRef<str>>(catalog: &mut Catalog, table: &str, values: &[S]) -> DbResult<()> {
    let t = catalog.table_mut(table)?;
    t.insert_values(values)?;
    debug!(table, rows = t.row_count(), "inserted row");
    Ok(())
}

/// Removes every row whose `column` equals `value`. Returns the count.
pub fn delete_where_eq(
    catalog: &mut Catalog,
    table: &str,
    column: &str,
    value: &str,
) -> DbResult<usize> {
    let t = catalog.table_mut(table)?;
    let filter = EqFilter::resolve(t, column, value)?;

    let mut doomed: Vec<bool> = Vec::new();
    doomed.try_reserve_exact(t.row_count())?;
    doomed.resize(t.row_count(), false);
    for r in filter.matching_rows(t)? {
        doomed[r] = true;
    }
    let removed = t.storage_mut().remove_rows(&doomed);
    debug!(table, removed, "deleted rows");
    Ok(removed)
}

/// Sets `set_col` to `set_val` in every row whose `where_col` equals
/// `where_val`. Returns the count.
pub fn update_where_eq(
    catalog: &mut Catalog,
    table: &str,
    set_col: &str,
    set_val: &str,
    where_col: &str,
    where_val: &str,
) -> DbResult<usize> {
    let t = catalog.table_mut(table)?;
    let target = t.column_index(set_col)?;
    let filter = EqFilter::resolve(t, where_col, where_val)?;
    let new_value = parse_value(t.schema().columns[target].dtype, set_col, set_val)?;

    let mut updated = 0usize;
    for r in filter.matching_rows(t)? {
        if t.storage_mut().set_cell(r, target, new_value.clone()) {
            updated += 1;
        }
    }
    debug!(table, column = set_col, updated, "updated rows");
    Ok(updated)
}
