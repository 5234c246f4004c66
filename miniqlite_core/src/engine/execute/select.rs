use crate::engine::outcome::ResultSet;
use crate::error::DbResult;
use crate::parser::command::Projection;
use crate::storage::Catalog;
use crate::storage::catalog::Table;

use super::filter_project::{EqFilter, project_row, resolve_projection};

/// Every column of every row, in insertion order.
pub fn select_all(catalog: &Catalog, table: &str) -> DbResult<ResultSet> {
    let t = catalog.table(table)?;
    let positions: Vec<usize> = (0..t.schema().column_count()).collect();
    Ok(collect_rows(t, &positions, 0..t.row_count()))
}

pub fn select_columns<S: AsRef<str>>(
    catalog: &Catalog,
    table: &str,
    columns: &[S],
) -> DbResult<ResultSet> {
    let t = catalog.table(table)?;
    let positions = resolve_projection(t, columns)?;
    Ok(collect_rows(t, &positions, 0..t.row_count()))
}

/// Rows whose `column` equals `value` after conversion to the column type.
/// The filter column is resolved before the projection.
pub fn select_where_eq(
    catalog: &Catalog,
    table: &str,
    projection: &Projection,
    column: &str,
    value: &str,
) -> DbResult<ResultSet> {
    let t = catalog.table(table)?;
    let filter = EqFilter::resolve(t, column, value)?;
    let positions = match projection {
        Projection::All => (0..t.schema().column_count()).collect(),
        Projection::Columns(cols) => resolve_projection(t, cols)?,
    };
    Ok(collect_rows(t, &positions, filter.matching_rows(t)?))
}

fn collect_rows(
    table: &Table,
    positions: &[usize],
    rows: impl IntoIterator<Item = usize>,
) -> ResultSet {
    let columns = positions
        .iter()
        .map(|&c| table.schema().columns[c].name.clone())
        .collect();
    let rows = rows
        .into_iter()
        .filter_map(|r| project_row(table, r, positions))
        .collect();
    ResultSet { columns, rows }
}
