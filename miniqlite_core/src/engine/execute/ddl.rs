use tracing::debug;

use crate::config::StorageLayout;
use crate::error::DbResult;
use crate::parser::command::ColumnDef;
use crate::storage::Catalog;

/// Registers an empty table in `layout`. Returns its column count.
pub fn create_table(
    catalog: &mut Catalog,
    table: &str,
    columns: Vec<ColumnDef>,
    layout: StorageLayout,
) -> DbResult<usize> {
    let count = catalog.create_table(table, columns, layout)?;
    debug!(table, columns = count, %layout, "created table");
    Ok(count)
}

pub fn drop_table(catalog: &mut Catalog, table: &str) -> DbResult<()> {
    catalog.drop_table(table)?;
    debug!(table, "dropped table");
    Ok(())
}
