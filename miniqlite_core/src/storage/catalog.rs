use std::collections::HashSet;

use crate::config::StorageLayout;
use crate::error::{DbError, DbResult};
use crate::parser::command::ColumnDef;
use crate::storage::column_major::ColumnMajorStorage;
use crate::storage::engine::TableStorage;
use crate::storage::row_major::RowMajorStorage;
use crate::storage::schema::{Column, Schema};
use crate::types::Row;
use crate::types::value::parse_value;

/// Longest table or column name, in bytes. The binary format stores names in
/// 64-byte NUL-terminated blocks.
pub const MAX_NAME_LEN: usize = 63;

/// A table: its schema plus the storage chosen when it was created.
#[derive(Debug)]
pub struct Table {
    name: String,
    schema: Schema,
    storage: Box<dyn TableStorage>,
}

impl Table {
    fn new(name: String, schema: Schema, layout: StorageLayout) -> Self {
        let storage: Box<dyn TableStorage> = match layout {
            StorageLayout::RowMajor => Box::new(RowMajorStorage::new()),
            StorageLayout::ColumnMajor => Box::new(ColumnMajorStorage::new(schema.column_count())),
        };
        Self {
            name,
            schema,
            storage,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn layout(&self) -> StorageLayout {
        self.storage.layout()
    }

    pub fn row_count(&self) -> usize {
        self.storage.row_count()
    }

    pub fn storage(&self) -> &dyn TableStorage {
        self.storage.as_ref()
    }

    pub fn storage_mut(&mut self) -> &mut dyn TableStorage {
        self.storage.as_mut()
    }

    /// Validates one literal per column against the declared types and
    /// appends the resulting row. Nothing is stored on failure.
    pub fn insert_values<S: AsRef<str>>(&mut self, values: &[S]) -> DbResult<()> {
        if values.len() != self.schema.column_count() {
            return Err(DbError::ArityMismatch {
                expected: self.schema.column_count(),
                got: values.len(),
            });
        }
        let mut row: Row = Vec::new();
        row.try_reserve_exact(values.len())?;
        for (col, token) in self.schema.columns.iter().zip(values) {
            row.push(parse_value(col.dtype, &col.name, token.as_ref())?);
        }
        self.storage.push_row(row)
    }

    /// Resolves a column name to its position.
    pub fn column_index(&self, column: &str) -> DbResult<usize> {
        self.schema
            .column_index(column)
            .ok_or_else(|| DbError::UnknownColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }
}

/// Registry of tables, kept in creation order.
#[derive(Debug, Default)]
pub struct Catalog {
    tables: Vec<Table>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Checks if a table exists in the catalog
    pub fn exists(&self, table: &str) -> bool {
        self.tables.iter().any(|t| t.name == table)
    }

    /// Creates an empty table stored in `layout`.
    /// Returns an error if the table already exists
    pub fn create_table(
        &mut self,
        table: &str,
        cols: Vec<ColumnDef>,
        layout: StorageLayout,
    ) -> DbResult<usize> {
        if self.exists(table) {
            return Err(DbError::DuplicateTable(table.to_string()));
        }
        validate_name(table)?;
        if cols.is_empty() {
            return Err(DbError::Syntax(format!(
                "Table '{table}' needs at least one column"
            )));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for c in &cols {
            validate_name(&c.name)?;
            if !seen.insert(c.name.as_str()) {
                return Err(DbError::DuplicateColumn {
                    table: table.to_string(),
                    column: c.name.clone(),
                });
            }
        }

        let columns: Vec<Column> = cols
            .into_iter()
            .map(|c| Column {
                name: c.name,
                dtype: c.dtype,
            })
            .collect();
        let count = columns.len();

        self.tables.try_reserve(1)?;
        self.tables
            .push(Table::new(table.to_string(), Schema::new(columns), layout));
        Ok(count)
    }

    /// Removes a table and all of its rows.
    pub fn drop_table(&mut self, table: &str) -> DbResult<()> {
        let pos = self
            .tables
            .iter()
            .position(|t| t.name == table)
            .ok_or_else(|| DbError::UnknownTable(table.to_string()))?;
        self.tables.remove(pos);
        Ok(())
    }

    /// Retrieves a table by name
    /// Returns an error if the table does not exist
    pub fn table(&self, table: &str) -> DbResult<&Table> {
        self.tables
            .iter()
            .find(|t| t.name == table)
            .ok_or_else(|| DbError::UnknownTable(table.to_string()))
    }

    pub fn table_mut(&mut self, table: &str) -> DbResult<&mut Table> {
        self.tables
            .iter_mut()
            .find(|t| t.name == table)
            .ok_or_else(|| DbError::UnknownTable(table.to_string()))
    }

    /// Tables in creation order
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Drops every table.
    pub fn clear(&mut self) {
        self.tables.clear();
    }
}

/// Names must survive both persistence formats: non-empty, no whitespace or
/// NUL, and short enough for the binary name block.
pub fn validate_name(name: &str) -> DbResult<()> {
    let invalid = |reason| DbError::InvalidName {
        name: name.to_string(),
        reason,
    };
    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(invalid("name is longer than 63 bytes"));
    }
    if name.chars().any(|c| c.is_whitespace() || c == '\0') {
        return Err(invalid("name contains whitespace or NUL"));
    }
    Ok(())
}
