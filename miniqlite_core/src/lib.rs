//! miniqlite: an embedded table store driven by a small SQL subset.
//!
//! A [`Database`] owns the table registry and its mode flags. Commands go
//! through [`Database::execute`], or the typed operations can be called
//! directly. The whole database is saved and loaded with
//! [`Database::save`] and [`Database::load`].

use std::path::Path;

pub mod config;
pub mod error;
pub mod types;
pub mod parser;
pub mod storage;
pub mod engine;

pub use config::{DatabaseConfig, PersistenceFormat, StorageLayout};
pub use engine::{Outcome, ResultSet};
pub use error::{DbError, DbResult};

use engine::execute;
use parser::command::{ColumnDef, Projection};
use storage::{Catalog, Table, codec};

#[derive(Debug, Default)]
pub struct Database {
    catalog: Catalog,
    config: DatabaseConfig,
}

impl Database {
    /// Empty database with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DatabaseConfig) -> Self {
        Self {
            catalog: Catalog::new(),
            config,
        }
    }

    /// Opens the database stored at `path` in `config.format`, or starts empty
    /// when no file exists there.
    pub fn open(path: impl AsRef<Path>, config: DatabaseConfig) -> DbResult<Self> {
        let path = path.as_ref();
        let mut db = Self::with_config(config);
        if path.exists() {
            db.load(path)?;
        }
        Ok(db)
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut DatabaseConfig {
        &mut self.config
    }

    /// Layout for tables created or loaded from now on. Existing tables keep
    /// theirs.
    pub fn set_layout(&mut self, layout: StorageLayout) {
        self.config.layout = layout;
    }

    pub fn set_format(&mut self, format: PersistenceFormat) {
        self.config.format = format;
    }

    /// Parses and runs one command line.
    pub fn execute(&mut self, input: &str) -> DbResult<Outcome> {
        let cmd = parser::parser::parse(input)?;
        execute::execute_command(cmd, &mut self.catalog, &self.config)
    }

    pub fn create_table(&mut self, table: &str, columns: Vec<ColumnDef>) -> DbResult<usize> {
        execute::create_table(&mut self.catalog, table, columns, self.config.layout)
    }

    pub fn drop_table(&mut self, table: &str) -> DbResult<()> {
        execute::drop_table(&mut self.catalog, table)
    }

    pub fn insert_row<S: AsRef<str>>(&mut self, table: &str, values: &[S]) -> DbResult<()> {
        execute::insert_row(&mut self.catalog, table, values)
    }

    pub fn select_all(&self, table: &str) -> DbResult<ResultSet> {
        execute::select_all(&self.catalog, table)
    }

    pub fn select_columns<S: AsRef<str>>(&self, table: &str, columns: &[S]) -> DbResult<ResultSet> {
        execute::select_columns(&self.catalog, table, columns)
    }

    pub fn select_where_eq(
        &self,
        table: &str,
        projection: &Projection,
        column: &str,
        value: &str,
    ) -> DbResult<ResultSet> {
        execute::select_where_eq(&self.catalog, table, projection, column, value)
    }

    pub fn delete_where_eq(&mut self, table: &str, column: &str, value: &str) -> DbResult<usize> {
        execute::delete_where_eq(&mut self.catalog, table, column, value)
    }

    pub fn update_where_eq(
        &mut self,
        table: &str,
        set_col: &str,
        set_val: &str,
        where_col: &str,
        where_val: &str,
    ) -> DbResult<usize> {
        execute::update_where_eq(&mut self.catalog, table, set_col, set_val, where_col, where_val)
    }

    /// Writes every table to `path` in the configured format.
    pub fn save(&self, path: impl AsRef<Path>) -> DbResult<()> {
        codec::save_to_path(&self.catalog, path.as_ref(), self.config.format)
    }

    /// Replaces every table with the contents of `path`, read in the
    /// configured format. On failure the database is left empty.
    pub fn load(&mut self, path: impl AsRef<Path>) -> DbResult<()> {
        self.catalog.clear();
        self.catalog = codec::load_from_path(path.as_ref(), self.config.format, self.config.layout)?;
        Ok(())
    }

    /// Tables in creation order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.catalog.tables()
    }

    pub fn table(&self, name: &str) -> DbResult<&Table> {
        self.catalog.table(name)
    }
}
