//! Engine operations over a `Catalog`.
//!
//! Each operation resolves and validates everything it needs before touching
//! storage, so a failed call leaves the table exactly as it was.

mod ddl;
mod dispatch;
mod dml;
mod filter_project;
mod select;

pub use ddl::{create_table, drop_table};
pub use dispatch::execute_command;
pub use dml::{delete_where_eq, insert_row, update_where_eq};
pub use select::{select_all, select_columns, select_where_eq};
