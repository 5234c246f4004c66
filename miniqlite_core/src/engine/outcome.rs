use std::fmt;

use crate::engine::format::format_select;
use crate::types::Row;

/// Rows produced by a select, with the projected column names.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// What a successfully executed command did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Created { table: String, columns: usize },
    Dropped { table: String },
    Inserted { table: String },
    Selected(ResultSet),
    Deleted { table: String, count: usize },
    Updated { table: String, count: usize },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created { table, columns } => {
                write!(f, "Table '{table}' created with {columns} columns.")
            }
            Outcome::Dropped { table } => write!(f, "Table '{table}' dropped."),
            Outcome::Inserted { table } => write!(f, "1 row inserted into '{table}'."),
            Outcome::Selected(rs) => f.write_str(&format_select(rs)),
            Outcome::Deleted { table, count } => {
                write!(f, "{count} row(s) deleted from '{table}'.")
            }
            Outcome::Updated { table, count } => {
                write!(f, "{count} row(s) updated in '{table}'.")
            }
        }
    }
}
