use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::datatype::DataType;

pub type DbResult<T> = Result<T, DbError>;

/// Every failure the core can report. Nothing in the core exits or panics on
/// bad input; callers render these and keep going.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("Unrecognized command: {0}")]
    UnrecognizedCommand(String),

    #[error("Table '{0}' already exists")]
    DuplicateTable(String),

    #[error("Table '{0}' does not exist")]
    UnknownTable(String),

    #[error("Unknown column '{column}' in table '{table}'")]
    UnknownColumn { table: String, column: String },

    #[error("Duplicate column '{column}' in table '{table}'")]
    DuplicateColumn { table: String, column: String },

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Expected {expected} values but got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("Expected {expected} for column '{column}' but got '{value}'")]
    TypeMismatch {
        column: String,
        expected: DataType,
        value: String,
    },

    #[error(
        "Value in column '{column}' of table '{table}' contains a tab or line break and cannot be saved in text format (use binary mode)"
    )]
    UnencodableText { table: String, column: String },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed database file: {0}")]
    Format(String),

    #[error("Out of memory: {0}")]
    ResourceExhausted(String),
}

impl DbError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DbError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<std::collections::TryReserveError> for DbError {
    fn from(e: std::collections::TryReserveError) -> Self {
        DbError::ResourceExhausted(e.to_string())
    }
}
