use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DbError, DbResult};

/// Physical layout used for tables created while this is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageLayout {
    #[default]
    RowMajor,
    ColumnMajor,
}

/// On-disk encoding used by save and load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistenceFormat {
    #[default]
    Text,
    Binary,
}

impl fmt::Display for StorageLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageLayout::RowMajor => write!(f, "row-major"),
            StorageLayout::ColumnMajor => write!(f, "column-major"),
        }
    }
}

impl fmt::Display for PersistenceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceFormat::Text => write!(f, "text"),
            PersistenceFormat::Binary => write!(f, "binary"),
        }
    }
}

/// Mode flags held by a `Database`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub layout: StorageLayout,
    #[serde(default)]
    pub format: PersistenceFormat,
}

impl DatabaseConfig {
    pub fn new(layout: StorageLayout, format: PersistenceFormat) -> Self {
        Self { layout, format }
    }

    pub fn from_json_str(content: &str) -> DbResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| DbError::Format(format!("Malformed config JSON: {e}")))
    }

    /// Reads a JSON config file. A missing or blank file yields the defaults.
    pub fn load_from_path(path: &Path) -> DbResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| DbError::io(path, e))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_json_str(&content)
    }

    pub fn to_json_string(&self) -> DbResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DbError::Format(format!("Failed to serialize config as JSON: {e}")))
    }
}
