//! Whole-database persistence in the text or binary format.
//!
//! Both formats start with the same two text lines:
//!
//! ```text
//! MINIQLITE 1
//! TABLE_COUNT <n>
//! ```
//!
//! followed by `n` table records in the chosen encoding. Loading always
//! rebuilds tables through the ordinary insert path, so a loaded table uses
//! whatever layout is active at load time.

mod binary;
mod text;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use crate::config::{PersistenceFormat, StorageLayout};
use crate::error::{DbError, DbResult};
use crate::storage::catalog::Catalog;

pub const MAGIC: &str = "MINIQLITE 1";
const TABLE_COUNT_PREFIX: &str = "TABLE_COUNT ";

/// Serializes every table into an in-memory payload.
pub fn encode(catalog: &Catalog, format: PersistenceFormat) -> DbResult<Vec<u8>> {
    let mut out = format!("{MAGIC}\n{TABLE_COUNT_PREFIX}{}\n", catalog.len()).into_bytes();
    match format {
        PersistenceFormat::Text => text::encode_tables(catalog, &mut out)?,
        PersistenceFormat::Binary => binary::encode_tables(catalog, &mut out)?,
    }
    Ok(out)
}

/// Rebuilds a catalog from a payload. New tables are created in `layout`.
pub fn decode(bytes: &[u8], format: PersistenceFormat, layout: StorageLayout) -> DbResult<Catalog> {
    match format {
        PersistenceFormat::Text => text::decode(bytes, layout),
        PersistenceFormat::Binary => binary::decode(bytes, layout),
    }
}

/// Writes the whole catalog to `path`, truncating it.
///
/// The payload is encoded before the file is opened, so an encoding error
/// leaves any existing file untouched. A failure while writing leaves the
/// partial file on disk.
pub fn save_to_path(catalog: &Catalog, path: &Path, format: PersistenceFormat) -> DbResult<()> {
    let payload = encode(catalog, format)?;
    let mut file = File::create(path).map_err(|e| DbError::io(path, e))?;
    file.write_all(&payload).map_err(|e| DbError::io(path, e))?;
    file.flush().map_err(|e| DbError::io(path, e))?;
    info!(
        path = %path.display(),
        %format,
        tables = catalog.len(),
        bytes = payload.len(),
        "saved database"
    );
    Ok(())
}

/// Reads a whole catalog from `path`.
pub fn load_from_path(
    path: &Path,
    format: PersistenceFormat,
    layout: StorageLayout,
) -> DbResult<Catalog> {
    let bytes = std::fs::read(path).map_err(|e| DbError::io(path, e))?;
    match decode(&bytes, format, layout) {
        Ok(catalog) => {
            info!(
                path = %path.display(),
                %format,
                tables = catalog.len(),
                "loaded database"
            );
            Ok(catalog)
        }
        Err(e) => {
            warn!(path = %path.display(), %format, error = %e, "load failed");
            Err(e)
        }
    }
}

/// Parses the `TABLE_COUNT <n>` header line.
fn parse_table_count(line: &str) -> DbResult<usize> {
    line.strip_prefix(TABLE_COUNT_PREFIX)
        .and_then(|n| n.trim().parse::<usize>().ok())
        .ok_or_else(|| DbError::Format(format!("Expected 'TABLE_COUNT <n>' but got '{line}'")))
}

fn check_magic(line: &str) -> DbResult<()> {
    if line != MAGIC {
        return Err(DbError::Format(format!(
            "Expected header '{MAGIC}' but got '{line}'"
        )));
    }
    Ok(())
}
