//! Dot-prefixed REPL commands that act on the session rather than on tables.

use std::path::{Path, PathBuf};

use miniqlite_core::{Database, PersistenceFormat, StorageLayout};
use tracing::debug;

pub const HELP: &str = "\
Statements:
  CREATE TABLE <t> (<col> <type>, ...)    types: INT, FLOAT, TEXT
  INSERT INTO <t> VALUES (<v>, ...)
  SELECT <cols|*> FROM <t> [WHERE <col> = <v>]
  UPDATE <t> SET <col> = <v> WHERE <col> = <v>
  DELETE FROM <t> WHERE <col> = <v>
  DROP TABLE <t>
Meta-commands:
  .tables                  list tables
  .save [file]             save the database
  .load [file]             replace the database with a saved one
  .columnstore [on|off]    layout for new tables
  .binary [on|off]         file format for .save and .load
  .help                    this text
  .exit | .quit            save and quit";

/// What the REPL should do after a meta-command.
#[derive(Debug, PartialEq)]
pub enum MetaAction {
    /// Print the message and keep reading.
    Print(String),
    /// A `.load` failed and left the database empty. Print and keep reading.
    LoadFailed(String),
    Exit,
}

/// Runs one meta-command line. `db_path` is the session's database file,
/// used when `.save` or `.load` is given no file name.
pub fn handle_meta(line: &str, db: &mut Database, db_path: &Path) -> MetaAction {
    let mut words = line.split_whitespace();
    let name = words.next().unwrap_or_default();
    let arg = words.next();
    if words.next().is_some() {
        return MetaAction::Print(format!("Unrecognized meta-command: {line}"));
    }
    debug!(command = name, "meta-command");

    let msg = match (name, arg) {
        (".exit" | ".quit", None) => return MetaAction::Exit,
        (".help", None) => HELP.to_string(),
        (".tables", None) => list_tables(db),
        (".save", file) => {
            let path = file.map(PathBuf::from).unwrap_or_else(|| db_path.to_path_buf());
            match db.save(&path) {
                Ok(()) => format!("Saved to '{}'.", path.display()),
                Err(e) => format!("Error saving to '{}': {e}", path.display()),
            }
        }
        (".load", file) => {
            let path = file.map(PathBuf::from).unwrap_or_else(|| db_path.to_path_buf());
            match db.load(&path) {
                Ok(()) => format!("Loaded from '{}'.", path.display()),
                Err(e) => {
                    return MetaAction::LoadFailed(format!(
                        "Error loading from '{}': {e}",
                        path.display()
                    ));
                }
            }
        }
        (".columnstore", None) => format!("Current storage mode: {}", db.config().layout),
        (".columnstore", Some("on")) => {
            db.set_layout(StorageLayout::ColumnMajor);
            "Column-major storage mode ON.".to_string()
        }
        (".columnstore", Some("off")) => {
            db.set_layout(StorageLayout::RowMajor);
            "Column-major storage mode OFF.".to_string()
        }
        (".columnstore", Some(_)) => "Usage: .columnstore [on|off]".to_string(),
        (".binary", None) => format!("Current file format: {}", db.config().format),
        (".binary", Some("on")) => {
            db.set_format(PersistenceFormat::Binary);
            "Binary storage mode ON.".to_string()
        }
        (".binary", Some("off")) => {
            db.set_format(PersistenceFormat::Text);
            "Binary storage mode OFF.".to_string()
        }
        (".binary", Some(_)) => "Usage: .binary [on|off]".to_string(),
        _ => format!("Unrecognized meta-command: {line}"),
    };
    MetaAction::Print(msg)
}

fn list_tables(db: &Database) -> String {
    let mut out = String::from("Tables:");
    for t in db.tables() {
        out.push_str(&format!(
            "\n  {} ({} columns, {} rows, {})",
            t.name(),
            t.schema().column_count(),
            t.row_count(),
            t.layout()
        ));
    }
    out
}
