use miniqlite_core::parser::command::Projection;
use miniqlite_core::{Database, DatabaseConfig, DbError, PersistenceFormat, StorageLayout};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

fn test_db() -> Database {
    Database::new()
}

fn test_db_with(layout: StorageLayout) -> Database {
    Database::with_config(DatabaseConfig::new(layout, PersistenceFormat::Text))
}

fn temp_path(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let mut path: PathBuf = std::env::temp_dir();
    path.push(format!("miniqlite_test_{}_{}_{}", std::process::id(), id, name));
    let _ = std::fs::remove_file(&path);
    path
}

/// Runs one statement and renders its outcome.
fn run(db: &mut Database, sql: &str) -> String {
    db.execute(sql).unwrap().to_string()
}

fn seed_users_3(db: &mut Database) {
    run(db, "CREATE TABLE users (id INT, name TEXT, age INT)");
    run(db, r#"INSERT INTO users VALUES (1, "a", 30)"#);
    run(db, r#"INSERT INTO users VALUES (2, "b", 20)"#);
    run(db, r#"INSERT INTO users VALUES (3, "c", 10)"#);
}

const BOTH_LAYOUTS: [StorageLayout; 2] = [StorageLayout::RowMajor, StorageLayout::ColumnMajor];

mod persistence;
