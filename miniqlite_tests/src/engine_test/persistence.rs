use super::*;

#[test]
fn test_text_save_writes_expected_file() {
    let path = temp_path("scenario.db");
    let mut db = test_db();
    run(&mut db, "CREATE TABLE t (id INT, name TEXT, score FLOAT)");
    run(&mut db, r#"INSERT INTO t VALUES (1, "a", 0.5)"#);
    run(&mut db, r#"INSERT INTO t VALUES (2, "b c", 3)"#);
    db.save(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "MINIQLITE 1\nTABLE_COUNT 1\nTABLE t 3 2\nCOLUMN id INT\nCOLUMN name TEXT\nCOLUMN score FLOAT\nROW\t1\ta\t0.5\nROW\t2\tb c\t3\n"
    );
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_text_round_trip_in_both_layouts() {
    for layout in BOTH_LAYOUTS {
        let path = temp_path("text_rt.db");
        let mut db = test_db_with(layout);
        seed_users_3(&mut db);
        run(&mut db, "CREATE TABLE empty_t (x FLOAT)");
        run(&mut db, r#"INSERT INTO users VALUES (4, "", -7)"#);
        let before = run(&mut db, "SELECT * FROM users");
        db.save(&path).unwrap();

        let mut reopened = Database::open(&path, *db.config()).unwrap();
        assert_eq!(run(&mut reopened, "SELECT * FROM users"), before);
        assert_eq!(run(&mut reopened, "SELECT * FROM empty_t"), "x");
        let names: Vec<&str> = reopened.tables().map(|t| t.name()).collect();
        assert_eq!(names, vec!["users", "empty_t"]);
        let _ = std::fs::remove_file(&path);
    }
}

#[test]
fn test_binary_round_trip_with_tabs_and_newlines() {
    let path = temp_path("bin_rt.db");
    let mut db = test_db();
    db.set_format(PersistenceFormat::Binary);
    run(&mut db, "CREATE TABLE notes (id INT, body TEXT)");
    db.insert_row("notes", &["1", "line one\nline two"]).unwrap();
    db.insert_row("notes", &["2", "a\tb\r\n"]).unwrap();
    db.insert_row("notes", &["3", "ünïcødé"]).unwrap();
    db.save(&path).unwrap();

    let mut other = Database::with_config(*db.config());
    other.load(&path).unwrap();
    assert_eq!(other.select_all("notes").unwrap(), db.select_all("notes").unwrap());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_text_save_rejects_tab_and_keeps_existing_file() {
    let path = temp_path("unencodable.db");
    std::fs::write(&path, b"previous contents").unwrap();

    let mut db = test_db();
    run(&mut db, "CREATE TABLE t (body TEXT)");
    db.insert_row("t", &["a\tb"]).unwrap();

    let err = db.save(&path).unwrap_err();
    assert!(matches!(err, DbError::UnencodableText { ref column, .. } if column == "body"));
    assert!(err.to_string().contains("binary"));
    assert_eq!(std::fs::read(&path).unwrap(), b"previous contents");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_save_to_unwritable_path_is_io_error() {
    let mut db = test_db();
    seed_users_3(&mut db);
    let mut path = temp_path("missing_dir");
    path.push("nested.db");
    let err = db.save(&path).unwrap_err();
    assert!(matches!(err, DbError::Io { .. }));
}

#[test]
fn test_failed_load_leaves_database_empty() {
    let path = temp_path("garbage.db");
    std::fs::write(&path, "NOT A DATABASE\n").unwrap();

    let mut db = test_db();
    seed_users_3(&mut db);
    let err = db.load(&path).unwrap_err();
    assert!(matches!(err, DbError::Format(_)));
    assert_eq!(db.tables().count(), 0);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_load_of_missing_file_is_io_error_and_empties() {
    let mut db = test_db();
    seed_users_3(&mut db);
    let err = db.load(temp_path("never_written.db")).unwrap_err();
    assert!(matches!(err, DbError::Io { .. }));
    assert_eq!(db.tables().count(), 0);
}

#[test]
fn test_truncated_file_fails_whole_load() {
    let path = temp_path("truncated.db");
    let mut db = test_db();
    seed_users_3(&mut db);
    db.save(&path).unwrap();

    let full = std::fs::read_to_string(&path).unwrap();
    let cut: String = full.lines().take(6).map(|l| format!("{l}\n")).collect();
    std::fs::write(&path, cut).unwrap();

    let mut other = test_db();
    run(&mut other, "CREATE TABLE keep (id INT)");
    assert!(matches!(other.load(&path).unwrap_err(), DbError::Format(_)));
    assert_eq!(other.tables().count(), 0);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_load_replaces_tables_and_keeps_config() {
    let path = temp_path("replace.db");
    let mut saved = test_db();
    run(&mut saved, "CREATE TABLE fresh (id INT)");
    saved.save(&path).unwrap();

    let mut db = test_db_with(StorageLayout::ColumnMajor);
    seed_users_3(&mut db);
    let config_before = *db.config();
    db.load(&path).unwrap();

    assert!(db.table("users").is_err());
    assert_eq!(db.table("fresh").unwrap().layout(), StorageLayout::ColumnMajor);
    assert_eq!(*db.config(), config_before);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_load_reads_configured_format_only() {
    let path = temp_path("format_mismatch.db");
    let mut db = test_db();
    db.set_format(PersistenceFormat::Binary);
    seed_users_3(&mut db);
    db.save(&path).unwrap();

    db.set_format(PersistenceFormat::Text);
    assert!(matches!(db.load(&path).unwrap_err(), DbError::Format(_)));
    assert_eq!(db.tables().count(), 0);

    db.set_format(PersistenceFormat::Binary);
    db.load(&path).unwrap();
    assert_eq!(db.table("users").unwrap().row_count(), 3);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_open_missing_file_starts_empty() {
    let db = Database::open(temp_path("not_there.db"), DatabaseConfig::default()).unwrap();
    assert_eq!(db.tables().count(), 0);
}

#[test]
fn test_hand_written_text_file_loads() -> anyhow::Result<()> {
    let path = temp_path("hand.db");
    std::fs::write(
        &path,
        "MINIQLITE 1\nTABLE_COUNT 1\nTABLE p 2 1\nCOLUMN n integer\nCOLUMN w Real\nROW\t5\t2.5\n",
    )?;
    let mut db = Database::open(&path, DatabaseConfig::default())?;
    assert_eq!(run(&mut db, "SELECT * FROM p WHERE n = 5"), "n\tw\n5\t2.5");
    let _ = std::fs::remove_file(&path);
    Ok(())
}
