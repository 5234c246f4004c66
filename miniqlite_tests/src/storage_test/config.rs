use super::*;

#[test]
fn config_defaults_to_row_major_text() {
    let cfg = DatabaseConfig::default();
    assert_eq!(cfg.layout, StorageLayout::RowMajor);
    assert_eq!(cfg.format, PersistenceFormat::Text);
}

#[test]
fn config_json_round_trip() {
    let cfg = DatabaseConfig::new(StorageLayout::ColumnMajor, PersistenceFormat::Binary);
    let json = cfg.to_json_string().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["layout"], "column_major");
    assert_eq!(value["format"], "binary");
    assert_eq!(DatabaseConfig::from_json_str(&json).unwrap(), cfg);
}

#[test]
fn config_missing_fields_use_defaults() {
    let cfg = DatabaseConfig::from_json_str(r#"{"format":"binary"}"#).unwrap();
    assert_eq!(cfg.layout, StorageLayout::RowMajor);
    assert_eq!(cfg.format, PersistenceFormat::Binary);
}

#[test]
fn config_rejects_unknown_variant() {
    assert!(DatabaseConfig::from_json_str(r#"{"layout":"diagonal"}"#).is_err());
}

#[test]
fn config_load_from_missing_file_is_default() {
    let path = std::env::temp_dir().join(format!("miniqlite_no_config_{}.json", std::process::id()));
    let cfg = DatabaseConfig::load_from_path(&path).unwrap();
    assert_eq!(cfg, DatabaseConfig::default());
}
