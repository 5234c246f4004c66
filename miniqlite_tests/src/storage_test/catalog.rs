use super::*;

#[test]
fn create_table_reports_column_count() {
    let mut catalog = Catalog::new();
    let n = catalog
        .create_table(
            "users",
            vec![col("id", DataType::Int), col("score", DataType::Float)],
            StorageLayout::RowMajor,
        )
        .unwrap();
    assert_eq!(n, 2);
    assert!(catalog.exists("users"));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn duplicate_table_checked_before_anything_else() {
    let mut catalog = sample_catalog(StorageLayout::RowMajor, &[]);
    let err = catalog
        .create_table("t", Vec::new(), StorageLayout::RowMajor)
        .unwrap_err();
    assert!(matches!(err, DbError::DuplicateTable(_)));
}

#[test]
fn empty_column_list_is_rejected() {
    let mut catalog = Catalog::new();
    let err = catalog
        .create_table("t", Vec::new(), StorageLayout::RowMajor)
        .unwrap_err();
    assert!(matches!(err, DbError::Syntax(_)));
    assert!(catalog.is_empty());
}

#[test]
fn invalid_names_are_rejected() {
    let mut catalog = Catalog::new();
    for bad in ["", "has space", "tab\there", "nul\0byte"] {
        let err = catalog
            .create_table(bad, vec![col("id", DataType::Int)], StorageLayout::RowMajor)
            .unwrap_err();
        assert!(matches!(err, DbError::InvalidName { .. }), "{bad:?}");

        let err = catalog
            .create_table("ok", vec![col(bad, DataType::Int)], StorageLayout::RowMajor)
            .unwrap_err();
        assert!(matches!(err, DbError::InvalidName { .. }), "{bad:?}");
    }
    assert!(catalog.is_empty());
}

#[test]
fn name_length_limit_counts_bytes() {
    let mut catalog = Catalog::new();
    // 32 two-byte characters: 64 bytes.
    let wide = "é".repeat(32);
    let err = catalog
        .create_table(&wide, vec![col("id", DataType::Int)], StorageLayout::RowMajor)
        .unwrap_err();
    assert!(matches!(err, DbError::InvalidName { .. }));
    catalog
        .create_table(&"é".repeat(31), vec![col("id", DataType::Int)], StorageLayout::RowMajor)
        .unwrap();
}

#[test]
fn drop_and_lookup() {
    let mut catalog = sample_catalog(StorageLayout::RowMajor, &[["1", "a"]]);
    assert_eq!(catalog.table("t").unwrap().row_count(), 1);
    catalog.drop_table("t").unwrap();
    assert!(matches!(catalog.table("t").unwrap_err(), DbError::UnknownTable(_)));
    assert!(matches!(catalog.drop_table("t").unwrap_err(), DbError::UnknownTable(_)));
}

#[test]
fn insert_values_validates_before_storing() {
    let mut catalog = sample_catalog(StorageLayout::ColumnMajor, &[]);
    let table = catalog.table_mut("t").unwrap();

    assert!(matches!(
        table.insert_values(&["1"]).unwrap_err(),
        DbError::ArityMismatch { expected: 2, got: 1 }
    ));
    assert!(matches!(
        table.insert_values(&["x", "a"]).unwrap_err(),
        DbError::TypeMismatch { expected: DataType::Int, .. }
    ));
    assert_eq!(table.row_count(), 0);

    table.insert_values(&["-5", "a"]).unwrap();
    assert_eq!(table.storage().cell(0, 0), Some(&Value::Int(-5)));
    assert_eq!(table.column_index("name").unwrap(), 1);
    assert!(matches!(
        table.column_index("nope").unwrap_err(),
        DbError::UnknownColumn { .. }
    ));
}
