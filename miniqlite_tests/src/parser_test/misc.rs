use super::*;

#[test]
fn empty_input_is_syntax_error() {
    assert!(syntax_err("").contains("Empty command"));
    assert!(syntax_err("   ;  ").contains("Empty command"));
}

#[test]
fn unknown_statement_is_unrecognized() {
    for input in ["VACUUM", "select * FROM t", "ALTER TABLE t ADD x INT", ".tables"] {
        assert!(
            matches!(parse(input), Err(DbError::UnrecognizedCommand(_))),
            "{input}"
        );
    }
}

#[test]
fn surrounding_whitespace_and_one_semicolon_are_ignored() {
    assert_eq!(
        parse("   DROP TABLE t ;  ").unwrap(),
        Command::DropTable {
            table: "t".to_string()
        }
    );
}

#[test]
fn unrecognized_message_echoes_line() {
    let err = parse("FOO bar").unwrap_err();
    assert_eq!(err.to_string(), "Unrecognized command: FOO bar");
}
