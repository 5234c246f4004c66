use super::*;

#[test]
fn parse_insert_with_quotes() {
    let cmd = parse(r#"INSERT INTO users VALUES (1, "ram kumar")"#).unwrap();

    match cmd {
        Command::Insert { table, values } => {
            assert_eq!(table, "users");
            assert_eq!(values, vec!["1".to_string(), "ram kumar".to_string()]);
        }
        _ => panic!("Expected Insert command"),
    }
}

#[test]
fn insert_keeps_commas_inside_quotes() {
    let cmd = parse(r#"INSERT INTO t VALUES ( "a, b" ,  7 , "" )"#).unwrap();
    let Command::Insert { values, .. } = cmd else {
        panic!("Expected Insert command");
    };
    assert_eq!(values, vec!["a, b", "7", ""]);
}

#[test]
fn insert_unterminated_quote_takes_rest() {
    let cmd = parse(r#"INSERT INTO t VALUES (1, "abc, def)"#).unwrap();
    let Command::Insert { values, .. } = cmd else {
        panic!("Expected Insert command");
    };
    assert_eq!(values, vec!["1", "abc, def"]);
}

#[test]
fn insert_rejects_empty_value() {
    assert!(syntax_err("INSERT INTO t VALUES (1, , 3)").contains("Empty value at position 2"));
    assert!(syntax_err("INSERT INTO t VALUES ()").contains("at least one value"));
}

#[test]
fn insert_rejects_text_after_closing_quote() {
    assert!(syntax_err(r#"INSERT INTO t VALUES ("ab"c)"#).contains("after closing quote"));
}

#[test]
fn insert_structure_errors() {
    assert!(syntax_err("INSERT INTO t (1, 2)").contains("Expected VALUES"));
    assert!(syntax_err("INSERT INTO t VALUES 1, 2").contains("Expected '('"));
    assert!(syntax_err("INSERT INTO t VALUES (1, 2").contains("Missing ')'"));
    assert!(syntax_err("INSERT INTO t VALUES (1) extra").contains("Unexpected 'extra'"));
    assert!(syntax_err("INSERT INTO t x VALUES (1)").contains("Unexpected 'x'"));
}

#[test]
fn insert_values_keyword_is_case_sensitive() {
    assert!(syntax_err("INSERT INTO t values (1)").contains("Expected VALUES"));
}

#[test]
fn parse_update() {
    let cmd = parse(r#"UPDATE users SET name = "z" WHERE id = 1;"#).unwrap();
    assert_eq!(
        cmd,
        Command::Update {
            table: "users".to_string(),
            assignment: Assignment {
                column: "name".to_string(),
                value: "z".to_string(),
            },
            filter: pred("id", "1"),
        }
    );
}

#[test]
fn update_ignores_where_inside_quotes() {
    let cmd = parse(r#"UPDATE t SET note = "x WHERE y" WHERE id = 2"#).unwrap();
    let Command::Update {
        assignment, filter, ..
    } = cmd
    else {
        panic!("Expected Update command");
    };
    assert_eq!(assignment.value, "x WHERE y");
    assert_eq!(filter, pred("id", "2"));
}

#[test]
fn update_requires_set_and_where() {
    assert!(syntax_err("UPDATE t name = 1 WHERE id = 1").contains("Expected SET"));
    assert!(syntax_err("UPDATE t SET name = 1").contains("requires a WHERE"));
    assert!(syntax_err("UPDATE t SET name WHERE id = 1").contains("Usage: UPDATE"));
}

#[test]
fn update_supports_single_assignment_only() {
    assert!(syntax_err("UPDATE t SET a = 1, b = 2 WHERE id = 1").contains("single assignment"));
}

#[test]
fn parse_delete() {
    assert_eq!(
        parse(r#"DELETE FROM users WHERE name = "ram""#).unwrap(),
        Command::Delete {
            table: "users".to_string(),
            filter: pred("name", "ram"),
        }
    );
}

#[test]
fn delete_without_where_errors() {
    assert!(syntax_err("DELETE FROM users").contains("DELETE without WHERE"));
    assert!(syntax_err("DELETE FROM users;").contains("DELETE without WHERE"));
    assert!(syntax_err("DELETE FROM users id = 1").contains("Expected WHERE"));
}

#[test]
fn set_and_where_values_ignore_text_after_closing_quote() {
    let cmd = parse(r#"UPDATE t SET s = "new"junk WHERE id = "1" trailing"#).unwrap();
    let Command::Update {
        assignment, filter, ..
    } = cmd
    else {
        panic!("Expected Update command");
    };
    assert_eq!(assignment.value, "new");
    assert_eq!(filter, pred("id", "1"));

    // INSERT literals stay strict.
    assert!(syntax_err(r#"INSERT INTO t VALUES ("new"junk)"#).contains("after closing quote"));
}
