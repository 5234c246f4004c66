use crate::error::{DbError, DbResult};
use crate::parser::command::{ColumnDef, Command};
use crate::types::datatype::parse_datatype;
use super::tokenizer::{expect_end, read_identifier, split_top_level};

const CREATE_USAGE: &str = "Usage: CREATE TABLE <table> (<col> <type>, ...)";

pub(super) fn parse_create(rest: &str) -> DbResult<Command> {
    // CREATE TABLE <table> ( <col> <type> [, <col> <type> ...] )
    let (table, after) = read_identifier(rest, &['(']);
    if table.is_empty() {
        return Err(DbError::Syntax(format!("Missing table name. {CREATE_USAGE}")));
    }
    let body = after
        .trim_start()
        .strip_prefix('(')
        .ok_or_else(|| DbError::Syntax(format!("Expected '(' after table name. {CREATE_USAGE}")))?;
    let close = body
        .rfind(')')
        .ok_or_else(|| DbError::Syntax(format!("Missing ')'. {CREATE_USAGE}")))?;
    expect_end(&body[close + 1..], "column list")?;

    let list = &body[..close];
    if list.trim().is_empty() {
        return Err(DbError::Syntax("CREATE requires at least one column".to_string()));
    }

    let mut columns: Vec<ColumnDef> = Vec::new();
    for def in split_top_level(list) {
        let words: Vec<&str> = def.split_whitespace().collect();
        match words.as_slice() {
            [name, dtype] => columns.push(ColumnDef {
                name: name.to_string(),
                dtype: parse_datatype(dtype),
            }),
            _ => {
                return Err(DbError::Syntax(format!(
                    "Bad column definition '{}'. Use: <col> <type>",
                    def.trim()
                )));
            }
        }
    }

    Ok(Command::CreateTable {
        table: table.to_string(),
        columns,
    })
}

pub(super) fn parse_drop(rest: &str) -> DbResult<Command> {
    // DROP TABLE <table>
    let words: Vec<&str> = rest.split_whitespace().collect();
    match words.as_slice() {
        [table] => {
            let table = table.strip_suffix(';').unwrap_or(table);
            if table.is_empty() {
                return Err(DbError::Syntax("Usage: DROP TABLE <table>".to_string()));
            }
            Ok(Command::DropTable {
                table: table.to_string(),
            })
        }
        _ => Err(DbError::Syntax("Usage: DROP TABLE <table>".to_string())),
    }
}
