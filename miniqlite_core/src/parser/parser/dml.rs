use crate::error::{DbError, DbResult};
use crate::parser::command::Command;
use super::tokenizer::{
    expect_end, find_keyword, read_identifier, read_value, split_top_level, strip_keyword,
};
use super::where_clause::{parse_assignment, parse_where_clause};

const INSERT_USAGE: &str = "Usage: INSERT INTO <table> VALUES (<v1>, <v2>, ...)";
const UPDATE_USAGE: &str = "Usage: UPDATE <table> SET <col> = <value> WHERE <col> = <value>";
const DELETE_USAGE: &str = "Usage: DELETE FROM <table> WHERE <col> = <value>";

pub(super) fn parse_insert(rest: &str) -> DbResult<Command> {
    // INSERT INTO <table> VALUES (<v1>, <v2>, ...)
    let (table, after) = read_identifier(rest, &['(']);
    if table.is_empty() {
        return Err(DbError::Syntax(format!("Missing table name. {INSERT_USAGE}")));
    }
    let values_at = find_keyword(after, "VALUES")
        .ok_or_else(|| DbError::Syntax(format!("Expected VALUES. {INSERT_USAGE}")))?;
    expect_end(&after[..values_at], "table name")?;

    let list = &after[values_at + "VALUES".len()..];
    let body = list
        .trim_start()
        .strip_prefix('(')
        .ok_or_else(|| DbError::Syntax(format!("Expected '(' after VALUES. {INSERT_USAGE}")))?;
    let close = body
        .rfind(')')
        .ok_or_else(|| DbError::Syntax(format!("Missing ')'. {INSERT_USAGE}")))?;
    expect_end(&body[close + 1..], "VALUES list")?;

    let inner = &body[..close];
    if inner.trim().is_empty() {
        return Err(DbError::Syntax("INSERT requires at least one value".to_string()));
    }
    let mut values: Vec<String> = Vec::new();
    for (i, raw) in split_top_level(inner).into_iter().enumerate() {
        if raw.trim().is_empty() {
            return Err(DbError::Syntax(format!(
                "Empty value at position {} in VALUES list (use \"\" for empty text)",
                i + 1
            )));
        }
        values.push(read_value(raw)?);
    }

    Ok(Command::Insert {
        table: table.to_string(),
        values,
    })
}

pub(super) fn parse_update(rest: &str) -> DbResult<Command> {
    // UPDATE <table> SET <col> = <value> WHERE <col> = <value>
    let (table, after) = read_identifier(rest, &[';']);
    if table.is_empty() {
        return Err(DbError::Syntax(format!("Missing table name. {UPDATE_USAGE}")));
    }
    let set_clause = strip_keyword(after, "SET")
        .ok_or_else(|| DbError::Syntax(format!("Expected SET. {UPDATE_USAGE}")))?;
    let where_at = find_keyword(set_clause, "WHERE").ok_or_else(|| {
        DbError::Syntax(format!("UPDATE requires a WHERE clause. {UPDATE_USAGE}"))
    })?;

    let assignment = parse_assignment(&set_clause[..where_at], UPDATE_USAGE)?;
    let filter = parse_where_clause(&set_clause[where_at + "WHERE".len()..], UPDATE_USAGE)?;

    Ok(Command::Update {
        table: table.to_string(),
        assignment,
        filter,
    })
}

pub(super) fn parse_delete(rest: &str) -> DbResult<Command> {
    // DELETE FROM <table> WHERE <col> = <value>
    let (table, after) = read_identifier(rest, &[';']);
    if table.is_empty() {
        return Err(DbError::Syntax(format!("Missing table name. {DELETE_USAGE}")));
    }
    if after.trim().is_empty() {
        return Err(DbError::Syntax(
            "DELETE without WHERE is not supported".to_string(),
        ));
    }
    let cond = strip_keyword(after, "WHERE")
        .ok_or_else(|| DbError::Syntax(format!("Expected WHERE. {DELETE_USAGE}")))?;
    let filter = parse_where_clause(cond, DELETE_USAGE)?;

    Ok(Command::Delete {
        table: table.to_string(),
        filter,
    })
}
