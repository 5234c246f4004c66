use crate::error::{DbError, DbResult};
use crate::parser::command::{Command, Projection};
use super::tokenizer::{find_keyword, read_identifier, split_top_level, strip_keyword};
use super::where_clause::parse_where_clause;

const SELECT_USAGE: &str = "Usage: SELECT <col1, col2 | *> FROM <table> [WHERE <col> = <value>]";

pub(super) fn parse_select(rest: &str) -> DbResult<Command> {
    let from_at = find_keyword(rest, "FROM")
        .ok_or_else(|| DbError::Syntax(format!("Missing FROM. {SELECT_USAGE}")))?;
    let projection = parse_projection(rest[..from_at].trim())?;

    let (table, after) = read_identifier(&rest[from_at + "FROM".len()..], &[';']);
    if table.is_empty() {
        return Err(DbError::Syntax(format!(
            "SELECT missing table name after FROM. {SELECT_USAGE}"
        )));
    }

    let after = after.trim();
    let filter = if after.is_empty() {
        None
    } else {
        let cond = strip_keyword(after, "WHERE").ok_or_else(|| {
            DbError::Syntax(format!("Unexpected '{after}' after table name. {SELECT_USAGE}"))
        })?;
        Some(parse_where_clause(cond, SELECT_USAGE)?)
    };

    Ok(Command::Select {
        table: table.to_string(),
        projection,
        filter,
    })
}

fn parse_projection(cols: &str) -> DbResult<Projection> {
    if cols.is_empty() {
        return Err(DbError::Syntax(format!("Missing columns in SELECT. {SELECT_USAGE}")));
    }
    if cols == "*" {
        return Ok(Projection::All);
    }

    let mut columns: Vec<String> = Vec::new();
    for part in split_top_level(cols) {
        let name = part.trim();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(DbError::Syntax(
                "Bad SELECT column list. Use '*' or comma-separated column names.".to_string(),
            ));
        }
        columns.push(name.to_string());
    }
    Ok(Projection::Columns(columns))
}
