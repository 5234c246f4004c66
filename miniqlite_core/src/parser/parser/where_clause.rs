use crate::error::{DbError, DbResult};
use crate::parser::command::{Assignment, Predicate};
use super::tokenizer::{read_operand, split_top_level};

/// Parses `<col> = <value>`: split on the first '=', the column is the
/// trimmed left side and the value follows `read_operand` rules.
fn parse_equality(text: &str, usage_msg: &str) -> DbResult<(String, String)> {
    let (left, right) = text
        .split_once('=')
        .ok_or_else(|| DbError::Syntax(usage_msg.to_string()))?;
    let column = left.trim();
    if column.is_empty() || column.contains(char::is_whitespace) {
        return Err(DbError::Syntax(usage_msg.to_string()));
    }
    Ok((column.to_string(), read_operand(right)))
}

pub(super) fn parse_where_clause(text: &str, usage_msg: &str) -> DbResult<Predicate> {
    let (column, value) = parse_equality(text, usage_msg)?;
    Ok(Predicate { column, value })
}

pub(super) fn parse_assignment(text: &str, usage_msg: &str) -> DbResult<Assignment> {
    if split_top_level(text).len() > 1 {
        return Err(DbError::Syntax(
            "UPDATE supports a single assignment: SET <col> = <value>".to_string(),
        ));
    }
    let (column, value) = parse_equality(text, usage_msg)?;
    Ok(Assignment { column, value })
}
