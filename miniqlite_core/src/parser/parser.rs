mod create;
mod dml;
mod select;
mod tokenizer;
mod where_clause;

use crate::error::{DbError, DbResult};
use crate::parser::command::Command;

type StatementParser = fn(&str) -> DbResult<Command>;

/// Statement keywords in match order. The first one that is a literal prefix
/// of the command wins.
const STATEMENTS: &[(&str, StatementParser)] = &[
    ("CREATE TABLE", create::parse_create),
    ("INSERT INTO", dml::parse_insert),
    ("SELECT", select::parse_select),
    ("UPDATE", dml::parse_update),
    ("DELETE FROM", dml::parse_delete),
    ("DROP TABLE", create::parse_drop),
];

/// Parses one command line into a `Command`. The line is trimmed and one
/// trailing ';' is ignored.
pub fn parse(input: &str) -> DbResult<Command> {
    let line = input.trim();
    let line = line.strip_suffix(';').map(str::trim_end).unwrap_or(line);
    if line.is_empty() {
        return Err(DbError::Syntax("Empty command".to_string()));
    }

    for (keyword, parse_statement) in STATEMENTS {
        if let Some(rest) = line.strip_prefix(keyword) {
            return parse_statement(rest);
        }
    }
    Err(DbError::UnrecognizedCommand(line.to_string()))
}
