use crate::error::{DbError, DbResult};

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Skips leading whitespace and reads a name up to whitespace or one of
/// `stops`. Returns the name and the unread remainder.
pub(super) fn read_identifier<'a>(input: &'a str, stops: &[char]) -> (&'a str, &'a str) {
    let input = input.trim_start();
    let end = input
        .find(|c: char| c.is_whitespace() || stops.contains(&c))
        .unwrap_or(input.len());
    input.split_at(end)
}

/// Byte offset of the first whole-word occurrence of `keyword` outside
/// double quotes.
pub(super) fn find_keyword(input: &str, keyword: &str) -> Option<usize> {
    let mut in_quotes = false;
    let mut prev: Option<char> = None;
    for (i, c) in input.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if !in_quotes
            && !prev.is_some_and(is_word_char)
            && input[i..].starts_with(keyword)
            && !input[i + keyword.len()..]
                .chars()
                .next()
                .is_some_and(is_word_char)
        {
            return Some(i);
        }
        prev = Some(c);
    }
    None
}

/// Strips a leading whole-word `keyword` (after optional whitespace).
pub(super) fn strip_keyword<'a>(input: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = input.trim_start().strip_prefix(keyword)?;
    if rest.chars().next().is_some_and(is_word_char) {
        return None;
    }
    Some(rest)
}

/// Splits on commas that are not inside double quotes.
pub(super) fn split_top_level(input: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = Vec::new();
    let mut in_quotes = false;
    let mut start = 0usize;
    for (i, c) in input.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                parts.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

/// Reads one literal: either bare text (trimmed) or a double-quoted string
/// with the quotes removed. There are no escapes; an unterminated quote takes
/// the rest of the input.
pub(super) fn read_value(raw: &str) -> DbResult<String> {
    let raw = raw.trim();
    let Some(quoted) = raw.strip_prefix('"') else {
        return Ok(raw.to_string());
    };
    match quoted.find('"') {
        None => Ok(quoted.to_string()),
        Some(end) => {
            let trailing = quoted[end + 1..].trim();
            if !trailing.is_empty() {
                return Err(DbError::Syntax(format!(
                    "Characters found after closing quote: '{trailing}'"
                )));
            }
            Ok(quoted[..end].to_string())
        }
    }
}

/// Reads the right side of `<col> = <value>`: trimmed text, or the text
/// between a leading quote and the next one. Anything after that closing
/// quote is ignored.
pub(super) fn read_operand(raw: &str) -> String {
    let raw = raw.trim();
    match raw.strip_prefix('"') {
        Some(quoted) => match quoted.split_once('"') {
            Some((value, _ignored)) => value.to_string(),
            None => quoted.to_string(),
        },
        None => raw.to_string(),
    }
}

/// Ensures only whitespace is left after a statement.
pub(super) fn expect_end(rest: &str, context: &str) -> DbResult<()> {
    let rest = rest.trim();
    if !rest.is_empty() {
        return Err(DbError::Syntax(format!(
            "Unexpected '{rest}' after {context}"
        )));
    }
    Ok(())
}
