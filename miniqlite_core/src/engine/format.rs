use crate::engine::outcome::ResultSet;
use crate::types::value::value_to_string;

/// Formats a SELECT result as a tab-separated table
pub fn format_select(rs: &ResultSet) -> String {
    // Header line with column names
    let header = rs.columns.join("\t");

    if rs.rows.is_empty() {
        return header;
    }

    let row_lines = rs
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(value_to_string)
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n{}", header, row_lines)
}
