use tracing::debug;

use super::{check_magic, parse_table_count};
use crate::config::StorageLayout;
use crate::error::{DbError, DbResult};
use crate::parser::command::ColumnDef;
use crate::storage::catalog::Catalog;
use crate::types::datatype::parse_datatype;
use crate::types::value::{Value, value_to_string};

pub(super) fn encode_tables(catalog: &Catalog, out: &mut Vec<u8>) -> DbResult<()> {
    for table in catalog.tables() {
        let schema = table.schema();
        let storage = table.storage();
        let mut chunk = format!(
            "TABLE {} {} {}\n",
            table.name(),
            schema.column_count(),
            table.row_count()
        );
        for c in &schema.columns {
            chunk.push_str(&format!("COLUMN {} {}\n", c.name, c.dtype.keyword()));
        }
        for r in 0..table.row_count() {
            chunk.push_str("ROW");
            for (i, c) in schema.columns.iter().enumerate() {
                let cell = storage.cell(r, i).ok_or_else(|| {
                    DbError::Format(format!(
                        "Table '{}' is missing row {r} of column '{}'",
                        table.name(),
                        c.name
                    ))
                })?;
                if let Value::Text(s) = cell {
                    if s.contains(['\t', '\n', '\r']) {
                        return Err(DbError::UnencodableText {
                            table: table.name().to_string(),
                            column: c.name.clone(),
                        });
                    }
                }
                chunk.push('\t');
                chunk.push_str(&value_to_string(cell));
            }
            chunk.push('\n');
        }
        out.try_reserve(chunk.len())?;
        out.extend_from_slice(chunk.as_bytes());
    }
    Ok(())
}

/// Line cursor that reports 1-based line numbers in errors.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    line_no: usize,
}

impl<'a> Lines<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            inner: content.lines().enumerate(),
            line_no: 0,
        }
    }

    fn next_line(&mut self, what: &str) -> DbResult<&'a str> {
        match self.inner.next() {
            Some((i, line)) => {
                self.line_no = i + 1;
                Ok(line)
            }
            None => Err(DbError::Format(format!(
                "Unexpected end of file while reading {what}"
            ))),
        }
    }

    fn error(&self, msg: impl std::fmt::Display) -> DbError {
        DbError::Format(format!("line {}: {msg}", self.line_no))
    }
}

pub(super) fn decode(bytes: &[u8], layout: StorageLayout) -> DbResult<Catalog> {
    let content = std::str::from_utf8(bytes)
        .map_err(|e| DbError::Format(format!("Text database is not valid UTF-8: {e}")))?;
    let mut lines = Lines::new(content);

    check_magic(lines.next_line("header")?)?;
    let table_count = parse_table_count(lines.next_line("table count")?)?;

    let mut catalog = Catalog::new();
    for _ in 0..table_count {
        let header = lines.next_line("table record")?;
        let fields: Vec<&str> = header.split_whitespace().collect();
        let (name, num_cols, num_rows) = match fields.as_slice() {
            ["TABLE", name, cols, rows] => {
                let cols = cols
                    .parse::<usize>()
                    .map_err(|_| lines.error(format!("bad column count '{cols}'")))?;
                let rows = rows
                    .parse::<usize>()
                    .map_err(|_| lines.error(format!("bad row count '{rows}'")))?;
                (*name, cols, rows)
            }
            _ => {
                return Err(lines.error(format!(
                    "expected 'TABLE <name> <columns> <rows>' but got '{header}'"
                )));
            }
        };

        let mut columns: Vec<ColumnDef> = Vec::new();
        for _ in 0..num_cols {
            let line = lines.next_line("column record")?;
            match line.split_whitespace().collect::<Vec<_>>().as_slice() {
                ["COLUMN", col, dtype] => columns.push(ColumnDef {
                    name: col.to_string(),
                    dtype: parse_datatype(dtype),
                }),
                _ => {
                    return Err(lines.error(format!(
                        "expected 'COLUMN <name> <type>' but got '{line}'"
                    )));
                }
            }
        }
        catalog
            .create_table(name, columns, layout)
            .map_err(|e| lines.error(e))?;
        let table = catalog.table_mut(name)?;

        for _ in 0..num_rows {
            let line = lines.next_line("row record")?;
            let rest = line
                .strip_prefix("ROW")
                .ok_or_else(|| lines.error(format!("expected a ROW record but got '{line}'")))?;
            let values: Vec<&str> = match rest.strip_prefix('\t') {
                Some(cells) => cells.split('\t').collect(),
                None if rest.is_empty() => Vec::new(),
                None => return Err(lines.error("row values must be tab-separated")),
            };
            if values.len() != num_cols {
                return Err(lines.error(format!(
                    "expected {num_cols} values but got {}",
                    values.len()
                )));
            }
            table.insert_values(&values).map_err(|e| lines.error(e))?;
        }
        debug!(table = name, columns = num_cols, rows = num_rows, "decoded text table");
    }

    for (i, line) in lines.inner {
        if !line.trim().is_empty() {
            return Err(DbError::Format(format!(
                "line {}: unexpected content after the last table",
                i + 1
            )));
        }
    }
    Ok(catalog)
}
