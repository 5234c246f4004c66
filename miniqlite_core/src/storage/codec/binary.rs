use tracing::debug;

use super::{check_magic, parse_table_count};
use crate::config::StorageLayout;
use crate::error::{DbError, DbResult};
use crate::parser::command::ColumnDef;
use crate::storage::catalog::{Catalog, MAX_NAME_LEN};
use crate::types::datatype::DataType;
use crate::types::value::value_to_string;

/// Fixed width of a table or column name block, including the NUL terminator.
pub const NAME_BLOCK_LEN: usize = MAX_NAME_LEN + 1;

pub(super) fn encode_tables(catalog: &Catalog, out: &mut Vec<u8>) -> DbResult<()> {
    for table in catalog.tables() {
        let schema = table.schema();
        let storage = table.storage();

        write_name_block(out, table.name())?;
        write_count(out, schema.column_count(), "column count")?;
        for c in &schema.columns {
            write_name_block(out, &c.name)?;
            out.extend_from_slice(&c.dtype.tag().to_le_bytes());
        }
        write_count(out, table.row_count(), "row count")?;
        for r in 0..table.row_count() {
            for (i, c) in schema.columns.iter().enumerate() {
                let cell = storage.cell(r, i).ok_or_else(|| {
                    DbError::Format(format!(
                        "Table '{}' is missing row {r} of column '{}'",
                        table.name(),
                        c.name
                    ))
                })?;
                let raw = value_to_string(cell);
                write_count(out, raw.len(), "cell length")?;
                out.try_reserve(raw.len())?;
                out.extend_from_slice(raw.as_bytes());
            }
        }
    }
    Ok(())
}

fn write_name_block(out: &mut Vec<u8>, name: &str) -> DbResult<()> {
    if name.len() > MAX_NAME_LEN {
        return Err(DbError::InvalidName {
            name: name.to_string(),
            reason: "name is longer than 63 bytes",
        });
    }
    let mut block = [0u8; NAME_BLOCK_LEN];
    block[..name.len()].copy_from_slice(name.as_bytes());
    out.try_reserve(NAME_BLOCK_LEN)?;
    out.extend_from_slice(&block);
    Ok(())
}

fn write_count(out: &mut Vec<u8>, n: usize, what: &str) -> DbResult<()> {
    let n = i32::try_from(n)
        .map_err(|_| DbError::Format(format!("{what} {n} does not fit the binary format")))?;
    out.try_reserve(4)?;
    out.extend_from_slice(&n.to_le_bytes());
    Ok(())
}

/// Cursor over the raw bytes of a binary database.
struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn error(&self, msg: impl std::fmt::Display) -> DbError {
        DbError::Format(format!("offset {}: {msg}", self.pos))
    }

    fn take(&mut self, n: usize, what: &str) -> DbResult<&'a [u8]> {
        let remaining = self.buf.len() - self.pos;
        if n > remaining {
            return Err(self.error(format!(
                "short read of {what}: need {n} bytes, {remaining} left"
            )));
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    fn read_line(&mut self, what: &str) -> DbResult<&'a str> {
        let rest = &self.buf[self.pos..];
        let end = rest
            .iter()
            .position(|b| *b == b'\n')
            .ok_or_else(|| self.error(format!("unterminated {what} line")))?;
        let line = std::str::from_utf8(&rest[..end])
            .map_err(|_| self.error(format!("{what} line is not valid UTF-8")))?;
        self.pos += end + 1;
        Ok(line.strip_suffix('\r').unwrap_or(line))
    }

    fn read_i32(&mut self, what: &str) -> DbResult<i32> {
        let raw = self.take(4, what)?;
        let mut le = [0u8; 4];
        le.copy_from_slice(raw);
        Ok(i32::from_le_bytes(le))
    }

    fn read_count(&mut self, what: &str) -> DbResult<usize> {
        let n = self.read_i32(what)?;
        usize::try_from(n).map_err(|_| self.error(format!("negative {what} {n}")))
    }

    fn read_name(&mut self, what: &str) -> DbResult<String> {
        let block = self.take(NAME_BLOCK_LEN, what)?;
        let end = block.iter().position(|b| *b == 0).unwrap_or(MAX_NAME_LEN);
        std::str::from_utf8(&block[..end])
            .map(str::to_string)
            .map_err(|_| self.error(format!("{what} is not valid UTF-8: 0x{}", hex::encode(&block[..end]))))
    }

    fn read_cell(&mut self) -> DbResult<&'a str> {
        let len = self.read_count("cell length")?;
        let raw = self.take(len, "cell bytes")?;
        std::str::from_utf8(raw).map_err(|_| {
            let shown = &raw[..raw.len().min(16)];
            self.error(format!("cell is not valid UTF-8: 0x{}", hex::encode(shown)))
        })
    }

    fn is_at_end(&self) -> bool {
        self.pos == self.buf.len()
    }
}

pub(super) fn decode(bytes: &[u8], layout: StorageLayout) -> DbResult<Catalog> {
    let mut reader = ByteReader::new(bytes);
    check_magic(reader.read_line("header")?)?;
    let table_count = parse_table_count(reader.read_line("table count")?)?;

    let mut catalog = Catalog::new();
    for _ in 0..table_count {
        let name = reader.read_name("table name")?;
        let num_cols = reader.read_count("column count")?;

        let mut columns: Vec<ColumnDef> = Vec::new();
        for _ in 0..num_cols {
            let col = reader.read_name("column name")?;
            let tag = reader.read_i32("column type")?;
            let dtype = DataType::from_tag(tag)
                .ok_or_else(|| reader.error(format!("unknown type tag {tag} for column '{col}'")))?;
            columns.push(ColumnDef { name: col, dtype });
        }
        catalog
            .create_table(&name, columns, layout)
            .map_err(|e| reader.error(e))?;

        let num_rows = reader.read_count("row count")?;
        let table = catalog.table_mut(&name)?;
        let mut cells: Vec<&str> = Vec::new();
        for _ in 0..num_rows {
            cells.clear();
            for _ in 0..num_cols {
                cells.push(reader.read_cell()?);
            }
            table.insert_values(&cells).map_err(|e| reader.error(e))?;
        }
        debug!(table = %name, columns = num_cols, rows = num_rows, "decoded binary table");
    }

    if !reader.is_at_end() {
        return Err(reader.error("unexpected bytes after the last table"));
    }
    Ok(catalog)
}
