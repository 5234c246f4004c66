use crate::config::DatabaseConfig;
use crate::engine::outcome::Outcome;
use crate::error::DbResult;
use crate::parser::command::{Command, Projection};
use crate::storage::Catalog;

use super::{ddl, dml, select};

/// Executes a parsed command against the catalog
pub fn execute_command(
    cmd: Command,
    catalog: &mut Catalog,
    config: &DatabaseConfig,
) -> DbResult<Outcome> {
    match cmd {
        Command::CreateTable { table, columns } => {
            let count = ddl::create_table(catalog, &table, columns, config.layout)?;
            Ok(Outcome::Created {
                table,
                columns: count,
            })
        }
        Command::DropTable { table } => {
            ddl::drop_table(catalog, &table)?;
            Ok(Outcome::Dropped { table })
        }
        Command::Insert { table, values } => {
            dml::insert_row(catalog, &table, &values)?;
            Ok(Outcome::Inserted { table })
        }
        Command::Select {
            table,
            projection,
            filter,
        } => {
            let rs = match (filter, projection) {
                (Some(f), projection) => {
                    select::select_where_eq(catalog, &table, &projection, &f.column, &f.value)?
                }
                (None, Projection::All) => select::select_all(catalog, &table)?,
                (None, Projection::Columns(cols)) => {
                    select::select_columns(catalog, &table, &cols)?
                }
            };
            Ok(Outcome::Selected(rs))
        }
        Command::Update {
            table,
            assignment,
            filter,
        } => {
            let count = dml::update_where_eq(
                catalog,
                &table,
                &assignment.column,
                &assignment.value,
                &filter.column,
                &filter.value,
            )?;
            Ok(Outcome::Updated { table, count })
        }
        Command::Delete { table, filter } => {
            let count = dml::delete_where_eq(catalog, &table, &filter.column, &filter.value)?;
            Ok(Outcome::Deleted { table, count })
        }
    }
}
