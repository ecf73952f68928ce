//! SQLite export of a [`ResultModel`].
//!
//! Each dataset becomes a table named after it with an integer primary key
//! `node` and one `REAL` column per tuple position (`r1`, `r2`, ...).

use std::fs;
use std::iter;
use std::path::Path;

use log::{debug, info};
use rusqlite::{Connection, ToSql};

use crate::error::Result;
use crate::model::{NodeTable, ResultModel};
use crate::output::ensure_parent_dir;

/// Write `model` to a new database at `path`, replacing any existing file.
pub fn write_sqlite(model: &ResultModel, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.is_file() {
        info!("removing existing database \"{}\"", path.display());
        fs::remove_file(path)?;
    }
    ensure_parent_dir(path)?;

    info!("writing SQLite database \"{}\"", path.display());
    let mut conn = Connection::open(path)?;
    for (name, table) in model.iter() {
        write_table(&mut conn, name, table)?;
    }
    Ok(())
}

fn write_table(conn: &mut Connection, name: &str, table: &NodeTable) -> Result<()> {
    let width = table.tuple_len().unwrap_or(0);
    let create = create_table_sql(name, width);
    let insert = insert_sql(name, width);
    debug!("{create}");
    debug!("{insert}");

    let tx = conn.transaction()?;
    tx.execute(&create, [])?;
    {
        let mut stmt = tx.prepare(&insert)?;
        for (node, values) in table.iter() {
            let row: Vec<&dyn ToSql> = iter::once(&node as &dyn ToSql)
                .chain(values.iter().map(|v| v as &dyn ToSql))
                .collect();
            stmt.execute(row.as_slice())?;
        }
    }
    tx.commit()?;
    Ok(())
}

/// `CREATE TABLE` statement for a dataset with `width` values per node.
pub fn create_table_sql(name: &str, width: usize) -> String {
    let columns: String = (1..=width).map(|idx| format!(", r{idx} REAL")).collect();
    format!(
        "CREATE TABLE {}(node INTEGER PRIMARY KEY{columns});",
        quote_ident(name)
    )
}

/// Parameterized `INSERT` statement matching [`create_table_sql`].
pub fn insert_sql(name: &str, width: usize) -> String {
    let params: String = iter::repeat_n(", ?", width).collect();
    format!("INSERT INTO {} VALUES (?{params});", quote_ident(name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
