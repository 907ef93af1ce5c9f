//! SQLite relational store for sqlscout.
//!
//! A single file-backed connection shared behind a mutex: schema and sample
//! rows are read once at startup to build retrieval documents, and ad hoc
//! generated SQL is executed per request thereafter.

mod error;
mod render;
mod seed;

pub use error::DbError;
pub use render::render_rows;
pub use seed::DEMO_SCHEMA;

use rusqlite::types::ValueRef;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// How many sample rows a schema document carries per table.
pub const SAMPLE_ROW_LIMIT: usize = 3;

/// Columns and stringified rows from one executed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRows {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl QueryRows {
    /// Render as an aligned text table.
    #[must_use]
    pub fn render(&self) -> String {
        render_rows(self)
    }
}

/// Handle to the relational store. Cheap to clone; all clones share one
/// connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

fn lock_conn(mutex: &Mutex<Connection>) -> Result<MutexGuard<'_, Connection>, DbError> {
    mutex.lock().map_err(|_: PoisonError<_>| DbError::LockPoisoned)
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish_non_exhaustive()
    }
}

impl Database {
    /// Open (creating if absent) a file-backed database.
    pub fn open(db_path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(db_path).map_err(DbError::Open)?;
        Ok(Self { conn: Arc::new(Mutex::new(conn)) })
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory().map_err(DbError::Open)?;
        Ok(Self { conn: Arc::new(Mutex::new(conn)) })
    }

    /// Create the demo retail schema and sample rows. Idempotent.
    pub fn seed_demo_data(&self) -> Result<(), DbError> {
        let conn = lock_conn(&self.conn)?;
        seed::seed(&conn)?;
        Ok(())
    }

    /// Names of user tables, alphabetical, excluding SQLite internals.
    pub fn usable_tables(&self) -> Result<Vec<String>, DbError> {
        let conn = lock_conn(&self.conn)?;
        let mut stmt = conn.prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    /// DDL plus a commented block of sample rows for one table.
    ///
    /// The sample block is tab-separated with a header line, capped at
    /// [`SAMPLE_ROW_LIMIT`] rows.
    pub fn table_info(&self, table: &str) -> Result<String, DbError> {
        let ddl = {
            let conn = lock_conn(&self.conn)?;
            let mut stmt = conn
                .prepare("SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?1")?;
            let mut rows = stmt.query([table])?;
            match rows.next()? {
                Some(row) => row
                    .get::<_, Option<String>>(0)?
                    .ok_or_else(|| DbError::MissingSchema(table.to_owned()))?,
                None => return Err(DbError::MissingSchema(table.to_owned())),
            }
        };

        let sample =
            self.run_query(&format!("SELECT * FROM \"{table}\" LIMIT {SAMPLE_ROW_LIMIT}"))?;

        let mut info = ddl;
        info.push_str("\n/*\n");
        info.push_str(&format!("{} rows from {} table:\n", sample.rows.len(), table));
        info.push_str(&sample.columns.join("\t"));
        for row in &sample.rows {
            info.push('\n');
            info.push_str(&row.join("\t"));
        }
        info.push_str("\n*/");
        Ok(info)
    }

    /// Execute one SQL statement and collect every row as strings.
    ///
    /// Any engine rejection (syntax error, unknown column, constraint
    /// violation) surfaces as [`DbError::Sql`] carrying the engine's own
    /// message.
    pub fn run_query(&self, sql: &str) -> Result<QueryRows, DbError> {
        let conn = lock_conn(&self.conn)?;
        let mut stmt = conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| (*c).to_owned()).collect();
        let column_count = columns.len();

        let mut collected = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let mut cells = Vec::with_capacity(column_count);
            for i in 0..column_count {
                cells.push(value_to_string(row.get_ref(i)?));
            }
            collected.push(cells);
        }

        Ok(QueryRows { columns, rows: collected })
    }
}

fn value_to_string(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        ValueRef::Blob(bytes) => format!("<{} byte blob>", bytes.len()),
    }
}
