use anyhow::{Context, Result};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OpenFlags, Row};
use std::path::{Path, PathBuf};

use crate::errors::{connection_context, first_line, statement_context};
use crate::sanitize::clean_text;

pub type DbConn = Connection;

/// A positional statement parameter.
///
/// Only free text goes through the sanitizer; numeric ids bind as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Integer(i64),
}

impl SqlParam {
    fn bind(&self) -> Value {
        match self {
            SqlParam::Text(text) => Value::Text(clean_text(text)),
            SqlParam::Integer(value) => Value::Integer(*value),
        }
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        SqlParam::Integer(value)
    }
}

/// Handle to the tournament database file.
///
/// Holds the location only. Every call opens its own connection and closes it
/// before returning, whether the statement succeeded or not.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Executes a mutating statement inside its own transaction and commits it.
    /// Returns the number of affected rows.
    pub fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<usize> {
        log::debug!("Executing: {}", first_line(sql));
        let mut conn = self.connect()?;
        let tx = conn.transaction().context("Failed to begin transaction")?;
        let affected = tx
            .execute(sql, bind_all(params))
            .with_context(|| statement_context(sql))?;
        tx.commit().context("Failed to commit transaction")?;
        Ok(affected)
    }

    /// Executes a mutating statement with a `RETURNING` clause, commits it and
    /// maps the single returned row.
    pub fn execute_returning<T, F>(&self, sql: &str, params: &[SqlParam], map: F) -> Result<T>
    where
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        log::debug!("Executing: {}", first_line(sql));
        let mut conn = self.connect()?;
        let tx = conn.transaction().context("Failed to begin transaction")?;
        let value = tx
            .query_row(sql, bind_all(params), map)
            .with_context(|| statement_context(sql))?;
        tx.commit().context("Failed to commit transaction")?;
        Ok(value)
    }

    /// Runs a query and maps every resulting row.
    pub fn query<T, F>(&self, sql: &str, params: &[SqlParam], map: F) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        log::debug!("Executing: {}", first_line(sql));
        let conn = self.connect()?;
        let mut stmt = conn.prepare(sql).with_context(|| statement_context(sql))?;
        let rows = stmt
            .query_map(bind_all(params), map)
            .with_context(|| statement_context(sql))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .with_context(|| statement_context(sql))?;

        Ok(rows)
    }

    /// Runs a query expected to yield exactly one row.
    pub fn query_one<T, F>(&self, sql: &str, params: &[SqlParam], map: F) -> Result<T>
    where
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        log::debug!("Executing: {}", first_line(sql));
        let conn = self.connect()?;
        conn.query_row(sql, bind_all(params), map)
            .with_context(|| statement_context(sql))
    }

    /// Opens a connection, creating the database file when it is missing.
    /// Only schema setup should need this.
    pub fn connect_or_create(&self) -> Result<DbConn> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        self.open_with(flags)
    }

    fn connect(&self) -> Result<DbConn> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        self.open_with(flags)
    }

    fn open_with(&self, flags: OpenFlags) -> Result<DbConn> {
        log::debug!("Opening database {}", self.path.display());
        let conn = Connection::open_with_flags(&self.path, flags)
            .with_context(|| connection_context(&self.path))?;
        enable_foreign_keys(&conn)?;
        Ok(conn)
    }
}

fn bind_all(params: &[SqlParam]) -> rusqlite::ParamsFromIter<Vec<Value>> {
    params_from_iter(params.iter().map(SqlParam::bind).collect::<Vec<_>>())
}

fn enable_foreign_keys(conn: &DbConn) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", true)
        .context("Failed to enable foreign key enforcement")
}
