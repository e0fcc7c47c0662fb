//! Database connection management and statement primitives
//!
//! A `Database` owns the one connection the process holds. Every query goes
//! through one of two primitives:
//!
//! - `select`: returns rows; on failure logs, rolls back, returns no rows
//! - `modify`: runs in its own transaction, commits and returns the affected
//!   row count; on failure logs, rolls back, returns 0
//!
//! The fallible `try_select`/`try_modify` variants are what the primitives
//! wrap; callers that must distinguish failure from "no rows" use those.
//!
//! Every connection also gets `fold(text)`, a Unicode lower-casing SQL
//! function. Searches compare folded text, since SQLite's own `LIKE` and
//! `lower()` only fold ASCII.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::schema;
use bomdesk_core::model::{Cell, Row};
use rusqlite::functions::FunctionFlags;
use rusqlite::types::{ToSql, Value};
use rusqlite::Connection;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file path, or `:memory:`
    pub path: PathBuf,
    /// Apply the embedded DDL on connect
    pub provision_schema: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("bomdesk.db"),
            provision_schema: true,
        }
    }
}

/// A named, parameterized SQL template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement {
    /// Name used in log events
    pub name: &'static str,
    pub sql: &'static str,
}

/// The process-wide store handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open, configure and optionally provision according to `config`
    pub fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db = Self::open(&config.path)?;
        if config.provision_schema {
            schema::provision(&db.conn)?;
        }
        tracing::info!(path = %config.path.display(), "database connected");
        Ok(db)
    }

    /// Open a SQLite database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_connection(Connection::open(path).map_err(from_rusqlite)?)
    }

    /// Open a provisioned in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let db = Self::from_connection(Connection::open_in_memory().map_err(from_rusqlite)?)?;
        schema::provision(&db.conn)?;
        Ok(db)
    }

    /// Wrap an existing connection
    pub fn from_connection(conn: Connection) -> Result<Self> {
        configure(&conn)?;
        Ok(Self { conn })
    }

    /// Borrow the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Release the connection
    ///
    /// Consumes the handle, so a connection is released at most once.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| from_rusqlite(e))?;
        tracing::info!("database connection released");
        Ok(())
    }

    /// Run a read statement
    ///
    /// Never fails: store errors are logged, any open transaction is rolled
    /// back, and an empty row set is returned.
    pub fn select(&self, stmt: &Statement, params: &[&dyn ToSql]) -> Vec<Row> {
        match self.try_select(stmt, params) {
            Ok(rows) => {
                tracing::debug!(statement = stmt.name, rows = rows.len(), "select");
                rows
            }
            Err(err) => {
                tracing::error!(
                    statement = stmt.name,
                    err_code = err.code(),
                    error = %err,
                    "select failed"
                );
                self.rollback_open();
                Vec::new()
            }
        }
    }

    /// Run a write statement in its own transaction
    ///
    /// Returns the affected row count; 0 means nothing matched or the
    /// statement failed and was rolled back.
    pub fn modify(&mut self, stmt: &Statement, params: &[&dyn ToSql]) -> usize {
        match self.try_modify(stmt, params) {
            Ok(affected) => {
                tracing::debug!(statement = stmt.name, affected, "modify committed");
                affected
            }
            Err(err) => {
                tracing::error!(
                    statement = stmt.name,
                    err_code = err.code(),
                    error = %err,
                    "modify failed, rolled back"
                );
                self.rollback_open();
                0
            }
        }
    }

    /// Fallible read
    pub fn try_select(&self, stmt: &Statement, params: &[&dyn ToSql]) -> Result<Vec<Row>> {
        let mut prepared = self.conn.prepare(stmt.sql).map_err(from_rusqlite)?;
        let width = prepared.column_count();

        let rows = prepared
            .query_map(params, |row| {
                (0..width)
                    .map(|i| row.get::<_, Value>(i).map(cell_from_value))
                    .collect::<rusqlite::Result<Vec<Cell>>>()
                    .map(Row::new)
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }

    /// Fallible write; the transaction rolls back when dropped uncommitted
    pub fn try_modify(&mut self, stmt: &Statement, params: &[&dyn ToSql]) -> Result<usize> {
        let tx = self.conn.transaction().map_err(from_rusqlite)?;
        let affected = tx.execute(stmt.sql, params).map_err(from_rusqlite)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(affected)
    }

    /// Collect the integer first column of a read statement
    pub fn select_ids(&self, stmt: &Statement) -> Vec<i64> {
        self.select(stmt, &[])
            .iter()
            .filter_map(Row::id)
            .collect()
    }

    fn rollback_open(&self) {
        if self.conn.is_autocommit() {
            return;
        }
        if let Err(e) = self.conn.execute_batch("ROLLBACK") {
            tracing::warn!(error = %e, "rollback failed");
        }
    }
}

/// SQL name of the case-folding function
pub const FOLD_FUNCTION: &str = "fold";

/// Configure a connection
pub fn configure(conn: &Connection) -> Result<()> {
    // Referential integrity is the store's job
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(from_rusqlite)?;

    conn.create_scalar_function(
        FOLD_FUNCTION,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|s| s.to_lowercase()))
        },
    )
    .map_err(from_rusqlite)?;
    Ok(())
}

fn cell_from_value(value: Value) -> Cell {
    match value {
        Value::Null => Cell::Null,
        Value::Integer(i) => Cell::Integer(i),
        Value::Real(r) => Cell::Real(r),
        Value::Text(s) => Cell::Text(s),
        Value::Blob(b) => Cell::Text(String::from_utf8_lossy(&b).into_owned()),
    }
}
