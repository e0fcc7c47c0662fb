//! Schema provisioning
//!
//! The inventory DDL is embedded at compile time and applied with
//! `CREATE ... IF NOT EXISTS`, so provisioning an existing database is a
//! no-op. There is no version ledger.

use crate::errors::{provision_error, Result};
use rusqlite::Connection;

/// Embedded inventory DDL
pub const INVENTORY_SQL: &str = include_str!("../schema/inventory.sql");

/// Create the product, material and consumption tables if missing
pub fn provision(conn: &Connection) -> Result<()> {
    conn.execute_batch(INVENTORY_SQL)
        .map_err(|e| provision_error(&e.to_string()))?;
    tracing::debug!("inventory schema provisioned");
    Ok(())
}
