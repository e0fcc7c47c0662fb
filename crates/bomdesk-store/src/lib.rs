//! bomdesk Store - Data Access Layer over SQLite
//!
//! Provides:
//! - `Database`: the single process-wide connection with the two statement
//!   primitives, `select` (rows) and `modify` (commit + affected count)
//! - Per-entity CRUD bindings with the update allow-list
//! - Timed substring/range searches
//! - Set-based bulk random-data generators
//! - Idempotent schema provisioning

pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;

// Re-export key types
pub use db::{Database, DatabaseConfig, Statement};
pub use errors::Result;
pub use repo::{InventoryRepo, SearchResult};
