//! Timed searches
//!
//! Each search returns its rows plus the wall-clock time of the select
//! call alone, in milliseconds.

use crate::db::{Database, Statement};
use crate::repo::statements;
use bomdesk_core::model::{ConsumptionSearch, MaterialSearch, ProductSearch, Row};
use rusqlite::types::ToSql;
use std::time::Instant;

/// Rows matched by a search and how long the query took
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub rows: Vec<Row>,
    pub elapsed_ms: f64,
}

fn timed(db: &Database, stmt: &Statement, params: &[&dyn ToSql]) -> SearchResult {
    let start = Instant::now();
    let rows = db.select(stmt, params);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    SearchResult { rows, elapsed_ms }
}

/// Products whose name contains `name_like`, case-insensitively
pub fn search_products(db: &Database, filter: &ProductSearch) -> SearchResult {
    timed(db, &statements::SEARCH_PRODUCTS, &[&filter.name_like])
}

/// Materials by name fragment and price range
pub fn search_materials(db: &Database, filter: &MaterialSearch) -> SearchResult {
    timed(
        db,
        &statements::SEARCH_MATERIALS,
        &[&filter.name_like, &filter.price.min, &filter.price.max],
    )
}

/// Consumptions by joined product/material name fragments and quantity range
pub fn search_consumptions(db: &Database, filter: &ConsumptionSearch) -> SearchResult {
    timed(
        db,
        &statements::SEARCH_CONSUMPTIONS,
        &[
            &filter.product_like,
            &filter.material_like,
            &filter.quantity.min,
            &filter.quantity.max,
        ],
    )
}
