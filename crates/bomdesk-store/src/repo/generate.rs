//! Bulk random-data generators
//!
//! Each generator issues one set-based INSERT; the store produces the N
//! rows and their random values. Nothing loops row by row here.

#![allow(clippy::result_large_err)]

use crate::db::Database;
use crate::errors::Result;
use crate::repo::statements;
use bomdesk_core::errors::BomError;
use bomdesk_core::model::generate::{GENERATED_DESCRIPTION, GENERATED_UNIT};
use bomdesk_core::model::{GeneratorBounds, Table};

fn require_count(n: u32) -> Result<i64> {
    if n == 0 {
        return Err(BomError::InvalidCount {
            value: n.to_string(),
        }
        .into());
    }
    Ok(i64::from(n))
}

/// Insert `n` products with random 3-letter names
///
/// Returns the number of rows created (0 if the store rejected the insert).
///
/// # Errors
///
/// `InvalidCount` when `n` is 0.
pub fn generate_products(db: &mut Database, n: u32) -> Result<usize> {
    let n = require_count(n)?;
    Ok(db.modify(
        &statements::GENERATE_PRODUCTS,
        &[&n, &GENERATED_DESCRIPTION],
    ))
}

/// Insert `n` materials with random 2-letter names, random prices within
/// `bounds`, and unit `kg`
///
/// # Errors
///
/// `InvalidCount` when `n` is 0; `InvalidRange` when the price bounds are inverted.
pub fn generate_materials(db: &mut Database, n: u32, bounds: &GeneratorBounds) -> Result<usize> {
    let n = require_count(n)?;
    bounds.validate()?;
    Ok(db.modify(
        &statements::GENERATE_MATERIALS,
        &[
            &n,
            &i64::from(bounds.price_min),
            &i64::from(bounds.price_max),
            &GENERATED_UNIT,
        ],
    ))
}

/// Insert `n` consumptions referencing existing products and materials
///
/// Existing ids are fetched first and passed to the store as JSON arrays;
/// each generated row draws one of each uniformly at random.
///
/// # Errors
///
/// `EmptyIdSet` when there are no products or no materials. The insert is
/// not attempted in that case.
pub fn generate_consumptions(
    db: &mut Database,
    n: u32,
    bounds: &GeneratorBounds,
) -> Result<usize> {
    let n = require_count(n)?;
    bounds.validate()?;

    let product_ids = db.select_ids(&statements::PRODUCT_IDS);
    if product_ids.is_empty() {
        return Err(BomError::EmptyIdSet {
            table: Table::Product,
        }
        .into());
    }
    let material_ids = db.select_ids(&statements::MATERIAL_IDS);
    if material_ids.is_empty() {
        return Err(BomError::EmptyIdSet {
            table: Table::Material,
        }
        .into());
    }
    tracing::debug!(
        products = product_ids.len(),
        materials = material_ids.len(),
        "consumption id pools loaded"
    );

    let product_ids = serde_json::Value::from(product_ids).to_string();
    let material_ids = serde_json::Value::from(material_ids).to_string();
    Ok(db.modify(
        &statements::GENERATE_CONSUMPTIONS,
        &[
            &product_ids,
            &material_ids,
            &n,
            &i64::from(bounds.quantity_min),
            &i64::from(bounds.quantity_max),
        ],
    ))
}
