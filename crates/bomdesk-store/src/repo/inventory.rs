//! Per-entity bindings over the statement primitives
//!
//! Create, update and delete go through `Database::modify`; read goes
//! through `Database::select`. Only update can fail, and only with a
//! validation error raised before any statement is prepared.

#![allow(clippy::result_large_err)]

use crate::db::Database;
use crate::errors::Result;
use crate::repo::statements;
use bomdesk_core::model::{
    FieldValue, NewConsumption, NewMaterial, NewProduct, Row, Table, UpdateField,
};
use rusqlite::types::Value;

/// Inventory repository for products, materials and consumptions
pub struct InventoryRepo;

impl InventoryRepo {
    /// Insert a product; returns the number of rows created (1, or 0 on store failure)
    pub fn create_product(db: &mut Database, product: &NewProduct) -> usize {
        db.modify(
            &statements::INSERT_PRODUCT,
            &[&product.name, &product.description],
        )
    }

    /// Insert a material
    pub fn create_material(db: &mut Database, material: &NewMaterial) -> usize {
        db.modify(
            &statements::INSERT_MATERIAL,
            &[&material.name, &material.price_per_unit, &material.unit],
        )
    }

    /// Insert a consumption
    ///
    /// Dangling product/material ids are rejected by the store's foreign
    /// keys, which shows up here as 0 rows created.
    pub fn create_consumption(db: &mut Database, consumption: &NewConsumption) -> usize {
        db.modify(
            &statements::INSERT_CONSUMPTION,
            &[
                &consumption.product_id,
                &consumption.material_id,
                &consumption.quantity,
            ],
        )
    }

    /// Read every row of a table in id order
    pub fn read(db: &Database, table: Table) -> Vec<Row> {
        db.select(statements::read(table), &[])
    }

    /// Set one allow-listed field of one row
    ///
    /// Returns the affected row count; 0 means no row has that id.
    ///
    /// # Errors
    ///
    /// `FieldTypeMismatch` when `value` does not fit the field's kind.
    pub fn update(
        db: &mut Database,
        field: UpdateField,
        id: i64,
        value: &FieldValue,
    ) -> Result<usize> {
        field.check_value(value)?;
        let value = sql_value(value);
        Ok(db.modify(statements::update(field), &[&value, &id]))
    }

    /// Set one allow-listed field, surfacing store refusals
    ///
    /// Unlike `update`, a constraint violation or other store failure is an
    /// error instead of 0, so callers can tell it apart from a missing id.
    ///
    /// # Errors
    ///
    /// `FieldTypeMismatch` as for `update`; `Persistence` carrying the
    /// table, row id and field when the store refuses the change.
    pub fn try_update(
        db: &mut Database,
        field: UpdateField,
        id: i64,
        value: &FieldValue,
    ) -> Result<usize> {
        field.check_value(value)?;
        let value = sql_value(value);
        db.try_modify(statements::update(field), &[&value, &id])
            .map_err(|e| {
                e.with_table(field.table())
                    .with_entity_id(id)
                    .with_field(field.name())
            })
    }

    /// Set one field by name
    ///
    /// # Errors
    ///
    /// `UnknownField` when `field` is not allow-listed for `table`; no
    /// statement is sent in that case.
    pub fn update_by_name(
        db: &mut Database,
        table: Table,
        id: i64,
        field: &str,
        value: &FieldValue,
    ) -> Result<usize> {
        let field = UpdateField::parse(table, field)?;
        Self::update(db, field, id, value)
    }

    /// Delete one row by id; 0 means no row has that id (or the store refused)
    pub fn delete(db: &mut Database, table: Table, id: i64) -> usize {
        db.modify(statements::delete(table), &[&id])
    }

    /// Delete one row by id; 0 means no row has that id
    ///
    /// # Errors
    ///
    /// `Persistence` carrying the table and row id when the store refuses,
    /// e.g. a product still referenced by a consumption.
    pub fn try_delete(db: &mut Database, table: Table, id: i64) -> Result<usize> {
        db.try_modify(statements::delete(table), &[&id])
            .map_err(|e| e.with_table(table).with_entity_id(id))
    }
}

fn sql_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Text(s) => Value::Text(s.clone()),
        FieldValue::Integer(i) => Value::Integer(*i),
        FieldValue::Decimal(d) => Value::Real(*d),
    }
}
