//! Insert payloads
//!
//! Identities are assigned by the store, so creation payloads carry every
//! field except `id`.

use serde::{Deserialize, Serialize};

/// Fields of a Product to insert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
}

/// Fields of a Material to insert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMaterial {
    pub name: String,
    /// Must be non-negative; the store enforces this with a CHECK constraint
    pub price_per_unit: f64,
    /// Measurement unit, e.g. "kg"
    pub unit: String,
}

/// Fields of a Consumption to insert
///
/// Product and material references are not checked here: the store's
/// foreign keys reject dangling ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewConsumption {
    pub product_id: i64,
    pub material_id: i64,
    pub quantity: f64,
}
