//! Bulk generation settings
//!
//! The store draws every generated value itself; this module only fixes
//! the placeholder text and the inclusive integer bounds it draws from.

use serde::Deserialize;

use crate::errors::Result;
use crate::model::RangeFilter;

/// Fixed placeholder description for generated products
pub const GENERATED_DESCRIPTION: &str = "Auto-generated description";
/// Fixed unit for generated materials
pub const GENERATED_UNIT: &str = "kg";
/// Letters in a generated product name
pub const PRODUCT_NAME_LEN: usize = 3;
/// Letters in a generated material name
pub const MATERIAL_NAME_LEN: usize = 2;

/// Integer ranges the store draws random prices and quantities from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorBounds {
    pub price_min: u32,
    pub price_max: u32,
    pub quantity_min: u32,
    pub quantity_max: u32,
}

impl Default for GeneratorBounds {
    fn default() -> Self {
        Self {
            price_min: 1,
            price_max: 100,
            quantity_min: 1,
            quantity_max: 20,
        }
    }
}

impl GeneratorBounds {
    /// Reject inverted ranges
    pub fn validate(&self) -> Result<()> {
        RangeFilter::new(
            "price_per_unit",
            Some(f64::from(self.price_min)),
            Some(f64::from(self.price_max)),
        )?;
        RangeFilter::new(
            "quantity",
            Some(f64::from(self.quantity_min)),
            Some(f64::from(self.quantity_max)),
        )?;
        Ok(())
    }
}
