//! Search filters
//!
//! Empty substring filters match everything; absent range bounds are open.

use crate::errors::{BomError, Result};
use crate::model::field::parse_decimal;

/// Optional inclusive numeric range; `None` leaves that end open
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeFilter {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangeFilter {
    /// Build a range, rejecting `min > max`
    pub fn new(field: &str, min: Option<f64>, max: Option<f64>) -> Result<Self> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(BomError::InvalidRange {
                    field: field.to_string(),
                    min: lo,
                    max: hi,
                });
            }
        }
        Ok(Self { min, max })
    }

    /// Parse raw bounds; blank input leaves that end open
    pub fn parse(field: &str, raw_min: &str, raw_max: &str) -> Result<Self> {
        let bound = |raw: &str| -> Result<Option<f64>> {
            if raw.trim().is_empty() {
                Ok(None)
            } else {
                parse_decimal(field, raw).map(Some)
            }
        };
        Self::new(field, bound(raw_min)?, bound(raw_max)?)
    }
}

/// Product search: case-insensitive substring on name
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductSearch {
    pub name_like: String,
}

/// Material search: substring on name plus a price range
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialSearch {
    pub name_like: String,
    pub price: RangeFilter,
}

/// Consumption search over the joined product and material names
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConsumptionSearch {
    pub product_like: String,
    pub material_like: String,
    pub quantity: RangeFilter,
}
