//! Updatable fields and input coercion
//!
//! Updates target one named field at a time. The set of fields each table
//! accepts is closed: `UpdateField` has one variant per (table, column)
//! pair, and `UpdateField::parse` is the only way from a field name to a
//! variant. Anything else is an `UnknownField` validation error.

use crate::errors::{BomError, Result};
use crate::model::Table;

/// Value shape a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
}

impl FieldKind {
    /// Human-readable description used in error messages
    pub fn describe(&self) -> &'static str {
        match self {
            FieldKind::Text => "a text",
            FieldKind::Integer => "an integer",
            FieldKind::Decimal => "a decimal",
        }
    }

    /// Coerce raw operator input into a typed value of this kind
    pub fn coerce(&self, field: &str, raw: &str) -> Result<FieldValue> {
        match self {
            FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Integer => parse_id(field, raw).map(FieldValue::Integer),
            FieldKind::Decimal => parse_decimal(field, raw).map(FieldValue::Decimal),
        }
    }
}

/// Typed value for a single-field update
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

impl FieldValue {
    /// Kind of this value
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Integer(_) => FieldKind::Integer,
            FieldValue::Decimal(_) => FieldKind::Decimal,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Decimal(d) => write!(f, "{}", d),
        }
    }
}

/// Allow-listed (table, field) pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateField {
    ProductName,
    ProductDescription,
    MaterialName,
    MaterialPricePerUnit,
    MaterialUnit,
    ConsumptionProduct,
    ConsumptionMaterial,
    ConsumptionQuantity,
}

const PRODUCT_FIELDS: [UpdateField; 2] = [UpdateField::ProductName, UpdateField::ProductDescription];
const MATERIAL_FIELDS: [UpdateField; 3] = [
    UpdateField::MaterialName,
    UpdateField::MaterialPricePerUnit,
    UpdateField::MaterialUnit,
];
const CONSUMPTION_FIELDS: [UpdateField; 3] = [
    UpdateField::ConsumptionProduct,
    UpdateField::ConsumptionMaterial,
    UpdateField::ConsumptionQuantity,
];

impl UpdateField {
    /// Allow-list of a table, in menu order
    pub fn allowed(table: Table) -> &'static [UpdateField] {
        match table {
            Table::Product => &PRODUCT_FIELDS,
            Table::Material => &MATERIAL_FIELDS,
            Table::Consumption => &CONSUMPTION_FIELDS,
        }
    }

    /// Resolve a field name against the table's allow-list
    ///
    /// # Errors
    ///
    /// `BomError::UnknownField` if the name is not allow-listed for `table`.
    pub fn parse(table: Table, name: &str) -> Result<Self> {
        let name = name.trim();
        Self::allowed(table)
            .iter()
            .copied()
            .find(|field| field.name() == name)
            .ok_or_else(|| BomError::UnknownField {
                table,
                field: name.to_string(),
            })
    }

    /// Owning table
    pub fn table(&self) -> Table {
        match self {
            UpdateField::ProductName | UpdateField::ProductDescription => Table::Product,
            UpdateField::MaterialName
            | UpdateField::MaterialPricePerUnit
            | UpdateField::MaterialUnit => Table::Material,
            UpdateField::ConsumptionProduct
            | UpdateField::ConsumptionMaterial
            | UpdateField::ConsumptionQuantity => Table::Consumption,
        }
    }

    /// Column name
    pub fn name(&self) -> &'static str {
        match self {
            UpdateField::ProductName | UpdateField::MaterialName => "name",
            UpdateField::ProductDescription => "description",
            UpdateField::MaterialPricePerUnit => "price_per_unit",
            UpdateField::MaterialUnit => "unit",
            UpdateField::ConsumptionProduct => "product_id",
            UpdateField::ConsumptionMaterial => "material_id",
            UpdateField::ConsumptionQuantity => "quantity",
        }
    }

    /// Value kind the column holds
    pub fn kind(&self) -> FieldKind {
        match self {
            UpdateField::ProductName
            | UpdateField::ProductDescription
            | UpdateField::MaterialName
            | UpdateField::MaterialUnit => FieldKind::Text,
            UpdateField::ConsumptionProduct | UpdateField::ConsumptionMaterial => {
                FieldKind::Integer
            }
            UpdateField::MaterialPricePerUnit | UpdateField::ConsumptionQuantity => {
                FieldKind::Decimal
            }
        }
    }

    /// Coerce raw input for this field
    pub fn coerce(&self, raw: &str) -> Result<FieldValue> {
        self.kind().coerce(self.name(), raw)
    }

    /// Check that a typed value fits this field
    ///
    /// Integers are accepted for decimal columns.
    pub fn check_value(&self, value: &FieldValue) -> Result<()> {
        let fits = matches!(
            (self.kind(), value.kind()),
            (FieldKind::Text, FieldKind::Text)
                | (FieldKind::Integer, FieldKind::Integer)
                | (FieldKind::Decimal, FieldKind::Decimal)
                | (FieldKind::Decimal, FieldKind::Integer)
        );
        if fits {
            Ok(())
        } else {
            Err(BomError::FieldTypeMismatch {
                field: self.name().to_string(),
                expected: self.kind().describe(),
            })
        }
    }
}

/// Parse a row id or other integer field
pub fn parse_id(field: &str, raw: &str) -> Result<i64> {
    raw.trim().parse().map_err(|_| BomError::InvalidNumber {
        field: field.to_string(),
        expected: "an integer",
        value: raw.to_string(),
    })
}

/// Parse a finite decimal (price, quantity)
pub fn parse_decimal(field: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| BomError::InvalidNumber {
            field: field.to_string(),
            expected: "a decimal",
            value: raw.to_string(),
        })
}

/// Parse a generation count; must be a positive integer
pub fn parse_count(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| BomError::InvalidCount {
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_lists_match_tables() {
        for table in Table::ALL {
            for field in UpdateField::allowed(table) {
                assert_eq!(field.table(), table);
            }
        }
    }

    #[test]
    fn test_parse_known_fields() {
        assert_eq!(
            UpdateField::parse(Table::Product, "description").unwrap(),
            UpdateField::ProductDescription
        );
        assert_eq!(
            UpdateField::parse(Table::Material, " price_per_unit ").unwrap(),
            UpdateField::MaterialPricePerUnit
        );
        assert_eq!(
            UpdateField::parse(Table::Consumption, "quantity").unwrap(),
            UpdateField::ConsumptionQuantity
        );
    }

    #[test]
    fn test_parse_rejects_field_of_other_table() {
        let err = UpdateField::parse(Table::Product, "unit").unwrap_err();
        assert_eq!(
            err,
            BomError::UnknownField {
                table: Table::Product,
                field: "unit".to_string()
            }
        );
    }

    #[test]
    fn test_id_is_not_updatable() {
        for table in Table::ALL {
            assert!(UpdateField::parse(table, "id").is_err());
        }
    }

    #[test]
    fn test_coerce_by_kind() {
        assert_eq!(
            UpdateField::MaterialPricePerUnit.coerce("12.5").unwrap(),
            FieldValue::Decimal(12.5)
        );
        assert_eq!(
            UpdateField::ConsumptionProduct.coerce(" 4 ").unwrap(),
            FieldValue::Integer(4)
        );
        assert_eq!(
            UpdateField::ProductName.coerce("Widget").unwrap(),
            FieldValue::Text("Widget".to_string())
        );
        assert!(UpdateField::ConsumptionMaterial.coerce("four").is_err());
    }

    #[test]
    fn test_check_value_accepts_integer_for_decimal() {
        assert!(UpdateField::ConsumptionQuantity
            .check_value(&FieldValue::Integer(3))
            .is_ok());
        assert!(UpdateField::ConsumptionProduct
            .check_value(&FieldValue::Decimal(3.5))
            .is_err());
        assert!(UpdateField::ProductName
            .check_value(&FieldValue::Integer(1))
            .is_err());
    }

    #[test]
    fn test_parse_decimal_rejects_non_finite() {
        assert!(parse_decimal("price", "NaN").is_err());
        assert!(parse_decimal("price", "inf").is_err());
        assert_eq!(parse_decimal("price", "0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("25").unwrap(), 25);
        assert!(parse_count("0").is_err());
        assert!(parse_count("-3").is_err());
        assert!(parse_count("ten").is_err());
    }
}
