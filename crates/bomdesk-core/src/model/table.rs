//! Table identities, keys and read projections

/// The three relational tables behind the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Product,
    Material,
    Consumption,
}

impl Table {
    /// Menu order
    pub const ALL: [Table; 3] = [Table::Product, Table::Material, Table::Consumption];

    /// Stable key shown in menus and log events
    pub fn key(&self) -> &'static str {
        match self {
            Table::Product => "product",
            Table::Material => "material",
            Table::Consumption => "consumption",
        }
    }

    /// Capitalised name for operator messages
    pub fn label(&self) -> &'static str {
        match self {
            Table::Product => "Product",
            Table::Material => "Material",
            Table::Consumption => "Consumption",
        }
    }

    /// Column headers of the read projection
    ///
    /// Consumption reads join Product and Material, so the two middle
    /// columns carry names instead of foreign keys.
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Table::Product => &["id", "name", "description"],
            Table::Material => &["id", "name", "price_per_unit", "unit"],
            Table::Consumption => &["id", "product", "material", "quantity"],
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
