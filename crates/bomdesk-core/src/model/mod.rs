pub mod entity;
pub mod field;
pub mod generate;
pub mod row;
pub mod search;
pub mod table;

pub use entity::{NewConsumption, NewMaterial, NewProduct};
pub use field::{parse_count, parse_decimal, parse_id, FieldKind, FieldValue, UpdateField};
pub use generate::GeneratorBounds;
pub use row::{Cell, Row};
pub use search::{ConsumptionSearch, MaterialSearch, ProductSearch, RangeFilter};
pub use table::Table;
