//! SQL templates
//!
//! Every statement the Data Access Layer sends lives here. Lookups are
//! exhaustive matches over `Table` and `UpdateField`, so a new table or
//! field cannot silently lack a template.

use crate::db::Statement;
use bomdesk_core::model::{Table, UpdateField};

// ---------- INSERT ----------

pub const INSERT_PRODUCT: Statement = Statement {
    name: "insert_product",
    sql: "INSERT INTO product (name, description) VALUES (?1, ?2)",
};

pub const INSERT_MATERIAL: Statement = Statement {
    name: "insert_material",
    sql: "INSERT INTO material (name, price_per_unit, unit) VALUES (?1, ?2, ?3)",
};

pub const INSERT_CONSUMPTION: Statement = Statement {
    name: "insert_consumption",
    sql: "INSERT INTO consumption (product_id, material_id, quantity) VALUES (?1, ?2, ?3)",
};

// ---------- READ ----------

const READ_PRODUCT: Statement = Statement {
    name: "read_product",
    sql: "SELECT id, name, description FROM product ORDER BY id",
};

const READ_MATERIAL: Statement = Statement {
    name: "read_material",
    sql: "SELECT id, name, price_per_unit, unit FROM material ORDER BY id",
};

const READ_CONSUMPTION: Statement = Statement {
    name: "read_consumption",
    sql: "SELECT c.id, p.name AS product, m.name AS material, c.quantity
          FROM consumption c
          JOIN product p ON c.product_id = p.id
          JOIN material m ON c.material_id = m.id
          ORDER BY c.id",
};

pub const PRODUCT_IDS: Statement = Statement {
    name: "product_ids",
    sql: "SELECT id FROM product ORDER BY id",
};

pub const MATERIAL_IDS: Statement = Statement {
    name: "material_ids",
    sql: "SELECT id FROM material ORDER BY id",
};

/// Read projection of a table
pub fn read(table: Table) -> &'static Statement {
    match table {
        Table::Product => &READ_PRODUCT,
        Table::Material => &READ_MATERIAL,
        Table::Consumption => &READ_CONSUMPTION,
    }
}

// ---------- UPDATE ----------

const UPDATE_PRODUCT_NAME: Statement = Statement {
    name: "update_product_name",
    sql: "UPDATE product SET name = ?1 WHERE id = ?2",
};
const UPDATE_PRODUCT_DESCRIPTION: Statement = Statement {
    name: "update_product_description",
    sql: "UPDATE product SET description = ?1 WHERE id = ?2",
};
const UPDATE_MATERIAL_NAME: Statement = Statement {
    name: "update_material_name",
    sql: "UPDATE material SET name = ?1 WHERE id = ?2",
};
const UPDATE_MATERIAL_PRICE: Statement = Statement {
    name: "update_material_price_per_unit",
    sql: "UPDATE material SET price_per_unit = ?1 WHERE id = ?2",
};
const UPDATE_MATERIAL_UNIT: Statement = Statement {
    name: "update_material_unit",
    sql: "UPDATE material SET unit = ?1 WHERE id = ?2",
};
const UPDATE_CONSUMPTION_PRODUCT: Statement = Statement {
    name: "update_consumption_product_id",
    sql: "UPDATE consumption SET product_id = ?1 WHERE id = ?2",
};
const UPDATE_CONSUMPTION_MATERIAL: Statement = Statement {
    name: "update_consumption_material_id",
    sql: "UPDATE consumption SET material_id = ?1 WHERE id = ?2",
};
const UPDATE_CONSUMPTION_QUANTITY: Statement = Statement {
    name: "update_consumption_quantity",
    sql: "UPDATE consumption SET quantity = ?1 WHERE id = ?2",
};

/// Single-field UPDATE template; binds `?1` = value, `?2` = id
pub fn update(field: UpdateField) -> &'static Statement {
    match field {
        UpdateField::ProductName => &UPDATE_PRODUCT_NAME,
        UpdateField::ProductDescription => &UPDATE_PRODUCT_DESCRIPTION,
        UpdateField::MaterialName => &UPDATE_MATERIAL_NAME,
        UpdateField::MaterialPricePerUnit => &UPDATE_MATERIAL_PRICE,
        UpdateField::MaterialUnit => &UPDATE_MATERIAL_UNIT,
        UpdateField::ConsumptionProduct => &UPDATE_CONSUMPTION_PRODUCT,
        UpdateField::ConsumptionMaterial => &UPDATE_CONSUMPTION_MATERIAL,
        UpdateField::ConsumptionQuantity => &UPDATE_CONSUMPTION_QUANTITY,
    }
}

// ---------- DELETE ----------

const DELETE_PRODUCT: Statement = Statement {
    name: "delete_product",
    sql: "DELETE FROM product WHERE id = ?1",
};
const DELETE_MATERIAL: Statement = Statement {
    name: "delete_material",
    sql: "DELETE FROM material WHERE id = ?1",
};
const DELETE_CONSUMPTION: Statement = Statement {
    name: "delete_consumption",
    sql: "DELETE FROM consumption WHERE id = ?1",
};

/// DELETE-by-id template
pub fn delete(table: Table) -> &'static Statement {
    match table {
        Table::Product => &DELETE_PRODUCT,
        Table::Material => &DELETE_MATERIAL,
        Table::Consumption => &DELETE_CONSUMPTION,
    }
}

// ---------- SEARCH ----------
//
// Substring match on folded text; an empty fragment matches every row
// (`instr(x, '') = 1`). A NULL bound leaves that end of a range open.

pub const SEARCH_PRODUCTS: Statement = Statement {
    name: "search_products",
    sql: "SELECT id, name, description
          FROM product
          WHERE instr(fold(name), fold(?1)) > 0
          ORDER BY id",
};

pub const SEARCH_MATERIALS: Statement = Statement {
    name: "search_materials",
    sql: "SELECT id, name, price_per_unit, unit
          FROM material
          WHERE instr(fold(name), fold(?1)) > 0
            AND (?2 IS NULL OR price_per_unit >= ?2)
            AND (?3 IS NULL OR price_per_unit <= ?3)
          ORDER BY id",
};

pub const SEARCH_CONSUMPTIONS: Statement = Statement {
    name: "search_consumptions",
    sql: "SELECT c.id, p.name AS product, m.name AS material, c.quantity
          FROM consumption c
          JOIN product p ON c.product_id = p.id
          JOIN material m ON c.material_id = m.id
          WHERE instr(fold(p.name), fold(?1)) > 0
            AND instr(fold(m.name), fold(?2)) > 0
            AND (?3 IS NULL OR c.quantity >= ?3)
            AND (?4 IS NULL OR c.quantity <= ?4)
          ORDER BY c.id",
};

// ---------- GENERATE ----------
//
// Set-based: a recursive CTE yields N slots and the store computes every
// random value itself. `abs(random() % k)` is uniform enough over [0, k).

pub const GENERATE_PRODUCTS: Statement = Statement {
    name: "generate_products",
    sql: "WITH RECURSIVE seq(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < ?1)
          INSERT INTO product (name, description)
          SELECT char(65 + abs(random() % 26))
              || char(65 + abs(random() % 26))
              || char(65 + abs(random() % 26)),
                 ?2
          FROM seq",
};

/// Binds `?1` = N, `?2`/`?3` = price range, `?4` = unit
pub const GENERATE_MATERIALS: Statement = Statement {
    name: "generate_materials",
    sql: "WITH RECURSIVE seq(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < ?1)
          INSERT INTO material (name, price_per_unit, unit)
          SELECT char(65 + abs(random() % 26))
              || char(65 + abs(random() % 26)),
                 ?2 + abs(random() % (?3 - ?2 + 1)),
                 ?4
          FROM seq",
};

/// Binds `?1`/`?2` = JSON arrays of product/material ids, `?3` = N,
/// `?4`/`?5` = quantity range
///
/// Each slot draws its product and material independently and uniformly,
/// with replacement.
pub const GENERATE_CONSUMPTIONS: Statement = Statement {
    name: "generate_consumptions",
    sql: "WITH RECURSIVE seq(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < ?3)
          INSERT INTO consumption (product_id, material_id, quantity)
          SELECT json_extract(?1, '$[' || abs(random() % json_array_length(?1)) || ']'),
                 json_extract(?2, '$[' || abs(random() % json_array_length(?2)) || ']'),
                 ?4 + abs(random() % (?5 - ?4 + 1))
          FROM seq",
};
