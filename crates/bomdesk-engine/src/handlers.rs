//! Operation handlers
//!
//! One handler per `Selection`, reached through an exhaustive match. Each
//! handler coerces its raw arguments, calls the store, and describes what
//! happened as an `Outcome`. Rendering is left to the Orchestrator.

#![allow(clippy::result_large_err)]

use bomdesk_core::model::{
    parse_count, parse_decimal, parse_id, ConsumptionSearch, FieldValue, GeneratorBounds,
    MaterialSearch, NewConsumption, NewMaterial, NewProduct, ProductSearch, RangeFilter, Row,
    Table, UpdateField,
};
use bomdesk_core::{Generator, RawArgs, Selection};
use bomdesk_store::errors::Result;
use bomdesk_store::repo::generate::{generate_consumptions, generate_materials, generate_products};
use bomdesk_store::repo::search::{search_consumptions, search_materials, search_products};
use bomdesk_store::{Database, InventoryRepo, SearchResult};

/// What a successful operation did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Rows inserted by a create; 0 when the store refused the row
    Created { table: Table, count: usize },
    /// Rows inserted by a bulk generator
    Generated { table: Table, count: usize },
    Updated {
        field: UpdateField,
        id: i64,
        value: FieldValue,
    },
    Deleted { table: Table, id: i64 },
    /// Update or delete matched no row
    NoMatch { table: Table, id: i64, verb: &'static str },
    Listing { table: Table, rows: Vec<Row> },
    Found { table: Table, result: SearchResult },
}

impl Outcome {
    /// Rows written, for outcomes that write
    pub fn affected(&self) -> Option<usize> {
        match self {
            Outcome::Created { count, .. } | Outcome::Generated { count, .. } => Some(*count),
            Outcome::Updated { .. } | Outcome::Deleted { .. } => Some(1),
            Outcome::NoMatch { .. } => Some(0),
            Outcome::Listing { .. } | Outcome::Found { .. } => None,
        }
    }

    /// One-line operator message, if the outcome has one
    ///
    /// Listings and search results render as tables instead; searches add a
    /// timing line.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Created { table, count: 0 } => {
                Some(format!("[INFO] No {} was created", table.key()))
            }
            Outcome::Created { table, count } => {
                Some(format!("[SUCCESS] {} created ({} row)", table.label(), count))
            }
            Outcome::Generated { table, count } => Some(format!(
                "[SUCCESS] Generated {} {} rows",
                count,
                table.key()
            )),
            Outcome::Updated { field, id, value } => Some(format!(
                "[SUCCESS] {} id={} updated: set {} = {}",
                field.table().label(),
                id,
                field.name(),
                value
            )),
            Outcome::Deleted { table, id } => {
                Some(format!("[SUCCESS] {} id={} deleted", table.label(), id))
            }
            Outcome::NoMatch { table, id, verb } => Some(format!(
                "[INFO] No {} with id={}, nothing was {}",
                table.key(),
                id,
                verb
            )),
            Outcome::Listing { rows, table } if rows.is_empty() => {
                Some(format!("[INFO] No {} rows", table.key()))
            }
            Outcome::Listing { .. } => None,
            Outcome::Found { result, .. } => Some(format!(
                "[TIME] Query executed in {:.3} ms",
                result.elapsed_ms
            )),
        }
    }
}

/// Run one selected operation against the store
///
/// # Errors
///
/// Validation errors from coercion (`InvalidInput`, `UnknownField`,
/// `EmptyIdSet`), and `Persistence` when the store refuses an update or a
/// delete. Other store failures surface as empty or zero results.
pub fn execute(
    db: &mut Database,
    bounds: &GeneratorBounds,
    selection: Selection,
    args: &RawArgs,
) -> Result<Outcome> {
    match selection {
        Selection::Create(Table::Product) => create_product(db, args),
        Selection::Create(Table::Material) => create_material(db, args),
        Selection::Create(Table::Consumption) => create_consumption(db, args),
        Selection::Read(table) => Ok(Outcome::Listing {
            table,
            rows: InventoryRepo::read(db, table),
        }),
        Selection::Update(table) => update(db, table, args),
        Selection::Delete(table) => delete(db, table, args),
        Selection::Generate(generator) => generate(db, bounds, generator, args),
        Selection::Search(Table::Product) => {
            let [name] = args.take::<1>()?;
            let filter = ProductSearch {
                name_like: name.trim().to_string(),
            };
            Ok(Outcome::Found {
                table: Table::Product,
                result: search_products(db, &filter),
            })
        }
        Selection::Search(Table::Material) => {
            let [name, min, max] = args.take::<3>()?;
            let filter = MaterialSearch {
                name_like: name.trim().to_string(),
                price: RangeFilter::parse("price_per_unit", min, max)?,
            };
            Ok(Outcome::Found {
                table: Table::Material,
                result: search_materials(db, &filter),
            })
        }
        Selection::Search(Table::Consumption) => {
            let [product, material, min, max] = args.take::<4>()?;
            let filter = ConsumptionSearch {
                product_like: product.trim().to_string(),
                material_like: material.trim().to_string(),
                quantity: RangeFilter::parse("quantity", min, max)?,
            };
            Ok(Outcome::Found {
                table: Table::Consumption,
                result: search_consumptions(db, &filter),
            })
        }
    }
}

fn create_product(db: &mut Database, args: &RawArgs) -> Result<Outcome> {
    let [name, description] = args.take::<2>()?;
    let product = NewProduct {
        name: name.to_string(),
        description: description.to_string(),
    };
    Ok(Outcome::Created {
        table: Table::Product,
        count: InventoryRepo::create_product(db, &product),
    })
}

fn create_material(db: &mut Database, args: &RawArgs) -> Result<Outcome> {
    let [name, price, unit] = args.take::<3>()?;
    let material = NewMaterial {
        name: name.to_string(),
        price_per_unit: parse_decimal("price_per_unit", price)?,
        unit: unit.to_string(),
    };
    Ok(Outcome::Created {
        table: Table::Material,
        count: InventoryRepo::create_material(db, &material),
    })
}

fn create_consumption(db: &mut Database, args: &RawArgs) -> Result<Outcome> {
    let [product_id, material_id, quantity] = args.take::<3>()?;
    let consumption = NewConsumption {
        product_id: parse_id("product_id", product_id)?,
        material_id: parse_id("material_id", material_id)?,
        quantity: parse_decimal("quantity", quantity)?,
    };
    Ok(Outcome::Created {
        table: Table::Consumption,
        count: InventoryRepo::create_consumption(db, &consumption),
    })
}

fn update(db: &mut Database, table: Table, args: &RawArgs) -> Result<Outcome> {
    let [id, field, value] = args.take::<3>()?;
    let id = parse_id("id", id)?;
    let field = UpdateField::parse(table, field)?;
    let value = field.coerce(value)?;

    match InventoryRepo::try_update(db, field, id, &value)? {
        0 => Ok(Outcome::NoMatch {
            table,
            id,
            verb: "updated",
        }),
        _ => Ok(Outcome::Updated { field, id, value }),
    }
}

fn delete(db: &mut Database, table: Table, args: &RawArgs) -> Result<Outcome> {
    let [id] = args.take::<1>()?;
    let id = parse_id("id", id)?;

    match InventoryRepo::try_delete(db, table, id)? {
        0 => Ok(Outcome::NoMatch {
            table,
            id,
            verb: "deleted",
        }),
        _ => Ok(Outcome::Deleted { table, id }),
    }
}

fn generate(
    db: &mut Database,
    bounds: &GeneratorBounds,
    generator: Generator,
    args: &RawArgs,
) -> Result<Outcome> {
    let [n] = args.take::<1>()?;
    let n = parse_count(n)?;

    let count = match generator {
        Generator::Products => generate_products(db, n)?,
        Generator::Materials => generate_materials(db, n, bounds)?,
        Generator::Consumptions => generate_consumptions(db, n, bounds)?,
    };
    Ok(Outcome::Generated {
        table: generator.table(),
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bomdesk_core::errors::ExErrorKind;

    fn args(values: &[&str]) -> RawArgs {
        values.iter().copied().collect()
    }

    fn run(db: &mut Database, selection: Selection, values: &[&str]) -> Result<Outcome> {
        execute(db, &GeneratorBounds::default(), selection, &args(values))
    }

    #[test]
    fn test_create_then_update_reports_change() {
        let mut db = Database::open_in_memory().unwrap();
        run(&mut db, Selection::Create(Table::Product), &["Widget", "part"]).unwrap();

        let outcome = run(&mut db, Selection::Update(Table::Product), &["1", "name", "Sprocket"]).unwrap();

        assert_eq!(
            outcome.message().unwrap(),
            "[SUCCESS] Product id=1 updated: set name = Sprocket"
        );
    }

    #[test]
    fn test_non_numeric_price_is_invalid_input() {
        let mut db = Database::open_in_memory().unwrap();
        let err = run(&mut db, Selection::Create(Table::Material), &["Steel", "abc", "kg"]).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert_eq!(err.field(), Some("price_per_unit"));
        assert!(InventoryRepo::read(&db, Table::Material).is_empty());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut db = Database::open_in_memory().unwrap();
        let err = run(&mut db, Selection::Update(Table::Consumption), &["1", "name", "x"]).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::UnknownField);
    }

    #[test]
    fn test_affected_counts_only_writes() {
        let mut db = Database::open_in_memory().unwrap();
        let created = run(&mut db, Selection::Create(Table::Product), &["Widget", "part"]).unwrap();
        let missing = run(&mut db, Selection::Delete(Table::Product), &["9"]).unwrap();
        let listing = run(&mut db, Selection::Read(Table::Product), &[]).unwrap();

        assert_eq!(created.affected(), Some(1));
        assert_eq!(missing.affected(), Some(0));
        assert_eq!(listing.affected(), None);
    }

    #[test]
    fn test_delete_missing_id_is_no_match() {
        let mut db = Database::open_in_memory().unwrap();
        let outcome = run(&mut db, Selection::Delete(Table::Material), &["12"]).unwrap();

        assert_eq!(
            outcome,
            Outcome::NoMatch {
                table: Table::Material,
                id: 12,
                verb: "deleted"
            }
        );
        assert_eq!(
            outcome.message().unwrap(),
            "[INFO] No material with id=12, nothing was deleted"
        );
    }

    #[test]
    fn test_generate_count_must_be_positive() {
        let mut db = Database::open_in_memory().unwrap();
        for raw in ["0", "-3", "many", ""] {
            let err = run(&mut db, Selection::Generate(Generator::Products), &[raw]).unwrap_err();
            assert_eq!(err.kind(), ExErrorKind::InvalidInput, "{:?}", raw);
        }
    }

    #[test]
    fn test_wrong_argument_count_is_internal() {
        let mut db = Database::open_in_memory().unwrap();
        let err = run(&mut db, Selection::Delete(Table::Product), &[]).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Internal);
    }

    #[test]
    fn test_refused_delete_is_an_error_not_a_no_match() {
        let mut db = Database::open_in_memory().unwrap();
        run(&mut db, Selection::Create(Table::Product), &["Widget", "part"]).unwrap();
        run(&mut db, Selection::Create(Table::Material), &["Steel", "12.5", "kg"]).unwrap();
        run(&mut db, Selection::Create(Table::Consumption), &["1", "1", "5"]).unwrap();

        let err = run(&mut db, Selection::Delete(Table::Product), &["1"]).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::Persistence);
        assert_eq!(err.table(), Some(Table::Product));
        assert_eq!(err.entity_id(), Some(1));
        assert_eq!(InventoryRepo::read(&db, Table::Product).len(), 1);
    }

    #[test]
    fn test_refused_update_is_an_error_not_a_no_match() {
        let mut db = Database::open_in_memory().unwrap();
        run(&mut db, Selection::Create(Table::Material), &["Steel", "12.5", "kg"]).unwrap();

        let err = run(
            &mut db,
            Selection::Update(Table::Material),
            &["1", "price_per_unit", "-4"],
        )
        .unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::Persistence);
        assert_eq!(err.table(), Some(Table::Material));
        assert_eq!(err.entity_id(), Some(1));
        assert_eq!(err.field(), Some("price_per_unit"));
    }

    #[test]
    fn test_search_outcome_reports_timing() {
        let mut db = Database::open_in_memory().unwrap();
        let outcome = run(&mut db, Selection::Search(Table::Product), &[""]).unwrap();

        let message = outcome.message().unwrap();
        assert!(message.starts_with("[TIME] Query executed in "));
        assert!(message.ends_with(" ms"));
    }

    #[test]
    fn test_inverted_search_range_rejected() {
        let mut db = Database::open_in_memory().unwrap();
        let err = run(&mut db, Selection::Search(Table::Material), &["", "9", "1"]).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    }
}
