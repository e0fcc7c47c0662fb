use bomdesk_core::model::{NewConsumption, NewMaterial, NewProduct};
use bomdesk_store::{Database, InventoryRepo};

/// Fresh provisioned in-memory database
#[allow(dead_code)]
pub fn setup_db() -> Database {
    Database::open_in_memory().unwrap()
}

/// Products {(1, Widget), (2, Gadget)}, Materials {(1, Steel)},
/// Consumptions {(1, 1, 1, 5)}
#[allow(dead_code)]
pub fn seed_widget_catalog(db: &mut Database) {
    for (name, description) in [("Widget", "small part"), ("Gadget", "large part")] {
        let created = InventoryRepo::create_product(
            db,
            &NewProduct {
                name: name.to_string(),
                description: description.to_string(),
            },
        );
        assert_eq!(created, 1);
    }
    let created = InventoryRepo::create_material(
        db,
        &NewMaterial {
            name: "Steel".to_string(),
            price_per_unit: 12.5,
            unit: "kg".to_string(),
        },
    );
    assert_eq!(created, 1);
    let created = InventoryRepo::create_consumption(
        db,
        &NewConsumption {
            product_id: 1,
            material_id: 1,
            quantity: 5.0,
        },
    );
    assert_eq!(created, 1);
}
