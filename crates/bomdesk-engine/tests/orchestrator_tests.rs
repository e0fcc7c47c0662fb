// Integration tests for the menu Orchestrator
// Drives whole sessions through a scripted prompter

mod common;

use bomdesk_core::model::{Cell, GeneratorBounds, Row, Table};
use bomdesk_core::registry::RETRY_NOTICE;
use bomdesk_engine::{Exit, Orchestrator, SessionSummary};
use bomdesk_store::{Database, DatabaseConfig, InventoryRepo};
use common::{script, ScriptedPrompter, Shown, QUIT, SEED_WIDGET_CATALOG};
use tempfile::TempDir;

fn run_session(lines: &[&str]) -> (SessionSummary, ScriptedPrompter) {
    let db = Database::open_in_memory().unwrap();
    let mut prompter = ScriptedPrompter::new(lines);
    let summary = Orchestrator::new(db, GeneratorBounds::default())
        .run(&mut prompter)
        .unwrap();
    (summary, prompter)
}

fn file_config() -> (TempDir, DatabaseConfig) {
    let temp_dir = TempDir::new().unwrap();
    let config = DatabaseConfig {
        path: temp_dir.path().join("bomdesk.db"),
        provision_schema: true,
    };
    (temp_dir, config)
}

#[test]
fn test_quit_ends_session_immediately() {
    let (summary, prompter) = run_session(QUIT);

    assert_eq!(
        summary,
        SessionSummary {
            exit: Exit::Quit,
            completed: 0,
            failed: 0
        }
    );
    assert_eq!(prompter.remaining(), 0);
    assert!(matches!(
        &prompter.shown[0],
        Shown::Options { title, options } if title == "Select action" && options.len() == 7
    ));
}

#[test]
fn test_invalid_menu_choices_are_reprompted() {
    let (summary, prompter) = run_session(&["9", "abc", "0", "7"]);

    assert_eq!(summary.exit, Exit::Quit);
    assert_eq!(prompter.notices(), vec![RETRY_NOTICE; 3]);
    assert_eq!(prompter.error_count(), 0);
}

#[test]
fn test_search_consumptions_by_product_fragment() {
    let lines = script(&[SEED_WIDGET_CATALOG, &["6", "3", "widg", "", "", ""], QUIT]);
    let (summary, prompter) = run_session(&lines);

    assert_eq!(summary.completed, 5);
    assert_eq!(summary.failed, 0);

    let tables = prompter.tables();
    let (title, rows) = tables.last().unwrap();
    assert_eq!(*title, "Consumption search results");
    assert_eq!(
        rows.to_vec(),
        vec![Row::new(vec![
            Cell::Integer(1),
            Cell::Text("Widget".to_string()),
            Cell::Text("Steel".to_string()),
            Cell::Real(5.0),
        ])]
    );
    assert!(prompter
        .notices()
        .last()
        .unwrap()
        .starts_with("[TIME] Query executed in "));
}

#[test]
fn test_search_is_case_insensitive_end_to_end() {
    let lines = script(&[SEED_WIDGET_CATALOG, &["6", "3", "WIDG", "", "", ""], QUIT]);
    let (_, prompter) = run_session(&lines);

    let tables = prompter.tables();
    assert_eq!(tables.last().unwrap().1.len(), 1);
}

#[test]
fn test_search_folds_cyrillic_names() {
    let lines = script(&[
        &["1", "1", "Віджет", "деталь"],
        &["6", "1", "віДЖЕТ"],
        QUIT,
    ]);
    let (_, prompter) = run_session(&lines);

    let tables = prompter.tables();
    let (title, rows) = tables.last().unwrap();
    assert_eq!(*title, "Product search results");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get(1), Some(&Cell::Text("Віджет".to_string())));
}

#[test]
fn test_create_reports_success() {
    let lines = script(&[&["1", "1", "Widget", "small part"], QUIT]);
    let (_, prompter) = run_session(&lines);

    assert_eq!(prompter.notices(), vec!["[SUCCESS] Product created (1 row)"]);
}

#[test]
fn test_failed_operation_does_not_end_session() {
    let lines = script(&[
        &["1", "2", "Steel", "abc", "kg"],
        &["2", "2"],
        QUIT,
    ]);
    let (summary, prompter) = run_session(&lines);

    assert_eq!(summary.exit, Exit::Quit);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.completed, 1);
    assert_eq!(prompter.error_count(), 1);

    // The read after the failure still ran
    let tables = prompter.tables();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].0, "Material");
    assert!(tables[0].1.is_empty());
}

#[test]
fn test_generate_consumptions_on_empty_store_reports_error() {
    let lines = script(&[&["5", "3", "10"], &["2", "3"], QUIT]);
    let (summary, prompter) = run_session(&lines);

    assert_eq!(summary.failed, 1);
    assert_eq!(prompter.error_count(), 1);
    assert!(prompter.tables()[0].1.is_empty());
}

#[test]
fn test_generate_products_then_read() {
    let lines = script(&[&["5", "1", "4"], &["2", "1"], QUIT]);
    let (summary, prompter) = run_session(&lines);

    assert_eq!(summary.completed, 2);
    assert_eq!(prompter.notices()[0], "[SUCCESS] Generated 4 product rows");
    let tables = prompter.tables();
    assert_eq!(tables[0].1.len(), 4);
}

#[test]
fn test_update_picks_field_by_position() {
    let lines = script(&[SEED_WIDGET_CATALOG, &["3", "2", "1", "2", "19.5"], QUIT]);
    let (summary, prompter) = run_session(&lines);

    assert_eq!(summary.failed, 0);
    assert_eq!(
        *prompter.notices().last().unwrap(),
        "[SUCCESS] Material id=1 updated: set price_per_unit = 19.5"
    );
}

#[test]
fn test_update_missing_id_is_informational() {
    let lines = script(&[&["3", "1", "42", "1", "New name"], QUIT]);
    let (summary, prompter) = run_session(&lines);

    assert_eq!(summary.failed, 0);
    assert_eq!(prompter.error_count(), 0);
    assert_eq!(
        prompter.notices(),
        vec!["[INFO] No product with id=42, nothing was updated"]
    );
}

#[test]
fn test_non_numeric_id_is_error() {
    let lines = script(&[&["4", "1", "one"], QUIT]);
    let (summary, prompter) = run_session(&lines);

    assert_eq!(summary.failed, 1);
    assert_eq!(prompter.error_count(), 1);
}

#[test]
fn test_delete_referenced_product_keeps_row() {
    let lines = script(&[SEED_WIDGET_CATALOG, &["4", "1", "1"], &["2", "1"], QUIT]);
    let (summary, prompter) = run_session(&lines);

    let tables = prompter.tables();
    let products = tables.last().unwrap().1;
    assert!(products.iter().any(|row| row.id() == Some(1)));

    // A refusal is a failure, not "nothing matched"
    assert_eq!(summary.failed, 1);
    assert_eq!(prompter.error_count(), 1);
    assert!(!prompter
        .notices()
        .iter()
        .any(|n| n.contains("nothing was deleted")));
}

#[test]
fn test_closed_input_ends_session_and_releases_store() {
    let (_tmp, config) = file_config();
    let db = Database::connect(&config).unwrap();

    // Input ends halfway through a create
    let mut prompter = ScriptedPrompter::new(&["1", "2", "Steel"]);
    let summary = Orchestrator::new(db, GeneratorBounds::default())
        .run(&mut prompter)
        .unwrap();

    assert_eq!(summary.exit, Exit::InputClosed);
    assert_eq!(summary.completed, 0);

    let db = Database::connect(&config).unwrap();
    assert!(InventoryRepo::read(&db, Table::Material).is_empty());
}

#[test]
fn test_rows_persist_across_sessions() {
    let (_tmp, config) = file_config();

    let mut prompter = ScriptedPrompter::new(&script(&[SEED_WIDGET_CATALOG, QUIT]));
    Orchestrator::new(Database::connect(&config).unwrap(), GeneratorBounds::default())
        .run(&mut prompter)
        .unwrap();

    let mut prompter = ScriptedPrompter::new(&script(&[&["2", "3"], QUIT]));
    Orchestrator::new(Database::connect(&config).unwrap(), GeneratorBounds::default())
        .run(&mut prompter)
        .unwrap();

    let tables = prompter.tables();
    assert_eq!(tables[0].1.len(), 1);
    assert_eq!(tables[0].1[0].get(1), Some(&Cell::Text("Widget".to_string())));
}

#[test]
fn test_generator_bounds_come_from_orchestrator() {
    let bounds = GeneratorBounds {
        price_min: 7,
        price_max: 7,
        ..GeneratorBounds::default()
    };
    let mut prompter = ScriptedPrompter::new(&script(&[&["5", "2", "3"], &["2", "2"], QUIT]));
    Orchestrator::new(Database::open_in_memory().unwrap(), bounds)
        .run(&mut prompter)
        .unwrap();

    let tables = prompter.tables();
    for row in tables[0].1 {
        assert_eq!(row.get(2).and_then(Cell::as_f64), Some(7.0));
    }
}
