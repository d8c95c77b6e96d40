// ==========================================
// Config directory integration tests
// ==========================================
// settings.json / vocabulary.json / aliases.json change a pass
// without code changes
// ==========================================


use reorder_forecast::api::{ApiError, ForecastApi};
use reorder_forecast::config::{ConfigError, ConfigManager};
use test_helpers::Fixtures;

#[test]
fn test_vocabulary_file_adds_category() {
    let fixtures = Fixtures::new();
    fixtures.write(
        "vocabulary.json",
        &[r#"{"categories": [
            {"name": "seeds", "keywords": ["seed", "clone"]},
            {"name": "flower", "keywords": ["flower"]}
        ]}"#],
    );
    let inventory = fixtures.write(
        "inventory.csv",
        &["Product,Category,Available", "Blue Dream Clone,Clones,8", "Kush Mints 3.5g,Flower,4"],
    );
    let sales = fixtures.write("sales.csv", &["Product,Category,Qty Sold", "Blue Dream Clone,Clones,60"]);

    let config = ConfigManager::new(fixtures.path(""));
    let api = ForecastApi::from_config(&config).unwrap();
    let report = api
        .run_from_files(&inventory, &sales, &config.load_settings().unwrap())
        .unwrap();

    let seeds = report
        .rows
        .iter()
        .find(|r| r.category == "seeds")
        .expect("seeds row");
    assert_eq!(seeds.units_sold, 60.0);
    assert_eq!(seeds.avg_units_per_day, 1.0);
}

#[test]
fn test_settings_file_is_loaded_and_validated() {
    let fixtures = Fixtures::new();
    fixtures.write("settings.json", &[r#"{"doh_threshold": 30, "sales_period_days": 30}"#]);

    let settings = ConfigManager::new(fixtures.path("")).load_settings().unwrap();
    assert_eq!(settings.doh_threshold, 30);
    assert_eq!(settings.sales_period_days, 30);
    assert_eq!(settings.velocity_adjustment, 1.0);

    let bad = Fixtures::new();
    bad.write("settings.json", &[r#"{"velocity_adjustment": 9.0}"#]);
    let err = ConfigManager::new(bad.path("")).load_settings().unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { .. }));
}

#[test]
fn test_alias_file_accepts_vendor_headers() {
    let fixtures = Fixtures::new();
    fixtures.write(
        "aliases.json",
        &[r#"{"sales": {
            "name": {"field": "product_name", "aliases": ["item"]},
            "quantity": {"field": "quantity_sold", "aliases": ["net qty"]},
            "category": {"field": "category", "aliases": ["class"]}
        }}"#],
    );
    let inventory = fixtures.write("inventory.csv", &["Product,Category,Available", "OG Kush 1oz,Flower,3"]);
    let sales = fixtures.write("sales.csv", &["Item,Class,Net Qty", "OG Kush 1oz,Flower,30"]);

    let api = ForecastApi::from_config(&ConfigManager::new(fixtures.path(""))).unwrap();
    let report = api
        .run_from_files(&inventory, &sales, &Default::default())
        .unwrap();

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].package_size, "28g");
    assert_eq!(report.rows[0].units_sold, 30.0);
}

#[test]
fn test_malformed_config_file_is_an_error() {
    let fixtures = Fixtures::new();
    fixtures.write("aliases.json", &["{not json"]);

    let result = ForecastApi::from_config(&ConfigManager::new(fixtures.path("")));
    assert!(matches!(result, Err(ApiError::Config(ConfigError::ParseError { .. }))));
}
