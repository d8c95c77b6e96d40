// ==========================================
// SessionState integration tests
// ==========================================
// A failed pass keeps the previous report visible
// ==========================================


use reorder_forecast::api::{ForecastApi, ForecastSource};
use reorder_forecast::app::SessionState;
use reorder_forecast::config::ForecastSettings;
use reorder_forecast::domain::{MetricFilter, ReorderPriority};
use test_helpers::{inventory_lines, sales_lines, Fixtures};

#[test]
fn test_recompute_stores_report() {
    let fixtures = Fixtures::new();
    let source = ForecastSource::Files {
        inventory: fixtures.write("inventory.csv", &inventory_lines()),
        sales: fixtures.write("sales.csv", &sales_lines()),
    };
    let api = ForecastApi::default();
    let mut session = SessionState::new(ForecastSettings::default());

    let rows = session.recompute(&api, &source).unwrap().rows.len();

    assert_eq!(rows, 5);
    assert!(session.last_error.is_none());
    assert_eq!(session.visible_rows().len(), 5);
}

#[test]
fn test_failed_recompute_keeps_previous_report() {
    let fixtures = Fixtures::new();
    let good = ForecastSource::Files {
        inventory: fixtures.write("inventory.csv", &inventory_lines()),
        sales: fixtures.write("sales.csv", &sales_lines()),
    };
    let bad = ForecastSource::Files {
        inventory: fixtures.write("broken.csv", &["Name,Kind", "x,y"]),
        sales: fixtures.write("sales2.csv", &sales_lines()),
    };
    let api = ForecastApi::default();
    let mut session = SessionState::default();

    session.recompute(&api, &good).unwrap();
    let run_id = session.last_report.as_ref().unwrap().run_id.clone();

    assert!(session.recompute(&api, &bad).is_err());
    let error = session.last_error.clone().unwrap();
    assert!(error.contains("missing required columns"), "{error}");
    assert_eq!(session.last_report.as_ref().unwrap().run_id, run_id);

    // a good pass clears the error
    session.recompute(&api, &good).unwrap();
    assert!(session.last_error.is_none());
    assert_ne!(session.last_report.as_ref().unwrap().run_id, run_id);
}

#[test]
fn test_invalid_settings_surface_as_last_error() {
    let fixtures = Fixtures::new();
    let source = ForecastSource::Files {
        inventory: fixtures.write("inventory.csv", &inventory_lines()),
        sales: fixtures.write("sales.csv", &sales_lines()),
    };
    let mut session = SessionState::new(ForecastSettings {
        doh_threshold: 0,
        ..ForecastSettings::default()
    });

    assert!(session.recompute(&ForecastApi::default(), &source).is_err());
    assert!(session.last_report.is_none());
    assert!(session.last_error.as_deref().unwrap_or("").contains("doh_threshold"));
}

#[test]
fn test_metric_filter_narrows_views() {
    let fixtures = Fixtures::new();
    let source = ForecastSource::Files {
        inventory: fixtures.write("inventory.csv", &inventory_lines()),
        sales: fixtures.write("sales.csv", &sales_lines()),
    };
    let mut session = SessionState::default();
    session.recompute(&ForecastApi::default(), &source).unwrap();

    session.set_metric_filter(MetricFilter::ReorderAsap);
    let rows = session.visible_rows();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.reorder_priority == ReorderPriority::Asap));

    let views = session.visible_views();
    let categories: Vec<&str> = views.iter().map(|v| v.category.as_str()).collect();
    assert_eq!(categories, vec!["edibles", "pre rolls"]);
}

#[test]
fn test_empty_session_has_nothing_visible() {
    let session = SessionState::default();
    assert!(session.visible_rows().is_empty());
    assert!(session.visible_views().is_empty());
}
