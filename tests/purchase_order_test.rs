// ==========================================
// Purchase order drafted from a forecast
// ==========================================


use chrono::NaiveDate;
use reorder_forecast::api::ForecastApi;
use reorder_forecast::config::ForecastSettings;
use reorder_forecast::domain::PurchaseOrder;
use test_helpers::{inventory_lines, sales_lines, Fixtures};

#[test]
fn test_po_seeded_from_reorder_quantities() {
    let fixtures = Fixtures::new();
    let report = ForecastApi::default()
        .run_from_files(
            &fixtures.write("inventory.csv", &inventory_lines()),
            &fixtures.write("sales.csv", &sales_lines()),
            &ForecastSettings::default(),
        )
        .unwrap();

    let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    let mut po = PurchaseOrder::new("1042", date, "Green Valley Farms", "J. Rivera");
    po.seed_from_forecast(&report.rows);

    let descriptions: Vec<&str> = po.lines.iter().map(|l| l.description.as_str()).collect();
    assert_eq!(descriptions, vec!["flower hybrid 3.5g", "flower indica 28g"]);
    assert_eq!(po.lines[0].units, 8.0);
    assert_eq!(po.lines[1].units, 1.0);
    assert_eq!(po.subtotal(), 0.0);

    let text = po.render_text();
    assert!(text.contains("PO Number: 1042"));
    assert!(text.contains("PO Date:   2025-02-01"));
    assert!(text.contains("Terms:     Net 30"));
    assert!(text.contains(" | flower hybrid 3.5g | 8 @ $0.00 = $0.00"));
    assert_eq!(po.file_name(), "PO_1042.txt");
}
