// ==========================================
// Reorder Forecast - summary and views
// ==========================================
// Metric tiles, metric filter, per-category views
// ==========================================

use crate::domain::forecast::{CategoryView, ForecastRow, ForecastSummary, SalesGroup};
use crate::domain::types::{MetricFilter, ReorderPriority};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Metric tiles. Units sold counts what fed velocity, so excluded
/// accessory / roll-up lines are not in the total.
pub fn summarize(rows: &[ForecastRow], sales: &[SalesGroup]) -> ForecastSummary {
    let count = |priority: ReorderPriority| rows.iter().filter(|r| r.reorder_priority == priority).count();

    ForecastSummary {
        total_units_sold: sales.iter().map(|s| s.units_sold).sum(),
        active_categories: rows.iter().map(|r| r.category.as_str()).collect::<BTreeSet<_>>().len(),
        reorder_asap: count(ReorderPriority::Asap),
        watchlist: count(ReorderPriority::Watch),
    }
}

pub fn apply_filter(rows: &[ForecastRow], filter: MetricFilter) -> Vec<ForecastRow> {
    rows.iter()
        .filter(|r| filter.admits(r.reorder_priority))
        .cloned()
        .collect()
}

/// Most urgent first, then fastest moving
fn view_order(a: &ForecastRow, b: &ForecastRow) -> Ordering {
    a.reorder_priority.cmp(&b.reorder_priority).then_with(|| {
        b.avg_units_per_day
            .partial_cmp(&a.avg_units_per_day)
            .unwrap_or(Ordering::Equal)
    })
}

/// One view per category (alphabetical), rows sorted by priority then velocity
pub fn category_views(rows: &[ForecastRow]) -> Vec<CategoryView> {
    let mut by_category: BTreeMap<&str, Vec<ForecastRow>> = BTreeMap::new();
    for row in rows {
        by_category.entry(row.category.as_str()).or_default().push(row.clone());
    }

    by_category
        .into_iter()
        .map(|(category, mut rows)| {
            rows.sort_by(view_order);
            let total: u64 = rows.iter().map(|r| r.days_on_hand).sum();
            let avg_days_on_hand = if rows.is_empty() { 0 } else { total / rows.len() as u64 };
            CategoryView {
                category: category.to_string(),
                avg_days_on_hand,
                rows,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str, size: &str, avg: f64, doh: u64, priority: ReorderPriority) -> ForecastRow {
        ForecastRow {
            category: category.to_string(),
            strain_type: "unspecified".to_string(),
            package_size: size.to_string(),
            on_hand_units: 0.0,
            units_sold: 0.0,
            avg_units_per_day: avg,
            days_on_hand: doh,
            reorder_qty: 0,
            reorder_priority: priority,
        }
    }

    fn sample() -> Vec<ForecastRow> {
        vec![
            row("flower", "3.5g", 2.0, 30, ReorderPriority::Comfortable),
            row("flower", "28g", 0.5, 3, ReorderPriority::Asap),
            row("flower", "7g", 1.0, 12, ReorderPriority::Watch),
            row("flower", "14g", 3.0, 5, ReorderPriority::Asap),
            row("vapes", "0.5g", 1.0, 10, ReorderPriority::Watch),
        ]
    }

    #[test]
    fn test_summarize() {
        let sales = vec![SalesGroup {
            category: "flower".to_string(),
            package_size: "3.5g".to_string(),
            units_sold: 120.0,
            avg_units_per_day: 2.0,
        }];
        let summary = summarize(&sample(), &sales);
        assert_eq!(summary.total_units_sold, 120.0);
        assert_eq!(summary.active_categories, 2);
        assert_eq!(summary.reorder_asap, 2);
        assert_eq!(summary.watchlist, 2);
    }

    #[test]
    fn test_apply_filter() {
        let rows = sample();
        assert_eq!(apply_filter(&rows, MetricFilter::All).len(), 5);
        assert_eq!(apply_filter(&rows, MetricFilter::ReorderAsap).len(), 2);
        let watch = apply_filter(&rows, MetricFilter::Watchlist);
        assert!(watch.iter().all(|r| r.reorder_priority == ReorderPriority::Watch));
    }

    #[test]
    fn test_category_views_sorting_and_average() {
        let views = category_views(&sample());
        assert_eq!(views.len(), 2);

        let flower = &views[0];
        assert_eq!(flower.category, "flower");
        let sizes: Vec<&str> = flower.rows.iter().map(|r| r.package_size.as_str()).collect();
        assert_eq!(sizes, vec!["14g", "28g", "7g", "3.5g"]);
        // floor((30 + 3 + 12 + 5) / 4)
        assert_eq!(flower.avg_days_on_hand, 12);

        assert_eq!(views[1].category, "vapes");
        assert_eq!(views[1].avg_days_on_hand, 10);
    }

    #[test]
    fn test_empty_rows() {
        assert!(category_views(&[]).is_empty());
        assert_eq!(summarize(&[], &[]), ForecastSummary::default());
    }
}
