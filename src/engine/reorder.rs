// ==========================================
// Reorder Forecast - reorder math and priority tagging
// ==========================================
// days_on_hand = floor(on_hand / avg)            (avg > 0, else 0)
// reorder_qty  = ceil((threshold - doh) * avg)   (doh < threshold, else 0)
// Priority: first matching rule wins
//   1. doh <= asap band   → ASAP
//   2. doh <= watch band  → WATCH
//   3. avg == 0           → DEAD
//   4. otherwise          → COMFORTABLE
// A group with no stock and no sales therefore lands on ASAP.
// Quotients are snapped to 1e-6 before floor/ceil; this only absorbs
// float noise such as 28.999999999 and is not a rounding rule.
// ==========================================

use crate::config::settings::PriorityBands;
use crate::domain::types::ReorderPriority;

/// Values within this distance of an integer are treated as that integer
/// before floor/ceil
const SNAP_SCALE: f64 = 1e6;

fn snap(value: f64) -> f64 {
    (value * SNAP_SCALE).round() / SNAP_SCALE
}

pub fn days_on_hand(on_hand_units: f64, avg_units_per_day: f64) -> u64 {
    if avg_units_per_day <= 0.0 || !avg_units_per_day.is_finite() {
        return 0;
    }
    let days = snap(on_hand_units / avg_units_per_day).floor();
    if days.is_finite() && days > 0.0 {
        days as u64
    } else {
        0
    }
}

pub fn reorder_qty(days_on_hand: u64, doh_threshold: u32, avg_units_per_day: f64) -> u64 {
    let threshold = u64::from(doh_threshold);
    if days_on_hand >= threshold || avg_units_per_day <= 0.0 || !avg_units_per_day.is_finite() {
        return 0;
    }
    let gap = (threshold - days_on_hand) as f64;
    snap(gap * avg_units_per_day).ceil() as u64
}

pub fn tag_priority(days_on_hand: u64, avg_units_per_day: f64, bands: &PriorityBands) -> ReorderPriority {
    if days_on_hand <= bands.asap_max_days {
        ReorderPriority::Asap
    } else if days_on_hand <= bands.watch_max_days {
        ReorderPriority::Watch
    } else if avg_units_per_day == 0.0 {
        ReorderPriority::Dead
    } else {
        ReorderPriority::Comfortable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_on_hand() {
        assert_eq!(days_on_hand(50.0, 1.667), 29);
        assert_eq!(days_on_hand(100.0, 0.0), 0);
        assert_eq!(days_on_hand(0.0, 2.0), 0);
        assert_eq!(days_on_hand(10.0, 3.0), 3);
        // 0.7 / 0.1 is 6.999... in floating point
        assert_eq!(days_on_hand(0.7, 0.1), 7);
    }

    #[test]
    fn test_reorder_qty() {
        assert_eq!(reorder_qty(0, 21, 2.0), 42);
        assert_eq!(reorder_qty(10, 21, 1.5), 17); // ceil(16.5)
        assert_eq!(reorder_qty(29, 21, 1.667), 0);
        assert_eq!(reorder_qty(0, 21, 0.0), 0);
        // 0.7 * 10 is 7.000...1 in floating point
        assert_eq!(reorder_qty(11, 21, 0.7), 7);
    }

    #[test]
    fn test_reorder_qty_at_threshold_is_zero() {
        assert_eq!(reorder_qty(21, 21, 5.0), 0);
        assert_eq!(reorder_qty(20, 21, 5.0), 5);
    }

    #[test]
    fn test_priority_rule_order() {
        let bands = PriorityBands::default();
        assert_eq!(tag_priority(0, 0.0, &bands), ReorderPriority::Asap);
        assert_eq!(tag_priority(7, 1.0, &bands), ReorderPriority::Asap);
        assert_eq!(tag_priority(8, 1.0, &bands), ReorderPriority::Watch);
        assert_eq!(tag_priority(21, 1.0, &bands), ReorderPriority::Watch);
        assert_eq!(tag_priority(22, 1.0, &bands), ReorderPriority::Comfortable);
        assert_eq!(tag_priority(29, 1.667, &bands), ReorderPriority::Comfortable);
    }

    #[test]
    fn test_dead_needs_days_beyond_watch_band() {
        let bands = PriorityBands {
            asap_max_days: 0,
            watch_max_days: 0,
        };
        // doh is 0 whenever velocity is 0, so DEAD only shows with empty bands
        assert_eq!(tag_priority(0, 0.0, &bands), ReorderPriority::Asap);
        assert_eq!(tag_priority(5, 0.0, &bands), ReorderPriority::Dead);
    }
}
