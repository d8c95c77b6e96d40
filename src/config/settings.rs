// ==========================================
// Reorder Forecast - forecast settings
// ==========================================
// Inputs of one recomputation pass besides the two uploaded tables.
// Ranges mirror the dashboard controls.
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

pub const DOH_THRESHOLD_RANGE: (u32, u32) = (1, 60);
pub const SALES_PERIOD_DAYS_RANGE: (u32, u32) = (7, 90);
pub const VELOCITY_ADJUSTMENT_RANGE: (f64, f64) = (0.01, 5.0);

/// Up to 10 banner rows plus the header itself
pub const DEFAULT_HEADER_SCAN_ROWS: usize = 11;
const HEADER_SCAN_ROWS_MAX: usize = 1_000;

// ==========================================
// PriorityBands
// ==========================================
/// Day bands for priority tagging: `≤ asap_max_days` → ASAP, `≤ watch_max_days` → WATCH
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityBands {
    #[serde(default = "default_asap_max_days")]
    pub asap_max_days: u64,
    #[serde(default = "default_watch_max_days")]
    pub watch_max_days: u64,
}

fn default_asap_max_days() -> u64 {
    7
}

fn default_watch_max_days() -> u64 {
    21
}

impl Default for PriorityBands {
    fn default() -> Self {
        Self {
            asap_max_days: default_asap_max_days(),
            watch_max_days: default_watch_max_days(),
        }
    }
}

// ==========================================
// ForecastSettings
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSettings {
    /// Target days of cover; reorder quantities fill up to this many days
    #[serde(default = "default_doh_threshold")]
    pub doh_threshold: u32,

    /// Length of the period covered by the sales export
    #[serde(default = "default_sales_period_days")]
    pub sales_period_days: u32,

    /// Multiplier on raw velocity (e.g. 0.5 for a slower store)
    #[serde(default = "default_velocity_adjustment")]
    pub velocity_adjustment: f64,

    #[serde(default = "default_header_scan_rows")]
    pub header_scan_rows: usize,

    #[serde(default)]
    pub priority_bands: PriorityBands,
}

fn default_doh_threshold() -> u32 {
    21
}

fn default_sales_period_days() -> u32 {
    60
}

fn default_velocity_adjustment() -> f64 {
    1.0
}

fn default_header_scan_rows() -> usize {
    DEFAULT_HEADER_SCAN_ROWS
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            doh_threshold: default_doh_threshold(),
            sales_period_days: default_sales_period_days(),
            velocity_adjustment: default_velocity_adjustment(),
            header_scan_rows: default_header_scan_rows(),
            priority_bands: PriorityBands::default(),
        }
    }
}

impl ForecastSettings {
    /// Check every setting against its allowed range
    pub fn validate(&self) -> ConfigResult<()> {
        check_range(
            "doh_threshold",
            self.doh_threshold as f64,
            DOH_THRESHOLD_RANGE.0 as f64,
            DOH_THRESHOLD_RANGE.1 as f64,
        )?;
        check_range(
            "sales_period_days",
            self.sales_period_days as f64,
            SALES_PERIOD_DAYS_RANGE.0 as f64,
            SALES_PERIOD_DAYS_RANGE.1 as f64,
        )?;
        if !self.velocity_adjustment.is_finite() {
            return Err(ConfigError::Invalid {
                key: "velocity_adjustment".to_string(),
                message: "must be a finite number".to_string(),
            });
        }
        check_range(
            "velocity_adjustment",
            self.velocity_adjustment,
            VELOCITY_ADJUSTMENT_RANGE.0,
            VELOCITY_ADJUSTMENT_RANGE.1,
        )?;
        check_range(
            "header_scan_rows",
            self.header_scan_rows as f64,
            1.0,
            HEADER_SCAN_ROWS_MAX as f64,
        )?;
        if self.priority_bands.asap_max_days > self.priority_bands.watch_max_days {
            return Err(ConfigError::Invalid {
                key: "priority_bands".to_string(),
                message: format!(
                    "asap_max_days ({}) exceeds watch_max_days ({})",
                    self.priority_bands.asap_max_days, self.priority_bands.watch_max_days
                ),
            });
        }
        Ok(())
    }
}

fn check_range(key: &str, value: f64, min: f64, max: f64) -> ConfigResult<()> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            key: key.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = ForecastSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.doh_threshold, 21);
        assert_eq!(settings.sales_period_days, 60);
        assert_eq!(settings.velocity_adjustment, 1.0);
        assert_eq!(settings.priority_bands.asap_max_days, 7);
        assert_eq!(settings.priority_bands.watch_max_days, 21);
    }

    #[test]
    fn test_range_boundaries_are_inclusive() {
        let mut settings = ForecastSettings::default();
        settings.doh_threshold = 60;
        settings.sales_period_days = 7;
        settings.velocity_adjustment = 0.01;
        assert!(settings.validate().is_ok());

        settings.velocity_adjustment = 5.0;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let settings = ForecastSettings {
            doh_threshold: 0,
            ..ForecastSettings::default()
        };
        match settings.validate() {
            Err(ConfigError::OutOfRange { key, .. }) => assert_eq!(key, "doh_threshold"),
            other => panic!("unexpected: {:?}", other),
        }

        let settings = ForecastSettings {
            sales_period_days: 91,
            ..ForecastSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = ForecastSettings {
            velocity_adjustment: f64::NAN,
            ..ForecastSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_inverted_bands_rejected() {
        let settings = ForecastSettings {
            priority_bands: PriorityBands {
                asap_max_days: 30,
                watch_max_days: 21,
            },
            ..ForecastSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: ForecastSettings =
            serde_json::from_str(r#"{"doh_threshold": 14}"#).unwrap();
        assert_eq!(settings.doh_threshold, 14);
        assert_eq!(settings.sales_period_days, 60);
        assert_eq!(settings.header_scan_rows, DEFAULT_HEADER_SCAN_ROWS);
    }
}
