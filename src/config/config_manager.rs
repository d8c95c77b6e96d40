// ==========================================
// Reorder Forecast - configuration manager
// ==========================================
// Loads settings.json / vocabulary.json / aliases.json from a config
// directory; a missing file means built-in defaults.
// Default directory: <user config dir>/reorder-forecast/
// ==========================================

use crate::config::column_aliases::ColumnAliasTable;
use crate::config::error::{ConfigError, ConfigResult};
use crate::config::settings::ForecastSettings;
use crate::config::vocabulary::CategoryVocabulary;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const APP_DIR_NAME: &str = "reorder-forecast";

pub mod config_files {
    pub const SETTINGS: &str = "settings.json";
    pub const VOCABULARY: &str = "vocabulary.json";
    pub const ALIASES: &str = "aliases.json";
}

// ==========================================
// ConfigManager
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Option<PathBuf>,
}

impl ConfigManager {
    /// Use an explicit config directory
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: Some(config_dir.into()),
        }
    }

    /// Use the platform config directory, if the platform has one
    pub fn from_default_dir() -> Self {
        Self {
            config_dir: dirs::config_dir().map(|d| d.join(APP_DIR_NAME)),
        }
    }

    /// Defaults only, never touches the filesystem
    pub fn defaults_only() -> Self {
        Self { config_dir: None }
    }

    pub fn config_dir(&self) -> Option<&Path> {
        self.config_dir.as_deref()
    }

    /// Settings from settings.json (validated), or defaults
    pub fn load_settings(&self) -> ConfigResult<ForecastSettings> {
        let settings: ForecastSettings = self.load_or_default(config_files::SETTINGS)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_vocabulary(&self) -> ConfigResult<CategoryVocabulary> {
        self.load_or_default(config_files::VOCABULARY)
    }

    pub fn load_aliases(&self) -> ConfigResult<ColumnAliasTable> {
        self.load_or_default(config_files::ALIASES)
    }

    fn load_or_default<T>(&self, file_name: &str) -> ConfigResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let path = match &self.config_dir {
            Some(dir) => dir.join(file_name),
            None => return Ok(T::default()),
        };

        if !path.exists() {
            debug!(path = %path.display(), "config file absent, using defaults");
            return Ok(T::default());
        }

        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::FileReadError {
            path: path.clone(),
            source,
        })?;
        let value = serde_json::from_str(&raw).map_err(|source| ConfigError::ParseError {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "loaded config file");
        Ok(value)
    }
}
