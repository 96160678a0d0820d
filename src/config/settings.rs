//! User settings for Spence
//!
//! Display preferences plus the dataset generation knobs. Settings are the
//! only thing Spence ever writes to disk.

use serde::{Deserialize, Serialize};

use super::paths::SpencePaths;
use crate::dataset::DEFAULT_TRANSACTION_COUNT;
use crate::error::SpenceError;
use crate::models::TimeWindow;

/// Dataset generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSettings {
    /// Number of randomized transactions to generate
    #[serde(default = "default_transaction_count")]
    pub transaction_count: usize,

    /// Fixed RNG seed for reproducible sessions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            transaction_count: default_transaction_count(),
            seed: None,
        }
    }
}

/// User settings for Spence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default aggregation window for overview and analytics
    #[serde(default)]
    pub default_window: TimeWindow,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Dataset generation settings
    #[serde(default)]
    pub dataset: DatasetSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_transaction_count() -> usize {
    DEFAULT_TRANSACTION_COUNT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_window: TimeWindow::default(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            dataset: DatasetSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SpencePaths) -> Result<Self, SpenceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SpenceError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| SpenceError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpencePaths) -> Result<(), SpenceError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SpenceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| SpenceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
