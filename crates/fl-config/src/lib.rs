//! # fl-config
//!
//! Layered configuration loading for Fieldline using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FIELDLINE_*` prefix, `__` as separator)
//! 2. Project-level `.fieldline/config.toml`
//! 3. User-level `~/.config/fieldline/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FIELDLINE_GEOFENCE__DEFAULT_RADIUS_M` -> `geofence.default_radius_m`,
//! `FIELDLINE_COLLECTOR__USER_ID` -> `collector.user_id`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use fl_config::FieldlineConfig;
//!
//! let config = FieldlineConfig::load_with_dotenv().expect("config");
//! println!("default radius: {} m", config.geofence.default_radius_m);
//! ```

mod catalog;
mod collector;
mod entry;
mod error;
mod export;
mod geofence;

pub use catalog::CatalogConfig;
pub use collector::CollectorConfig;
pub use entry::EntryConfig;
pub use error::ConfigError;
pub use export::ExportConfig;
pub use geofence::GeofenceConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Name of the project-local configuration directory.
pub const PROJECT_DIR: &str = ".fieldline";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FieldlineConfig {
    #[serde(default)]
    pub geofence: GeofenceConfig,
    #[serde(default)]
    pub entry: EntryConfig,
    #[serde(default)]
    pub collector: CollectorConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl FieldlineConfig {
    /// Load configuration from all sources (TOML files + environment variables),
    /// looking for the project config under the current directory.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration with the project config rooted at `project_root`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load_from(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load a `.env` file from the current directory (or
    /// the nearest parent) before building the figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("FIELDLINE_").split("__"))
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first out-of-range field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.geofence.is_valid() {
            return Err(ConfigError::InvalidValue {
                field: "geofence.default_radius_m".into(),
                reason: format!(
                    "must be a positive number of meters, got {}",
                    self.geofence.default_radius_m
                ),
            });
        }
        if self.entry.min_description_len == 0 {
            return Err(ConfigError::InvalidValue {
                field: "entry.min_description_len".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Fail unless the collector identity is set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCollector` naming the first empty field.
    pub fn require_collector(&self) -> Result<&CollectorConfig, ConfigError> {
        if self.collector.user_id.trim().is_empty() {
            return Err(ConfigError::MissingCollector {
                missing: "user_id",
                env: "USER_ID",
            });
        }
        if self.collector.user_name.trim().is_empty() {
            return Err(ConfigError::MissingCollector {
                missing: "user_name",
                env: "USER_NAME",
            });
        }
        Ok(&self.collector)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fieldline").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = FieldlineConfig::default();
        assert!(!config.collector.is_configured());
        assert!((config.geofence.default_radius_m - 20.0).abs() < f64::EPSILON);
        assert_eq!(config.entry.min_description_len, 10);
        assert_eq!(config.catalog.path, "mission_config.json");
        assert_eq!(config.export.file_prefix, "citizenlink_data");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_min_description_len_is_invalid() {
        let mut config = FieldlineConfig::default();
        config.entry.min_description_len = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "entry.min_description_len"
        ));
    }

    #[test]
    fn collector_is_required_on_demand() {
        let mut config = FieldlineConfig::default();
        assert!(matches!(
            config.require_collector(),
            Err(ConfigError::MissingCollector { missing: "user_id", .. })
        ));

        config.collector.user_id = "T-001".into();
        let err = config.require_collector().unwrap_err();
        assert!(matches!(err, ConfigError::MissingCollector { missing: "user_name", .. }));
        assert!(err.to_string().contains("FIELDLINE_COLLECTOR__USER_NAME"));

        config.collector.user_name = "Field Tester".into();
        assert_eq!(config.require_collector().unwrap().user_id, "T-001");
    }
}
