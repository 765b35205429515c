use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// Entries cannot be stamped without a collector identity.
    #[error("Collector identity is incomplete: set collector.{missing} (FIELDLINE_COLLECTOR__{env})")]
    MissingCollector {
        missing: &'static str,
        env: &'static str,
    },
}
