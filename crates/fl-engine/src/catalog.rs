//! Mission catalog files.
//!
//! `.toml` files hold `[[missions]]` tables; anything else is parsed as a
//! JSON array of records. Reading is the engine's only asynchronous step
//! and completes before any mission-dependent command is accepted.

use std::path::Path;

use fl_core::catalog::{CatalogFile, MissionRecord, validate_records};

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Parse and validate catalog text.
///
/// # Errors
///
/// Returns `EngineError::Catalog` for malformed text and
/// `EngineError::Core` for records that fail validation.
pub fn parse_catalog(
    text: &str,
    format: CatalogFormat,
    source_name: &str,
) -> Result<Vec<MissionRecord>, EngineError> {
    let records = match format {
        CatalogFormat::Json => serde_json::from_str::<Vec<MissionRecord>>(text).map_err(|e| {
            EngineError::Catalog {
                source_name: source_name.to_string(),
                reason: e.to_string(),
            }
        })?,
        CatalogFormat::Toml => {
            toml::from_str::<CatalogFile>(text)
                .map_err(|e| EngineError::Catalog {
                    source_name: source_name.to_string(),
                    reason: e.to_string(),
                })?
                .missions
        }
    };
    validate_records(&records)?;
    Ok(records)
}

/// Read a catalog file from disk.
///
/// # Errors
///
/// Returns `EngineError::Catalog` when the file cannot be read or parsed.
pub async fn read_catalog(path: &Path) -> Result<Vec<MissionRecord>, EngineError> {
    let source_name = path.display().to_string();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| EngineError::Catalog {
            source_name: source_name.clone(),
            reason: e.to_string(),
        })?;
    let records = parse_catalog(&text, CatalogFormat::from_path(path), &source_name)?;
    tracing::debug!(path = %source_name, missions = records.len(), "catalog read");
    Ok(records)
}
