//! Cross-cutting error types for Fieldline.
//!
//! Engine-specific errors (`EngineError`) live in `fl-engine`, configuration
//! errors in `fl-config`. The CLI converges all of them into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Fieldline crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Catalog data failed validation (shape, ids, coordinates, radius).
    #[error("Validation error: {0}")]
    Validation(String),
}
