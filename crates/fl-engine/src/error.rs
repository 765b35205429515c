//! Engine error types.
//!
//! Every variant leaves engine state unchanged: operations check all
//! preconditions before mutating anything.

use thiserror::Error;

use fl_core::errors::CoreError;

/// Errors from engine operations.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// A submission field failed validation.
    #[error("Validation error on {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// The point lies outside the active mission's geofence.
    #[error("Point is {distance_m:.1} m from target, outside the {radius_m} m boundary")]
    BoundaryViolation { distance_m: f64, radius_m: f64 },

    /// No mission with this id exists in the catalog.
    #[error("Mission not found: {0}")]
    MissionNotFound(String),

    /// A ledger or measurement index is outside the valid range.
    #[error("Index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The undo stack is empty.
    #[error("Nothing to undo")]
    NothingToUndo,

    /// The redo stack is empty.
    #[error("Nothing to redo")]
    NothingToRedo,

    /// A mission-dependent command arrived with no mission selected.
    #[error("No active mission selected")]
    NoActiveMission,

    /// Submit or drag arrived before a pin was placed.
    #[error("No pin placed for the active mission")]
    NoPlacement,

    /// The catalog can no longer be replaced in this session.
    #[error("Mission catalog is locked once a mission is active or entries exist")]
    CatalogLocked,

    /// A mission-dependent command arrived before any catalog was loaded.
    #[error("No mission catalog loaded")]
    CatalogNotLoaded,

    /// The subcategory does not belong to the chosen category.
    #[error("Subcategory '{subcategory}' is not offered under category '{category}'")]
    UnknownSubcategory {
        category: String,
        subcategory: String,
    },

    /// The catalog file could not be read or parsed.
    #[error("Catalog error ({source_name}): {reason}")]
    Catalog { source_name: String, reason: String },

    /// Writing an export or event log failed.
    #[error("Export I/O failed for {path}: {reason}")]
    ExportIo { path: String, reason: String },

    /// Error bubbled up from fl-core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl EngineError {
    /// Recoverable outcomes a user can act on, as opposed to collaborator
    /// contract violations.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::BoundaryViolation { .. }
                | Self::NothingToUndo
                | Self::NothingToRedo
                | Self::NoPlacement
                | Self::UnknownSubcategory { .. }
        )
    }
}
