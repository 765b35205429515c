//! # fl-engine
//!
//! Mission and entry state engine for Fieldline.
//!
//! Owns the mission catalog, the entry ledger, and the undo/redo history,
//! and validates placements against each mission's circular geofence.
//! Collaborators drive it with discrete [`Command`]s and read back
//! [`DisplayEvent`]s and the [`ExportDocument`](fl_core::responses::ExportDocument).
//!
//! Dependency order inside the crate, leaves first: `geofence` →
//! `missions` → `ledger` → `history` → `export`, all composed by `engine`.

pub mod catalog;
pub mod commands;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod geofence;
pub mod history;
pub mod ledger;
pub mod measure;
pub mod missions;
mod test_support;

pub use commands::{Command, CommandOutcome, SubmissionForm};
pub use display::{DisplayEvent, VisualHandle};
pub use engine::{Engine, EngineSettings};
pub use error::EngineError;
pub use geofence::PlacementOutcome;
