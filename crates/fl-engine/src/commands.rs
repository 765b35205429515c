//! Discrete commands accepted at the engine boundary and their outcomes.
//!
//! Commands serialize as `{"cmd": "...", ...}` so scripts can be replayed
//! from JSONL.

use serde::{Deserialize, Serialize};

use fl_core::entities::{DeviceInfo, Entry};
use fl_core::enums::Priority;
use fl_core::geo::GeoPoint;
use fl_core::responses::{ExportDocument, OverallProgress, ProgressSnapshot};

use crate::geofence::PlacementOutcome;

/// Form values carried by a submission trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionForm {
    pub description: String,
    pub category: String,
    pub subcategory: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub device_info: Option<DeviceInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    Select { mission_id: String },
    ClearSelection,
    Place { lat: f64, lng: f64 },
    Drag { lat: f64, lng: f64 },
    Submit(SubmissionForm),
    Undo,
    Redo,
    Export,
    Measure { lat: f64, lng: f64 },
    ClearMeasurements,
}

impl Command {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Select { .. } => "select",
            Self::ClearSelection => "clear_selection",
            Self::Place { .. } => "place",
            Self::Drag { .. } => "drag",
            Self::Submit(_) => "submit",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Export => "export",
            Self::Measure { .. } => "measure",
            Self::ClearMeasurements => "clear_measurements",
        }
    }
}

/// What the collaborator needs to render a freshly selected mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionBrief {
    pub mission_id: String,
    pub title: String,
    pub instruction: String,
    pub target: GeoPoint,
    pub radius_m: f64,
    pub suggested_category: String,
    pub suggested_subcategory: String,
    pub default_priority: Priority,
    pub zoom: Option<u8>,
    pub progress: ProgressSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub entry: Entry,
    pub progress: ProgressSnapshot,
    /// The submission moved its mission from pending to completed.
    pub completed_now: bool,
}

/// Result of an undo or redo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryReceipt {
    pub entry_id: String,
    pub mission_id: String,
    pub progress: ProgressSnapshot,
    pub can_undo: bool,
    pub can_redo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureReceipt {
    pub points: usize,
    pub total_distance_m: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum CommandOutcome {
    Selected { brief: MissionBrief },
    SelectionCleared { overall: OverallProgress },
    Placement { placement: PlacementOutcome },
    Submitted { receipt: SubmitReceipt },
    Undone { receipt: HistoryReceipt },
    Redone { receipt: HistoryReceipt },
    Exported { document: ExportDocument },
    Measured { receipt: MeasureReceipt },
    MeasurementsCleared,
}
