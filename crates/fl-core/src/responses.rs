//! Response types exposed to collaborators: progress snapshots and the
//! export document.
//!
//! `ExportDocument` is the system's only durable artifact. Its member names
//! (`export_info`, `mission_summary`, `collected_data`, and the fields
//! below them) are a frozen contract.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Entry, Mission};
use crate::enums::MissionStatus;

/// Read-only progress view of one mission, published after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProgressSnapshot {
    pub mission_id: String,
    pub entries_collected: u32,
    pub required_count: u32,
    pub status: MissionStatus,
    /// `entries_collected / required_count * 100`, capped at 100.
    pub percent: f64,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn of(mission: &Mission) -> Self {
        let percent = if mission.required_count == 0 {
            100.0
        } else {
            (f64::from(mission.entries_collected) / f64::from(mission.required_count) * 100.0)
                .min(100.0)
        };
        Self {
            mission_id: mission.id.clone(),
            entries_collected: mission.entries_collected,
            required_count: mission.required_count,
            status: mission.status,
            percent,
        }
    }
}

/// Catalog-wide completion count ("N / M Complete").
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OverallProgress {
    pub completed: u32,
    pub total: u32,
}

/// `export_info` member of the export document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportInfo {
    #[serde(serialize_with = "crate::timestamp::serialize_millis")]
    #[schemars(with = "DateTime<Utc>")]
    pub exported_at: DateTime<Utc>,
    pub total_entries: u32,
    pub missions_completed: u32,
    pub total_missions: u32,
}

/// One element of the `mission_summary` member.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MissionSummary {
    pub id: String,
    pub title: String,
    pub status: MissionStatus,
    pub entries_collected: u32,
    pub required_count: u32,
}

impl From<&Mission> for MissionSummary {
    fn from(mission: &Mission) -> Self {
        Self {
            id: mission.id.clone(),
            title: mission.title.clone(),
            status: mission.status,
            entries_collected: mission.entries_collected,
            required_count: mission.required_count,
        }
    }
}

/// Snapshot of missions and entries produced on demand.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ExportDocument {
    pub export_info: ExportInfo,
    pub mission_summary: Vec<MissionSummary>,
    /// Full entry ledger in ledger order.
    pub collected_data: Vec<Entry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;

    fn mission(collected: u32, required: u32) -> Mission {
        Mission {
            id: "m1".into(),
            title: "Plaza".into(),
            instruction: String::new(),
            target: GeoPoint::new(0.0, 0.0),
            boundary_radius_m: 20.0,
            required_count: required,
            suggested_subcategory: None,
            zoom: None,
            status: MissionStatus::for_progress(collected, required),
            entries_collected: collected,
        }
    }

    #[test]
    fn percent_is_capped() {
        assert!((ProgressSnapshot::of(&mission(1, 4)).percent - 25.0).abs() < 1e-9);
        assert!((ProgressSnapshot::of(&mission(5, 4)).percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn summary_copies_progress_fields() {
        let summary = MissionSummary::from(&mission(2, 2));
        assert_eq!(summary.status, MissionStatus::Completed);
        assert_eq!(summary.entries_collected, 2);
        assert_eq!(summary.required_count, 2);
    }

    #[test]
    fn export_document_top_level_members_are_stable() {
        let doc = ExportDocument {
            export_info: ExportInfo {
                exported_at: "2026-02-08T12:00:00Z".parse().unwrap(),
                total_entries: 0,
                missions_completed: 0,
                total_missions: 0,
            },
            mission_summary: Vec::new(),
            collected_data: Vec::new(),
        };
        let value = serde_json::to_value(&doc).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["collected_data", "export_info", "mission_summary"]);
        assert_eq!(value["collected_data"], serde_json::json!([]));
        assert_eq!(value["export_info"]["total_entries"], 0);
    }
}
