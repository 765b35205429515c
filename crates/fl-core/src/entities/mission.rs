use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::MissionRecord;
use crate::enums::MissionStatus;
use crate::geo::GeoPoint;

/// A predefined target location requiring a fixed number of entries placed
/// inside its circular boundary.
///
/// Everything but `status` and `entries_collected` is fixed at catalog load.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Mission {
    pub id: String,
    pub title: String,
    pub instruction: String,
    pub target: GeoPoint,
    pub boundary_radius_m: f64,
    pub required_count: u32,
    pub suggested_subcategory: Option<String>,
    /// Display-only zoom hint carried through from the catalog.
    pub zoom: Option<u8>,
    pub status: MissionStatus,
    pub entries_collected: u32,
}

impl Mission {
    /// Build a mission from a catalog record with fresh progress.
    ///
    /// `default_radius_m` applies when the record has no `boundary_radius`.
    #[must_use]
    pub fn from_record(record: MissionRecord, default_radius_m: f64) -> Self {
        Self {
            id: record.id,
            title: record.title,
            instruction: record.instruction,
            target: record.target,
            boundary_radius_m: record.boundary_radius.unwrap_or(default_radius_m),
            required_count: record.required_count,
            suggested_subcategory: record.suggested_category,
            zoom: record.zoom,
            status: MissionStatus::Pending,
            entries_collected: 0,
        }
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == MissionStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(radius: Option<f64>) -> MissionRecord {
        MissionRecord {
            id: "m1".into(),
            title: "Plaza".into(),
            instruction: "Mark broken lights".into(),
            target: GeoPoint::new(6.75, 125.356),
            boundary_radius: radius,
            required_count: 3,
            suggested_category: Some("Streetlight".into()),
            zoom: Some(19),
        }
    }

    #[test]
    fn uses_record_radius_when_present() {
        let mission = Mission::from_record(record(Some(35.0)), 20.0);
        assert!((mission.boundary_radius_m - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn falls_back_to_default_radius() {
        let mission = Mission::from_record(record(None), 20.0);
        assert!((mission.boundary_radius_m - 20.0).abs() < f64::EPSILON);
        assert_eq!(mission.status, MissionStatus::Pending);
        assert_eq!(mission.entries_collected, 0);
        assert!(!mission.is_completed());
    }
}
