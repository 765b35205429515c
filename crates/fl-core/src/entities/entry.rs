use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Priority, ReviewStatus, WorkflowStatus};

/// Device metadata captured by the collecting client.
///
/// Capture is the collaborator's job; the engine only carries the value.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub user_agent: String,
    pub screen_width: u32,
    pub screen_height: u32,
    pub pixel_ratio: f64,
    pub platform: String,
    pub language: String,
}

/// One submitted field record tied to a mission, a location, and a classification.
///
/// Field names are the export contract and must not change. Fields prefixed
/// with `_` are collection metadata; the rest mirror the downstream report
/// record, with the workflow fields fixed at their initial values.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Entry {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(rename = "_mission_id")]
    pub mission_id: String,
    #[serde(rename = "_mission_title")]
    pub mission_title: String,
    /// 1-based position within the mission at creation time.
    #[serde(rename = "_entry_number")]
    pub entry_number: u32,
    #[serde(rename = "descriptive_su")]
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: String,
    pub subcategory: String,
    pub department_r: Vec<String>,
    pub preferred_departments: Vec<String>,
    pub workflow_status: WorkflowStatus,
    pub priority: Priority,
    pub status: ReviewStatus,
    pub confirmation_status: ReviewStatus,
    pub is_duplicate: bool,
    pub confirmed_by_citizen: bool,
    pub all_responders_confirmed: bool,
    #[serde(serialize_with = "crate::timestamp::serialize_millis")]
    #[schemars(with = "DateTime<Utc>")]
    pub submitted_at: DateTime<Utc>,
    #[serde(serialize_with = "crate::timestamp::serialize_millis")]
    #[schemars(with = "DateTime<Utc>")]
    pub updated_at: DateTime<Utc>,
    #[serde(serialize_with = "crate::timestamp::serialize_millis")]
    #[schemars(with = "DateTime<Utc>")]
    pub last_activity_at: DateTime<Utc>,
    #[serde(rename = "_device_info")]
    pub device_info: Option<DeviceInfo>,
    #[serde(
        rename = "_collected_at",
        serialize_with = "crate::timestamp::serialize_millis"
    )]
    #[schemars(with = "DateTime<Utc>")]
    pub collected_at: DateTime<Utc>,
}

impl Entry {
    /// Location of the entry as a point.
    #[must_use]
    pub const fn location(&self) -> crate::geo::GeoPoint {
        crate::geo::GeoPoint::new(self.latitude, self.longitude)
    }
}
