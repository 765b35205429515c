//! Serde roundtrip and JsonSchema validation tests for entity and response types.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use schemars::schema_for;
use fl_core::catalog::{CatalogFile, MissionRecord};
use fl_core::entities::*;
use fl_core::enums::*;
use fl_core::geo::GeoPoint;
use fl_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn sample_entry() -> Entry {
    let at = Utc.with_ymd_and_hms(2026, 2, 8, 12, 0, 0).unwrap();
    Entry {
        id: "3f0c2a9e-5b1d-4c8e-9a7f-1e2d3c4b5a69".into(),
        user_id: "T-001".into(),
        user_name: "Field Tester".into(),
        mission_id: "mission-plaza".into(),
        mission_title: "Plaza lights".into(),
        entry_number: 1,
        description: "Streetlight flickering at corner".into(),
        latitude: 6.750_03,
        longitude: 125.356_02,
        category: "Infrastructure".into(),
        subcategory: "Streetlight".into(),
        department_r: Vec::new(),
        preferred_departments: Vec::new(),
        workflow_status: WorkflowStatus::New,
        priority: Priority::Medium,
        status: ReviewStatus::Pending,
        confirmation_status: ReviewStatus::Pending,
        is_duplicate: false,
        confirmed_by_citizen: false,
        all_responders_confirmed: false,
        submitted_at: at,
        updated_at: at,
        last_activity_at: at,
        device_info: Some(DeviceInfo {
            user_agent: "fieldline-test".into(),
            screen_width: 390,
            screen_height: 844,
            pixel_ratio: 3.0,
            platform: "linux".into(),
            language: "en-PH".into(),
        }),
        collected_at: at,
    }
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(entry_roundtrip, Entry, sample_entry());

roundtrip_and_validate!(
    entry_without_device_info_roundtrip,
    Entry,
    Entry {
        device_info: None,
        ..sample_entry()
    }
);

roundtrip_and_validate!(
    mission_roundtrip,
    Mission,
    Mission {
        id: "mission-plaza".into(),
        title: "Plaza lights".into(),
        instruction: "Mark every broken streetlight".into(),
        target: GeoPoint::new(6.75, 125.356),
        boundary_radius_m: 20.0,
        required_count: 2,
        suggested_subcategory: Some("Streetlight".into()),
        zoom: Some(19),
        status: MissionStatus::Pending,
        entries_collected: 0,
    }
);

roundtrip_and_validate!(
    mission_record_roundtrip,
    MissionRecord,
    MissionRecord {
        id: "mission-market".into(),
        title: "Public market drainage".into(),
        instruction: "Photograph clogged drains".into(),
        target: GeoPoint::new(6.7489, 125.3571),
        boundary_radius: Some(35.0),
        required_count: 3,
        suggested_category: Some("Clogged Drain".into()),
        zoom: None,
    }
);

roundtrip_and_validate!(
    catalog_file_roundtrip,
    CatalogFile,
    CatalogFile {
        missions: Vec::new()
    }
);

roundtrip_and_validate!(
    progress_snapshot_roundtrip,
    ProgressSnapshot,
    ProgressSnapshot {
        mission_id: "mission-plaza".into(),
        entries_collected: 1,
        required_count: 2,
        status: MissionStatus::Pending,
        percent: 50.0,
    }
);

roundtrip_and_validate!(
    export_document_roundtrip,
    ExportDocument,
    ExportDocument {
        export_info: ExportInfo {
            exported_at: Utc.with_ymd_and_hms(2026, 2, 8, 12, 30, 0).unwrap(),
            total_entries: 1,
            missions_completed: 0,
            total_missions: 1,
        },
        mission_summary: vec![MissionSummary {
            id: "mission-plaza".into(),
            title: "Plaza lights".into(),
            status: MissionStatus::Pending,
            entries_collected: 1,
            required_count: 2,
        }],
        collected_data: vec![sample_entry()],
    }
);

#[test]
fn entry_uses_frozen_field_names_in_order() {
    let value = serde_json::to_value(sample_entry()).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();

    // serde_json without `preserve_order` sorts keys, so compare as sets.
    let mut expected = vec![
        "id",
        "user_id",
        "user_name",
        "_mission_id",
        "_mission_title",
        "_entry_number",
        "descriptive_su",
        "latitude",
        "longitude",
        "category",
        "subcategory",
        "department_r",
        "preferred_departments",
        "workflow_status",
        "priority",
        "status",
        "confirmation_status",
        "is_duplicate",
        "confirmed_by_citizen",
        "all_responders_confirmed",
        "submitted_at",
        "updated_at",
        "last_activity_at",
        "_device_info",
        "_collected_at",
    ];
    expected.sort_unstable();
    let mut actual = keys.clone();
    actual.sort_unstable();
    assert_eq!(actual, expected);

    let text = serde_json::to_string(&sample_entry()).unwrap();
    let id_pos = text.find("\"id\"").unwrap();
    let collected_pos = text.find("\"_collected_at\"").unwrap();
    assert!(id_pos < collected_pos, "struct order is preserved in text output");
}

#[test]
fn device_info_uses_camel_case() {
    let value = serde_json::to_value(sample_entry()).unwrap();
    assert_eq!(value["_device_info"]["userAgent"], "fieldline-test");
    assert_eq!(value["_device_info"]["pixelRatio"], 3.0);
}

#[test]
fn timestamps_serialize_as_rfc3339_utc_with_milliseconds() {
    let value = serde_json::to_value(sample_entry()).unwrap();
    assert_eq!(value["submitted_at"], "2026-02-08T12:00:00.000Z");
    assert_eq!(value["_collected_at"], "2026-02-08T12:00:00.000Z");
}
