//! Export snapshot assembly and file output.
//!
//! `snapshot` is a pure read over the store and ledger. Writing validates
//! the document against the `export_document` schema; a mismatch is logged
//! as a warning and the file is still written.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use fl_core::responses::{ExportDocument, ExportInfo};
use fl_core::timestamp::truncate_millis;
use fl_schema::SchemaRegistry;

use crate::display::DisplayEvent;
use crate::error::EngineError;
use crate::ledger::EntryLedger;
use crate::missions::{MissionStore, count_u32};

/// Assemble the export document. Never fails; an empty ledger yields an
/// empty `collected_data`.
#[must_use]
pub fn snapshot(store: &MissionStore, ledger: &EntryLedger, now: DateTime<Utc>) -> ExportDocument {
    let overall = store.overall();
    ExportDocument {
        export_info: ExportInfo {
            exported_at: truncate_millis(now),
            total_entries: count_u32(ledger.len()),
            missions_completed: overall.completed,
            total_missions: overall.total,
        },
        mission_summary: store.summaries(),
        collected_data: ledger.all().to_vec(),
    }
}

/// `{prefix}_{YYYY-MM-DDTHH-MM-SS}.json`
#[must_use]
pub fn export_file_name(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{prefix}_{}.json", now.format("%Y-%m-%dT%H-%M-%S"))
}

/// Write `document` into `dir` as pretty JSON and return the file path.
///
/// # Errors
///
/// Returns `EngineError::ExportIo` if the directory or file cannot be written.
pub fn write_export(
    document: &ExportDocument,
    dir: &Path,
    prefix: &str,
    schema: &SchemaRegistry,
) -> Result<PathBuf, EngineError> {
    let value = serde_json::to_value(document).map_err(|e| io_error(dir, &e))?;
    if let Err(e) = schema.validate("export_document", &value) {
        tracing::warn!("Export validation failed: {e}");
    }

    std::fs::create_dir_all(dir).map_err(|e| io_error(dir, &e))?;
    let path = dir.join(export_file_name(prefix, document.export_info.exported_at));
    let text = serde_json::to_string_pretty(document).map_err(|e| io_error(&path, &e))?;
    std::fs::write(&path, text).map_err(|e| io_error(&path, &e))?;

    tracing::info!(
        path = %path.display(),
        entries = document.export_info.total_entries,
        "export written"
    );
    Ok(path)
}

/// Append display events to a JSONL log.
///
/// # Errors
///
/// Returns `EngineError::ExportIo` if the file cannot be written.
pub fn append_event_log(path: &Path, events: &[DisplayEvent]) -> Result<(), EngineError> {
    if events.is_empty() {
        return Ok(());
    }
    serde_jsonlines::append_json_lines(path, events).map_err(|e| io_error(path, &e))
}

fn io_error(path: &Path, error: &dyn std::fmt::Display) -> EngineError {
    EngineError::ExportIo {
        path: path.display().to_string(),
        reason: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::display::NoticeLevel;

    fn at(text: &str) -> DateTime<Utc> {
        text.parse().unwrap()
    }

    #[test]
    fn file_name_uses_dashed_timestamp() {
        assert_eq!(
            export_file_name("citizenlink_data", at("2026-02-08T12:03:04.567Z")),
            "citizenlink_data_2026-02-08T12-03-04.json"
        );
    }

    #[test]
    fn empty_snapshot_is_not_an_error() {
        let doc = snapshot(&MissionStore::new(), &EntryLedger::new(10), at("2026-02-08T12:00:00Z"));
        assert_eq!(doc.export_info.total_entries, 0);
        assert_eq!(doc.export_info.total_missions, 0);
        assert!(doc.collected_data.is_empty());
        assert!(doc.mission_summary.is_empty());
    }

    #[test]
    fn writes_pretty_json_into_dir() {
        let dir = tempfile::tempdir().unwrap();
        let now = at("2026-02-08T12:00:00Z");
        let doc = snapshot(&MissionStore::new(), &EntryLedger::new(10), now);

        let path = write_export(&doc, &dir.path().join("out"), "survey", &SchemaRegistry::new()).unwrap();
        assert_eq!(path.file_name().unwrap(), "survey_2026-02-08T12-00-00.json");

        let written: ExportDocument =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, doc);
    }

    #[test]
    fn written_timestamps_use_millisecond_precision() {
        let dir = tempfile::tempdir().unwrap();
        let doc = snapshot(
            &MissionStore::new(),
            &EntryLedger::new(10),
            at("2026-02-08T12:00:00.987654321Z"),
        );
        assert_eq!(doc.export_info.exported_at, at("2026-02-08T12:00:00.987Z"));

        let path = write_export(&doc, dir.path(), "survey", &SchemaRegistry::new()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains(r#""exported_at": "2026-02-08T12:00:00.987Z""#), "{text}");
        let written: ExportDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(written, doc);
    }

    #[test]
    fn event_log_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let events = [DisplayEvent::Notice {
            level: NoticeLevel::Info,
            message: "hello".into(),
        }];
        append_event_log(&path, &events).unwrap();
        append_event_log(&path, &events).unwrap();
        append_event_log(&path, &[]).unwrap();

        let read: Vec<DisplayEvent> = serde_jsonlines::json_lines(&path)
            .unwrap()
            .collect::<std::io::Result<_>>()
            .unwrap();
        assert_eq!(read.len(), 2);
    }
}
