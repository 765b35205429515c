//! Entry ledger: creation, ordered storage, removal, and verbatim re-insertion.
//!
//! Ledger order is the export order and the index space used by history.

use chrono::{DateTime, Utc};

use fl_core::entities::{DeviceInfo, Entry};
use fl_core::enums::{Priority, ReviewStatus, WorkflowStatus};
use fl_core::geo::GeoPoint;
use fl_core::ids::new_entry_id;
use fl_core::timestamp::truncate_millis;

use crate::error::EngineError;

/// Validated-on-append submission payload.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryCandidate {
    pub user_id: String,
    pub user_name: String,
    pub mission_id: String,
    pub mission_title: String,
    pub description: String,
    pub location: GeoPoint,
    pub category: String,
    pub subcategory: String,
    pub priority: Priority,
    pub device_info: Option<DeviceInfo>,
}

/// Ordered store of every submitted entry.
#[derive(Debug, Clone)]
pub struct EntryLedger {
    entries: Vec<Entry>,
    min_description_len: usize,
}

impl EntryLedger {
    #[must_use]
    pub const fn new(min_description_len: usize) -> Self {
        Self {
            entries: Vec::new(),
            min_description_len,
        }
    }

    /// Check a description against the length threshold, measured in
    /// characters after trimming.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Validation` for an empty or short description.
    pub fn validate_description(&self, description: &str) -> Result<(), EngineError> {
        let length = description.trim().chars().count();
        if length == 0 {
            return Err(EngineError::Validation {
                field: "description",
                reason: "Description is required".into(),
            });
        }
        if length < self.min_description_len {
            return Err(EngineError::Validation {
                field: "description",
                reason: format!(
                    "Description must be at least {} characters",
                    self.min_description_len
                ),
            });
        }
        Ok(())
    }

    /// Append a new entry stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Validation` before touching the ledger when the
    /// description is invalid.
    pub fn append(&mut self, candidate: EntryCandidate) -> Result<Entry, EngineError> {
        self.append_at(candidate, Utc::now())
    }

    /// Append with an explicit creation instant, kept to millisecond precision.
    ///
    /// # Errors
    ///
    /// See [`EntryLedger::append`].
    pub fn append_at(
        &mut self,
        candidate: EntryCandidate,
        now: DateTime<Utc>,
    ) -> Result<Entry, EngineError> {
        self.validate_description(&candidate.description)?;
        let now = truncate_millis(now);

        let entry_number = self.count_for_mission(&candidate.mission_id) + 1;
        let entry = Entry {
            id: new_entry_id(),
            user_id: candidate.user_id,
            user_name: candidate.user_name,
            mission_id: candidate.mission_id,
            mission_title: candidate.mission_title,
            entry_number,
            description: candidate.description.trim().to_string(),
            latitude: candidate.location.lat,
            longitude: candidate.location.lng,
            category: candidate.category,
            subcategory: candidate.subcategory,
            department_r: Vec::new(),
            preferred_departments: Vec::new(),
            workflow_status: WorkflowStatus::New,
            priority: candidate.priority,
            status: ReviewStatus::Pending,
            confirmation_status: ReviewStatus::Pending,
            is_duplicate: false,
            confirmed_by_citizen: false,
            all_responders_confirmed: false,
            submitted_at: now,
            updated_at: now,
            last_activity_at: now,
            device_info: candidate.device_info,
            collected_at: now,
        };
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// # Errors
    ///
    /// Returns `EngineError::IndexOutOfRange` if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<Entry, EngineError> {
        if index >= self.entries.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Re-insert a previously removed entry verbatim. `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::IndexOutOfRange` if `index > len()`.
    pub fn insert_preserving_snapshot(
        &mut self,
        entry: Entry,
        index: usize,
    ) -> Result<(), EngineError> {
        if index > self.entries.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.entries.insert(index, entry);
        Ok(())
    }

    #[must_use]
    pub fn count_for_mission(&self, mission_id: &str) -> u32 {
        crate::missions::count_u32(
            self.entries
                .iter()
                .filter(|entry| entry.mission_id == mission_id)
                .count(),
        )
    }

    /// Ledger position of the entry with this id.
    #[must_use]
    pub fn position_of(&self, entry_id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == entry_id)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn min_description_len(&self) -> usize {
        self.min_description_len
    }
}
