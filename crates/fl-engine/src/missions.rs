//! Mission catalog, status transitions, and progress accounting.

use fl_core::catalog::{MissionRecord, validate_missions, validate_records};
use fl_core::entities::Mission;
use fl_core::enums::MissionStatus;
use fl_core::responses::{MissionSummary, OverallProgress, ProgressSnapshot};

use crate::error::EngineError;

/// Status change caused by a progress mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    Unchanged,
    Completed,
    Reopened,
}

/// Ordered mission catalog with per-mission progress.
#[derive(Debug, Clone, Default)]
pub struct MissionStore {
    missions: Vec<Mission>,
}

impl MissionStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            missions: Vec::new(),
        }
    }

    /// Replace the catalog. Every mission starts pending with zero entries,
    /// whatever the input carried.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Core` for duplicate ids, a zero `required_count`,
    /// a bad radius, or an off-globe target; the current catalog is kept.
    pub fn load_catalog(&mut self, missions: Vec<Mission>) -> Result<usize, EngineError> {
        validate_missions(&missions)?;
        self.missions = missions
            .into_iter()
            .map(|mut mission| {
                mission.status = MissionStatus::Pending;
                mission.entries_collected = 0;
                mission
            })
            .collect();
        Ok(self.missions.len())
    }

    /// Validate catalog records and load them.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Core` if any record is invalid; the current
    /// catalog is kept in that case.
    pub fn load_records(
        &mut self,
        records: Vec<MissionRecord>,
        default_radius_m: f64,
    ) -> Result<usize, EngineError> {
        validate_records(&records)?;
        let missions = records
            .into_iter()
            .map(|record| Mission::from_record(record, default_radius_m))
            .collect::<Vec<_>>();
        self.load_catalog(missions)
    }

    /// # Errors
    ///
    /// Returns `EngineError::MissionNotFound` if `id` is not in the catalog.
    pub fn find(&self, id: &str) -> Result<&Mission, EngineError> {
        self.missions
            .iter()
            .find(|mission| mission.id == id)
            .ok_or_else(|| EngineError::MissionNotFound(id.to_string()))
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Mission, EngineError> {
        self.missions
            .iter_mut()
            .find(|mission| mission.id == id)
            .ok_or_else(|| EngineError::MissionNotFound(id.to_string()))
    }

    /// Count one more entry against the mission.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::MissionNotFound` if `id` is absent.
    pub fn record_submission(&mut self, id: &str) -> Result<StatusChange, EngineError> {
        let mission = self.find_mut(id)?;
        mission.entries_collected = mission.entries_collected.saturating_add(1);
        Ok(Self::settle_status(mission))
    }

    /// Take one entry back from the mission, never going below zero.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::MissionNotFound` if `id` is absent.
    pub fn reverse_submission(&mut self, id: &str) -> Result<StatusChange, EngineError> {
        let mission = self.find_mut(id)?;
        mission.entries_collected = mission.entries_collected.saturating_sub(1);
        Ok(Self::settle_status(mission))
    }

    fn settle_status(mission: &mut Mission) -> StatusChange {
        let next = MissionStatus::for_progress(mission.entries_collected, mission.required_count);
        if next == mission.status {
            return StatusChange::Unchanged;
        }
        debug_assert!(mission.status.can_transition_to(next));
        mission.status = next;
        match next {
            MissionStatus::Completed => StatusChange::Completed,
            MissionStatus::Pending => StatusChange::Reopened,
        }
    }

    /// # Errors
    ///
    /// Returns `EngineError::MissionNotFound` if `id` is absent.
    pub fn progress(&self, id: &str) -> Result<ProgressSnapshot, EngineError> {
        self.find(id).map(ProgressSnapshot::of)
    }

    #[must_use]
    pub fn overall(&self) -> OverallProgress {
        OverallProgress {
            completed: count_u32(self.missions.iter().filter(|m| m.is_completed()).count()),
            total: count_u32(self.missions.len()),
        }
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<MissionSummary> {
        self.missions.iter().map(MissionSummary::from).collect()
    }

    #[must_use]
    pub fn all(&self) -> &[Mission] {
        &self.missions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.missions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }
}

/// Saturating `usize` → `u32` for counts exposed in responses.
pub(crate) fn count_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
