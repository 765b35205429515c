//! Engine context: the single owner of mission, ledger, history, and
//! selection state.
//!
//! Every operation runs to completion before the next one starts and checks
//! all of its preconditions before mutating anything, so a failed operation
//! leaves the engine unchanged. Display notifications accumulate in an
//! outbox drained with [`Engine::drain_events`].

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use fl_config::FieldlineConfig;
use fl_core::catalog::MissionRecord;
use fl_core::entities::{Entry, Mission};
use fl_core::geo::GeoPoint;
use fl_core::responses::{ExportDocument, OverallProgress, ProgressSnapshot};
use fl_core::{enums::Priority, taxonomy};

use crate::commands::{
    Command, CommandOutcome, HistoryReceipt, MeasureReceipt, MissionBrief, SubmissionForm,
    SubmitReceipt,
};
use crate::display::{DisplayEvent, NoticeLevel, Outbox, VisualHandle};
use crate::error::EngineError;
use crate::export;
use crate::geofence::{self, PlacementOutcome};
use crate::history::{HistoryManager, HistoryStep};
use crate::ledger::{EntryCandidate, EntryLedger};
use crate::measure::MeasurementTool;
use crate::missions::{MissionStore, StatusChange};

/// Values the engine takes from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub default_radius_m: f64,
    pub min_description_len: usize,
    pub user_id: String,
    pub user_name: String,
}

impl EngineSettings {
    #[must_use]
    pub fn from_config(config: &FieldlineConfig) -> Self {
        Self {
            default_radius_m: config.geofence.default_radius_m,
            min_description_len: config.entry.min_description_len,
            user_id: config.collector.user_id.trim().to_string(),
            user_name: config.collector.user_name.trim().to_string(),
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::from_config(&FieldlineConfig::default())
    }
}

#[derive(Debug)]
pub struct Engine {
    settings: EngineSettings,
    store: MissionStore,
    ledger: EntryLedger,
    history: HistoryManager,
    measurement: MeasurementTool,
    catalog_loaded: bool,
    active: Option<String>,
    pending: Option<GeoPoint>,
    outbox: Outbox,
}

impl Engine {
    #[must_use]
    pub const fn new(settings: EngineSettings) -> Self {
        let min_description_len = settings.min_description_len;
        Self {
            settings,
            store: MissionStore::new(),
            ledger: EntryLedger::new(min_description_len),
            history: HistoryManager::new(),
            measurement: MeasurementTool::new(),
            catalog_loaded: false,
            active: None,
            pending: None,
            outbox: Outbox::new(),
        }
    }

    // -- catalog ------------------------------------------------------------

    /// Whether the catalog may still be replaced.
    #[must_use]
    pub fn catalog_locked(&self) -> bool {
        self.active.is_some() || !self.ledger.is_empty() || self.history.can_redo()
    }

    /// Validate catalog records and load them with fresh progress.
    ///
    /// # Errors
    ///
    /// `CatalogLocked` once a mission is active or entries exist; `Core` for
    /// invalid records.
    pub fn load_records(&mut self, records: Vec<MissionRecord>) -> Result<usize, EngineError> {
        if self.catalog_locked() {
            return Err(EngineError::CatalogLocked);
        }
        let count = self
            .store
            .load_records(records, self.settings.default_radius_m)?;
        self.catalog_loaded = true;
        info!(missions = count, "mission catalog loaded");
        Ok(count)
    }

    /// Load already-built missions. Progress is reset.
    ///
    /// # Errors
    ///
    /// `CatalogLocked` once a mission is active or entries exist; `Core` for
    /// missions that break the catalog rules.
    pub fn load_catalog(&mut self, missions: Vec<Mission>) -> Result<usize, EngineError> {
        if self.catalog_locked() {
            return Err(EngineError::CatalogLocked);
        }
        let count = self.store.load_catalog(missions)?;
        self.catalog_loaded = true;
        info!(missions = count, "mission catalog loaded");
        Ok(count)
    }

    // -- selection and placement -----------------------------------------

    /// Make `mission_id` the active mission. Any pending pin is discarded.
    ///
    /// # Errors
    ///
    /// `CatalogNotLoaded` before any catalog load; `MissionNotFound` for an
    /// unknown id.
    pub fn select_mission(&mut self, mission_id: &str) -> Result<MissionBrief, EngineError> {
        if !self.catalog_loaded {
            return Err(EngineError::CatalogNotLoaded);
        }
        let mission = self.store.find(mission_id)?;
        let (category, subcategory) = taxonomy::suggestion(mission.suggested_subcategory.as_deref());
        let brief = MissionBrief {
            mission_id: mission.id.clone(),
            title: mission.title.clone(),
            instruction: mission.instruction.clone(),
            target: mission.target,
            radius_m: mission.boundary_radius_m,
            suggested_category: category.to_string(),
            suggested_subcategory: subcategory,
            default_priority: Priority::default(),
            zoom: mission.zoom,
            progress: ProgressSnapshot::of(mission),
        };

        self.leave_active_mission();
        self.outbox.added(VisualHandle::BoundaryCircle {
            center: brief.target,
            radius_m: brief.radius_m,
        });
        self.active = Some(brief.mission_id.clone());
        debug!(mission_id = %brief.mission_id, "mission selected");
        Ok(brief)
    }

    /// Return to the mission list.
    pub fn clear_selection(&mut self) -> OverallProgress {
        self.leave_active_mission();
        self.store.overall()
    }

    /// Tap placement: accepted inside the boundary, rejected outside. A
    /// rejected tap leaves the pending pin where it was.
    ///
    /// # Errors
    ///
    /// `NoActiveMission`, or `Validation` for coordinates off the globe.
    pub fn place_attempt(&mut self, point: GeoPoint) -> Result<PlacementOutcome, EngineError> {
        let mission = self.active_mission()?;
        check_point(point)?;
        let outcome = geofence::check_tap(point, mission.target, mission.boundary_radius_m);

        match outcome {
            PlacementOutcome::Rejected {
                distance_m,
                radius_m,
            } => {
                warn!(mission_id = %mission.id, distance_m, "placement outside boundary");
                self.outbox.notice(
                    NoticeLevel::Warning,
                    format!(
                        "Please place the pin within the {radius_m} m mission area ({distance_m:.1} m away)"
                    ),
                );
            }
            _ => {
                if let Some(placed) = outcome.placed() {
                    self.set_pending(Some(placed));
                }
            }
        }
        Ok(outcome)
    }

    /// Drag end of the pending pin: points outside are pulled back onto the
    /// boundary along the same bearing.
    ///
    /// # Errors
    ///
    /// `NoActiveMission`, `NoPlacement` without a pin, or `Validation` for
    /// coordinates off the globe.
    pub fn drag_placement(&mut self, point: GeoPoint) -> Result<PlacementOutcome, EngineError> {
        let mission = self.active_mission()?;
        if self.pending.is_none() {
            return Err(EngineError::NoPlacement);
        }
        check_point(point)?;
        let outcome = geofence::check_drag(point, mission.target, mission.boundary_radius_m);

        if let PlacementOutcome::Constrained { distance_m, .. } = outcome {
            debug!(mission_id = %mission.id, distance_m, "drag constrained to boundary");
            self.outbox
                .notice(NoticeLevel::Info, "Pin kept inside the mission area");
        }
        if let Some(placed) = outcome.placed() {
            self.set_pending(Some(placed));
        }
        Ok(outcome)
    }

    // -- submission -------------------------------------------------------

    /// Submit the form at the pending pin.
    ///
    /// # Errors
    ///
    /// `NoActiveMission`, `NoPlacement`, plus everything
    /// [`Engine::submit_point`] reports.
    pub fn submit(&mut self, form: SubmissionForm) -> Result<SubmitReceipt, EngineError> {
        self.active_mission()?;
        let point = self.pending.ok_or(EngineError::NoPlacement)?;
        self.submit_point(point, form)
    }

    /// Submit the form at a directly supplied point.
    ///
    /// # Errors
    ///
    /// - `NoActiveMission` without a selected mission.
    /// - `Validation` for an invalid point, description, or category.
    /// - `BoundaryViolation` when the point lies outside the geofence.
    /// - `UnknownSubcategory` when the pair is not in the taxonomy.
    pub fn submit_point(
        &mut self,
        point: GeoPoint,
        form: SubmissionForm,
    ) -> Result<SubmitReceipt, EngineError> {
        let mission = self.active_mission()?;
        check_point(point)?;

        let distance_m = geofence::distance_m(point, mission.target);
        if distance_m > mission.boundary_radius_m {
            warn!(mission_id = %mission.id, distance_m, "submission outside boundary rejected");
            return Err(EngineError::BoundaryViolation {
                distance_m,
                radius_m: mission.boundary_radius_m,
            });
        }
        if let Err(e) = self.ledger.validate_description(&form.description) {
            warn!(mission_id = %mission.id, "submission rejected: {e}");
            return Err(e);
        }
        check_classification(&form.category, &form.subcategory)?;

        let candidate = EntryCandidate {
            user_id: self.settings.user_id.clone(),
            user_name: self.settings.user_name.clone(),
            mission_id: mission.id.clone(),
            mission_title: mission.title.clone(),
            description: form.description,
            location: point,
            category: form.category,
            subcategory: form.subcategory,
            priority: form.priority,
            device_info: form.device_info,
        };

        let entry = self.ledger.append(candidate)?;
        let status_change = match self.store.record_submission(&entry.mission_id) {
            Ok(change) => change,
            Err(e) => {
                self.ledger.remove_at(self.ledger.len() - 1)?;
                return Err(e);
            }
        };
        let index = self.ledger.len() - 1;
        self.history.record(entry.clone(), index);

        if self.pending.is_some() {
            self.set_pending(None);
        }
        self.outbox.added(entry_marker(&entry));
        let progress = self.publish_progress(&entry.mission_id, status_change)?;
        self.publish_history();
        self.outbox.notice(
            NoticeLevel::Success,
            format!("Entry #{} saved", entry.entry_number),
        );
        debug!(mission_id = %entry.mission_id, entry_id = %entry.id, "entry submitted");

        Ok(SubmitReceipt {
            entry,
            progress,
            completed_now: status_change == StatusChange::Completed,
        })
    }

    // -- history -------------------------------------------------------------

    /// Remove the most recent submission.
    ///
    /// # Errors
    ///
    /// `NothingToUndo` on an empty history; contract violations from
    /// [`HistoryManager::undo`].
    pub fn undo(&mut self) -> Result<HistoryReceipt, EngineError> {
        let step = self.history.undo(&mut self.ledger, &mut self.store)?;
        self.outbox.removed(entry_marker(&step.entry));
        self.outbox.notice(
            NoticeLevel::Info,
            format!("Removed entry #{}", step.entry.entry_number),
        );
        debug!(entry_id = %step.entry.id, "undo");
        self.history_receipt(&step)
    }

    /// Restore the most recently undone submission with its original identity.
    ///
    /// # Errors
    ///
    /// `NothingToRedo` on an empty redo stack; contract violations from
    /// [`HistoryManager::redo`].
    pub fn redo(&mut self) -> Result<HistoryReceipt, EngineError> {
        let step = self.history.redo(&mut self.ledger, &mut self.store)?;
        self.outbox.added(entry_marker(&step.entry));
        self.outbox.notice(
            NoticeLevel::Info,
            format!("Restored entry #{}", step.entry.entry_number),
        );
        debug!(entry_id = %step.entry.id, "redo");
        self.history_receipt(&step)
    }

    fn history_receipt(&mut self, step: &HistoryStep) -> Result<HistoryReceipt, EngineError> {
        let progress = self.publish_progress(&step.entry.mission_id, step.status_change)?;
        self.publish_history();
        Ok(HistoryReceipt {
            entry_id: step.entry.id.clone(),
            mission_id: step.entry.mission_id.clone(),
            progress,
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        })
    }

    // -- export and progress --------------------------------------------------

    /// Snapshot of every mission and entry. An empty ledger still succeeds;
    /// a warning notice is queued for the collaborator.
    pub fn export(&mut self) -> ExportDocument {
        self.export_at(Utc::now())
    }

    pub fn export_at(&mut self, now: DateTime<Utc>) -> ExportDocument {
        if self.ledger.is_empty() {
            self.outbox
                .notice(NoticeLevel::Warning, "No data collected yet");
        }
        export::snapshot(&self.store, &self.ledger, now)
    }

    #[must_use]
    pub fn overall_progress(&self) -> OverallProgress {
        self.store.overall()
    }

    /// # Errors
    ///
    /// `MissionNotFound` for an unknown id.
    pub fn progress(&self, mission_id: &str) -> Result<ProgressSnapshot, EngineError> {
        self.store.progress(mission_id)
    }

    // -- measurement ----------------------------------------------------------

    /// # Errors
    ///
    /// `Validation` for coordinates off the globe.
    pub fn add_measurement(&mut self, point: GeoPoint) -> Result<MeasureReceipt, EngineError> {
        check_point(point)?;
        self.measurement.add_point(point, &mut self.outbox);
        Ok(self.measure_receipt())
    }

    /// # Errors
    ///
    /// `IndexOutOfRange` for an unknown vertex, `Validation` for bad coordinates.
    pub fn move_measurement(
        &mut self,
        index: usize,
        point: GeoPoint,
    ) -> Result<MeasureReceipt, EngineError> {
        check_point(point)?;
        self.measurement.move_point(index, point, &mut self.outbox)?;
        Ok(self.measure_receipt())
    }

    /// # Errors
    ///
    /// `IndexOutOfRange` for an unknown vertex.
    pub fn remove_measurement(&mut self, index: usize) -> Result<MeasureReceipt, EngineError> {
        self.measurement.remove_point(index, &mut self.outbox)?;
        Ok(self.measure_receipt())
    }

    pub fn clear_measurements(&mut self) {
        self.measurement.clear(&mut self.outbox);
    }

    fn measure_receipt(&self) -> MeasureReceipt {
        MeasureReceipt {
            points: self.measurement.points().len(),
            total_distance_m: self.measurement.total_distance_m(),
            label: self.measurement.label(),
        }
    }

    // -- dispatch -------------------------------------------------------------

    /// Run one command to completion.
    ///
    /// # Errors
    ///
    /// Whatever the underlying operation reports; the engine is unchanged.
    pub fn dispatch(&mut self, command: Command) -> Result<CommandOutcome, EngineError> {
        debug!(command = command.name(), "dispatch");
        let outcome = match command {
            Command::Select { mission_id } => CommandOutcome::Selected {
                brief: self.select_mission(&mission_id)?,
            },
            Command::ClearSelection => CommandOutcome::SelectionCleared {
                overall: self.clear_selection(),
            },
            Command::Place { lat, lng } => CommandOutcome::Placement {
                placement: self.place_attempt(GeoPoint::new(lat, lng))?,
            },
            Command::Drag { lat, lng } => CommandOutcome::Placement {
                placement: self.drag_placement(GeoPoint::new(lat, lng))?,
            },
            Command::Submit(form) => CommandOutcome::Submitted {
                receipt: self.submit(form)?,
            },
            Command::Undo => CommandOutcome::Undone {
                receipt: self.undo()?,
            },
            Command::Redo => CommandOutcome::Redone {
                receipt: self.redo()?,
            },
            Command::Export => CommandOutcome::Exported {
                document: self.export(),
            },
            Command::Measure { lat, lng } => CommandOutcome::Measured {
                receipt: self.add_measurement(GeoPoint::new(lat, lng))?,
            },
            Command::ClearMeasurements => {
                self.clear_measurements();
                CommandOutcome::MeasurementsCleared
            }
        };
        Ok(outcome)
    }

    // -- accessors ------------------------------------------------------------

    /// Take all queued display events.
    pub fn drain_events(&mut self) -> Vec<DisplayEvent> {
        self.outbox.drain()
    }

    #[must_use]
    pub fn missions(&self) -> &[Mission] {
        self.store.all()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        self.ledger.all()
    }

    #[must_use]
    pub fn active_mission_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub const fn pending_placement(&self) -> Option<GeoPoint> {
        self.pending
    }

    #[must_use]
    pub const fn history(&self) -> &HistoryManager {
        &self.history
    }

    #[must_use]
    pub const fn measurement(&self) -> &MeasurementTool {
        &self.measurement
    }

    #[must_use]
    pub const fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    // -- internals ------------------------------------------------------------

    fn active_mission(&self) -> Result<Mission, EngineError> {
        let id = self.active.as_deref().ok_or(EngineError::NoActiveMission)?;
        self.store.find(id).cloned()
    }

    fn set_pending(&mut self, point: Option<GeoPoint>) {
        if let Some(previous) = self.pending.take() {
            self.outbox.removed(VisualHandle::PendingPin { point: previous });
        }
        if let Some(point) = point {
            self.outbox.added(VisualHandle::PendingPin { point });
        }
        self.pending = point;
    }

    fn leave_active_mission(&mut self) {
        self.set_pending(None);
        if let Some(id) = self.active.take()
            && let Ok(mission) = self.store.find(&id)
        {
            self.outbox.removed(VisualHandle::BoundaryCircle {
                center: mission.target,
                radius_m: mission.boundary_radius_m,
            });
        }
    }

    fn publish_progress(
        &mut self,
        mission_id: &str,
        change: StatusChange,
    ) -> Result<ProgressSnapshot, EngineError> {
        let mission = self.store.find(mission_id)?;
        let progress = ProgressSnapshot::of(mission);
        match change {
            StatusChange::Completed => {
                info!(mission_id = %mission.id, "mission completed");
                self.outbox.push(DisplayEvent::MissionCompleted {
                    mission_id: mission.id.clone(),
                    title: mission.title.clone(),
                });
            }
            StatusChange::Reopened => {
                info!(mission_id = %mission.id, "mission reopened");
                self.outbox.push(DisplayEvent::MissionReopened {
                    mission_id: mission.id.clone(),
                });
            }
            StatusChange::Unchanged => {}
        }
        self.outbox.push(DisplayEvent::ProgressChanged {
            progress: progress.clone(),
        });
        Ok(progress)
    }

    fn publish_history(&mut self) {
        self.outbox.push(DisplayEvent::HistoryChanged {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        });
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

fn entry_marker(entry: &Entry) -> VisualHandle {
    VisualHandle::EntryMarker {
        entry_id: entry.id.clone(),
        point: entry.location(),
    }
}

fn check_point(point: GeoPoint) -> Result<(), EngineError> {
    if point.is_valid() {
        Ok(())
    } else {
        Err(EngineError::Validation {
            field: "location",
            reason: format!("{point} is not a valid coordinate"),
        })
    }
}

fn check_classification(category: &str, subcategory: &str) -> Result<(), EngineError> {
    if !taxonomy::is_category(category) {
        return Err(EngineError::Validation {
            field: "category",
            reason: format!("Unknown category '{category}'"),
        });
    }
    if !taxonomy::is_valid_pair(category, subcategory) {
        return Err(EngineError::UnknownSubcategory {
            category: category.to_string(),
            subcategory: subcategory.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::geofence::offset_by_meters;
    use crate::test_support::helpers::{form, plaza_records, settings};

    fn engine() -> Engine {
        let mut engine = Engine::new(settings());
        engine.load_records(plaza_records()).unwrap();
        engine
    }

    #[test]
    fn commands_need_a_catalog_and_a_mission() {
        let mut engine = Engine::new(settings());
        assert_eq!(engine.select_mission("plaza"), Err(EngineError::CatalogNotLoaded));
        assert_eq!(
            engine.place_attempt(GeoPoint::new(6.75, 125.356)),
            Err(EngineError::NoActiveMission)
        );
        assert_eq!(engine.submit(form("Streetlight is out")), Err(EngineError::NoActiveMission));
    }

    #[test]
    fn built_missions_are_validated_before_replacing_catalog() {
        let mut engine = Engine::new(settings());
        let missions: Vec<Mission> = plaza_records()
            .into_iter()
            .map(|record| Mission::from_record(record, 20.0))
            .collect();

        let mut zero = missions[0].clone();
        zero.id = "zero".into();
        zero.required_count = 0;
        let err = engine
            .load_catalog(vec![zero, missions[1].clone(), missions[1].clone()])
            .unwrap_err();
        assert!(matches!(err, EngineError::Core(_)));
        assert_eq!(engine.select_mission("plaza"), Err(EngineError::CatalogNotLoaded));

        assert_eq!(engine.load_catalog(missions), Ok(2));
        assert!(engine.select_mission("plaza").is_ok());
    }

    #[test]
    fn select_exposes_suggestion_and_boundary() {
        let mut engine = engine();
        let brief = engine.select_mission("plaza").unwrap();
        assert_eq!(brief.suggested_category, "Infrastructure");
        assert_eq!(brief.suggested_subcategory, "Streetlight");
        assert_eq!(brief.default_priority, Priority::Low);
        assert!((brief.radius_m - 20.0).abs() < f64::EPSILON);

        let events = engine.drain_events();
        assert!(events.iter().any(|e| matches!(
            e,
            DisplayEvent::HandleAdded { handle: VisualHandle::BoundaryCircle { .. } }
        )));
    }

    #[test]
    fn rejected_tap_keeps_previous_pin() {
        let mut engine = engine();
        let brief = engine.select_mission("plaza").unwrap();
        let inside = offset_by_meters(brief.target, 5.0, 0.0);

        assert!(matches!(engine.place_attempt(inside).unwrap(), PlacementOutcome::Accepted { .. }));
        let outcome = engine
            .place_attempt(offset_by_meters(brief.target, 40.0, 0.0))
            .unwrap();
        assert!(matches!(outcome, PlacementOutcome::Rejected { .. }));
        assert_eq!(engine.pending_placement(), Some(inside));
    }

    #[test]
    fn drag_requires_a_pin_and_constrains() {
        let mut engine = engine();
        let brief = engine.select_mission("plaza").unwrap();
        let far = offset_by_meters(brief.target, 0.0, 100.0);
        assert_eq!(engine.drag_placement(far), Err(EngineError::NoPlacement));

        engine.place_attempt(brief.target).unwrap();
        let outcome = engine.drag_placement(far).unwrap();
        let PlacementOutcome::Constrained { constrained, .. } = outcome else {
            panic!("expected constrained outcome, got {outcome:?}");
        };
        assert_eq!(engine.pending_placement(), Some(constrained));
        assert!(geofence::is_within_boundary(constrained, brief.target, brief.radius_m));
    }

    #[test]
    fn submit_clears_pin_and_locks_catalog() {
        let mut engine = engine();
        let brief = engine.select_mission("plaza").unwrap();
        engine.place_attempt(offset_by_meters(brief.target, 3.0, 3.0)).unwrap();

        let receipt = engine.submit(form("Streetlight is out")).unwrap();
        assert_eq!(receipt.entry.entry_number, 1);
        assert_eq!(receipt.entry.user_id, "T-001");
        assert!(!receipt.completed_now);
        assert_eq!(engine.pending_placement(), None);
        assert_eq!(engine.submit(form("Streetlight is out")), Err(EngineError::NoPlacement));

        engine.clear_selection();
        assert_eq!(engine.load_records(plaza_records()), Err(EngineError::CatalogLocked));
    }

    #[test]
    fn invalid_classification_is_rejected_without_mutation() {
        let mut engine = engine();
        let brief = engine.select_mission("plaza").unwrap();
        engine.place_attempt(brief.target).unwrap();

        let mut bad = form("Streetlight is out");
        bad.subcategory = "Pipe Leak".into();
        assert!(matches!(engine.submit(bad), Err(EngineError::UnknownSubcategory { .. })));

        let mut unknown = form("Streetlight is out");
        unknown.category = "Weather".into();
        assert!(matches!(
            engine.submit(unknown),
            Err(EngineError::Validation { field: "category", .. })
        ));
        assert!(engine.entries().is_empty());
        assert_eq!(engine.pending_placement(), Some(brief.target));
    }

    #[test]
    fn dispatch_routes_commands() {
        let mut engine = engine();
        let outcome = engine
            .dispatch(Command::Select {
                mission_id: "market".into(),
            })
            .unwrap();
        assert!(matches!(outcome, CommandOutcome::Selected { .. }));
        assert_eq!(engine.dispatch(Command::Undo), Err(EngineError::NothingToUndo));
        assert!(matches!(
            engine.dispatch(Command::Measure { lat: 6.75, lng: 125.356 }).unwrap(),
            CommandOutcome::Measured { receipt } if receipt.points == 1
        ));
        assert_eq!(
            engine.dispatch(Command::ClearMeasurements).unwrap(),
            CommandOutcome::MeasurementsCleared
        );
    }

    #[test]
    fn empty_export_warns_but_succeeds() {
        let mut engine = engine();
        let doc = engine.export();
        assert!(doc.collected_data.is_empty());
        assert_eq!(doc.export_info.total_missions, 2);
        assert!(engine.drain_events().iter().any(|e| matches!(
            e,
            DisplayEvent::Notice { level: NoticeLevel::Warning, .. }
        )));
    }
}
