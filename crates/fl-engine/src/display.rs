//! Display-layer notifications.
//!
//! The engine never draws anything. It describes what the collaborator
//! should show as [`DisplayEvent`]s queued in an [`Outbox`].

use serde::{Deserialize, Serialize};

use fl_core::geo::GeoPoint;
use fl_core::responses::ProgressSnapshot;

/// A visual element the display layer owns on the engine's behalf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisualHandle {
    /// Vertex of the measurement polyline.
    PointMarker { index: usize, point: GeoPoint },
    /// Running total shown at the last measurement vertex.
    DistanceLabel { point: GeoPoint, text: String },
    /// Marker for a submitted entry.
    EntryMarker { entry_id: String, point: GeoPoint },
    /// Geofence of the active mission.
    BoundaryCircle { center: GeoPoint, radius_m: f64 },
    /// Draggable pin for the pending placement.
    PendingPin { point: GeoPoint },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DisplayEvent {
    HandleAdded { handle: VisualHandle },
    HandleRemoved { handle: VisualHandle },
    ProgressChanged { progress: ProgressSnapshot },
    MissionCompleted { mission_id: String, title: String },
    MissionReopened { mission_id: String },
    HistoryChanged { can_undo: bool, can_redo: bool },
    Notice { level: NoticeLevel, message: String },
}

/// FIFO queue of pending display events.
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    events: Vec<DisplayEvent>,
}

impl Outbox {
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: DisplayEvent) {
        self.events.push(event);
    }

    pub fn added(&mut self, handle: VisualHandle) {
        self.push(DisplayEvent::HandleAdded { handle });
    }

    pub fn removed(&mut self, handle: VisualHandle) {
        self.push(DisplayEvent::HandleRemoved { handle });
    }

    pub fn notice(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.push(DisplayEvent::Notice {
            level,
            message: message.into(),
        });
    }

    /// Take every queued event in emission order.
    pub fn drain(&mut self) -> Vec<DisplayEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn pending(&self) -> &[DisplayEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn drain_empties_in_order() {
        let mut outbox = Outbox::new();
        outbox.notice(NoticeLevel::Info, "first");
        outbox.added(VisualHandle::PendingPin {
            point: GeoPoint::new(1.0, 2.0),
        });

        let drained = outbox.drain();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], DisplayEvent::Notice { .. }));
        assert!(outbox.is_empty());
    }

    #[test]
    fn events_serialize_with_tags() {
        let event = DisplayEvent::HandleRemoved {
            handle: VisualHandle::EntryMarker {
                entry_id: "e1".into(),
                point: GeoPoint::new(6.75, 125.356),
            },
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "event": "handle_removed",
                "handle": {
                    "kind": "entry_marker",
                    "entry_id": "e1",
                    "point": { "lat": 6.75, "lng": 125.356 }
                }
            })
        );
    }
}
