//! Session-scoped distance measurement along a polyline.
//!
//! Independent of missions. Every mutation reports the visual handles it
//! adds or removes to the outbox; the running label sits at the last point
//! while at least two points exist.

use fl_core::geo::GeoPoint;

use crate::display::{Outbox, VisualHandle};
use crate::error::EngineError;
use crate::geofence::distance_m;

/// Render a distance as `"12.3 m"` below one kilometer, `"1.23 km"` above.
#[must_use]
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{meters:.1} m")
    } else {
        format!("{:.2} km", meters / 1000.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MeasurementTool {
    points: Vec<GeoPoint>,
    label: Option<VisualHandle>,
}

impl MeasurementTool {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: Vec::new(),
            label: None,
        }
    }

    pub fn add_point(&mut self, point: GeoPoint, outbox: &mut Outbox) {
        self.points.push(point);
        outbox.added(VisualHandle::PointMarker {
            index: self.points.len() - 1,
            point,
        });
        self.refresh_label(outbox);
    }

    /// # Errors
    ///
    /// Returns `EngineError::IndexOutOfRange` for an unknown vertex.
    pub fn move_point(
        &mut self,
        index: usize,
        point: GeoPoint,
        outbox: &mut Outbox,
    ) -> Result<(), EngineError> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(EngineError::IndexOutOfRange { index, len })?;
        let previous = std::mem::replace(slot, point);
        outbox.removed(VisualHandle::PointMarker {
            index,
            point: previous,
        });
        outbox.added(VisualHandle::PointMarker { index, point });
        self.refresh_label(outbox);
        Ok(())
    }

    /// Remove a vertex; later vertices shift down and are re-announced with
    /// their new indices.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::IndexOutOfRange` for an unknown vertex.
    pub fn remove_point(&mut self, index: usize, outbox: &mut Outbox) -> Result<GeoPoint, EngineError> {
        if index >= self.points.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        for (i, point) in self.points.iter().enumerate().skip(index) {
            outbox.removed(VisualHandle::PointMarker { index: i, point: *point });
        }
        let removed = self.points.remove(index);
        for (i, point) in self.points.iter().enumerate().skip(index) {
            outbox.added(VisualHandle::PointMarker { index: i, point: *point });
        }
        self.refresh_label(outbox);
        Ok(removed)
    }

    pub fn clear(&mut self, outbox: &mut Outbox) {
        if let Some(label) = self.label.take() {
            outbox.removed(label);
        }
        for (index, point) in self.points.drain(..).enumerate() {
            outbox.removed(VisualHandle::PointMarker { index, point });
        }
    }

    /// Sum of great-circle distances between consecutive points.
    #[must_use]
    pub fn total_distance_m(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| distance_m(pair[0], pair[1]))
            .sum()
    }

    #[must_use]
    pub fn label(&self) -> String {
        format_distance(self.total_distance_m())
    }

    #[must_use]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Label handle currently on display, if any.
    #[must_use]
    pub const fn current_label(&self) -> Option<&VisualHandle> {
        self.label.as_ref()
    }

    fn refresh_label(&mut self, outbox: &mut Outbox) {
        if let Some(old) = self.label.take() {
            outbox.removed(old);
        }
        if self.points.len() >= 2
            && let Some(&last) = self.points.last()
        {
            let handle = VisualHandle::DistanceLabel {
                point: last,
                text: self.label(),
            };
            outbox.added(handle.clone());
            self.label = Some(handle);
        }
    }
}
