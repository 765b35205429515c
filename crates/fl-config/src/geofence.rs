//! Geofence defaults.

use serde::{Deserialize, Serialize};

/// Boundary radius used when a mission does not specify one.
const fn default_radius_m() -> f64 {
    20.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeofenceConfig {
    /// Fallback geofence radius in meters.
    #[serde(default = "default_radius_m")]
    pub default_radius_m: f64,
}

impl Default for GeofenceConfig {
    fn default() -> Self {
        Self {
            default_radius_m: default_radius_m(),
        }
    }
}

impl GeofenceConfig {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.default_radius_m.is_finite() && self.default_radius_m > 0.0
    }
}
