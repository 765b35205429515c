//! Geofence validation: distance, boundary test, and constrained projection.
//!
//! Distances are great-circle (haversine) over a spherical Earth. Projection
//! back onto a boundary uses the small-angle meters-to-degrees conversion
//! (1° latitude ≈ 111,320 m, longitude scaled by `cos(center latitude)`).
//! Longitude differences take the short way across ±180°. All functions are
//! pure.

use serde::{Deserialize, Serialize};

use fl_core::geo::GeoPoint;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Meters per degree of latitude for the small-angle conversion.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Keeps the longitude scale finite at the poles.
const MIN_COS_LAT: f64 = 1e-12;

/// Bound on inward refinement steps in [`constrain_to_boundary`].
const MAX_REFINEMENTS: usize = 8;

/// Result of checking a placement against a mission geofence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PlacementOutcome {
    /// The point is inside the boundary and was taken as-is.
    Accepted { point: GeoPoint, distance_m: f64 },
    /// The point was outside and has been pulled back onto the boundary.
    Constrained {
        requested: GeoPoint,
        constrained: GeoPoint,
        distance_m: f64,
    },
    /// The point was outside and discarded; the collaborator re-shows the hint.
    Rejected { distance_m: f64, radius_m: f64 },
}

impl PlacementOutcome {
    /// The point that ended up placed, if any.
    #[must_use]
    pub const fn placed(&self) -> Option<GeoPoint> {
        match self {
            Self::Accepted { point, .. } => Some(*point),
            Self::Constrained { constrained, .. } => Some(*constrained),
            Self::Rejected { .. } => None,
        }
    }
}

/// Great-circle distance between two points in meters.
///
/// Symmetric, zero for identical points, monotonic with angular separation.
#[must_use]
pub fn distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let sin_dlat = ((b.lat - a.lat).to_radians() / 2.0).sin();
    let sin_dlng = ((b.lng - a.lng).to_radians() / 2.0).sin();

    let h = sin_dlat.mul_add(sin_dlat, lat1.cos() * lat2.cos() * sin_dlng * sin_dlng);
    let h = h.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Whether `point` lies within `radius_m` of `center` (boundary inclusive).
#[must_use]
pub fn is_within_boundary(point: GeoPoint, center: GeoPoint, radius_m: f64) -> bool {
    distance_m(point, center) <= radius_m
}

/// Move `origin` by a local north/east offset in meters.
#[must_use]
pub fn offset_by_meters(origin: GeoPoint, north_m: f64, east_m: f64) -> GeoPoint {
    GeoPoint::new(
        origin.lat + north_m / METERS_PER_DEGREE,
        wrap_longitude(origin.lng + east_m / (METERS_PER_DEGREE * cos_lat(origin))),
    )
}

/// Pull `point` back onto the boundary circle around `center`.
///
/// Points already inside (including `center` itself, where the bearing is
/// undefined) are returned unchanged. Otherwise the result lies on the ray
/// from `center` through `point`, at `radius_m` under the small-angle
/// conversion, and is guaranteed to pass [`is_within_boundary`], so the
/// function is idempotent.
#[must_use]
pub fn constrain_to_boundary(point: GeoPoint, center: GeoPoint, radius_m: f64) -> GeoPoint {
    if is_within_boundary(point, center, radius_m) {
        return point;
    }

    let north_m = (point.lat - center.lat) * METERS_PER_DEGREE;
    let east_m = longitude_delta(center, point) * METERS_PER_DEGREE * cos_lat(center);
    if north_m == 0.0 && east_m == 0.0 {
        return center;
    }
    let bearing = east_m.atan2(north_m);

    // Haversine and the small-angle conversion disagree by a fraction of a
    // percent; step inward until the projected point tests as inside.
    let mut reach = radius_m;
    for _ in 0..MAX_REFINEMENTS {
        let candidate = offset_by_meters(center, reach * bearing.cos(), reach * bearing.sin());
        let d = distance_m(candidate, center);
        if d <= radius_m {
            return candidate;
        }
        reach *= radius_m / d * (1.0 - 1e-9);
    }
    center
}

/// Classify a tap: inside is accepted, outside is rejected.
#[must_use]
pub fn check_tap(point: GeoPoint, center: GeoPoint, radius_m: f64) -> PlacementOutcome {
    let distance_m = distance_m(point, center);
    if distance_m <= radius_m {
        PlacementOutcome::Accepted { point, distance_m }
    } else {
        PlacementOutcome::Rejected {
            distance_m,
            radius_m,
        }
    }
}

/// Classify a drag: inside is accepted, outside is projected onto the boundary.
#[must_use]
pub fn check_drag(point: GeoPoint, center: GeoPoint, radius_m: f64) -> PlacementOutcome {
    let requested_distance = distance_m(point, center);
    if requested_distance <= radius_m {
        return PlacementOutcome::Accepted {
            point,
            distance_m: requested_distance,
        };
    }
    let constrained = constrain_to_boundary(point, center, radius_m);
    PlacementOutcome::Constrained {
        requested: point,
        constrained,
        distance_m: distance_m(constrained, center),
    }
}

fn cos_lat(point: GeoPoint) -> f64 {
    point.lat.to_radians().cos().max(MIN_COS_LAT)
}

/// Signed eastward longitude difference from `from` to `to`, in (-180, 180].
fn longitude_delta(from: GeoPoint, to: GeoPoint) -> f64 {
    wrap_longitude(to.lng - from.lng)
}

/// Bring a longitude into (-180, 180]. In-range values pass through untouched.
fn wrap_longitude(lng: f64) -> f64 {
    if lng > -180.0 && lng <= 180.0 {
        return lng;
    }
    let wrapped = (lng + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 { 180.0 } else { wrapped }
}
