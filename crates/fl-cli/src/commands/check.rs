use anyhow::Context;
use serde::Serialize;

use fl_core::geo::GeoPoint;
use fl_engine::PlacementOutcome;
use fl_engine::geofence::{check_drag, check_tap, distance_m, is_within_boundary};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CheckResponse {
    mission_id: String,
    point: GeoPoint,
    target: GeoPoint,
    radius_m: f64,
    distance_m: f64,
    within_boundary: bool,
    tap: PlacementOutcome,
    drag: PlacementOutcome,
}

/// Handle `fieldline check`.
pub async fn handle(args: &CheckArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let point = GeoPoint::new(args.lat, args.lng);
    if !point.is_valid() {
        anyhow::bail!("point {point} is outside valid coordinate ranges");
    }

    let engine = ctx.load_engine(args.catalog.catalog.as_deref()).await?;
    let mission = engine
        .missions()
        .iter()
        .find(|mission| mission.id == args.mission)
        .with_context(|| format!("mission '{}' is not in the catalog", args.mission))?;

    let radius_m = mission.boundary_radius_m;
    output(
        &CheckResponse {
            mission_id: mission.id.clone(),
            point,
            target: mission.target,
            radius_m,
            distance_m: distance_m(point, mission.target),
            within_boundary: is_within_boundary(point, mission.target, radius_m),
            tap: check_tap(point, mission.target, radius_m),
            drag: check_drag(point, mission.target, radius_m),
        },
        flags.format,
    )
}
