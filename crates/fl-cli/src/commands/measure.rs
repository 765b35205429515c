use serde::Serialize;

use fl_engine::{Engine, EngineSettings};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MeasureArgs;
use crate::commands::shared::parse::parse_point;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MeasureResponse {
    points: usize,
    total_distance_m: f64,
    label: String,
}

/// Handle `fieldline measure`. Needs no catalog.
pub fn handle(args: &MeasureArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut engine = Engine::new(EngineSettings::default());
    let mut receipt = None;
    for raw in &args.points {
        let point = parse_point(raw)?;
        receipt = Some(engine.add_measurement(point)?);
    }

    let response = receipt.map_or_else(
        || MeasureResponse {
            points: 0,
            total_distance_m: 0.0,
            label: fl_engine::measure::format_distance(0.0),
        },
        |receipt| MeasureResponse {
            points: receipt.points,
            total_distance_m: receipt.total_distance_m,
            label: receipt.label,
        },
    );
    output(&response, flags.format)
}
