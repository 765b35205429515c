use serde::Serialize;

use fl_core::enums::MissionStatus;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CatalogArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MissionRow {
    id: String,
    title: String,
    status: MissionStatus,
    entries: String,
    radius_m: f64,
    suggested: String,
}

/// Handle `fieldline missions`.
pub async fn handle(args: &CatalogArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let engine = ctx.load_engine(args.catalog.as_deref()).await?;

    let rows = engine
        .missions()
        .iter()
        .map(|mission| MissionRow {
            id: mission.id.clone(),
            title: mission.title.clone(),
            status: mission.status,
            entries: format!("{}/{}", mission.entries_collected, mission.required_count),
            radius_m: mission.boundary_radius_m,
            suggested: mission
                .suggested_subcategory
                .clone()
                .unwrap_or_else(|| fl_core::taxonomy::OTHERS.to_string()),
        })
        .collect::<Vec<_>>();

    let overall = engine.overall_progress();
    tracing::debug!(completed = overall.completed, total = overall.total, "missions listed");
    output(&rows, flags.format)
}
