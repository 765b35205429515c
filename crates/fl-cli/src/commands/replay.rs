use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use serde_jsonlines::JsonLinesWriter;

use fl_core::responses::OverallProgress;
use fl_engine::export::{append_event_log, write_export};
use fl_engine::{Command, CommandOutcome, Engine};

use crate::cli::root_commands::ReplayArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Result of one script line. Failed lines leave the engine unchanged.
#[derive(Debug, Serialize)]
struct StepRecord {
    line: usize,
    command: &'static str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<CommandOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ReplaySummary {
    steps: usize,
    succeeded: usize,
    failed: usize,
    entries: usize,
    overall: OverallProgress,
    export_path: Option<String>,
    events_logged: usize,
}

#[derive(Debug, Serialize)]
struct ReplayReport {
    steps: Vec<StepRecord>,
    summary: ReplaySummary,
}

#[derive(Debug, Serialize)]
struct StepRow {
    line: usize,
    command: &'static str,
    status: &'static str,
    error: String,
}

/// Handle `fieldline replay`.
pub async fn handle(args: &ReplayArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let script_path = ctx.resolve(&args.script);
    let script = tokio::fs::read_to_string(&script_path)
        .await
        .with_context(|| format!("failed to read replay script {}", script_path.display()))?;

    let mut engine = ctx.load_engine(args.catalog.catalog.as_deref()).await?;
    let steps = run_script(&mut engine, &script);

    let export_path = match args.export.as_deref() {
        Some(dir) => export_session(&mut engine, &ctx.export_dir(Some(dir)), ctx)?,
        None => None,
    };

    let events = engine.drain_events();
    let events_logged = match args.events.as_deref() {
        Some(path) => {
            let path = ctx.resolve(path);
            append_event_log(&path, &events)
                .with_context(|| format!("failed to append events to {}", path.display()))?;
            events.len()
        }
        None => 0,
    };

    let failed = steps.iter().filter(|step| !step.ok).count();
    let summary = ReplaySummary {
        steps: steps.len(),
        succeeded: steps.len() - failed,
        failed,
        entries: engine.entries().len(),
        overall: engine.overall_progress(),
        export_path: export_path.map(|path| path.display().to_string()),
        events_logged,
    };
    if failed > 0 {
        tracing::warn!(failed, "replay finished with failed steps");
    }

    match flags.format {
        OutputFormat::Json => output(&ReplayReport { steps, summary }, flags.format),
        OutputFormat::Raw => write_ndjson(&steps, &summary),
        OutputFormat::Table => {
            let rows = steps.iter().map(step_row).collect::<Vec<_>>();
            output(&rows, flags.format)?;
            output(&summary, flags.format)
        }
    }
}

/// Run every non-blank line of `script` as a command, in order.
fn run_script(engine: &mut Engine, script: &str) -> Vec<StepRecord> {
    let lines = script
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .collect::<Vec<_>>();

    let progress = Progress::bar(lines.len() as u64, "replaying");
    let mut steps = Vec::with_capacity(lines.len());
    for (index, line) in lines {
        steps.push(run_line(engine, index + 1, line));
        progress.inc(1);
    }
    progress.finish_clear();
    steps
}

fn run_line(engine: &mut Engine, line: usize, text: &str) -> StepRecord {
    let command = match serde_json::from_str::<Command>(text) {
        Ok(command) => command,
        Err(error) => {
            tracing::warn!(line, %error, "unparseable replay line");
            return StepRecord {
                line,
                command: "invalid",
                ok: false,
                outcome: None,
                error: Some(format!("invalid command: {error}")),
            };
        }
    };

    let name = command.name();
    match engine.dispatch(command) {
        Ok(outcome) => StepRecord {
            line,
            command: name,
            ok: true,
            outcome: Some(outcome),
            error: None,
        },
        Err(error) => {
            tracing::debug!(line, command = name, %error, "replay step failed");
            StepRecord {
                line,
                command: name,
                ok: false,
                outcome: None,
                error: Some(error.to_string()),
            }
        }
    }
}

/// Write the session export, skipping an empty ledger.
fn export_session(engine: &mut Engine, dir: &Path, ctx: &AppContext) -> anyhow::Result<Option<PathBuf>> {
    let document = engine.export();
    if document.collected_data.is_empty() {
        tracing::warn!("No data collected yet; export skipped");
        return Ok(None);
    }

    let path = write_export(&document, dir, &ctx.config.export.file_prefix, &ctx.schema)
        .with_context(|| format!("failed to write export into {}", dir.display()))?;
    Ok(Some(path))
}

fn step_row(step: &StepRecord) -> StepRow {
    StepRow {
        line: step.line,
        command: step.command,
        status: if step.ok { "ok" } else { "failed" },
        error: step.error.clone().unwrap_or_default(),
    }
}

fn write_ndjson(steps: &[StepRecord], summary: &ReplaySummary) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut writer = JsonLinesWriter::new(stdout.lock());
    writer.write_all(steps)?;
    writer.write(summary)?;
    writer.flush()?;
    Ok(())
}
