#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("fieldline error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    match &cli.command {
        cli::Commands::Taxonomy(args) => return commands::taxonomy::handle(args, &flags),
        cli::Commands::Schema(args) => return commands::schema::handle(args, &flags),
        _ => {}
    }

    let project_root = resolve_project_root(flags.config_dir.as_deref())?;
    let config = bootstrap::load_config(&project_root)?;
    context::warn_unconfigured(&config);

    let ctx = context::AppContext::new(project_root, config);
    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("FIELDLINE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Resolve `--config` to the directory holding `.fieldline/`, defaulting to
/// the current directory.
fn resolve_project_root(config_dir: Option<&str>) -> anyhow::Result<PathBuf> {
    let Some(path) = config_dir else {
        return std::env::current_dir().context("failed to read current directory");
    };
    let explicit = PathBuf::from(path);

    if explicit
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name == fl_config::PROJECT_DIR)
    {
        return explicit
            .parent()
            .map(std::path::Path::to_path_buf)
            .context("invalid --config path: '.fieldline' directory has no parent");
    }

    if explicit.is_dir() {
        return Ok(explicit);
    }

    anyhow::bail!(
        "invalid --config '{}': directory does not exist",
        explicit.display()
    );
}

#[cfg(test)]
mod tests {
    use super::resolve_project_root;

    #[test]
    fn project_dir_suffix_resolves_to_parent() {
        let dir = tempfile::tempdir().unwrap();
        let inner = dir.path().join(".fieldline");
        std::fs::create_dir_all(&inner).unwrap();

        let root = resolve_project_root(inner.to_str()).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = resolve_project_root(Some("/definitely/not/here")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
