use std::path::{Path, PathBuf};

use anyhow::Context;
use fl_config::FieldlineConfig;
use fl_engine::catalog::read_catalog;
use fl_engine::{Engine, EngineSettings};
use fl_schema::SchemaRegistry;

use crate::progress::Progress;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: FieldlineConfig,
    pub project_root: PathBuf,
    pub schema: SchemaRegistry,
}

impl AppContext {
    pub fn new(project_root: PathBuf, config: FieldlineConfig) -> Self {
        Self {
            config,
            project_root,
            schema: SchemaRegistry::new(),
        }
    }

    /// Resolve a user-supplied path against the project root.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.project_root.join(candidate)
        }
    }

    /// Catalog path: the override when given, else `catalog.path`.
    pub fn catalog_path(&self, catalog_override: Option<&str>) -> PathBuf {
        self.resolve(catalog_override.unwrap_or(&self.config.catalog.path))
    }

    /// Export directory: the override when non-empty, else `export.dir`.
    pub fn export_dir(&self, dir_override: Option<&str>) -> PathBuf {
        match dir_override.filter(|dir| !dir.is_empty()) {
            Some(dir) => self.resolve(dir),
            None => self.resolve(&self.config.export.dir),
        }
    }

    /// Build an engine with the catalog loaded. Catalog loading finishes
    /// before the engine is handed out.
    pub async fn load_engine(&self, catalog_override: Option<&str>) -> anyhow::Result<Engine> {
        let path = self.catalog_path(catalog_override);
        let spinner = Progress::spinner("loading mission catalog");

        let records = match read_catalog(&path).await {
            Ok(records) => records,
            Err(error) => {
                spinner.finish_err("catalog load failed");
                return Err(error)
                    .with_context(|| format!("failed to load mission catalog {}", path.display()));
            }
        };

        let mut engine = Engine::new(EngineSettings::from_config(&self.config));
        let count = engine
            .load_records(records)
            .context("failed to load mission catalog into engine")?;
        spinner.finish_clear();
        tracing::debug!(path = %path.display(), missions = count, "engine ready");
        Ok(engine)
    }
}
