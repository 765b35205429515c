//! Mission catalog location.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "mission_config.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Catalog file (`.json` array or `.toml` with `[[missions]]`).
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
