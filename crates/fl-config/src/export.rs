//! Export file destination.

use serde::{Deserialize, Serialize};

fn default_dir() -> String {
    ".".to_string()
}

fn default_file_prefix() -> String {
    "citizenlink_data".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Directory export files are written to.
    #[serde(default = "default_dir")]
    pub dir: String,

    /// File name prefix; the export timestamp is appended.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            file_prefix: default_file_prefix(),
        }
    }
}
