//! Entry form validation settings.

use serde::{Deserialize, Serialize};

/// Minimum description length, in characters after trimming.
const fn default_min_description_len() -> usize {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EntryConfig {
    #[serde(default = "default_min_description_len")]
    pub min_description_len: usize,
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            min_description_len: default_min_description_len(),
        }
    }
}
