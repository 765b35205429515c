//! Identity of the person collecting entries.
//!
//! Stamped onto every entry as `user_id` / `user_name`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CollectorConfig {
    /// Tester ID.
    #[serde(default)]
    pub user_id: String,

    /// Full name.
    #[serde(default)]
    pub user_name: String,
}

impl CollectorConfig {
    /// Both identity fields are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.user_id.trim().is_empty() && !self.user_name.trim().is_empty()
    }
}
