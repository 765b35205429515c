//! Entity structs for the Fieldline domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and contract validation.

mod entry;
mod mission;

pub use entry::{DeviceInfo, Entry};
pub use mission::Mission;
