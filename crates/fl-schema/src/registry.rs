//! Central schema registry for all Fieldline types.
//!
//! The `SchemaRegistry` builds JSON Schemas from fl-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Central store of all JSON Schemas in the Fieldline system.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::Value::from(schema_for!($ty)));
    };
}

impl SchemaRegistry {
    /// Build a new registry containing the entity, catalog, and response
    /// schemas from fl-core.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Entity types (3) ---
        register!(schemas, "mission", fl_core::entities::Mission);
        register!(schemas, "entry", fl_core::entities::Entry);
        register!(schemas, "device_info", fl_core::entities::DeviceInfo);

        // --- Catalog input (2) ---
        register!(schemas, "mission_record", fl_core::catalog::MissionRecord);
        register!(schemas, "catalog_file", fl_core::catalog::CatalogFile);

        // --- Responses (5) ---
        register!(
            schemas,
            "progress_snapshot",
            fl_core::responses::ProgressSnapshot
        );
        register!(
            schemas,
            "overall_progress",
            fl_core::responses::OverallProgress
        );
        register!(schemas, "export_info", fl_core::responses::ExportInfo);
        register!(
            schemas,
            "mission_summary",
            fl_core::responses::MissionSummary
        );
        register!(
            schemas,
            "export_document",
            fl_core::responses::ExportDocument
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::UnknownSchema` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::UnknownSchema(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Compile {
            schema: name.to_string(),
            reason: e.to_string(),
        })?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed {
                schema: name.to_string(),
                errors,
            })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
