use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Unknown schema '{0}'")]
    UnknownSchema(String),

    /// The instance broke the named contract; one message per violation.
    #[error("Value does not match schema '{schema}': {}", errors.join("; "))]
    ValidationFailed {
        schema: String,
        errors: Vec<String>,
    },

    #[error("Schema '{schema}' could not be compiled: {reason}")]
    Compile { schema: String, reason: String },
}
