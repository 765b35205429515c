//! # fl-schema
//!
//! JSON Schema generation, validation, and registry for Fieldline.
//!
//! Entity and response types are defined in `fl-core` with `#[derive(JsonSchema)]`.
//! This crate builds the registry over them and validates JSON values, most
//! importantly the export document whose shape is a frozen contract.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
