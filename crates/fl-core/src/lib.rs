//! # fl-core
//!
//! Core types, ID generation, and error types for Fieldline.
//!
//! This crate provides the foundational types shared across all Fieldline crates:
//! - Entity structs for the domain objects (missions, entries)
//! - Geographic points
//! - Status, priority, and workflow enums
//! - The fixed category/subcategory taxonomy
//! - Mission catalog input records and their validation
//! - Export document and progress response types
//! - Entry ID generation
//! - Millisecond timestamp helpers for the export contract
//! - Cross-cutting error types

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod geo;
pub mod ids;
pub mod responses;
pub mod taxonomy;
pub mod timestamp;
