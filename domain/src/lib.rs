//! Domain layer for cloudops
//!
//! This crate contains the validation rules, the confirmation gate, list
//! filters and the tool catalog types. It has no dependencies on
//! infrastructure or presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Validation
//!
//! Primitive validators in [`validation`] check one value each and return a
//! [`ValidationError`] whose [`ErrorKind`] says what went wrong. Composite
//! validators in [`operation`] chain them in a fixed order per operation.
//!
//! ## Gate
//!
//! State-changing operations are classified (irreversible, billable, secret
//! exposing, configuration change) and refused by [`gate`] unless the caller
//! passes `confirm=true`.
//!
//! ## Filters
//!
//! List operations narrow their results with case-insensitive
//! [`FilterSet`]s built from optional call arguments.

pub mod config;
pub mod core;
pub mod filter;
pub mod gate;
pub mod operation;
pub mod tool;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use filter::{FieldFilter, FilterSet, MatchMode};
pub use gate::{CONFIRM_PARAM, GateError, OperationClassification, require_confirmation};
pub use operation::CompositeValidator;
pub use tool::{
    entities::{FilterField, ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};
pub use validation::{ErrorKind, ValidationError};
