//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod issues;
mod output_format;

pub use issues::{ConfigIssue, ConfigIssueCode, Severity};
pub use output_format::OutputFormat;
