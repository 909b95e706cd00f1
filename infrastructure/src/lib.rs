//! Infrastructure layer for cloudops
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the provider REST gateway, the JSONL audit
//! logger and configuration file loading. It also owns the tool catalog.

pub mod config;
pub mod gateway;
pub mod logging;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileAuditConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileProviderConfig,
};
pub use gateway::{DryRunGateway, RestCloudGateway};
pub use logging::JsonlAuditLogger;
pub use tools::{JsonSchemaToolConverter, default_tool_spec, read_only_tool_spec};
