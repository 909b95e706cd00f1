//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod audit_logger;
pub mod cloud_gateway;
pub mod progress;
pub mod tool_schema;
