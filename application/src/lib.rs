//! Application layer for cloudops
//!
//! This crate contains the invocation use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    audit_logger::{AuditEvent, AuditLogger, NoAuditLogger},
    cloud_gateway::{CloudGateway, GatewayError},
    progress::{InvocationProgress, NoProgress},
    tool_schema::ToolSchemaPort,
};
pub use use_cases::invoke_tool::InvokeToolUseCase;
