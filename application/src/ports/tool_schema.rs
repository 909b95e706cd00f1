//! Tool schema conversion port.
//!
//! Separates "which tools exist" (domain) from "how to describe them to a
//! client" (infrastructure). The domain layer defines [`ToolDefinition`]
//! and [`ToolSpec`]; this port handles the JSON Schema conversion.

use cloudops_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Port for converting tool definitions to JSON Schema.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to JSON Schema.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert all tools to a JSON Schema array (sorted by name).
    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value>;

    /// Convert read-only tools only to a JSON Schema array (sorted by name).
    fn read_only_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value>;
}
