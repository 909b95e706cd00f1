//! Cloud tool catalog
//!
//! Concrete [`ToolDefinition`]s for every operation the provider exposes,
//! grouped by product area:
//!
//! - [`compute`]: instances and SSH keys
//! - [`volumes`]: block storage
//! - [`dns`]: domains and records
//! - [`networking`]: firewalls, load balancers, VPCs
//! - [`object_storage`]: buckets, access keys, presigned URLs
//!
//! [`schema`] renders the catalog as JSON Schema.

pub mod compute;
pub mod dns;
pub mod networking;
pub mod object_storage;
pub mod schema;
pub mod volumes;

pub use schema::JsonSchemaToolConverter;

use cloudops_domain::filter::MatchMode;
use cloudops_domain::tool::entities::{ToolDefinition, ToolParameter, ToolSpec};

/// Provider product names accepted in place of canonical tool names.
pub const DEFAULT_ALIASES: [(&str, &str); 5] = [
    ("list_nodebalancers", networking::LIST_LOAD_BALANCERS),
    ("create_nodebalancer", networking::CREATE_LOAD_BALANCER),
    ("delete_nodebalancer", networking::DELETE_LOAD_BALANCER),
    ("list_object_storage_keys", object_storage::LIST_ACCESS_KEYS),
    ("create_object_storage_key", object_storage::CREATE_ACCESS_KEY),
];

/// Create the default tool specification with every cloud tool and alias
pub fn default_tool_spec() -> ToolSpec {
    ToolSpec::new()
        .register_all(compute::definitions())
        .register_all(volumes::definitions())
        .register_all(dns::definitions())
        .register_all(networking::definitions())
        .register_all(object_storage::definitions())
        .register_aliases(DEFAULT_ALIASES)
}

/// Get definitions for ungated (read-only) tools only
pub fn read_only_tool_spec() -> ToolSpec {
    let spec = default_tool_spec();
    ToolSpec::new().register_all(spec.read_only_tools().cloned())
}

/// Required positive integer ID parameter.
pub(crate) fn id_param(name: &str, description: &str) -> ToolParameter {
    ToolParameter::new(name, description, true).with_type("integer")
}

pub(crate) fn label_filter(tool: ToolDefinition) -> ToolDefinition {
    tool.with_filter("label", "label", MatchMode::Contains)
}

pub(crate) fn region_filter(tool: ToolDefinition) -> ToolDefinition {
    tool.with_filter("region", "region", MatchMode::Exact)
}
