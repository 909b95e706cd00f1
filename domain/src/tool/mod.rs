//! Tool domain module
//!
//! Defines the tool catalog abstractions: how a caller names a cloud
//! operation, what arguments it takes, whether it is gated, and what
//! comes back.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (catalog)    │    │ (invocation) │    │ (output)     │
//! └──────┬───────┘    └──────────────┘    └──────────────┘
//!        │
//!        ├─ aliases: "create_nodebalancer" → "create_load_balancer"
//!        └─ tools:   "create_load_balancer" → ToolDefinition
//! ```
//!
//! # Tool Name Aliases
//!
//! Callers often use the provider's own product names (`list_linodes`,
//! `create_nodebalancer`). [`ToolSpec`] resolves those to canonical names:
//!
//! - [`ToolSpec::resolve_alias`]: alias → canonical name (aliases only)
//! - [`ToolSpec::resolve`]: any name (canonical or alias)
//! - [`ToolSpec::get_resolved`]: looks up a [`ToolDefinition`] by either name
//!
//! # Gated Tools
//!
//! A [`ToolDefinition`] with one or more
//! [`OperationClassification`](crate::gate::OperationClassification)s only
//! runs when the call carries `confirm=true`:
//!
//! | Classification | Examples |
//! |----------------|----------|
//! | Irreversible | `delete_instance`, `delete_volume`, `delete_bucket` |
//! | Billable | `create_instance`, `create_volume`, `resize_volume` |
//! | SecretExposure | `create_access_key` |
//! | ConfigurationChange | `update_firewall`, `update_bucket_acl` |
//!
//! Tools without classifications (lists, gets, presigned URLs) run directly.
//!
//! # Key Types
//!
//! - [`ToolSpec`]: catalog of tools plus alias mappings
//! - [`ToolDefinition`]: schema, classifications, filters and argument rules
//! - [`ToolCall`]: an invocation request with arguments
//! - [`ToolResult`]: outcome with [`ToolResultMetadata`](value_objects::ToolResultMetadata)
//! - [`ToolValidator`]: structural parameter check

pub mod entities;
pub mod traits;
pub mod value_objects;

pub use entities::{FilterField, ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolResult, ToolResultMetadata};
