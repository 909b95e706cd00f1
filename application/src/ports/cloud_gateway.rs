//! Cloud gateway port
//!
//! Defines the interface for sending validated operations to the cloud
//! provider. The REST adapter and the dry-run adapter live in the
//! infrastructure layer.

use async_trait::async_trait;
use cloudops_domain::tool::entities::ToolCall;
use cloudops_domain::tool::value_objects::ToolError;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while talking to the provider
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("No API token configured (set provider.token or CLOUDOPS_PROVIDER__TOKEN)")]
    MissingToken,

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Timeout")]
    Timeout,
}

impl From<GatewayError> for ToolError {
    fn from(err: GatewayError) -> Self {
        match &err {
            GatewayError::NotFound(_) => {
                ToolError::new(ToolError::NOT_FOUND, err.to_string())
            }
            GatewayError::Timeout => ToolError::timeout("provider request"),
            GatewayError::RequestFailed { status, .. } => {
                ToolError::execution_failed(err.to_string()).with_details(status.to_string())
            }
            _ => ToolError::execution_failed(err.to_string()),
        }
    }
}

/// Gateway for provider communication
///
/// Only calls that passed the gate and every validator reach this port.
/// `operation` is the canonical tool name; the `confirm` flag has already
/// been stripped from `call`.
#[async_trait]
pub trait CloudGateway: Send + Sync {
    /// Perform the operation and return the provider's JSON response.
    ///
    /// List operations return the array of items.
    async fn dispatch(&self, operation: &str, call: &ToolCall) -> Result<Value, GatewayError>;
}
