//! Tool domain value objects: immutable result and error types
//!
//! These types form the **output side** of the invocation pipeline.
//! Every call produces a [`ToolResult`] with optional
//! [`ToolResultMetadata`] (timing, list sizes before and after filtering).
//!
//! Error codes in [`ToolError`] tell the caller what to fix:
//! `CONFIRMATION_REQUIRED` and `INVALID_ARGUMENT` are resolved by
//! resubmitting with different arguments, while `EXECUTION_FAILED` comes
//! from the provider itself.

use serde::{Deserialize, Serialize};

use crate::gate::{GateError, OperationClassification};
use crate::validation::ValidationError;

/// Error that occurred while invoking a tool.
///
/// | Code | Raised by | Description |
/// |------|-----------|-------------|
/// | `CONFIRMATION_REQUIRED` | gate | `confirm` missing or false on a gated tool |
/// | `INVALID_ARGUMENT` | validators | Missing or malformed arguments |
/// | `NOT_FOUND` | resolution, provider | Unknown tool or resource |
/// | `EXECUTION_FAILED` | provider | HTTP, auth or transport failure |
/// | `TIMEOUT` | pipeline | Provider did not answer in time |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "INVALID_ARGUMENT", "NOT_FOUND")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Machine-readable detail, such as the validation error kind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ToolError {
    pub const CONFIRMATION_REQUIRED: &'static str = "CONFIRMATION_REQUIRED";
    pub const INVALID_ARGUMENT: &'static str = "INVALID_ARGUMENT";
    pub const NOT_FOUND: &'static str = "NOT_FOUND";
    pub const EXECUTION_FAILED: &'static str = "EXECUTION_FAILED";
    pub const TIMEOUT: &'static str = "TIMEOUT";

    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Common error constructors
    pub fn unknown_tool(name: &str) -> Self {
        Self::new(Self::NOT_FOUND, format!("Unknown tool: {}", name))
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(Self::INVALID_ARGUMENT, message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new(Self::EXECUTION_FAILED, message)
    }

    pub fn timeout(operation: impl Into<String>) -> Self {
        Self::new(
            Self::TIMEOUT,
            format!("Operation timed out: {}", operation.into()),
        )
    }

    /// Gate refusal; details list the classifications, comma separated.
    pub fn confirmation_required(err: &GateError) -> Self {
        let details = err
            .classifications()
            .iter()
            .map(OperationClassification::as_str)
            .collect::<Vec<_>>()
            .join(",");
        Self::new(Self::CONFIRMATION_REQUIRED, err.message()).with_details(details)
    }

    /// Argument rejection; details carry the error kind.
    pub fn from_validation(err: &ValidationError) -> Self {
        Self::invalid_argument(err.message()).with_details(err.kind().as_str())
    }

    pub fn is_confirmation_required(&self) -> bool {
        self.code == Self::CONFIRMATION_REQUIRED
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for ToolError {}

/// Result of a tool invocation, carrying output or error information.
///
/// Successful output is the provider's JSON response, after filtering for
/// list tools. A `check` run produces a success with no output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Canonical name of the tool that was invoked
    pub tool_name: String,
    /// Whether the invocation was successful
    pub success: bool,
    /// Response body (for successful execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
    /// Error information (for failed execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    /// Metadata about the execution
    #[serde(default)]
    pub metadata: ToolResultMetadata,
}

/// Structured metadata about a tool invocation.
///
/// `total_items` and `returned_items` are only set for list tools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolResultMetadata {
    /// Duration of execution in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Items the provider returned before filtering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_items: Option<usize>,
    /// Items left after filtering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returned_items: Option<usize>,
    /// The call was checked but not sent
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub dry_run: bool,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(tool_name: impl Into<String>, output: serde_json::Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            output: Some(output),
            error: None,
            metadata: ToolResultMetadata::default(),
        }
    }

    /// A call that passed every check without being dispatched
    pub fn checked(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            output: None,
            error: None,
            metadata: ToolResultMetadata {
                dry_run: true,
                ..ToolResultMetadata::default()
            },
        }
    }

    /// Create a failed result
    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error),
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Add duration metadata
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.metadata.duration_ms = Some(duration_ms);
        self
    }

    /// Record list sizes before and after filtering
    pub fn with_counts(mut self, total: usize, returned: usize) -> Self {
        self.metadata.total_items = Some(total);
        self.metadata.returned_items = Some(returned);
        self
    }

    /// Check if execution was successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the output content
    pub fn output(&self) -> Option<&serde_json::Value> {
        self.output.as_ref()
    }

    /// Get the error
    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }
}
