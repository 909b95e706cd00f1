//! Progress notification port
//!
//! Defines the interface for reporting progress while a call is in flight.

/// Callback for progress updates during a tool invocation
///
/// Implementations live in the presentation layer (e.g. a terminal spinner).
pub trait InvocationProgress: Send + Sync {
    /// Called right before the request is sent to the provider
    fn on_dispatch(&self, tool_name: &str);

    /// Called once the provider answered (or failed to)
    fn on_complete(&self, tool_name: &str, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl InvocationProgress for NoProgress {
    fn on_dispatch(&self, _tool_name: &str) {}
    fn on_complete(&self, _tool_name: &str, _success: bool) {}
}
