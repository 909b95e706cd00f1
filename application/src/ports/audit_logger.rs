//! Port for the audit trail of gated operations.
//!
//! Defines the [`AuditLogger`] trait for recording what happened to every
//! state-changing call: refused at the gate, rejected by validation, sent
//! and succeeded, sent and failed.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures a machine-readable
//! record (JSONL) that survives log level changes.

use serde_json::Value;

/// A structured audit event.
///
/// Each event has a type string and a JSON payload; the adapter adds the
/// UTC timestamp when it writes the record.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    /// Event type identifier (e.g., "gate_refused", "operation_completed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data. Secrets are masked.
    pub payload: Value,
}

impl AuditEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for writing audit events.
///
/// The `log` method is synchronous and non-fallible so auditing never
/// changes the outcome of an operation; adapters report their own write
/// failures through `tracing`.
pub trait AuditLogger: Send + Sync {
    /// Record an audit event.
    fn log(&self, event: AuditEvent);
}

/// No-op implementation for tests and when auditing is disabled.
pub struct NoAuditLogger;

impl AuditLogger for NoAuditLogger {
    fn log(&self, _event: AuditEvent) {}
}
