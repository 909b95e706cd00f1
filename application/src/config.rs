//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as provider request timeouts.

use std::time::Duration;

/// Application behavior configuration.
///
/// Controls runtime behavior of the invocation pipeline.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Maximum time to wait for the provider before failing with `TIMEOUT`.
    pub timeout: Option<Duration>,
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None` or zero, no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.filter(|s| *s > 0).map(Duration::from_secs),
        }
    }
}
