//! `[audit]` and `[logging]` sections

use cloudops_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Audit trail of gated operations (JSONL, append only)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuditConfig {
    pub enabled: bool,
    pub path: Option<PathBuf>,
}

impl FileAuditConfig {
    /// Path to write to, if auditing is on.
    pub fn active_path(&self) -> Option<&PathBuf> {
        if self.enabled {
            self.path.as_ref().filter(|p| !p.as_os_str().is_empty())
        } else {
            None
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.enabled && self.active_path().is_none() {
            vec![ConfigIssue::error(
                ConfigIssueCode::AuditPathMissing,
                "audit.enabled is true but audit.path is not set",
            )]
        } else {
            Vec::new()
        }
    }
}

/// Diagnostic log output
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write tracing output to this file instead of stderr
    pub file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_audit_ignores_path() {
        let config = FileAuditConfig {
            enabled: false,
            path: Some(PathBuf::from("audit.jsonl")),
        };
        assert!(config.active_path().is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_path_is_missing() {
        let config = FileAuditConfig {
            enabled: true,
            path: Some(PathBuf::new()),
        };
        assert_eq!(config.validate()[0].code, ConfigIssueCode::AuditPathMissing);
    }
}
