//! Structured configuration problems.
//!
//! The infrastructure config loader reports what it finds as a list of
//! [`ConfigIssue`]s; the CLI prints warnings and refuses to start on errors.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `provider.api_url` does not use https; the token would travel in clear text.
    InsecureApiUrl,
    /// `provider.api_url` is not a URL at all.
    InvalidApiUrl,
    /// `provider.timeout_seconds` is zero.
    ZeroTimeout,
    /// Auditing is enabled but `audit.path` is empty.
    AuditPathMissing,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let err = ConfigIssue::error(ConfigIssueCode::ZeroTimeout, "timeout is 0");
        assert!(err.is_error());

        let warn = ConfigIssue::warning(ConfigIssueCode::InsecureApiUrl, "http");
        assert!(!warn.is_error());
        assert_eq!(warn.code, ConfigIssueCode::InsecureApiUrl);
    }
}
