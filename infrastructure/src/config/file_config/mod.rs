//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod audit;
mod output;
mod provider;

pub use audit::{FileAuditConfig, FileLoggingConfig};
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;

use cloudops_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Provider API endpoint and credentials
    pub provider: FileProviderConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Audit trail of gated operations
    pub audit: FileAuditConfig,
    /// Diagnostic log file
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.provider.validate();
        issues.extend(self.audit.validate());
        issues
    }

    /// Copy with the inline token masked, for `--show-config`.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        config.provider.token = config.provider.token.as_deref().map(cloudops_domain::core::string::mask);
        config
    }
}
