//! Provider configuration from TOML (`[provider]` section)

use cloudops_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL of the provider API (default: "https://api.linode.com/v4")
    pub api_url: String,
    /// Environment variable holding the API token (default: "LINODE_TOKEN")
    pub token_env: String,
    /// Inline API token. The environment variable takes precedence.
    pub token: Option<String>,
    /// Per-request timeout in seconds (default: 30)
    pub timeout_seconds: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.linode.com/v4".to_string(),
            token_env: "LINODE_TOKEN".to_string(),
            token: None,
            timeout_seconds: 30,
        }
    }
}

impl FileProviderConfig {
    /// Token from `token_env`, falling back to the inline token.
    pub fn resolve_token(&self) -> Option<String> {
        let from_env = if self.token_env.is_empty() {
            None
        } else {
            std::env::var(&self.token_env).ok()
        };
        from_env
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.token.clone().filter(|t| !t.trim().is_empty()))
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        match reqwest::Url::parse(&self.api_url) {
            Ok(url) if url.scheme() == "https" => {}
            Ok(url) if url.scheme() == "http" => issues.push(ConfigIssue::warning(
                ConfigIssueCode::InsecureApiUrl,
                format!(
                    "provider.api_url '{}' is not https; the API token is sent in clear text",
                    self.api_url
                ),
            )),
            Ok(url) => issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidApiUrl,
                format!("provider.api_url: unsupported scheme '{}'", url.scheme()),
            )),
            Err(e) => issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidApiUrl,
                format!("provider.api_url '{}' is not a valid URL: {}", self.api_url, e),
            )),
        }

        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout,
                "provider.timeout_seconds cannot be 0",
            ));
        }

        issues
    }
}
