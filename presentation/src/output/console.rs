//! Console output formatter for tool results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use cloudops_domain::{ConfigIssue, OperationClassification, ToolDefinition, ToolResult, ToolSpec};

/// Formats tool results and the catalog for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one invocation result
    pub fn format(result: &ToolResult) -> String {
        let mut output = String::new();

        if result.is_success() {
            let status = if result.metadata.dry_run {
                "checked".cyan().bold()
            } else {
                "ok".green().bold()
            };
            output.push_str(&format!("{} {}", status, result.tool_name.bold()));
        } else {
            output.push_str(&format!("{} {}", "failed".red().bold(), result.tool_name.bold()));
        }

        if let (Some(total), Some(returned)) =
            (result.metadata.total_items, result.metadata.returned_items)
        {
            output.push_str(&format!(" {}", format!("({} of {} items)", returned, total).dimmed()));
        }
        if let Some(ms) = result.metadata.duration_ms {
            output.push_str(&format!(" {}", format!("{}ms", ms).dimmed()));
        }
        output.push('\n');

        if let Some(error) = result.error() {
            output.push_str(&format!("{} {}\n", error.code.yellow().bold(), error.message));
            if let Some(details) = &error.details {
                output.push_str(&format!("  {} {}\n", "details:".dimmed(), details));
            }
        }

        if let Some(value) = result.output() {
            let body = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            output.push_str(&Self::indent(&body, "  "));
            output.push('\n');
        }

        output
    }

    /// Format as JSON
    pub fn format_json(result: &ToolResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// One line per tool: name, classification badges, description
    pub fn format_catalog(spec: &ToolSpec) -> String {
        let mut tools: Vec<&ToolDefinition> = spec.all().collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));

        let width = tools.iter().map(|t| t.name.len()).max().unwrap_or(0);
        let mut output = Self::header(&format!("{} tools", tools.len()));
        output.push('\n');
        for tool in tools {
            let badges: Vec<String> = tool.classifications.iter().map(Self::badge).collect();
            output.push_str(&format!(
                "{:<width$}  {}{}\n",
                tool.name,
                if badges.is_empty() {
                    String::new()
                } else {
                    format!("{} ", badges.join(" "))
                },
                tool.description.dimmed(),
                width = width
            ));
        }
        output
    }

    /// Short colored tag for a classification
    pub fn badge(classification: &OperationClassification) -> String {
        let tag = format!("[{}]", classification.as_str());
        match classification {
            OperationClassification::Irreversible => tag.red().bold().to_string(),
            OperationClassification::Billable => tag.yellow().to_string(),
            OperationClassification::SecretExposure => tag.magenta().to_string(),
            OperationClassification::ConfigurationChange => tag.blue().to_string(),
        }
    }

    /// Configuration problems, errors first
    pub fn format_config_issues(issues: &[ConfigIssue]) -> String {
        let mut sorted: Vec<&ConfigIssue> = issues.iter().collect();
        sorted.sort_by_key(|i| !i.is_error());
        sorted
            .into_iter()
            .map(|issue| {
                let label = if issue.is_error() {
                    "error:".red().bold()
                } else {
                    "warning:".yellow().bold()
                };
                format!("{} {}\n", label, issue.message)
            })
            .collect()
    }

    fn header(title: &str) -> String {
        format!("{}\n{}", title.cyan().bold(), "-".repeat(40))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &ToolResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &ToolResult) -> String {
        Self::format_json(result)
    }
}
