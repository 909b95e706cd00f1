//! Output formatter trait

use cloudops_domain::{OutputFormat, ToolResult};

/// Trait for formatting invocation results
pub trait OutputFormatter {
    /// Human-readable rendering
    fn format(&self, result: &ToolResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &ToolResult) -> String;

    /// Render in the requested format
    fn render(&self, result: &ToolResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Pretty => self.format(result),
            OutputFormat::Json => self.format_json(result),
        }
    }
}
