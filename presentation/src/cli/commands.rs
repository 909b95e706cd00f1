//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use cloudops_domain::{CONFIRM_PARAM, ToolCall};
use serde_json::Value;
use std::path::PathBuf;

/// Output format for invocation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored summary with indented JSON
    Pretty,
    /// JSON output
    Json,
}

impl From<OutputFormat> for cloudops_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Pretty => Self::Pretty,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for cloudops
#[derive(Parser, Debug)]
#[command(name = "cloudops")]
#[command(author, version, about = "Guarded command-line access to a cloud provider API")]
#[command(long_about = r#"
cloudops checks every operation before it reaches the provider.

Operations that destroy data, cost money, reveal a secret or change a live
resource are refused unless the call carries confirm=true. Arguments are
validated locally so malformed requests never leave the machine.

Configuration files are loaded from (in priority order):
1. CLOUDOPS_<SECTION>__<KEY>           Environment variables
2. --config <path>                     Explicit config file
3. ./cloudops.toml                     Project-level config
4. ~/.config/cloudops/config.toml      Global config

Example:
  cloudops tools
  cloudops check create_volume --args '{"label": "data", "size": 20}'
  cloudops call delete_volume --args '{"volume_id": 42}' --confirm
  cloudops call list_volumes --args '{"region": "us-east"}'
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides output.format in the config file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration sources and the merged configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the tool catalog
    Tools {
        /// Print JSON schemas instead of the summary table
        #[arg(long)]
        schema: bool,

        /// Only tools that need no confirmation
        #[arg(long)]
        read_only: bool,
    },

    /// Run the confirmation gate and argument validation without calling the provider
    Check(CallArgs),

    /// Validate and send an operation to the provider
    Call {
        #[command(flatten)]
        call: CallArgs,

        /// Print the request instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}

/// Tool name plus its arguments
#[derive(clap::Args, Debug)]
pub struct CallArgs {
    /// Tool name (or alias)
    pub tool: String,

    /// Arguments as a JSON object
    #[arg(short, long, value_name = "JSON")]
    pub args: Option<String>,

    /// Shorthand for "confirm": true
    #[arg(long)]
    pub confirm: bool,
}

impl CallArgs {
    /// Build the tool call from the JSON arguments.
    pub fn to_call(&self) -> Result<ToolCall, String> {
        let mut call = ToolCall::new(&self.tool);
        if let Some(raw) = self.args.as_deref().filter(|a| !a.trim().is_empty()) {
            match serde_json::from_str::<Value>(raw) {
                Ok(Value::Object(map)) => call.arguments.extend(map),
                Ok(other) => {
                    return Err(format!("--args must be a JSON object, got {}", other));
                }
                Err(e) => return Err(format!("--args is not valid JSON: {}", e)),
            }
        }
        if self.confirm {
            call = call.with_arg(CONFIRM_PARAM, true);
        }
        Ok(call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_call() {
        let cli = Cli::parse_from([
            "cloudops",
            "call",
            "delete_volume",
            "--args",
            r#"{"volume_id": 42}"#,
            "--confirm",
            "-o",
            "json",
        ]);
        assert_eq!(cli.output, Some(OutputFormat::Json));

        let Some(Command::Call { call, dry_run }) = cli.command else {
            panic!("expected call");
        };
        assert!(!dry_run);

        let call = call.to_call().unwrap();
        assert_eq!(call.tool_name, "delete_volume");
        assert_eq!(call.parse_i64("volume_id"), Ok(Some(42)));
        assert!(call.confirmation());
    }

    #[test]
    fn test_args_must_be_object() {
        let args = CallArgs {
            tool: "delete_volume".to_string(),
            args: Some("[1, 2]".to_string()),
            confirm: false,
        };
        assert!(args.to_call().unwrap_err().contains("JSON object"));

        let args = CallArgs {
            tool: "delete_volume".to_string(),
            args: Some("{volume_id: 1}".to_string()),
            confirm: false,
        };
        assert!(args.to_call().unwrap_err().contains("not valid JSON"));
    }

    #[test]
    fn test_no_args() {
        let cli = Cli::parse_from(["cloudops", "check", "list_volumes"]);
        let Some(Command::Check(args)) = cli.command else {
            panic!("expected check");
        };
        let call = args.to_call().unwrap();
        assert!(call.arguments.is_empty());
        assert!(!call.confirmation());
    }
}
