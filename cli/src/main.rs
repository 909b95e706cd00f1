//! CLI entrypoint for cloudops
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use cloudops_application::{
    AuditLogger, BehaviorConfig, CloudGateway, InvocationProgress, InvokeToolUseCase, NoAuditLogger,
    NoProgress, ToolSchemaPort,
};
use cloudops_domain::ToolCall;
use cloudops_infrastructure::{
    ConfigLoader, DryRunGateway, FileConfig, JsonSchemaToolConverter, JsonlAuditLogger,
    RestCloudGateway, default_tool_spec, read_only_tool_spec,
};
use cloudops_presentation::{
    CallArgs, Cli, Command, ConsoleFormatter, OutputConfig, OutputFormatter, SimpleProgress,
    SpinnerProgress,
};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        println!();
        println!("{}", toml::to_string_pretty(&config.redacted())?);
        return Ok(ExitCode::SUCCESS);
    }

    let issues = config.validate();
    if !issues.is_empty() {
        eprint!("{}", ConsoleFormatter::format_config_issues(&issues));
        if issues.iter().any(|i| i.is_error()) {
            bail!("Invalid configuration");
        }
    }

    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;
    info!("Starting cloudops");

    let output = OutputConfig::resolve(
        cli.output.map(Into::into),
        config.output.format,
        config.output.color && std::io::stdout().is_terminal(),
        cli.quiet,
    );
    output.apply_color();

    let Some(command) = cli.command else {
        println!("{}", ConsoleFormatter::format_catalog(&default_tool_spec()));
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Command::Tools { schema, read_only } => {
            let spec = if read_only {
                read_only_tool_spec()
            } else {
                default_tool_spec()
            };
            if schema {
                let schemas = JsonSchemaToolConverter.all_tools_schema(&spec);
                println!("{}", serde_json::to_string_pretty(&schemas)?);
            } else {
                println!("{}", ConsoleFormatter::format_catalog(&spec));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check(args) => {
            let call = parse_call(&args)?;
            let use_case = InvokeToolUseCase::new(Arc::new(DryRunGateway), Arc::new(default_tool_spec()));
            let result = use_case.check(&call);
            println!("{}", ConsoleFormatter.render(&result, output.format));
            Ok(exit_code(result.is_success()))
        }
        Command::Call { call: args, dry_run } => {
            let call = parse_call(&args)?;
            let spec = Arc::new(default_tool_spec());
            let audit = audit_logger(&config);
            let behavior = BehaviorConfig::from_timeout_seconds(Some(config.provider.timeout_seconds));

            if dry_run {
                let use_case = InvokeToolUseCase::new(Arc::new(DryRunGateway), spec)
                    .with_audit_logger(audit)
                    .with_behavior(behavior);
                return run_call(&use_case, &call, &output).await;
            }

            let gateway = RestCloudGateway::new(
                config.provider.api_url.clone(),
                config.provider.resolve_token(),
                // Leave headroom so the pipeline timeout reports TIMEOUT first.
                Some(Duration::from_secs(config.provider.timeout_seconds + 5)),
            )
            .context("Failed to create provider client")?;
            let use_case = InvokeToolUseCase::new(Arc::new(gateway), spec)
                .with_audit_logger(audit)
                .with_behavior(behavior);
            run_call(&use_case, &call, &output).await
        }
    }
}

/// Stderr logging by `-v` count, or a non-blocking file writer when configured.
fn init_logging(verbose: u8, file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| anyhow!("logging.file has no file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

fn audit_logger(config: &FileConfig) -> Arc<dyn AuditLogger> {
    match config.audit.active_path() {
        Some(path) => match JsonlAuditLogger::open(path) {
            Some(logger) => Arc::new(logger),
            None => {
                warn!("Audit log {} could not be opened; continuing without it", path.display());
                Arc::new(NoAuditLogger)
            }
        },
        None => Arc::new(NoAuditLogger),
    }
}

fn parse_call(args: &CallArgs) -> Result<ToolCall> {
    args.to_call().map_err(|e| anyhow!(e))
}

async fn run_call<G: CloudGateway + 'static>(
    use_case: &InvokeToolUseCase<G>,
    call: &ToolCall,
    output: &OutputConfig,
) -> Result<ExitCode> {
    let spinner = SpinnerProgress::new();
    let progress: &dyn InvocationProgress = if !output.show_progress {
        &NoProgress
    } else if std::io::stderr().is_terminal() {
        &spinner
    } else {
        &SimpleProgress
    };

    let result = use_case.execute_with_progress(call, progress).await;
    println!("{}", ConsoleFormatter.render(&result, output.format));
    Ok(exit_code(result.is_success()))
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
