//! CLI entrypoint for invoke-smoke
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use smoke_application::{FunctionInvoker, RunSmokeInput, RunSmokeUseCase};
use smoke_domain::{OutputFormat, RunSummary};
use smoke_infrastructure::{ConfigLoader, FileConfig, LambdaInvoker};
use smoke_presentation::{Cli, ConsoleFormatter, ConsoleReporter, SpinnerProgress};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    info!("Starting invoke-smoke");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    // === Dependency Injection ===
    let invoker: Arc<dyn FunctionInvoker> =
        Arc::new(LambdaInvoker::new(config.target.to_target()).await);
    let use_case = RunSmokeUseCase::new(invoker);
    let input = RunSmokeInput::new(config.run.to_prompts());

    let summary = match config.output.format {
        OutputFormat::Text => {
            let reporter = ConsoleReporter::new()
                .with_spinner(!config.output.quiet)
                .with_counts(config.run.fail_on_error);
            use_case.execute_with_progress(input, &reporter).await?
        }
        OutputFormat::Json => {
            let summary = if config.output.quiet {
                use_case.execute(input).await?
            } else {
                use_case
                    .execute_with_progress(input, &SpinnerProgress::new())
                    .await?
            };
            println!("{}", ConsoleFormatter::format_json(&summary));
            summary
        }
    };

    Ok(exit_code(&summary, config.run.fail_on_error))
}

/// Initialize logging based on verbosity level
///
/// Logs go to stderr (or `--log-file`) so stdout carries only the report.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

/// CLI flags take precedence over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(function) = &cli.function {
        config.target.function_name = function.clone();
    }
    if let Some(region) = &cli.region {
        config.target.region = region.clone();
    }
    if let Some(profile) = &cli.profile {
        config.target.profile = Some(profile.clone());
    }
    if !cli.prompt.is_empty() {
        config.run.prompts = Some(cli.prompt.clone());
    }
    if let Some(format) = cli.output {
        config.output.format = format.into();
    }
    if cli.fail_on_error {
        config.run.fail_on_error = true;
    }
    if cli.quiet {
        config.output.quiet = true;
    }
}

fn exit_code(summary: &RunSummary, fail_on_error: bool) -> ExitCode {
    if fail_on_error && !summary.all_passed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
