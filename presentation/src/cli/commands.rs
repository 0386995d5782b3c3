//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the run report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Line-by-line console report
    Text,
    /// JSON summary after the run
    Json,
}

impl From<OutputFormat> for smoke_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => smoke_domain::OutputFormat::Text,
            OutputFormat::Json => smoke_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for invoke-smoke
#[derive(Parser, Debug)]
#[command(name = "invoke-smoke")]
#[command(author, version, about = "Smoke-test a deployed supervisor/worker Lambda function")]
#[command(long_about = r#"
invoke-smoke sends a fixed list of prompts to a deployed Lambda function,
one at a time, and reports what came back for each.

A prompt passes when the function answers with statusCode 200 and a body
carrying `delegation`, `supervisor_response` and `worker_response`.
Failures are reported per prompt and never stop the run.

Configuration files are loaded from (in priority order):
1. SMOKE_* environment variables (e.g. SMOKE_TARGET__REGION)
2. --config <path>     Explicit config file
3. ./smoke.toml        Project-level config
4. <config dir>/invoke-smoke/config.toml   Global config
   (platform config dir; run --show-config for the resolved path)

Example:
  invoke-smoke
  invoke-smoke --region eu-west-1 --function my-orchestrator
  invoke-smoke -p "Plan a team offsite" -p "Summarize Rust ownership" --output json
"#)]
pub struct Cli {
    /// Lambda function name or ARN to invoke
    #[arg(long, value_name = "NAME")]
    pub function: Option<String>,

    /// AWS region of the function
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// AWS profile to load credentials from
    #[arg(long, value_name = "PROFILE")]
    pub profile: Option<String>,

    /// Prompt to send instead of the built-in list (can be specified multiple times)
    #[arg(short, long, value_name = "TEXT")]
    pub prompt: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print a pass/fail tally and exit with status 1 when any prompt does not pass
    #[arg(long)]
    pub fail_on_error: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
