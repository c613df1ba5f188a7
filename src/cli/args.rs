use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::Config;

use super::commands;

/// Entry point for the `stagehand` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "stagehand",
    about = "Route free-text requests through the classify/plan/execute/validate pipeline",
    version,
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the pipeline on the given input text.
    Run(RunArgs),

    /// List audited pipeline runs, newest first.
    History(HistoryArgs),

    /// Show or update stagehand settings.
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Input text: words typed after `run`.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub input: Vec<String>,

    /// Print the full run as JSON instead of a summary.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Set the pipeline latency budget in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Set the audit log file path.
    #[arg(long)]
    pub audit_path: Option<std::path::PathBuf>,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Print entries as JSON instead of a summary.
    #[arg(long)]
    pub json: bool,

    /// Show at most this many entries.
    #[arg(long)]
    pub limit: Option<usize>,
}

impl Cli {
    pub async fn run(self, config: Config) -> Result<()> {
        commands::run(self, config).await
    }
}
