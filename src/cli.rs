use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agrisk",
    version,
    about = "Agricultural risk scoring for location, crop and scenario"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Extra config file applied on top of the layered configuration
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single location, crop and scenario
    Assess(AssessCommand),
    /// Score every input in a JSON array or JSON Lines file
    Batch(BatchCommand),
    /// Print the active risk tables
    Tables(TablesCommand),
    /// Load and validate the layered configuration of a directory
    Validate(ValidateCommand),
}

#[derive(Args)]
pub struct AssessCommand {
    #[arg(long)]
    pub location: String,
    #[arg(long)]
    pub crop: String,
    #[arg(long, default_value = "normal")]
    pub scenario: String,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct BatchCommand {
    pub input: PathBuf,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct TablesCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: TableFormat,
}

#[derive(Args)]
pub struct ValidateCommand {
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Report,
    Md,
}

#[derive(Clone, ValueEnum)]
pub enum TableFormat {
    Json,
    Md,
}
