//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    completions::CompletionsArgs, interactive::InteractiveArgs, report::ReportArgs,
};

#[derive(Parser)]
#[command(name = "pccat")]
#[command(author, version, about = "PC Catalog")]
#[command(long_about = "Record personal computers, keep them unique, and print a fixed-width report.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format (default: config `default_format`, else report)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enter PCs at the prompt, then print and optionally save the report
    #[command(alias = "new")]
    Interactive(InteractiveArgs),

    /// Build a report from PCs given on the command line
    Report(ReportArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fixed-width text report
    #[default]
    Report,
    /// Markdown table
    Md,
    /// JSON array of records
    Json,
}
