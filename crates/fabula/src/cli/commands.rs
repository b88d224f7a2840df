//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use fabula_core::{ObservabilityConfig, Provider};
use std::path::PathBuf;

/// Fabula - user stories from requirements, validated and auto-corrected by an LLM
#[derive(Parser, Debug)]
#[command(name = "fabula")]
#[command(about = "User stories from requirements, validated and auto-corrected by an LLM", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Export tracing spans to stdout through OpenTelemetry
    #[arg(long, global = true)]
    pub trace_spans: bool,
}

impl Cli {
    /// Tracing setup requested by the global flags.
    pub fn observability(&self) -> ObservabilityConfig {
        let log_level = if self.verbose { "debug" } else { "info" };
        ObservabilityConfig::new("fabula")
            .with_log_level(log_level)
            .with_json_logs(self.json_logs)
            .with_span_export(self.trace_spans)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate validated user stories from a text file
    Generate {
        /// Path to the requirements or transcript file
        file: PathBuf,

        /// Refinement instructions for the generation prompt
        #[arg(long)]
        observations: Option<String>,

        /// Generate/validate cycles before giving up
        #[arg(long)]
        max_attempts: Option<usize>,

        /// Completion provider (defaults to the configured one)
        #[arg(long)]
        provider: Option<Provider>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Summarize a meeting transcript
    Summarize {
        /// Path to the transcript file
        file: PathBuf,

        /// Refinement instructions for the summary prompt
        #[arg(long)]
        observations: Option<String>,

        /// Completion provider (defaults to the configured one)
        #[arg(long)]
        provider: Option<Provider>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Render a catalog prompt for a file without calling any provider
    Prompt {
        /// Catalog key (see `fabula prompts`)
        kind: String,

        /// Path to the content file
        file: PathBuf,
    },

    /// List the prompt catalog
    Prompts,

    /// Show the effective configuration with credentials redacted
    Config,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Human,
    /// JSON report of every stage
    Json,
}
