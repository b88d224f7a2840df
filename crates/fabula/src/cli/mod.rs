//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the fabula binary.

mod commands;
mod run;

pub use commands::{Cli, Commands, OutputFormat};
pub use run::{
    GenerateOptions, generate, list_prompts, load_config, prompt, render_prompt, report_json,
    show_config, summarize, workflow_report,
};
