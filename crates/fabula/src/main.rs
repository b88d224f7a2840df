//! Fabula CLI binary.
//!
//! This binary provides command-line access to fabula's functionality:
//! - Generate validated user stories from requirement or transcript files
//! - Summarize meetings
//! - Render and list the prompt catalog
//! - Inspect the effective configuration

use clap::Parser;
use fabula::FabulaResult;
use fabula::cli::{
    Cli, Commands, GenerateOptions, generate, list_prompts, load_config, prompt, show_config,
    summarize,
};
use fabula::init_observability_with_config;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Credentials may live in a local .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if init_observability_with_config(cli.observability()).is_err() {
        let level = if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> FabulaResult<bool> {
    let config = load_config(cli.config.as_deref())?;

    let success = match cli.command {
        Commands::Generate {
            file,
            observations,
            max_attempts,
            provider,
            format,
        } => {
            let options = GenerateOptions {
                file,
                observations,
                max_attempts,
                provider,
                format,
            };
            generate(&config, &options).await?
        }

        Commands::Summarize {
            file,
            observations,
            provider,
            format,
        } => {
            let options = GenerateOptions {
                file,
                observations,
                max_attempts: None,
                provider,
                format,
            };
            summarize(&config, &options).await?
        }

        Commands::Prompt { kind, file } => prompt(&config, &kind, &file).await,

        Commands::Prompts => {
            println!("{}", list_prompts());
            true
        }

        Commands::Config => {
            println!("{}", show_config(&config));
            true
        }
    };

    Ok(success)
}
