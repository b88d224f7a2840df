//! Command handlers.

use crate::cli::OutputFormat;
use fabula_config::FabulaConfig;
use fabula_core::{GenerationResult, Provider, TaskResult};
use fabula_error::{
    FabulaError, FabulaErrorKind, FabulaResult, JsonError, PipelineErrorKind, ProviderErrorKind,
};
use fabula_interface::TextExtractor;
use fabula_models::CompletionClient;
use fabula_pipeline::{
    AutoCorrectionOrchestrator, PlainTextExtractor, PromptComposer, PromptKind, Workflow,
    WorkflowReport, WorkflowRequest, WorkflowTask,
};
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};

/// Options shared by the `generate` and `summarize` commands.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Source text file
    pub file: PathBuf,
    /// Refinement instructions
    pub observations: Option<String>,
    /// Overrides `pipeline.max_attempts`
    pub max_attempts: Option<usize>,
    /// Overrides `default_provider`
    pub provider: Option<Provider>,
    /// How to print the outcome
    pub format: OutputFormat,
}

/// Load configuration from `path`, or from every layered source when absent.
///
/// # Errors
///
/// Returns an error if a source fails to parse or validate.
pub fn load_config(path: Option<&Path>) -> FabulaResult<FabulaConfig> {
    match path {
        Some(path) => FabulaConfig::from_file(path),
        None => FabulaConfig::load(),
    }
}

fn build_workflow(
    config: &FabulaConfig,
    options: &GenerateOptions,
    provider: Provider,
) -> FabulaResult<Workflow<CompletionClient>> {
    let client = CompletionClient::from_config(config, provider)?;
    let mut orchestrator = AutoCorrectionOrchestrator::from_config(client, config)?;
    if let Some(max_attempts) = options.max_attempts {
        orchestrator = orchestrator.with_max_attempts(max_attempts)?;
    }
    Ok(Workflow::new(orchestrator, Box::new(PlainTextExtractor)))
}

/// Message of an error that means the run cannot be configured.
fn configuration_failure(err: &FabulaError) -> Option<String> {
    match err.kind() {
        FabulaErrorKind::Provider(e)
            if matches!(e.kind, ProviderErrorKind::ConfigurationMissing(_)) =>
        {
            Some(e.kind.to_string())
        }
        FabulaErrorKind::Pipeline(e)
            if matches!(e.kind, PipelineErrorKind::InvalidMaxAttempts(_)) =>
        {
            Some(e.kind.to_string())
        }
        _ => None,
    }
}

/// Run `task` over the options' file and report every stage.
///
/// A missing credential or an invalid attempt ceiling is reported as a
/// failed stage with `FailureKind::ConfigurationMissing`, not returned.
///
/// # Errors
///
/// Returns an error only for failures outside the run itself, such as an
/// HTTP client that cannot be built.
#[instrument(skip(config, options), fields(file = %options.file.display(), task = %task))]
pub async fn workflow_report(
    config: &FabulaConfig,
    options: &GenerateOptions,
    task: WorkflowTask,
) -> FabulaResult<WorkflowReport> {
    let provider = options.provider.unwrap_or(config.default_provider);
    let workflow = match build_workflow(config, options, provider) {
        Ok(workflow) => workflow,
        Err(e) => {
            let Some(message) = configuration_failure(&e) else {
                return Err(e);
            };
            warn!(provider = %provider, error = %message, "Run is not configured");
            let extraction = PlainTextExtractor.extract_text(&options.file).await;
            return Ok(WorkflowReport::unconfigured(
                extraction,
                task,
                provider.name(),
                message,
            ));
        }
    };

    let request = WorkflowRequest::builder()
        .source(options.file.clone())
        .observations(options.observations.clone())
        .task(task)
        .build()?;
    Ok(workflow.execute(&request).await)
}

/// Pretty-printed JSON of a report.
///
/// # Errors
///
/// Returns an error if the report cannot be encoded.
pub fn report_json(report: &WorkflowReport) -> FabulaResult<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| JsonError::encode("workflow report", e).into())
}

/// Run the generate/validate/auto-correct loop over a file.
///
/// Returns whether approved content was produced.
///
/// # Errors
///
/// Returns an error only when the report cannot be produced or encoded.
/// Configuration and provider failures are reported, not returned.
#[instrument(skip(config, options), fields(file = %options.file.display()))]
pub async fn generate(config: &FabulaConfig, options: &GenerateOptions) -> FabulaResult<bool> {
    let report = workflow_report(config, options, WorkflowTask::UserStories).await?;

    if options.format == OutputFormat::Json {
        println!("{}", report_json(&report)?);
        return Ok(report.success());
    }

    if let Some(error) = &report.extraction().error {
        eprintln!("Failed to read {}: {}", options.file.display(), error);
        return Ok(false);
    }

    if let Some(generation) = report.generation() {
        print_generation(generation);
    }
    Ok(report.success())
}

fn print_generation(generation: &GenerationResult) {
    for attempt in generation.attempts() {
        let status = if attempt.is_approved() {
            "approved"
        } else {
            "rejected"
        };
        eprintln!("Attempt {}: {}", attempt.index(), status);
        if !attempt.is_approved() && !attempt.feedback().is_empty() {
            eprintln!("  Feedback: {}", attempt.feedback());
        }
    }

    match generation.content() {
        Some(content) => {
            if generation.auto_correction_used() {
                eprintln!(
                    "Approved after {} attempts via {}",
                    generation.attempts().len(),
                    generation.provider()
                );
            }
            println!("{}", content);
        }
        None => {
            eprintln!(
                "Generation failed: {}",
                generation.error().unwrap_or("no approved content")
            );
        }
    }
}

/// Summarize a meeting transcript.
///
/// Returns whether a summary was produced.
///
/// # Errors
///
/// Returns an error only when the report cannot be produced or encoded.
#[instrument(skip(config, options), fields(file = %options.file.display()))]
pub async fn summarize(config: &FabulaConfig, options: &GenerateOptions) -> FabulaResult<bool> {
    let report = workflow_report(config, options, WorkflowTask::MeetingSummary).await?;

    if options.format == OutputFormat::Json {
        println!("{}", report_json(&report)?);
        return Ok(report.success());
    }

    if let Some(error) = &report.extraction().error {
        eprintln!("Failed to read {}: {}", options.file.display(), error);
        return Ok(false);
    }

    match report.summary().as_ref().map(TaskResult::content) {
        Some(Some(content)) => println!("{}", content),
        _ => eprintln!(
            "Summary failed: {}",
            report
                .summary()
                .as_ref()
                .and_then(TaskResult::error)
                .unwrap_or("no content")
        ),
    }
    Ok(report.success())
}

/// Render the prompt for `key` over `content`.
///
/// Unknown keys fall back to story generation.
pub fn render_prompt(config: &FabulaConfig, key: &str, content: &str) -> String {
    let kind = PromptKind::from_key_or_default(key);
    if kind.key() != key.trim() {
        warn!(key, fallback = kind.key(), "Unknown prompt kind");
    }
    PromptComposer::new(config.prompts.clone()).compose(kind, content)
}

/// Print the prompt for `key` rendered over a file.
///
/// Returns whether the file could be read.
pub async fn prompt(config: &FabulaConfig, key: &str, file: &Path) -> bool {
    let extraction = PlainTextExtractor.extract_text(file).await;
    if !extraction.success {
        eprintln!(
            "Failed to read {}: {}",
            file.display(),
            extraction.error.unwrap_or_default()
        );
        return false;
    }
    println!("{}", render_prompt(config, key, &extraction.text));
    true
}

/// The prompt catalog, one `key  description` line per entry.
pub fn list_prompts() -> String {
    PromptKind::iter()
        .map(|kind| format!("{:<30}{}", kind.key(), kind.description()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The effective configuration with credentials redacted, followed by the
/// providers that still lack one.
pub fn show_config(config: &FabulaConfig) -> String {
    let mut output = format!("{:#?}", config);
    let missing = config.missing_credentials();
    if missing.is_empty() {
        info!("Every provider has a credential");
    }
    for provider in missing {
        output.push_str(&format!("\nMissing credential: {}", provider));
    }
    output
}
