//! End-to-end workflow: extract, generate, render, deliver.

use crate::AutoCorrectionOrchestrator;
use derive_getters::Getters;
use fabula_core::{FailureKind, GenerationResult, TaskResult};
use fabula_error::BuilderError;
use fabula_interface::{
    CompletionDriver, DeliveryResult, DocumentFormat, DocumentRenderer, EmailSender,
    ExtractionResult, RenderResult, TextExtractor,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

/// What the workflow produces from the extracted text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WorkflowTask {
    /// Validated user stories
    #[default]
    #[display("user_stories")]
    UserStories,
    /// Executive meeting summary
    #[display("meeting_summary")]
    MeetingSummary,
}

/// Email delivery of the final content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Delivery {
    recipients: Vec<String>,
    subject: String,
}

impl Delivery {
    /// Deliver to `recipients`, a comma-separated address list.
    ///
    /// Blank entries are dropped.
    pub fn new(recipients: &str, subject: impl Into<String>) -> Self {
        Self {
            recipients: recipients
                .split(',')
                .map(str::trim)
                .filter(|address| !address.is_empty())
                .map(String::from)
                .collect(),
            subject: subject.into(),
        }
    }
}

/// One workflow invocation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(
    setter(into),
    build_fn(error = "BuilderError", validate = "Self::validate")
)]
pub struct WorkflowRequest {
    /// File holding the source text
    source: PathBuf,
    /// Refinement instructions layered on the prompt
    #[builder(default)]
    observations: Option<String>,
    /// What to produce
    #[builder(default)]
    task: WorkflowTask,
    /// Document format to render, if any
    #[builder(default)]
    format: Option<DocumentFormat>,
    /// Email delivery, if any
    #[builder(default)]
    delivery: Option<Delivery>,
}

impl WorkflowRequest {
    /// Creates a new builder for `WorkflowRequest`.
    pub fn builder() -> WorkflowRequestBuilder {
        WorkflowRequestBuilder::default()
    }
}

impl WorkflowRequestBuilder {
    fn validate(&self) -> Result<(), BuilderError> {
        if self
            .source
            .as_ref()
            .is_some_and(|source| source.as_os_str().is_empty())
        {
            return Err(BuilderError::invalid("source", "path is empty"));
        }
        Ok(())
    }
}

/// Outcome of every stage that ran.
///
/// Stages after a failed one are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct WorkflowReport {
    extraction: ExtractionResult,
    generation: Option<GenerationResult>,
    summary: Option<TaskResult>,
    render: Option<RenderResult>,
    delivery: Option<DeliveryResult>,
}

impl WorkflowReport {
    fn new(extraction: ExtractionResult) -> Self {
        Self {
            extraction,
            generation: None,
            summary: None,
            render: None,
            delivery: None,
        }
    }

    /// Report for a run whose completion client could not be set up.
    ///
    /// The failure lands in the stage `task` would have filled, with
    /// `FailureKind::ConfigurationMissing` and no attempts, so callers read
    /// it like any other failed run. A failed extraction still wins.
    pub fn unconfigured(
        extraction: ExtractionResult,
        task: WorkflowTask,
        provider: &str,
        error: impl Into<String>,
    ) -> Self {
        let mut report = Self::new(extraction);
        if !report.extraction.success {
            return report;
        }
        let error = error.into();
        match task {
            WorkflowTask::UserStories => {
                report.generation = Some(GenerationResult::hard_failure(
                    provider,
                    Vec::new(),
                    FailureKind::ConfigurationMissing,
                    error,
                ));
            }
            WorkflowTask::MeetingSummary => {
                report.summary = Some(TaskResult::failed(
                    provider,
                    FailureKind::ConfigurationMissing,
                    error,
                ));
            }
        }
        report
    }

    /// Final content, if generation succeeded.
    pub fn content(&self) -> Option<&str> {
        self.generation
            .as_ref()
            .and_then(GenerationResult::content)
            .or_else(|| self.summary.as_ref().and_then(TaskResult::content))
    }

    /// Whether every stage that ran succeeded.
    pub fn success(&self) -> bool {
        self.extraction.success
            && self.content().is_some()
            && self.render.as_ref().is_none_or(|render| render.success)
            && self.delivery.as_ref().is_none_or(|delivery| delivery.success)
    }
}

/// Composes the orchestrator with its external collaborators.
pub struct Workflow<D: CompletionDriver> {
    orchestrator: AutoCorrectionOrchestrator<D>,
    extractor: Box<dyn TextExtractor>,
    renderer: Option<Box<dyn DocumentRenderer>>,
    email_sender: Option<Box<dyn EmailSender>>,
}

impl<D: CompletionDriver> Workflow<D> {
    /// Create a workflow that extracts text with `extractor`.
    pub fn new(orchestrator: AutoCorrectionOrchestrator<D>, extractor: Box<dyn TextExtractor>) -> Self {
        Self {
            orchestrator,
            extractor,
            renderer: None,
            email_sender: None,
        }
    }

    /// Add a document renderer.
    pub fn with_renderer(mut self, renderer: Box<dyn DocumentRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Add an email sender.
    pub fn with_email_sender(mut self, email_sender: Box<dyn EmailSender>) -> Self {
        self.email_sender = Some(email_sender);
        self
    }

    /// The orchestrator behind the generation stage.
    pub fn orchestrator(&self) -> &AutoCorrectionOrchestrator<D> {
        &self.orchestrator
    }

    /// Run every stage the request asks for, stopping at the first failure.
    #[instrument(skip(self, request), fields(source = %request.source.display(), task = %request.task))]
    pub async fn execute(&self, request: &WorkflowRequest) -> WorkflowReport {
        let extraction = self.extractor.extract_text(&request.source).await;
        if !extraction.success {
            warn!(error = ?extraction.error, "Extraction failed");
            return WorkflowReport::new(extraction);
        }

        let text = extraction.text.clone();
        let observations = request.observations.as_deref();
        let mut report = WorkflowReport::new(extraction);

        match request.task {
            WorkflowTask::UserStories => {
                report.generation = Some(self.orchestrator.run(&text, observations).await);
            }
            WorkflowTask::MeetingSummary => {
                report.summary = Some(self.orchestrator.summarize(&text, observations).await);
            }
        }

        let Some(content) = report.content().map(str::to_string) else {
            warn!("No content produced");
            return report;
        };

        let mut attachments = Vec::new();
        if let Some(format) = request.format {
            let render = match &self.renderer {
                Some(renderer) => renderer.render_document(&content, format).await,
                None => RenderResult::failed(format!("No renderer available for {}", format)),
            };
            let rendered = render.success;
            if let Some(path) = &render.file_path {
                attachments.push(path.clone());
            }
            report.render = Some(render);
            if !rendered {
                warn!(format = %format, "Rendering failed");
                return report;
            }
            debug!(format = %format, "Document rendered");
        }

        if let Some(delivery) = &request.delivery {
            let result = if delivery.recipients.is_empty() {
                DeliveryResult::failed("No email recipients given")
            } else {
                match &self.email_sender {
                    Some(sender) => {
                        sender
                            .send_email(
                                &delivery.recipients,
                                &delivery.subject,
                                &content,
                                &attachments,
                            )
                            .await
                    }
                    None => DeliveryResult::failed("No email sender available"),
                }
            };
            if !result.success {
                warn!(error = ?result.error, "Delivery failed");
            }
            report.delivery = Some(result);
        }

        info!(success = report.success(), "Workflow finished");
        report
    }
}
