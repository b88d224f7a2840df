//! The generate, validate and retry control loop.

use crate::{KeywordClassifier, PromptComposer, PromptKind};
use fabula_config::FabulaConfig;
use fabula_core::{Attempt, FailureKind, GenerationResult, Message, TaskResult};
use fabula_error::{PipelineError, PipelineErrorKind, PipelineResult, ProviderErrorKind};
use fabula_interface::{Classifier, CompletionDriver};
use tracing::{debug, error, info, instrument, warn};

/// Separator placed between the working text and the feedback it absorbs.
pub const FEEDBACK_SEPARATOR: &str = "\n\nFeedback for correction: ";

/// Drives generation and validation until a candidate is approved or the
/// attempt budget runs out.
///
/// Every call awaits strictly in order: a validation never starts before
/// its generation finishes, and a retry never starts before the previous
/// validation finishes. The orchestrator holds no per-run state, so one
/// instance serves any number of sequential or concurrent runs.
pub struct AutoCorrectionOrchestrator<D: CompletionDriver> {
    driver: D,
    composer: PromptComposer,
    classifier: Box<dyn Classifier>,
    max_attempts: usize,
}

impl<D: CompletionDriver> AutoCorrectionOrchestrator<D> {
    /// Create an orchestrator using the keyword classifier.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMaxAttempts` if `max_attempts` is zero.
    pub fn new(driver: D, composer: PromptComposer, max_attempts: usize) -> PipelineResult<Self> {
        check_max_attempts(max_attempts)?;
        Ok(Self {
            driver,
            composer,
            classifier: Box::new(KeywordClassifier::new()),
            max_attempts,
        })
    }

    /// Create an orchestrator from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMaxAttempts` if the configured budget is zero.
    pub fn from_config(driver: D, config: &FabulaConfig) -> PipelineResult<Self> {
        Self::new(
            driver,
            PromptComposer::new(config.prompts.clone()),
            *config.pipeline.max_attempts(),
        )
    }

    /// Replace the classifier.
    pub fn with_classifier(mut self, classifier: Box<dyn Classifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replace the attempt budget.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMaxAttempts` if `max_attempts` is zero.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> PipelineResult<Self> {
        check_max_attempts(max_attempts)?;
        self.max_attempts = max_attempts;
        Ok(self)
    }

    /// Attempt budget per run.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// The completion driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The prompt composer.
    pub fn composer(&self) -> &PromptComposer {
        &self.composer
    }

    /// Generate user stories from `source_text`, validating and correcting
    /// until approved or the budget is spent.
    ///
    /// Never returns an error: failures are reported in the result, which
    /// always carries every recorded attempt.
    #[instrument(
        skip(self, source_text, observations),
        fields(
            provider = self.driver.provider_name(),
            max_attempts = self.max_attempts,
            source_len = source_text.len(),
            has_observations = observations.is_some_and(|o| !o.trim().is_empty()),
        )
    )]
    pub async fn run(&self, source_text: &str, observations: Option<&str>) -> GenerationResult {
        let provider = self.driver.provider_name();
        let mut working_text = source_text.to_string();
        let mut attempts: Vec<Attempt> = Vec::with_capacity(self.max_attempts);

        for attempt_index in 0..self.max_attempts {
            let attempt_number = attempt_index + 1;
            debug!(attempt = attempt_number, "Generating candidate");

            let generation = self.composer.generation_messages(&working_text, observations);
            let generated = match self.driver.complete(&generation).await {
                Ok(content) => content,
                Err(e) => {
                    return self.hard_failure(attempts, PipelineErrorKind::Generation(e.kind));
                }
            };

            debug!(attempt = attempt_number, chars = generated.len(), "Validating candidate");

            let validation = self.composer.validation_messages(&generated);
            let critique = match self.driver.complete(&validation).await {
                Ok(critique) => critique,
                Err(e) => {
                    return self.hard_failure(
                        attempts,
                        PipelineErrorKind::ValidationUnavailable(e.kind),
                    );
                }
            };

            let verdict = self.classifier.classify(&critique);
            let attempt = Attempt::new(attempt_number, generated, critique, verdict);
            let approved = attempt.is_approved();
            let feedback = attempt.feedback().clone();
            attempts.push(attempt);

            if approved {
                info!(attempts = attempt_number, "Candidate approved");
                return GenerationResult::approved(provider, attempts);
            }

            if attempt_number < self.max_attempts {
                warn!(
                    attempt = attempt_number,
                    feedback = %feedback,
                    "Candidate rejected, retrying with feedback"
                );
                working_text.push_str(FEEDBACK_SEPARATOR);
                working_text.push_str(&feedback);
            }
        }

        warn!(attempts = attempts.len(), "Every candidate was rejected");
        GenerationResult::exhausted(provider, attempts)
    }

    /// Executive summary of a meeting transcript in a single completion.
    #[instrument(skip(self, source_text, observations), fields(provider = self.driver.provider_name()))]
    pub async fn summarize(&self, source_text: &str, observations: Option<&str>) -> TaskResult {
        self.run_task(self.composer.summary_messages(source_text, observations))
            .await
    }

    /// Any catalog prompt in a single completion.
    #[instrument(skip(self, content), fields(provider = self.driver.provider_name(), kind = %kind))]
    pub async fn run_prompt(&self, kind: PromptKind, content: &str) -> TaskResult {
        self.run_task(self.composer.messages_for(kind, content)).await
    }

    async fn run_task(&self, messages: Vec<Message>) -> TaskResult {
        let provider = self.driver.provider_name();
        match self.driver.complete(&messages).await {
            Ok(content) => {
                debug!(chars = content.len(), "Task completed");
                TaskResult::completed(provider, content)
            }
            Err(e) => {
                let kind = PipelineErrorKind::Task(e.kind);
                let failure = failure_kind(&kind);
                let err = PipelineError::new(kind);
                error!(error = %err, "Task failed");
                TaskResult::failed(provider, failure, err.kind.to_string())
            }
        }
    }

    fn hard_failure(&self, attempts: Vec<Attempt>, kind: PipelineErrorKind) -> GenerationResult {
        let failure = failure_kind(&kind);
        let err = PipelineError::new(kind);
        error!(error = %err, recorded_attempts = attempts.len(), "Pipeline run failed");
        GenerationResult::hard_failure(
            self.driver.provider_name(),
            attempts,
            failure,
            err.kind.to_string(),
        )
    }
}

impl<D: CompletionDriver + std::fmt::Debug> std::fmt::Debug for AutoCorrectionOrchestrator<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoCorrectionOrchestrator")
            .field("driver", &self.driver)
            .field("composer", &self.composer)
            .field("max_attempts", &self.max_attempts)
            .finish_non_exhaustive()
    }
}

fn check_max_attempts(max_attempts: usize) -> PipelineResult<()> {
    if max_attempts < 1 {
        return Err(PipelineError::new(PipelineErrorKind::InvalidMaxAttempts(
            max_attempts,
        )));
    }
    Ok(())
}

fn failure_kind(kind: &PipelineErrorKind) -> FailureKind {
    match kind {
        PipelineErrorKind::ValidationUnavailable(_) => FailureKind::ValidationUnavailable,
        PipelineErrorKind::InvalidMaxAttempts(_) => FailureKind::ConfigurationMissing,
        PipelineErrorKind::Generation(provider) | PipelineErrorKind::Task(provider) => {
            match provider {
                ProviderErrorKind::ConfigurationMissing(_) => FailureKind::ConfigurationMissing,
                ProviderErrorKind::Unavailable { .. }
                | ProviderErrorKind::Timeout(_)
                | ProviderErrorKind::Transport(_) => FailureKind::ProviderUnavailable,
                ProviderErrorKind::Status { .. } | ProviderErrorKind::Parse(_) => {
                    FailureKind::ProviderError
                }
            }
        }
    }
}
