//! Auto-correction loop tests against a scripted driver.

mod test_utils;

use fabula_config::{FabulaConfig, PromptSettings};
use fabula_core::{FailureKind, Verdict};
use fabula_error::{PipelineErrorKind, ProviderErrorKind};
use fabula_interface::Classifier;
use fabula_pipeline::{AutoCorrectionOrchestrator, FEEDBACK_SEPARATOR, PromptComposer, PromptKind};
use test_utils::{APPROVING_CRITIQUE, MockDriver, MockResponse, REJECTING_CRITIQUE};

fn orchestrator(driver: MockDriver, max_attempts: usize) -> AutoCorrectionOrchestrator<MockDriver> {
    AutoCorrectionOrchestrator::new(
        driver,
        PromptComposer::new(PromptSettings::default()),
        max_attempts,
    )
    .expect("valid attempt budget")
}

#[tokio::test]
async fn test_single_attempt_budget_with_rejection() {
    let driver = MockDriver::replying(&["História v1", REJECTING_CRITIQUE]);
    let result = orchestrator(driver.clone(), 1).run("requisitos", None).await;

    assert!(!result.success());
    assert_eq!(result.attempts().len(), 1);
    assert_eq!(result.failure(), Some(FailureKind::Exhausted));
    assert!(result.content().is_none());
    assert!(!result.auto_correction_used());
    assert_eq!(driver.call_count(), 2);
}

#[tokio::test]
async fn test_third_attempt_approved_uses_auto_correction() {
    let driver = MockDriver::replying(&[
        "História v1",
        REJECTING_CRITIQUE,
        "História v2",
        REJECTING_CRITIQUE,
        "História v3",
        APPROVING_CRITIQUE,
    ]);
    let result = orchestrator(driver.clone(), 3).run("requisitos", None).await;

    assert!(result.success());
    assert!(result.auto_correction_used());
    assert_eq!(result.attempts().len(), 3);
    assert_eq!(result.content(), Some("História v3"));
    assert!(result.final_verdict().is_some_and(|verdict| verdict.approved));
    assert_eq!(driver.call_count(), 6);

    let indices: Vec<usize> = result.attempts().iter().map(|a| *a.index()).collect();
    assert_eq!(indices, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_first_attempt_approved() {
    let driver = MockDriver::replying(&["História v1", APPROVING_CRITIQUE]);
    let result = orchestrator(driver, 3).run("requisitos", None).await;

    assert!(result.success());
    assert!(!result.auto_correction_used());
    assert_eq!(result.attempts().len(), 1);
    assert_eq!(result.attempts()[0].critique(), APPROVING_CRITIQUE);
}

#[tokio::test]
async fn test_feedback_is_folded_into_working_text() {
    let driver = MockDriver::replying(&[
        "História v1",
        REJECTING_CRITIQUE,
        "História v2",
        APPROVING_CRITIQUE,
    ]);
    let result = orchestrator(driver.clone(), 3).run("requisitos originais", None).await;
    assert!(result.success());

    let first_feedback = result.attempts()[0].feedback().clone();
    assert!(!first_feedback.is_empty());

    let calls = driver.calls();
    // generation, validation, generation, validation
    assert_eq!(calls.len(), 4);
    let expected = format!("requisitos originais{}{}", FEEDBACK_SEPARATOR, first_feedback);
    assert!(calls[2][1].content.contains(&expected));
    assert!(!calls[0][1].content.contains(FEEDBACK_SEPARATOR));
    // validation critiques the freshly generated candidate
    assert!(calls[1][1].content.contains("História v1"));
    assert!(calls[3][1].content.contains("História v2"));
}

#[tokio::test]
async fn test_exhaustion_never_exceeds_budget() {
    for max_attempts in 1..=4 {
        let responses: Vec<&str> = (0..max_attempts)
            .flat_map(|_| ["História", REJECTING_CRITIQUE])
            .collect();
        let driver = MockDriver::replying(&responses);
        let result = orchestrator(driver.clone(), max_attempts).run("texto", None).await;

        assert!(!result.success());
        assert_eq!(result.attempts().len(), max_attempts);
        assert!(result.attempts().iter().all(|attempt| !attempt.is_approved()));
        assert_eq!(driver.call_count(), max_attempts * 2);
    }
}

#[tokio::test]
async fn test_generation_failure_records_no_attempt() {
    let driver = MockDriver::new(vec![MockResponse::Error(ProviderErrorKind::Unavailable {
        attempts: 3,
        last_error: "connection refused".to_string(),
    })]);
    let result = orchestrator(driver.clone(), 3).run("texto", None).await;

    assert!(!result.success());
    assert!(result.attempts().is_empty());
    assert_eq!(result.failure(), Some(FailureKind::ProviderUnavailable));
    assert!(result.error().is_some_and(|e| e.contains("connection refused")));
    assert_eq!(driver.call_count(), 1);
}

#[tokio::test]
async fn test_missing_configuration_is_reported() {
    let driver = MockDriver::new(vec![MockResponse::Error(
        ProviderErrorKind::ConfigurationMissing("ZELLO_API_KEY not set".to_string()),
    )]);
    let result = orchestrator(driver, 3).run("texto", None).await;

    assert_eq!(result.failure(), Some(FailureKind::ConfigurationMissing));
}

#[tokio::test]
async fn test_validation_failure_is_hard_failure_without_attempt() {
    let driver = MockDriver::new(vec![
        MockResponse::Success("História v1".to_string()),
        MockResponse::Error(ProviderErrorKind::Status {
            status_code: 400,
            message: "bad request".to_string(),
        }),
    ]);
    let result = orchestrator(driver, 3).run("texto", None).await;

    assert!(!result.success());
    assert!(result.attempts().is_empty());
    assert_eq!(result.failure(), Some(FailureKind::ValidationUnavailable));
}

#[tokio::test]
async fn test_failure_after_rejection_keeps_history() {
    let driver = MockDriver::new(vec![
        MockResponse::Success("História v1".to_string()),
        MockResponse::Success(REJECTING_CRITIQUE.to_string()),
        MockResponse::Error(ProviderErrorKind::Status {
            status_code: 401,
            message: "unauthorized".to_string(),
        }),
    ]);
    let result = orchestrator(driver, 3).run("texto", None).await;

    assert!(!result.success());
    assert_eq!(result.attempts().len(), 1);
    assert_eq!(result.failure(), Some(FailureKind::ProviderError));
}

#[test]
fn test_zero_attempt_budget_rejected() {
    let result = AutoCorrectionOrchestrator::new(
        MockDriver::replying(&[]),
        PromptComposer::default(),
        0,
    );
    let err = result.expect_err("zero attempts");
    assert_eq!(err.kind(), &PipelineErrorKind::InvalidMaxAttempts(0));

    let orchestrator = orchestrator(MockDriver::replying(&[]), 3);
    assert!(orchestrator.with_max_attempts(0).is_err());
}

#[test]
fn test_from_config_uses_configured_budget() -> anyhow::Result<()> {
    let config = FabulaConfig::bundled()?;
    let orchestrator = AutoCorrectionOrchestrator::from_config(MockDriver::replying(&[]), &config)?;
    assert_eq!(orchestrator.max_attempts(), 3);

    let orchestrator = orchestrator.with_max_attempts(5)?;
    assert_eq!(orchestrator.max_attempts(), 5);
    Ok(())
}

struct AlwaysApprove;

impl Classifier for AlwaysApprove {
    fn classify(&self, _critique: &str) -> Verdict {
        Verdict::approved("ok")
    }
}

#[tokio::test]
async fn test_classifier_can_be_replaced() {
    let driver = MockDriver::replying(&["História v1", REJECTING_CRITIQUE]);
    let result = orchestrator(driver, 3)
        .with_classifier(Box::new(AlwaysApprove))
        .run("texto", None)
        .await;

    assert!(result.success());
    assert_eq!(result.attempts()[0].feedback(), "ok");
}

#[tokio::test]
async fn test_observations_reach_generation_prompt() {
    let driver = MockDriver::replying(&["História", APPROVING_CRITIQUE]);
    orchestrator(driver.clone(), 3)
        .run("texto", Some("Foque em acessibilidade"))
        .await;

    let calls = driver.calls();
    assert!(calls[0][1].content.contains("Foque em acessibilidade"));
    assert!(!calls[1][1].content.contains("Foque em acessibilidade"));
}

#[tokio::test]
async fn test_summary_is_single_pass() {
    let driver = MockDriver::replying(&["Resumo executivo"]);
    let result = orchestrator(driver.clone(), 3)
        .summarize("transcrição", None)
        .await;

    assert!(result.success());
    assert_eq!(result.content(), Some("Resumo executivo"));
    assert_eq!(result.provider(), "mock");
    assert_eq!(driver.call_count(), 1);
}

#[tokio::test]
async fn test_catalog_prompt_failure_is_structured() {
    let driver = MockDriver::new(vec![MockResponse::Error(ProviderErrorKind::Parse(
        "bad body".to_string(),
    ))]);
    let result = orchestrator(driver, 3)
        .run_prompt(PromptKind::RefineStory, "Como gestor, quero...")
        .await;

    assert!(!result.success());
    assert_eq!(result.failure(), Some(FailureKind::ProviderError));
    assert!(result.error().is_some_and(|e| e.contains("bad body")));
}
