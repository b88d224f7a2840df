//! Prompt composition.

mod kind;
mod templates;

pub use kind::PromptKind;

use fabula_config::PromptSettings;
use fabula_core::Message;

/// Renders working text into complete instruction prompts.
///
/// Pure and deterministic: the same inputs always render the same prompt.
/// Source text is embedded verbatim, empty text included.
///
/// # Examples
///
/// ```
/// use fabula_config::PromptSettings;
/// use fabula_pipeline::PromptComposer;
///
/// let composer = PromptComposer::new(PromptSettings::default());
/// let prompt = composer.compose_generation_prompt("Cadastro de entregas", Some("  Foque no gestor  "));
///
/// assert!(prompt.contains("Cadastro de entregas"));
/// assert!(prompt.contains("\nFoque no gestor\n"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptComposer {
    settings: PromptSettings,
}

impl PromptComposer {
    /// Create a composer from prompt settings.
    pub fn new(settings: PromptSettings) -> Self {
        Self { settings }
    }

    /// Story generation prompt, with observations layered on when present.
    pub fn compose_generation_prompt(&self, source_text: &str, observations: Option<&str>) -> String {
        let mut prompt =
            templates::generate_from_requirements(self.settings.product_name(), source_text);
        if let Some(observations) = non_blank(observations) {
            prompt.push_str(&templates::observations_block(
                "das Histórias de Usuário",
                "o conteúdo, a estrutura, o detalhamento ou o foco das Histórias de Usuário",
                observations,
            ));
        }
        prompt
    }

    /// Critique prompt for a generated candidate.
    pub fn compose_validation_prompt(&self, candidate: &str) -> String {
        templates::validation(candidate)
    }

    /// Meeting summary prompt, with observations layered on when present.
    pub fn compose_summary_prompt(&self, source_text: &str, observations: Option<&str>) -> String {
        let mut prompt = templates::meeting_summary(source_text);
        if let Some(observations) = non_blank(observations) {
            prompt.push_str(&templates::observations_block(
                "do resumo da reunião",
                "o conteúdo, a estrutura, o detalhamento, o tom ou o foco do resumo",
                observations,
            ));
        }
        prompt
    }

    /// Render any catalog prompt without observations.
    pub fn compose(&self, kind: PromptKind, content: &str) -> String {
        match kind {
            PromptKind::GenerateFromRequirements => self.compose_generation_prompt(content, None),
            PromptKind::AnalyzeExisting => templates::analyze_existing(content),
            PromptKind::RefineStory => templates::refine_story(content),
            PromptKind::AcceptanceCriteria => templates::acceptance_criteria(content),
            PromptKind::EstimateEffort => templates::estimate_effort(content),
            PromptKind::MeetingSummary => self.compose_summary_prompt(content, None),
        }
    }

    /// `[system, user]` pair for story generation.
    pub fn generation_messages(&self, source_text: &str, observations: Option<&str>) -> Vec<Message> {
        vec![
            Message::system(templates::GENERATION_PERSONA),
            Message::user(self.compose_generation_prompt(source_text, observations)),
        ]
    }

    /// `[system, user]` pair for critiquing a candidate.
    pub fn validation_messages(&self, candidate: &str) -> Vec<Message> {
        vec![
            Message::system(templates::VALIDATION_PERSONA),
            Message::user(self.compose_validation_prompt(candidate)),
        ]
    }

    /// `[system, user]` pair for a meeting summary.
    pub fn summary_messages(&self, source_text: &str, observations: Option<&str>) -> Vec<Message> {
        vec![
            Message::system(templates::SUMMARY_PERSONA),
            Message::user(self.compose_summary_prompt(source_text, observations)),
        ]
    }

    /// `[system, user]` pair for a catalog prompt.
    pub fn messages_for(&self, kind: PromptKind, content: &str) -> Vec<Message> {
        let persona = match kind {
            PromptKind::AnalyzeExisting => templates::VALIDATION_PERSONA,
            PromptKind::MeetingSummary => templates::SUMMARY_PERSONA,
            _ => templates::GENERATION_PERSONA,
        };
        vec![Message::system(persona), Message::user(self.compose(kind, content))]
    }
}

fn non_blank(observations: Option<&str>) -> Option<&str> {
    observations.map(str::trim).filter(|text| !text.is_empty())
}
