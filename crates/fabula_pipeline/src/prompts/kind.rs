//! The prompt catalog.

use serde::{Deserialize, Serialize};

/// Every prompt the composer can render on its own.
///
/// # Examples
///
/// ```
/// use fabula_pipeline::PromptKind;
///
/// assert_eq!(PromptKind::from_key_or_default("refine_story"), PromptKind::RefineStory);
/// assert_eq!(
///     PromptKind::from_key_or_default("unknown"),
///     PromptKind::GenerateFromRequirements
/// );
/// ```
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
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PromptKind {
    /// User stories from requirements or a transcript
    #[default]
    #[display("generate_from_requirements")]
    GenerateFromRequirements,
    /// Critique of existing user stories
    #[display("analyze_existing")]
    AnalyzeExisting,
    /// Refinement of one user story
    #[display("refine_story")]
    RefineStory,
    /// Acceptance criteria for one user story
    #[display("generate_acceptance_criteria")]
    #[strum(serialize = "generate_acceptance_criteria")]
    #[serde(rename = "generate_acceptance_criteria")]
    AcceptanceCriteria,
    /// Effort estimate in story points
    #[display("estimate_effort")]
    EstimateEffort,
    /// Executive meeting summary
    #[display("generate_meeting_summary")]
    #[strum(serialize = "generate_meeting_summary")]
    #[serde(rename = "generate_meeting_summary")]
    MeetingSummary,
}

impl PromptKind {
    /// Stable catalog key.
    pub fn key(&self) -> &'static str {
        match self {
            PromptKind::GenerateFromRequirements => "generate_from_requirements",
            PromptKind::AnalyzeExisting => "analyze_existing",
            PromptKind::RefineStory => "refine_story",
            PromptKind::AcceptanceCriteria => "generate_acceptance_criteria",
            PromptKind::EstimateEffort => "estimate_effort",
            PromptKind::MeetingSummary => "generate_meeting_summary",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            PromptKind::GenerateFromRequirements => {
                "Gerar Histórias de Usuário a partir de requisitos"
            }
            PromptKind::AnalyzeExisting => "Analisar Histórias de Usuário existentes",
            PromptKind::RefineStory => "Refinar uma História de Usuário específica",
            PromptKind::AcceptanceCriteria => "Gerar critérios de aceitação",
            PromptKind::EstimateEffort => "Estimar esforço de desenvolvimento",
            PromptKind::MeetingSummary => "Gerar resumo executivo de reunião",
        }
    }

    /// Parse a catalog key, falling back to story generation.
    pub fn from_key_or_default(key: &str) -> Self {
        key.trim().parse().unwrap_or_default()
    }
}
