//! Keyword-count approval classifier.

use fabula_core::Verdict;
use fabula_interface::Classifier;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// Vocabulary counted as approval.
pub const APPROVAL_KEYWORDS: &[&str] = &[
    "aprovado",
    "aprovada",
    "aprovadas",
    "adequado",
    "adequada",
    "adequadas",
    "correto",
    "correta",
    "corretas",
    "bom",
    "boa",
    "boas",
    "satisfatório",
    "satisfatória",
    "satisfatórias",
    "aceitável",
    "aceitáveis",
    "válido",
    "válida",
    "válidas",
];

/// Vocabulary counted as rejection.
pub const REJECTION_KEYWORDS: &[&str] = &[
    "reprovado",
    "reprovada",
    "reprovadas",
    "inadequado",
    "inadequada",
    "inadequadas",
    "incorreto",
    "incorreta",
    "incorretas",
    "ruim",
    "ruins",
    "insatisfatório",
    "insatisfatória",
    "insatisfatórias",
    "inaceitável",
    "inaceitáveis",
    "inválido",
    "inválida",
    "inválidas",
    "problema",
    "problemas",
    "erro",
    "erros",
    "falta",
    "faltam",
    "melhorar",
    "melhorias",
];

/// Phrases that turn a tied count into a rejection.
pub const IMPROVEMENT_INDICATORS: &[&str] = &[
    "sugestão",
    "sugestões",
    "recomendação",
    "recomendações",
    "melhorar",
    "refinar",
    "ajustar",
    "corrigir",
];

/// Characters of critique kept when no feedback pattern matches.
pub const FEEDBACK_FALLBACK_CHARS: usize = 200;

const MAX_FEEDBACK_PARTS: usize = 3;

/// Feedback patterns for approving critiques, in priority order.
pub const POSITIVE_PATTERNS: &[&str] = &[
    r"(?im)(?:bom|boa|boas|excelente|ótimo|ótima|ótimas).*?(?:\n|$)",
    r"(?im)(?:adequado|adequada|adequadas|correto|correta|corretas).*?(?:\n|$)",
    r"(?im)(?:aprovado|aprovada|aprovadas|aceitável|aceitáveis).*?(?:\n|$)",
];

/// Feedback patterns for rejecting critiques, in priority order.
pub const NEGATIVE_PATTERNS: &[&str] = &[
    r"(?im)(?:problema|problemas|erro|erros).*?(?:\n|$)",
    r"(?im)(?:melhorar|refinar|ajustar|corrigir).*?(?:\n|$)",
    r"(?im)(?:sugestão|sugestões|recomendação|recomendações).*?(?:\n|$)",
];

static POSITIVE: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(POSITIVE_PATTERNS));
static NEGATIVE: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(NEGATIVE_PATTERNS));

/// Classifies a critique by counting approval and rejection vocabulary.
///
/// Each distinct keyword counts once when it occurs anywhere in the
/// lower-cased critique, so `adequado` also counts inside `inadequado`.
/// Ties approve unless an improvement indicator is present, which makes an
/// empty critique approved.
///
/// # Examples
///
/// ```
/// use fabula_interface::Classifier;
/// use fabula_pipeline::KeywordClassifier;
///
/// let classifier = KeywordClassifier::new();
/// assert!(classifier.classify("Está adequado e aprovado, muito bom.").approved);
/// assert!(!classifier
///     .classify("Este item é inadequado, apresenta problemas que precisam melhorar.")
///     .approved);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KeywordClassifier {
    positive: &'static [Regex],
    negative: &'static [Regex],
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordClassifier {
    /// Create a classifier with the built-in vocabulary.
    pub fn new() -> Self {
        Self {
            positive: POSITIVE.as_slice(),
            negative: NEGATIVE.as_slice(),
        }
    }

    /// Number of distinct approval keywords in `critique`.
    pub fn approval_count(&self, critique: &str) -> usize {
        count_keywords(&critique.to_lowercase(), APPROVAL_KEYWORDS)
    }

    /// Number of distinct rejection keywords in `critique`.
    pub fn rejection_count(&self, critique: &str) -> usize {
        count_keywords(&critique.to_lowercase(), REJECTION_KEYWORDS)
    }

    /// Whether `critique` contains an improvement indicator.
    pub fn has_improvement_indicator(&self, critique: &str) -> bool {
        let lowered = critique.to_lowercase();
        IMPROVEMENT_INDICATORS
            .iter()
            .any(|indicator| lowered.contains(indicator))
    }

    /// Compiled feedback patterns, approving set first.
    pub fn feedback_patterns(&self) -> (&[Regex], &[Regex]) {
        (self.positive, self.negative)
    }

    /// Short excerpt of `critique` explaining the verdict.
    ///
    /// Up to three pattern matches joined by a space, or the first 200
    /// characters followed by `...` when nothing matches.
    pub fn extract_feedback(&self, critique: &str, approved: bool) -> String {
        let patterns = if approved {
            self.positive
        } else {
            self.negative
        };

        let parts: Vec<&str> = patterns
            .iter()
            .flat_map(|pattern| pattern.find_iter(critique))
            .map(|found| found.as_str().trim())
            .take(MAX_FEEDBACK_PARTS)
            .collect();

        if !parts.is_empty() {
            return parts.join(" ");
        }

        if critique.chars().count() > FEEDBACK_FALLBACK_CHARS {
            let mut excerpt: String = critique.chars().take(FEEDBACK_FALLBACK_CHARS).collect();
            excerpt.push_str("...");
            excerpt
        } else {
            critique.to_string()
        }
    }
}

impl Classifier for KeywordClassifier {
    #[instrument(skip(self, critique), fields(critique_len = critique.len()))]
    fn classify(&self, critique: &str) -> Verdict {
        let lowered = critique.to_lowercase();
        let approval_count = count_keywords(&lowered, APPROVAL_KEYWORDS);
        let rejection_count = count_keywords(&lowered, REJECTION_KEYWORDS);

        let approved = if rejection_count > approval_count {
            false
        } else if approval_count > rejection_count {
            true
        } else {
            !IMPROVEMENT_INDICATORS
                .iter()
                .any(|indicator| lowered.contains(indicator))
        };

        debug!(approval_count, rejection_count, approved, "Classified critique");

        let feedback = self.extract_feedback(critique, approved);
        if approved {
            Verdict::approved(feedback)
        } else {
            Verdict::rejected(feedback)
        }
    }
}

fn count_keywords(lowered: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .count()
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Valid feedback pattern"))
        .collect()
}
