//! Keyword classifier tests.

use fabula_interface::Classifier;
use fabula_pipeline::{
    FEEDBACK_FALLBACK_CHARS, KeywordClassifier, NEGATIVE_PATTERNS, POSITIVE_PATTERNS,
};

#[test]
fn test_scenario_approving_critique() {
    let classifier = KeywordClassifier::new();
    let verdict = classifier.classify("Está adequado e aprovado, muito bom.");
    assert!(verdict.approved);
}

#[test]
fn test_scenario_rejecting_critique() {
    let classifier = KeywordClassifier::new();
    let verdict =
        classifier.classify("Este item é inadequado, apresenta problemas que precisam melhorar.");
    assert!(!verdict.approved);
}

#[test]
fn test_substring_keywords_count_on_both_sides() {
    let classifier = KeywordClassifier::new();
    let critique = "inadequado";
    // "adequado" is inside "inadequado"
    assert_eq!(classifier.approval_count(critique), 1);
    assert_eq!(classifier.rejection_count(critique), 1);
}

#[test]
fn test_keywords_count_once_each() {
    let classifier = KeywordClassifier::new();
    assert_eq!(classifier.approval_count("bom bom bom"), 1);
    assert_eq!(classifier.rejection_count("erro erro"), 1);
}

#[test]
fn test_counting_ignores_case() {
    let classifier = KeywordClassifier::new();
    assert_eq!(classifier.approval_count("APROVADO"), 1);
    assert_eq!(classifier.rejection_count("PROBLEMA"), 1);
}

#[test]
fn test_rejection_majority_rejects() {
    let classifier = KeywordClassifier::new();
    let critiques = [
        "Há um erro grave e a história está ruim.",
        "Faltam critérios; resultado insatisfatório.",
        "Existem problemas e a estrutura está incorreta, apesar de boa apresentação.",
    ];
    for critique in critiques {
        assert!(
            classifier.rejection_count(critique) > classifier.approval_count(critique),
            "{critique}"
        );
        assert!(!classifier.classify(critique).approved, "{critique}");
    }
}

#[test]
fn test_approval_majority_approves() {
    let classifier = KeywordClassifier::new();
    let critiques = [
        "Histórias corretas, boas e válidas.",
        "O resultado é satisfatório e aceitável.",
        "Está aprovado, com um pequeno erro de digitação, mas bom e correto.",
    ];
    for critique in critiques {
        assert!(
            classifier.approval_count(critique) > classifier.rejection_count(critique),
            "{critique}"
        );
        assert!(classifier.classify(critique).approved, "{critique}");
    }
}

#[test]
fn test_tie_without_improvement_indicator_approves() {
    let classifier = KeywordClassifier::new();
    let critique = "Formato bom, mas há um erro.";
    assert_eq!(
        classifier.approval_count(critique),
        classifier.rejection_count(critique)
    );
    assert!(classifier.classify(critique).approved);
}

#[test]
fn test_tie_with_improvement_indicator_rejects() {
    let classifier = KeywordClassifier::new();
    let critique = "Formato bom, mas há um erro. Sugestão: refinar o título.";
    assert_eq!(
        classifier.approval_count(critique),
        classifier.rejection_count(critique)
    );
    assert!(classifier.has_improvement_indicator(critique));
    assert!(!classifier.classify(critique).approved);
}

#[test]
fn test_empty_critique_is_approved() {
    let classifier = KeywordClassifier::new();
    let verdict = classifier.classify("");
    assert!(verdict.approved);
    assert_eq!(verdict.feedback, "");
}

#[test]
fn test_classify_is_idempotent() {
    let classifier = KeywordClassifier::new();
    for critique in [
        "",
        "Está adequado e aprovado, muito bom.",
        "Este item é inadequado, apresenta problemas que precisam melhorar.",
        "Texto neutro sem vocabulário conhecido.",
    ] {
        assert_eq!(classifier.classify(critique), classifier.classify(critique));
    }
}

#[test]
fn test_rejection_feedback_collects_problem_lines() {
    let classifier = KeywordClassifier::new();
    let critique = "Análise:\nProblemas: faltam critérios de aceitação.\nÉ preciso corrigir o formato.\nSugestão: dividir a história.\nRecomendação extra.";

    let verdict = classifier.classify(critique);
    assert!(!verdict.approved);
    assert_eq!(
        verdict.feedback,
        "Problemas: faltam critérios de aceitação. corrigir o formato. Sugestão: dividir a história."
    );
}

#[test]
fn test_approval_feedback_collects_positive_lines() {
    let classifier = KeywordClassifier::new();
    let verdict = classifier.classify("Está adequado e aprovado, muito bom.");
    assert!(verdict.approved);
    assert_eq!(
        verdict.feedback,
        "bom. adequado e aprovado, muito bom. aprovado, muito bom."
    );
}

#[test]
fn test_feedback_falls_back_to_truncated_critique() {
    let classifier = KeywordClassifier::new();
    let critique = "x".repeat(250);

    let feedback = classifier.extract_feedback(&critique, true);
    assert_eq!(feedback.chars().count(), FEEDBACK_FALLBACK_CHARS + 3);
    assert!(feedback.ends_with("..."));
}

#[test]
fn test_short_unmatched_critique_is_kept_whole() {
    let classifier = KeywordClassifier::new();
    let feedback = classifier.extract_feedback("Sem comentários.", false);
    assert_eq!(feedback, "Sem comentários.");
}

#[test]
fn test_fallback_truncates_on_characters_not_bytes() {
    let classifier = KeywordClassifier::new();
    let critique = "ç".repeat(201);

    let feedback = classifier.extract_feedback(&critique, true);
    assert_eq!(feedback, format!("{}...", "ç".repeat(200)));
}

#[test]
fn test_feedback_is_matches_or_bounded_excerpt() {
    let classifier = KeywordClassifier::new();

    // A single long match is returned whole
    let long_line = format!("problema {}", "a".repeat(500));
    assert_eq!(classifier.classify(&long_line).feedback, long_line);

    // At most three matches are joined
    let many = "erro um\nerro dois\nerro três\nerro quatro";
    assert_eq!(
        classifier.classify(many).feedback,
        "erro um erro dois erro três"
    );

    // Without matches the excerpt stays within 200 characters plus the marker
    let neutral = "Texto neutro. ".repeat(40);
    let feedback = classifier.classify(&neutral).feedback;
    assert!(feedback.chars().count() <= FEEDBACK_FALLBACK_CHARS + 3);
}

#[test]
fn test_every_feedback_pattern_is_compiled() {
    let classifier = KeywordClassifier::new();
    let (positive, negative) = classifier.feedback_patterns();

    assert_eq!(positive.len(), POSITIVE_PATTERNS.len());
    assert_eq!(negative.len(), NEGATIVE_PATTERNS.len());
    assert_eq!(positive.len(), 3);
    assert_eq!(negative.len(), 3);
    for (compiled, source) in positive.iter().zip(POSITIVE_PATTERNS) {
        assert_eq!(compiled.as_str(), *source);
    }
    for (compiled, source) in negative.iter().zip(NEGATIVE_PATTERNS) {
        assert_eq!(compiled.as_str(), *source);
    }
}
