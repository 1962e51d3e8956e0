//! Keyword-frequency relevance classifier.
//!
//! Rule-based scoring with no model dependencies: keyword counts flag
//! relevant guidelines, condition-text keyword overlap surfaces candidate
//! disqualifiers and mitigators, and a severe-pattern check plus the
//! disqualifier count grade severity.

use adjudex_protocol::{
    DisqualifierFinding, GuidelineAssessment, GuidelineCode, MitigatorApplicability,
    MitigatorFinding, SeverityLevel,
};
use adjudex_guidelines::{keywords, severe_patterns, Catalog, STOPWORDS};
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// Top disqualifiers consulted per guideline.
const DISQUALIFIER_LIMIT: usize = 3;
/// Top mitigators consulted per guideline.
const MITIGATOR_LIMIT: usize = 2;

pub struct NativeClassifier {
    catalog: Arc<Catalog>,
}

impl NativeClassifier {
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Assess every guideline against the document. Always returns exactly
    /// 13 assessments in A-M order.
    #[must_use]
    pub fn assess(&self, text: &str) -> Vec<GuidelineAssessment> {
        let doc_lower = text.to_lowercase();

        GuidelineCode::ALL
            .into_iter()
            .map(|code| {
                let matches = keyword_matches(&doc_lower, code);
                if matches > 0 {
                    let relevance_confidence = (0.5 + matches as f32 * 0.1).min(0.95);
                    log::debug!(
                        "Guideline {code}: {matches} keyword matches, confidence {relevance_confidence:.2}"
                    );
                    self.assess_relevant(code, &doc_lower)
                } else {
                    GuidelineAssessment::not_relevant(code, self.catalog.name(code))
                }
            })
            .collect()
    }

    fn assess_relevant(&self, code: GuidelineCode, doc_lower: &str) -> GuidelineAssessment {
        let entry = self.catalog.get(code);

        let disqualifiers: Vec<DisqualifierFinding> = entry
            .disqualifiers
            .iter()
            .take(DISQUALIFIER_LIMIT)
            .filter_map(|condition| {
                let matches = condition_keyword_matches(&condition.text, doc_lower);
                (matches >= 2).then(|| DisqualifierFinding {
                    code: condition.code.clone(),
                    text: condition.text.clone(),
                    evidence: format!("Pattern-based match: {matches} keywords found"),
                    confidence: (0.4 + matches as f32 * 0.15).min(0.9),
                })
            })
            .collect();

        // Mitigators are only worth reporting against an identified concern.
        let mitigators: Vec<MitigatorFinding> = if disqualifiers.is_empty() {
            Vec::new()
        } else {
            entry
                .mitigators
                .iter()
                .take(MITIGATOR_LIMIT)
                .filter_map(|condition| {
                    let matches = condition_keyword_matches(&condition.text, doc_lower);
                    (matches >= 1).then(|| MitigatorFinding {
                        code: condition.code.clone(),
                        text: condition.text.clone(),
                        applicability: if matches >= 2 {
                            MitigatorApplicability::Partial
                        } else {
                            MitigatorApplicability::Minimal
                        },
                        reasoning: format!(
                            "Pattern-based analysis suggests potential applicability (keyword matches: {matches})"
                        ),
                        evidence: None,
                    })
                })
                .collect()
        };

        let severity = assess_severity(code, doc_lower, disqualifiers.len());
        let reasoning = build_reasoning(
            code,
            &entry.name,
            disqualifiers.len(),
            mitigators.len(),
            severity,
        );
        let confidence = guideline_confidence(&disqualifiers, !mitigators.is_empty(), severity);

        GuidelineAssessment {
            code,
            name: entry.name.clone(),
            relevant: true,
            severity: Some(severity),
            disqualifiers,
            mitigators,
            reasoning,
            confidence,
        }
    }
}

/// Total occurrences of the guideline's keywords in the lowercased document.
fn keyword_matches(doc_lower: &str, code: GuidelineCode) -> usize {
    keywords(code)
        .iter()
        .map(|kw| doc_lower.matches(kw).count())
        .sum()
}

/// Keywords of a condition text: lowercase words longer than 3 characters,
/// minus stopwords, duplicates kept (repeated terms count twice).
fn condition_keywords(text: &str) -> Vec<String> {
    text.to_lowercase()
        .unicode_words()
        .filter(|w| w.len() > 3 && !STOPWORDS.contains(w))
        .map(str::to_string)
        .collect()
}

fn condition_keyword_matches(condition_text: &str, doc_lower: &str) -> usize {
    condition_keywords(condition_text)
        .iter()
        .filter(|kw| doc_lower.contains(kw.as_str()))
        .count()
}

fn assess_severity(code: GuidelineCode, doc_lower: &str, num_disqualifiers: usize) -> SeverityLevel {
    if severe_patterns(code).iter().any(|p| p.is_match(doc_lower)) {
        return SeverityLevel::D;
    }
    match num_disqualifiers {
        0 => SeverityLevel::A,
        1 | 2 => SeverityLevel::B,
        _ => SeverityLevel::C,
    }
}

fn build_reasoning(
    code: GuidelineCode,
    name: &str,
    num_disqualifiers: usize,
    num_mitigators: usize,
    severity: SeverityLevel,
) -> String {
    let mut parts = vec![format!(
        "Guideline {code} ({name}) appears relevant based on keyword analysis."
    )];

    if num_disqualifiers > 0 {
        parts.push(format!(
            "Identified {num_disqualifiers} potential disqualifying condition(s)."
        ));
    } else {
        parts.push("No specific disqualifying conditions identified through pattern matching.".to_string());
    }

    if num_mitigators > 0 {
        parts.push(format!(
            "Found {num_mitigators} potentially applicable mitigating condition(s)."
        ));
    }

    parts.push(format!("Assessed severity: {}.", severity.describe()));
    parts.join(" ")
}

fn guideline_confidence(
    disqualifiers: &[DisqualifierFinding],
    has_mitigators: bool,
    severity: SeverityLevel,
) -> f32 {
    let mut confidence = if disqualifiers.is_empty() {
        // Keyword-flagged but nothing concrete matched.
        0.45
    } else {
        let avg = disqualifiers.iter().map(|d| d.confidence).sum::<f32>()
            / disqualifiers.len() as f32;
        let severity_boost = match severity {
            SeverityLevel::D => 0.15,
            SeverityLevel::C => 0.10,
            SeverityLevel::B => 0.05,
            SeverityLevel::A => 0.0,
        };
        (avg + severity_boost).min(0.95)
    };

    // Mitigators signal ambiguity.
    if has_mitigators {
        confidence = (confidence - 0.05).max(0.4);
    }
    confidence
}
