use crate::guideline::GuidelineCode;
use serde::{Deserialize, Serialize};

/// Severity grading for a relevant guideline concern.
///
/// A = minor/mitigated, B = moderate, C = serious, D = severe/disqualifying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityLevel {
    A,
    B,
    C,
    D,
}

impl SeverityLevel {
    #[must_use]
    pub const fn is_severe(self) -> bool {
        matches!(self, Self::C | Self::D)
    }

    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::A => "minor or mitigated concerns",
            Self::B => "moderate concerns",
            Self::C => "serious concerns",
            Self::D => "severe security concerns",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Favorable,
    Unfavorable,
    Conditional,
    InsufficientInfo,
}

/// How well a mitigating condition applies to the facts at hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MitigatorApplicability {
    Full,
    Partial,
    Minimal,
    None,
}

impl MitigatorApplicability {
    /// Full and Partial mitigators count toward key mitigations.
    #[must_use]
    pub const fn is_applicable(self) -> bool {
        matches!(self, Self::Full | Self::Partial)
    }
}

/// A disqualifying condition matched against the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisqualifierFinding {
    /// Paragraph citation, e.g. "AG ¶ 19(a)".
    pub code: String,
    pub text: String,
    /// Quoted span or match note supporting the finding.
    pub evidence: String,
    pub confidence: f32,
}

/// A mitigating condition considered for the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MitigatorFinding {
    pub code: String,
    pub text: String,
    pub applicability: MitigatorApplicability,
    pub reasoning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

/// Assessment for a single guideline. Every analysis produces exactly one of
/// these per code A-M; `severity` is only set when `relevant` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidelineAssessment {
    pub code: GuidelineCode,
    pub name: String,
    pub relevant: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<SeverityLevel>,
    pub disqualifiers: Vec<DisqualifierFinding>,
    pub mitigators: Vec<MitigatorFinding>,
    pub reasoning: String,
    pub confidence: f32,
}

impl GuidelineAssessment {
    /// Non-relevant placeholder with the fixed 0.8 confidence used by the
    /// keyword classifier for codes without indicators.
    #[must_use]
    pub fn not_relevant(code: GuidelineCode, name: &str) -> Self {
        Self {
            code,
            name: name.to_string(),
            relevant: false,
            severity: None,
            disqualifiers: Vec::new(),
            mitigators: Vec::new(),
            reasoning: "No relevant indicators found in document".to_string(),
            confidence: 0.8,
        }
    }

    #[must_use]
    pub fn is_severe(&self) -> bool {
        self.relevant && self.severity.is_some_and(SeverityLevel::is_severe)
    }

    #[must_use]
    pub fn applicable_mitigators(&self) -> usize {
        self.mitigators
            .iter()
            .filter(|m| m.applicability.is_applicable())
            .count()
    }
}

/// Per-signal scores produced by the ensemble relevance scorer.
///
/// All component scores and `combined` are in [0, 1]; `combined` is a
/// weighted sum whose weights are renormalized when a signal source is
/// unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnsembleScore {
    pub ngram: f32,
    pub tfidf: f32,
    pub semantic: f32,
    pub contextual: f32,
    pub combined: f32,
    pub relevant: bool,
    pub confidence: f32,
}

/// Overall case-level recommendation synthesized from guideline assessments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallAssessment {
    pub recommendation: Recommendation,
    pub confidence: f32,
    pub summary: String,
    pub key_concerns: Vec<String>,
    pub key_mitigations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering_and_severe_flag() {
        assert!(SeverityLevel::A < SeverityLevel::D);
        assert!(SeverityLevel::C.is_severe());
        assert!(!SeverityLevel::B.is_severe());
    }

    #[test]
    fn not_relevant_assessment_shape() {
        let a = GuidelineAssessment::not_relevant(GuidelineCode::K, "Handling Protected Information");
        assert!(!a.relevant);
        assert!(a.severity.is_none());
        assert!(a.disqualifiers.is_empty());
        assert!((a.confidence - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn applicable_mitigators_excludes_minimal_and_none() {
        let mitigator = |applicability| MitigatorFinding {
            code: "AG ¶ 20(b)".to_string(),
            text: String::new(),
            applicability,
            reasoning: String::new(),
            evidence: None,
        };
        let a = GuidelineAssessment {
            code: GuidelineCode::F,
            name: "Financial Considerations".to_string(),
            relevant: true,
            severity: Some(SeverityLevel::B),
            disqualifiers: Vec::new(),
            mitigators: vec![
                mitigator(MitigatorApplicability::Partial),
                mitigator(MitigatorApplicability::Minimal),
                mitigator(MitigatorApplicability::None),
            ],
            reasoning: String::new(),
            confidence: 0.5,
        };
        assert_eq!(a.applicable_mitigators(), 1);
    }
}
