use crate::assessment::{GuidelineAssessment, OverallAssessment};
use crate::guideline::GuidelineCode;
use crate::precedent::PrecedentSummary;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResultError {
    #[error("missing guideline assessments: {0:?}")]
    MissingGuidelines(Vec<GuidelineCode>),
    #[error("duplicate guideline assessment: {0}")]
    DuplicateGuideline(GuidelineCode),
    #[error("severity set on non-relevant guideline: {0}")]
    SeverityWithoutRelevance(GuidelineCode),
}

/// A complete analysis of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub case_id: String,
    pub overall: OverallAssessment,
    /// Exactly 13 entries, one per code A-M; see [`AnalysisResult::validate`].
    pub guidelines: Vec<GuidelineAssessment>,
    #[serde(default)]
    pub precedents_considered: Vec<PrecedentSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_excerpt: Option<String>,
}

impl AnalysisResult {
    /// Check the 13-assessment invariant: one assessment per code, no
    /// duplicates, severity only on relevant guidelines.
    pub fn validate(&self) -> Result<(), ResultError> {
        let mut seen = BTreeSet::new();
        for assessment in &self.guidelines {
            if !seen.insert(assessment.code) {
                return Err(ResultError::DuplicateGuideline(assessment.code));
            }
            if !assessment.relevant && assessment.severity.is_some() {
                return Err(ResultError::SeverityWithoutRelevance(assessment.code));
            }
        }
        let missing: Vec<GuidelineCode> = GuidelineCode::ALL
            .into_iter()
            .filter(|code| !seen.contains(code))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ResultError::MissingGuidelines(missing))
        }
    }

    pub fn relevant_guidelines(&self) -> impl Iterator<Item = &GuidelineAssessment> {
        self.guidelines.iter().filter(|g| g.relevant)
    }

    pub fn severe_concerns(&self) -> impl Iterator<Item = &GuidelineAssessment> {
        self.guidelines.iter().filter(|g| g.is_severe())
    }
}
