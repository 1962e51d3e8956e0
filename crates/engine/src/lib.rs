//! Facade over the extraction and assessment components.
//!
//! An [`Engine`] owns the guideline catalog, both relevance classifiers, and
//! the ensemble scorer's embedding handle. Engines are cheap to construct
//! (the embedding session is memoized process-wide) and safe to share across
//! parallel workers: every method is a pure function of the input text.

use adjudex_assess::{synthesize_recommendation, EnsembleScorer, NativeClassifier};
use adjudex_protocol::{
    AnalysisResult, CaseFields, CaseRecord, DocumentKind, FormalFinding, GuidelineAssessment,
    GuidelineCode, Outcome, OverallAssessment, PrecedentStats, PrecedentSummary,
};
use adjudex_guidelines::Catalog;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Which relevance classifier an analysis uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisPath {
    /// Keyword-frequency classifier; no model dependencies.
    #[default]
    Native,
    /// Multi-signal ensemble scorer.
    Ensemble,
}

/// Construction options for [`Engine`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    /// Attempt to load the semantic-embedding backend for the ensemble
    /// scorer. When loading fails the semantic signal degrades to zero
    /// weight instead of failing construction.
    pub use_embeddings: bool,
}

/// Options for a single [`Engine::analyze`] call.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeOptions {
    pub path: AnalysisPath,
}

pub struct Engine {
    native: NativeClassifier,
    ensemble: EnsembleScorer,
}

impl Engine {
    /// Engine over the built-in catalog, without the embedding backend.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Arc::new(Catalog::builtin().clone()), EngineOptions::default())
    }

    /// Engine over an explicit catalog.
    #[must_use]
    pub fn with_options(catalog: Arc<Catalog>, options: EngineOptions) -> Self {
        let ensemble = if options.use_embeddings {
            EnsembleScorer::new(catalog.clone())
        } else {
            EnsembleScorer::without_semantic(catalog.clone())
        };
        Self {
            native: NativeClassifier::new(catalog),
            ensemble,
        }
    }

    /// Facade over a pre-built ensemble scorer (e.g. one with a stub
    /// embedding handle in tests).
    #[must_use]
    pub fn with_ensemble(catalog: Arc<Catalog>, ensemble: EnsembleScorer) -> Self {
        Self {
            native: NativeClassifier::new(catalog),
            ensemble,
        }
    }

    /// Whether the document routes to the appeal resolver.
    #[must_use]
    pub fn resolve_kind(text: &str, hint: DocumentKind) -> DocumentKind {
        match hint {
            DocumentKind::Auto => {
                if adjudex_extract::is_appeal_document(text) {
                    DocumentKind::Appeal
                } else {
                    DocumentKind::Hearing
                }
            }
            explicit => explicit,
        }
    }

    /// Normalized outcome, auto-detecting hearing vs appeal documents.
    #[must_use]
    pub fn classify_outcome(&self, text: &str) -> Outcome {
        self.classify_outcome_hinted(text, DocumentKind::Auto)
    }

    /// Normalized outcome with an explicit document-kind hint.
    #[must_use]
    pub fn classify_outcome_hinted(&self, text: &str, hint: DocumentKind) -> Outcome {
        match Self::resolve_kind(text, hint) {
            DocumentKind::Appeal => adjudex_extract::classify_appeal_outcome(text),
            _ => adjudex_extract::classify_hearing_outcome(text),
        }
    }

    #[must_use]
    pub fn extract_guidelines(&self, text: &str) -> BTreeSet<GuidelineCode> {
        adjudex_extract::extract_guidelines(text)
    }

    #[must_use]
    pub fn extract_formal_findings(&self, text: &str) -> BTreeMap<GuidelineCode, FormalFinding> {
        adjudex_extract::extract_formal_findings(text)
    }

    /// Keyword-path assessment: exactly 13 entries, one per code A-M.
    #[must_use]
    pub fn assess_guidelines_native(&self, text: &str) -> Vec<GuidelineAssessment> {
        self.native.assess(text)
    }

    /// Ensemble-path assessment: exactly 13 entries, one per code A-M.
    #[must_use]
    pub fn assess_guidelines_ensemble(&self, text: &str) -> Vec<GuidelineAssessment> {
        self.ensemble.assess(text)
    }

    #[must_use]
    pub fn synthesize_recommendation(
        &self,
        assessments: &[GuidelineAssessment],
        precedents: Option<&PrecedentStats>,
    ) -> OverallAssessment {
        synthesize_recommendation(assessments, precedents)
    }

    /// Full pipeline: assess, fold precedents, synthesize, assemble.
    #[must_use]
    pub fn analyze(
        &self,
        text: &str,
        case_id: &str,
        options: AnalyzeOptions,
        precedents: &[PrecedentSummary],
    ) -> AnalysisResult {
        log::info!("Running {:?} analysis: {case_id}", options.path);

        let guidelines = match options.path {
            AnalysisPath::Native => self.assess_guidelines_native(text),
            AnalysisPath::Ensemble => self.assess_guidelines_ensemble(text),
        };

        let stats = PrecedentStats::from_summaries(precedents);
        let overall = self.synthesize_recommendation(&guidelines, stats.as_ref());

        let result = AnalysisResult {
            case_id: case_id.to_string(),
            overall,
            guidelines,
            precedents_considered: precedents.iter().take(5).cloned().collect(),
            text_excerpt: (!text.is_empty()).then(|| adjudex_extract::head(text, 500).to_string()),
        };
        debug_assert_eq!(result.validate(), Ok(()));
        result
    }

    /// Parse a decision document into a structured case record, mirroring
    /// what the corpus parser stores for each downloaded case.
    #[must_use]
    pub fn parse_case(&self, case_number: &str, text: &str) -> CaseRecord {
        let kind = Self::resolve_kind(text, DocumentKind::Auto);
        let outcome = self.classify_outcome_hinted(text, kind);

        CaseRecord::Structured(CaseFields {
            case_number: case_number.to_string(),
            date: adjudex_extract::extract_date(text),
            outcome: Some(outcome),
            guidelines: self.extract_guidelines(text).into_iter().collect(),
            summary: adjudex_extract::summarize(text),
            full_text: text.to_string(),
            sor_allegations: adjudex_extract::extract_sor_allegations(text),
            mitigating_factors: adjudex_extract::extract_mitigating_mentions(text),
            adjudicator: adjudex_extract::extract_adjudicator(text),
            case_type: match kind {
                DocumentKind::Appeal => "appeal".to_string(),
                _ => "hearing".to_string(),
            },
            formal_findings: self.extract_formal_findings(text),
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
