//! Multi-signal ensemble relevance scorer.
//!
//! Four independent per-guideline signals (n-gram phrase matching, TF-IDF
//! cosine, semantic-embedding similarity, contextual keyword co-occurrence)
//! are combined as a weighted sum. Weights renormalize to sum to 1 when the
//! semantic source is unavailable, so the combined score stays in [0, 1]
//! either way.

use crate::embedding::{cosine_similarity, EmbeddingHandle};
use crate::error::Result;
use crate::tfidf::tfidf_cosine;
use adjudex_protocol::{
    DisqualifierFinding, EnsembleScore, GuidelineAssessment, GuidelineCode,
    MitigatorApplicability, MitigatorFinding, SeverityLevel,
};
use adjudex_guidelines::{context_indicators, ngrams, severe_patterns_enhanced, Catalog};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Relevance threshold on the combined score.
const RELEVANCE_THRESHOLD: f32 = 0.35;
/// Document chunking for the semantic signal.
const CHUNK_SIZE: usize = 2_000;
const MAX_CHUNKS: usize = 5;

const DISQUALIFIER_LIMIT: usize = 3;
const MITIGATOR_LIMIT: usize = 2;

static SENTENCE_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("static pattern must compile"));
static WORD_4PLUS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w{4,}\b").expect("static pattern must compile"));

/// Filler words the condition keyword extraction drops.
const CONDITION_FILLER: &[&str] = &["that", "with", "such", "from", "been"];

#[derive(Debug, Clone, Copy)]
pub struct EnsembleWeights {
    pub ngram: f32,
    pub tfidf: f32,
    pub semantic: f32,
    pub contextual: f32,
}

impl Default for EnsembleWeights {
    fn default() -> Self {
        Self {
            ngram: 0.30,
            tfidf: 0.25,
            semantic: 0.25,
            contextual: 0.20,
        }
    }
}

struct SemanticIndex {
    handle: EmbeddingHandle,
    guideline_embeddings: BTreeMap<GuidelineCode, Vec<f32>>,
}

pub struct EnsembleScorer {
    catalog: Arc<Catalog>,
    weights: EnsembleWeights,
    semantic: Option<SemanticIndex>,
}

impl EnsembleScorer {
    /// Build a scorer with the default embedding backend. A backend that
    /// fails to load degrades the semantic signal instead of failing the
    /// scorer.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        match EmbeddingHandle::open() {
            Ok(handle) => match Self::with_embedding(catalog.clone(), handle) {
                Ok(scorer) => scorer,
                Err(err) => {
                    log::warn!("Semantic signal disabled: {err}");
                    Self::without_semantic(catalog)
                }
            },
            Err(err) => {
                log::warn!("Semantic signal disabled: {err}");
                Self::without_semantic(catalog)
            }
        }
    }

    /// Build a scorer around an explicit embedding handle, precomputing one
    /// reference embedding per guideline.
    pub fn with_embedding(catalog: Arc<Catalog>, handle: EmbeddingHandle) -> Result<Self> {
        let mut guideline_embeddings = BTreeMap::new();
        for entry in catalog.iter() {
            let embedding = handle.embed(&entry.reference_text())?;
            guideline_embeddings.insert(entry.code, embedding);
        }
        log::info!("Precomputed {} guideline embeddings", guideline_embeddings.len());

        Ok(Self {
            catalog,
            weights: EnsembleWeights::default(),
            semantic: Some(SemanticIndex {
                handle,
                guideline_embeddings,
            }),
        })
    }

    /// N-gram, TF-IDF, and contextual signals only.
    #[must_use]
    pub fn without_semantic(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            weights: EnsembleWeights::default(),
            semantic: None,
        }
    }

    #[must_use]
    pub const fn has_semantic(&self) -> bool {
        self.semantic.is_some()
    }

    /// Effective weights: the semantic weight drops to zero when the source
    /// is unavailable and the rest renormalize to sum to 1.
    #[must_use]
    pub fn effective_weights(&self) -> EnsembleWeights {
        let mut weights = self.weights;
        if self.semantic.is_none() {
            weights.semantic = 0.0;
        }
        let total = weights.ngram + weights.tfidf + weights.semantic + weights.contextual;
        EnsembleWeights {
            ngram: weights.ngram / total,
            tfidf: weights.tfidf / total,
            semantic: weights.semantic / total,
            contextual: weights.contextual / total,
        }
    }

    /// Per-guideline ensemble scores for the document.
    #[must_use]
    pub fn score(&self, text: &str) -> BTreeMap<GuidelineCode, EnsembleScore> {
        let doc_lower = text.to_lowercase();
        let weights = self.effective_weights();
        let chunk_embeddings = self.embed_chunks(text);

        GuidelineCode::ALL
            .into_iter()
            .map(|code| {
                let ngram = ngram_score(&doc_lower, code);
                let tfidf = tfidf_cosine(text, &self.catalog.get(code).reference_text());
                let semantic = self.semantic_score(code, chunk_embeddings.as_deref());
                let contextual = contextual_score(text, code);

                let combined = ngram * weights.ngram
                    + tfidf * weights.tfidf
                    + semantic * weights.semantic
                    + contextual * weights.contextual;
                let relevant = combined >= RELEVANCE_THRESHOLD;

                let variance = population_variance(&[ngram, tfidf, semantic, contextual]);
                let confidence =
                    (0.70 + combined * 0.2 - variance * 0.1).clamp(0.6, 0.95);

                if relevant {
                    log::debug!(
                        "Guideline {code}: combined={combined:.2} (ngram={ngram:.2}, \
                         tfidf={tfidf:.2}, semantic={semantic:.2}, contextual={contextual:.2})"
                    );
                }

                (
                    code,
                    EnsembleScore {
                        ngram,
                        tfidf,
                        semantic,
                        contextual,
                        combined,
                        relevant,
                        confidence,
                    },
                )
            })
            .collect()
    }

    /// Assess every guideline against the document. Always returns exactly
    /// 13 assessments in A-M order.
    #[must_use]
    pub fn assess(&self, text: &str) -> Vec<GuidelineAssessment> {
        let doc_lower = text.to_lowercase();
        let scores = self.score(text);

        GuidelineCode::ALL
            .into_iter()
            .map(|code| {
                let score = &scores[&code];
                let entry = self.catalog.get(code);
                if score.relevant {
                    let severity = assess_severity_enhanced(code, &doc_lower, score.combined);
                    let disqualifiers = self.detect_disqualifiers(text, &doc_lower, code);
                    let mitigators = self.identify_mitigators(code);
                    let reasoning = self.build_reasoning(
                        code,
                        score,
                        disqualifiers.len(),
                        mitigators.len(),
                    );
                    GuidelineAssessment {
                        code,
                        name: entry.name.clone(),
                        relevant: true,
                        severity: Some(severity),
                        disqualifiers,
                        mitigators,
                        reasoning,
                        confidence: score.confidence,
                    }
                } else {
                    GuidelineAssessment {
                        code,
                        name: entry.name.clone(),
                        relevant: false,
                        severity: None,
                        disqualifiers: Vec::new(),
                        mitigators: Vec::new(),
                        reasoning: format!(
                            "Ensemble analysis found insufficient evidence for {}. \
                             Score: {:.2} (threshold: {RELEVANCE_THRESHOLD})",
                            entry.name, score.combined
                        ),
                        confidence: 0.9,
                    }
                }
            })
            .collect()
    }

    fn embed_chunks(&self, text: &str) -> Option<Vec<Vec<f32>>> {
        let index = self.semantic.as_ref()?;
        let chunks = chunk_text(text);
        if chunks.is_empty() {
            return None;
        }
        match index.handle.embed_batch(&chunks) {
            Ok(embeddings) => Some(embeddings),
            Err(err) => {
                log::debug!("Semantic chunk embedding failed: {err}");
                None
            }
        }
    }

    fn semantic_score(&self, code: GuidelineCode, chunks: Option<&[Vec<f32>]>) -> f32 {
        let (Some(index), Some(chunks)) = (self.semantic.as_ref(), chunks) else {
            return 0.0;
        };
        let Some(reference) = index.guideline_embeddings.get(&code) else {
            return 0.0;
        };
        chunks
            .iter()
            .map(|chunk| cosine_similarity(reference, chunk))
            .fold(0.0, f32::max)
    }

    fn detect_disqualifiers(
        &self,
        text: &str,
        doc_lower: &str,
        code: GuidelineCode,
    ) -> Vec<DisqualifierFinding> {
        self.catalog
            .get(code)
            .disqualifiers
            .iter()
            .take(DISQUALIFIER_LIMIT)
            .filter_map(|condition| {
                let keywords: Vec<String> = WORD_4PLUS
                    .find_iter(&condition.text.to_lowercase())
                    .map(|m| m.as_str().to_string())
                    .filter(|w| !CONDITION_FILLER.contains(&w.as_str()))
                    .collect();
                if keywords.is_empty() {
                    return None;
                }

                let matches = keywords
                    .iter()
                    .filter(|kw| doc_lower.contains(kw.as_str()))
                    .count();
                if matches < 2 {
                    return None;
                }

                let evidence = text
                    .split('.')
                    .find(|sentence| {
                        let lower = sentence.to_lowercase();
                        keywords.iter().take(3).any(|kw| lower.contains(kw.as_str()))
                    })
                    .map_or_else(
                        || "Evidence found in document".to_string(),
                        |sentence| truncate_chars(sentence.trim(), 200),
                    );

                Some(DisqualifierFinding {
                    code: condition.code.clone(),
                    text: ellipsize(&condition.text, 100),
                    evidence,
                    confidence: (0.6 + (matches as f32 / keywords.len() as f32) * 0.3).min(0.9),
                })
            })
            .collect()
    }

    fn identify_mitigators(&self, code: GuidelineCode) -> Vec<MitigatorFinding> {
        self.catalog
            .get(code)
            .mitigators
            .iter()
            .take(MITIGATOR_LIMIT)
            .map(|condition| MitigatorFinding {
                code: condition.code.clone(),
                text: ellipsize(&condition.text, 100),
                applicability: MitigatorApplicability::Partial,
                reasoning: "Potentially applicable based on document analysis".to_string(),
                evidence: None,
            })
            .collect()
    }

    fn build_reasoning(
        &self,
        code: GuidelineCode,
        score: &EnsembleScore,
        num_disqualifiers: usize,
        num_mitigators: usize,
    ) -> String {
        let name = self.catalog.name(code);
        let mut reasoning = format!(
            "Guideline {code} ({name}) flagged as relevant with high confidence. \
             Ensemble score: {:.2} (N-gram: {:.2}, TF-IDF: {:.2}, ",
            score.combined, score.ngram, score.tfidf
        );
        if self.semantic.is_some() {
            reasoning.push_str(&format!("Semantic: {:.2}, ", score.semantic));
        }
        reasoning.push_str(&format!(
            "Contextual: {:.2}). Identified {num_disqualifiers} potential disqualifying \
             condition(s). Found {num_mitigators} potentially applicable mitigating condition(s).",
            score.contextual
        ));
        reasoning
    }
}

/// Fraction of the guideline's phrase list found verbatim, trigrams counted
/// at 1.5x, normalized against half the table size.
fn ngram_score(doc_lower: &str, code: GuidelineCode) -> f32 {
    let table = ngrams(code);
    let total = table.total();
    if total == 0 {
        return 0.0;
    }

    let mut matches = 0.0f32;
    for bigram in table.bigrams {
        if doc_lower.contains(bigram) {
            matches += 1.0;
        }
    }
    for trigram in table.trigrams {
        if doc_lower.contains(trigram) {
            matches += 1.5;
        }
    }

    (matches / (total as f32 * 0.5)).min(1.0)
}

/// Fraction of sentences containing both a guideline phrase and a context
/// word, normalized against 2% of the sentence count.
fn contextual_score(text: &str, code: GuidelineCode) -> f32 {
    let context_words = context_indicators(code);
    if context_words.is_empty() {
        return 0.0;
    }

    let table = ngrams(code);
    let sentences: Vec<&str> = SENTENCE_SPLIT.split(text).collect();
    let matches = sentences
        .iter()
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            let has_keyword = table
                .bigrams
                .iter()
                .chain(table.trigrams.iter())
                .any(|kw| lower.contains(kw));
            has_keyword && context_words.iter().any(|ctx| lower.contains(ctx))
        })
        .count();

    let denom = (sentences.len() as f32 * 0.02).max(1.0);
    (matches as f32 / denom).min(1.0)
}

fn assess_severity_enhanced(code: GuidelineCode, doc_lower: &str, combined: f32) -> SeverityLevel {
    if severe_patterns_enhanced(code)
        .iter()
        .any(|p| p.is_match(doc_lower))
    {
        return SeverityLevel::D;
    }
    if combined >= 0.75 {
        SeverityLevel::C
    } else {
        // Anything the ensemble flags is at least a moderate concern.
        SeverityLevel::B
    }
}

fn chunk_text(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < text.len() && chunks.len() < MAX_CHUNKS {
        let mut end = (start + CHUNK_SIZE).min(text.len());
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        chunks.push(&text[start..end]);
        start = end;
    }
    chunks
}

fn population_variance(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f32>() / values.len() as f32;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / values.len() as f32
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn ellipsize(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", truncate_chars(text, max_chars))
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FINANCIAL_CASE: &str =
        "Applicant has a history of financial problems resulting in delinquent debt totaling \
         $85,000. The SOR alleged delinquent accounts, collection account activity, and a \
         history of not meeting financial obligations. Applicant filed for bankruptcy. \
         Financial considerations concern: the debts listed on the credit report remain unpaid.";

    fn scorer() -> EnsembleScorer {
        EnsembleScorer::without_semantic(Arc::new(Catalog::builtin().clone()))
    }

    fn scorer_with_stub() -> EnsembleScorer {
        EnsembleScorer::with_embedding(
            Arc::new(Catalog::builtin().clone()),
            EmbeddingHandle::stub(64),
        )
        .unwrap()
    }

    #[test]
    fn weights_sum_to_one_with_and_without_semantic() {
        let with = scorer_with_stub().effective_weights();
        let without = scorer().effective_weights();
        for w in [with, without] {
            let total = w.ngram + w.tfidf + w.semantic + w.contextual;
            assert!((total - 1.0).abs() < 1e-6, "weights sum to {total}");
        }
        assert_eq!(without.semantic, 0.0);
        assert!(without.ngram > EnsembleWeights::default().ngram);
    }

    #[test]
    fn combined_scores_stay_in_unit_interval() {
        for scorer in [scorer(), scorer_with_stub()] {
            for (_, score) in scorer.score(FINANCIAL_CASE) {
                assert!((0.0..=1.0).contains(&score.combined));
                assert!((0.0..=1.0).contains(&score.ngram));
                assert!((0.0..=1.0).contains(&score.tfidf));
                assert!((0.0..=1.0).contains(&score.semantic));
                assert!((0.0..=1.0).contains(&score.contextual));
                assert!((0.6..=0.95).contains(&score.confidence));
            }
        }
    }

    #[test]
    fn thirteen_assessments_in_order() {
        let assessments = scorer().assess(FINANCIAL_CASE);
        assert_eq!(assessments.len(), 13);
        let codes: Vec<_> = assessments.iter().map(|a| a.code).collect();
        assert_eq!(codes, GuidelineCode::ALL.to_vec());
    }

    #[test]
    fn financial_case_crosses_the_relevance_threshold() {
        let scores = scorer().score(FINANCIAL_CASE);
        let f = &scores[&GuidelineCode::F];
        assert!(f.relevant, "combined was {:.3}", f.combined);
        assert!(f.ngram > 0.3);

        // A guideline with no textual footprint stays irrelevant.
        let d = &scores[&GuidelineCode::D];
        assert!(!d.relevant);
    }

    #[test]
    fn irrelevant_codes_carry_score_in_reasoning() {
        let assessments = scorer().assess("An entirely unrelated memorandum about parking.");
        for a in assessments {
            assert!(!a.relevant);
            assert!(a.reasoning.contains("threshold: 0.35"), "{}", a.reasoning);
            assert!((a.confidence - 0.9).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn severe_pattern_forces_d_on_the_ensemble_path() {
        let text = format!("{FINANCIAL_CASE} The bankruptcy filing is recent.");
        let assessments = scorer().assess(&text);
        let f = assessments
            .iter()
            .find(|a| a.code == GuidelineCode::F)
            .unwrap();
        assert_eq!(f.severity, Some(SeverityLevel::D));
    }

    #[test]
    fn score_severity_mapping_without_severe_patterns() {
        assert_eq!(
            assess_severity_enhanced(GuidelineCode::B, "plain text", 0.80),
            SeverityLevel::C
        );
        assert_eq!(
            assess_severity_enhanced(GuidelineCode::B, "plain text", 0.60),
            SeverityLevel::B
        );
        assert_eq!(
            assess_severity_enhanced(GuidelineCode::B, "plain text", 0.40),
            SeverityLevel::B
        );
    }

    #[test]
    fn ensemble_disqualifiers_capture_sentence_evidence() {
        let scorer = scorer();
        let doc_lower = FINANCIAL_CASE.to_lowercase();
        let found = scorer.detect_disqualifiers(FINANCIAL_CASE, &doc_lower, GuidelineCode::F);
        assert!(!found.is_empty());
        for d in &found {
            assert!(d.confidence <= 0.9);
            assert!(!d.evidence.is_empty());
        }
    }

    #[test]
    fn chunking_respects_limits() {
        let text = "x".repeat(25_000);
        let chunks = chunk_text(&text);
        assert_eq!(chunks.len(), MAX_CHUNKS);
        assert!(chunks.iter().all(|c| c.len() <= CHUNK_SIZE));
    }

    #[test]
    fn variance_of_equal_scores_is_zero() {
        assert_eq!(population_variance(&[0.4, 0.4, 0.4, 0.4]), 0.0);
        assert!(population_variance(&[0.0, 1.0, 0.0, 1.0]) > 0.2);
    }
}
