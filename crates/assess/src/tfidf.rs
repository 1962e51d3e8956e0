//! Native TF-IDF cosine similarity over a (document, reference) pair.
//!
//! Vocabulary is 1-3 word grams, restricted to the 100 most frequent
//! features across the two texts (ties broken lexicographically so the
//! result is deterministic). Term frequencies are weighted with a smoothed
//! inverse document frequency and compared by cosine over L2-normalized
//! vectors.

use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

const MAX_FEATURES: usize = 100;
const NGRAM_MAX: usize = 3;

/// Cosine similarity of the TF-IDF vectors of two texts, in [0, 1].
#[must_use]
pub fn tfidf_cosine(document: &str, reference: &str) -> f32 {
    let doc_counts = ngram_counts(document);
    let ref_counts = ngram_counts(reference);
    if doc_counts.is_empty() || ref_counts.is_empty() {
        return 0.0;
    }

    let features = top_features(&doc_counts, &ref_counts);

    let doc_vec = weighted_vector(&features, &doc_counts, &ref_counts, true);
    let ref_vec = weighted_vector(&features, &doc_counts, &ref_counts, false);

    dot(&doc_vec, &ref_vec)
}

fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words()
        .map(str::to_lowercase)
        .collect()
}

fn ngram_counts(text: &str) -> HashMap<String, f32> {
    let words = tokenize(text);
    let mut counts: HashMap<String, f32> = HashMap::new();
    for n in 1..=NGRAM_MAX {
        for gram in words.windows(n) {
            *counts.entry(gram.join(" ")).or_insert(0.0) += 1.0;
        }
    }
    counts
}

fn top_features(a: &HashMap<String, f32>, b: &HashMap<String, f32>) -> Vec<String> {
    let mut totals: HashMap<&str, f32> = HashMap::new();
    for (gram, count) in a.iter().chain(b.iter()) {
        *totals.entry(gram.as_str()).or_insert(0.0) += count;
    }

    let mut features: Vec<(&str, f32)> = totals.into_iter().collect();
    features.sort_by(|(ga, ca), (gb, cb)| {
        cb.partial_cmp(ca)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| ga.cmp(gb))
    });
    features
        .into_iter()
        .take(MAX_FEATURES)
        .map(|(gram, _)| gram.to_string())
        .collect()
}

/// Smoothed idf over the two-document corpus: ln((1+n)/(1+df)) + 1.
fn idf(gram: &str, a: &HashMap<String, f32>, b: &HashMap<String, f32>) -> f32 {
    let df = usize::from(a.contains_key(gram)) + usize::from(b.contains_key(gram));
    ((1.0 + 2.0) / (1.0 + df as f32)).ln() + 1.0
}

fn weighted_vector(
    features: &[String],
    a: &HashMap<String, f32>,
    b: &HashMap<String, f32>,
    use_a: bool,
) -> Vec<f32> {
    let source = if use_a { a } else { b };
    let mut vec: Vec<f32> = features
        .iter()
        .map(|gram| source.get(gram).copied().unwrap_or(0.0) * idf(gram, a, b))
        .collect();

    let norm = vec.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in &mut vec {
            *value /= norm;
        }
    }
    vec
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_score_one() {
        let text = "failure to satisfy delinquent debts over several years";
        let score = tfidf_cosine(text, text);
        assert!((score - 1.0).abs() < 1e-5, "score was {score}");
    }

    #[test]
    fn disjoint_texts_score_zero() {
        let score = tfidf_cosine("alpha beta gamma", "delta epsilon zeta");
        assert!(score.abs() < 1e-6);
    }

    #[test]
    fn related_text_scores_between_unrelated_and_identical() {
        let reference = "Financial Considerations. Failure to live within one's means, \
                         satisfy debts, and meet financial obligations may indicate poor \
                         self-control and lack of judgment.";
        let related = "Applicant accumulated delinquent debts and could not satisfy \
                       financial obligations after losing employment.";
        let unrelated = "The weather on the day of the hearing was unremarkable.";

        let related_score = tfidf_cosine(related, reference);
        let unrelated_score = tfidf_cosine(unrelated, reference);
        assert!(related_score > unrelated_score);
        assert!(related_score < 1.0);
    }

    #[test]
    fn empty_inputs_score_zero() {
        assert_eq!(tfidf_cosine("", "reference text"), 0.0);
        assert_eq!(tfidf_cosine("document text", ""), 0.0);
    }

    #[test]
    fn score_is_deterministic() {
        let doc = "drug involvement and substance misuse concerns repeated drug use";
        let reference = "Drug Involvement and Substance Misuse. The illegal use of controlled substances.";
        assert_eq!(tfidf_cosine(doc, reference), tfidf_cosine(doc, reference));
    }
}
