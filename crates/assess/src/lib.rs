//! Per-guideline relevance assessment and case-level recommendation.
//!
//! Two classifiers share the guideline catalog: a keyword-frequency
//! classifier and an ensemble scorer that combines n-gram, TF-IDF,
//! semantic-embedding, and contextual-cooccurrence signals. Both produce
//! exactly one assessment per guideline code; the synthesizer folds those
//! into one overall recommendation.

mod embedding;
mod ensemble;
mod error;
mod native;
mod recommend;
mod tfidf;

pub use embedding::{cosine_similarity, EmbeddingHandle};
pub use ensemble::{EnsembleScorer, EnsembleWeights};
pub use error::{AssessError, Result};
pub use native::NativeClassifier;
pub use recommend::synthesize_recommendation;
pub use tfidf::tfidf_cosine;
