//! Sentence-embedding backend for the semantic relevance signal.
//!
//! The real backend is an ONNX Runtime session with a HuggingFace tokenizer,
//! loaded from a model directory described by `manifest.json`. Loaded
//! sessions are memoized process-wide by model id, so constructing scorers
//! repeatedly (one per worker) shares a single read-only session. A
//! deterministic stub mode (`ADJUDEX_EMBEDDING_MODE=stub`) keeps tests and
//! offline runs independent of model files.

use crate::error::{AssessError, Result};
use ndarray::{Array, Axis, Ix2, Ix3};
use once_cell::sync::OnceCell;
use ort::execution_providers::{CPUExecutionProvider, ExecutionProvider as _};
use ort::session::{builder::GraphOptimizationLevel, Session, SessionInputs};
use ort::value::{DynTensor, Tensor};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokenizers::{PaddingParams, PaddingStrategy, Tokenizer, TruncationParams};

const DEFAULT_MODEL_ID: &str = "all-MiniLM-L6-v2";
const STUB_DIMENSION: usize = 384;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum EmbeddingMode {
    Fast,
    Stub,
}

impl EmbeddingMode {
    fn from_env() -> Result<Self> {
        let raw = env::var("ADJUDEX_EMBEDDING_MODE")
            .unwrap_or_else(|_| "fast".to_string())
            .to_ascii_lowercase();
        match raw.as_str() {
            "fast" => Ok(Self::Fast),
            "stub" => Ok(Self::Stub),
            other => Err(AssessError::Embedding(format!(
                "Unsupported ADJUDEX_EMBEDDING_MODE '{other}' (expected 'fast' or 'stub')"
            ))),
        }
    }
}

fn model_dir() -> PathBuf {
    env::var("ADJUDEX_MODEL_DIR").map_or_else(|_| PathBuf::from("./models"), PathBuf::from)
}

fn model_id_from_env() -> String {
    env::var("ADJUDEX_EMBEDDING_MODEL").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string())
}

#[derive(Debug, Deserialize)]
struct ModelsManifest {
    schema_version: u32,
    models: Vec<ManifestModel>,
}

#[derive(Debug, Deserialize)]
struct ManifestModel {
    id: String,
    dimension: usize,
    max_length: usize,
    #[serde(default = "default_max_batch")]
    max_batch: usize,
    onnx: String,
    tokenizer: String,
}

const fn default_max_batch() -> usize {
    16
}

#[derive(Debug)]
struct ModelSpec {
    dimension: usize,
    max_length: usize,
    max_batch: usize,
    model_path: PathBuf,
    tokenizer_path: PathBuf,
}

fn load_spec(model_dir: &Path, model_id: &str) -> Result<ModelSpec> {
    let manifest_path = model_dir.join("manifest.json");
    let raw = std::fs::read_to_string(&manifest_path).map_err(|e| {
        AssessError::Embedding(format!(
            "Cannot read models manifest {}: {e}",
            manifest_path.display()
        ))
    })?;
    let manifest: ModelsManifest = serde_json::from_str(&raw)
        .map_err(|e| AssessError::Embedding(format!("Invalid models manifest: {e}")))?;
    if manifest.schema_version != 1 {
        return Err(AssessError::Embedding(format!(
            "Unsupported manifest schema version {}",
            manifest.schema_version
        )));
    }

    let model = manifest
        .models
        .into_iter()
        .find(|m| m.id == model_id)
        .ok_or_else(|| {
            AssessError::Embedding(format!("Model '{model_id}' not listed in manifest"))
        })?;

    let base = model_dir.join(model_id);
    Ok(ModelSpec {
        dimension: model.dimension,
        max_length: model.max_length,
        max_batch: model.max_batch,
        model_path: base.join(model.onnx),
        tokenizer_path: base.join(model.tokenizer),
    })
}

struct OrtEncoder {
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    max_batch: usize,
    dimension: usize,
}

impl OrtEncoder {
    fn new(spec: &ModelSpec) -> Result<Self> {
        if !spec.model_path.exists() || !spec.tokenizer_path.exists() {
            return Err(AssessError::Embedding(format!(
                "Model files are missing. Expected ONNX at {} and tokenizer at {} (or set ADJUDEX_MODEL_DIR).",
                spec.model_path.display(),
                spec.tokenizer_path.display(),
            )));
        }

        let mut tokenizer = Tokenizer::from_file(&spec.tokenizer_path)
            .map_err(|e| AssessError::Embedding(format!("Tokenizer load failed: {e}")))?;
        tokenizer.with_padding(Some(PaddingParams {
            strategy: PaddingStrategy::BatchLongest,
            ..PaddingParams::default()
        }));
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: spec.max_length,
                ..TruncationParams::default()
            }))
            .map_err(|e| AssessError::Embedding(format!("Tokenizer truncation failed: {e}")))?;

        let session = Session::builder()
            .map_err(|e| AssessError::Embedding(format!("{e}")))?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .map_err(|e| AssessError::Embedding(format!("Failed to register CPU provider: {e}")))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| AssessError::Embedding(format!("Failed to set optimization level: {e}")))?
            .commit_from_file(&spec.model_path)
            .map_err(|e| AssessError::Embedding(format!("Failed to load ONNX model: {e}")))?;

        log::info!(
            "Loaded ONNX embedding model from {} (dim {})",
            spec.model_path.display(),
            spec.dimension
        );

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            max_batch: spec.max_batch,
            dimension: spec.dimension,
        })
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut results = Vec::with_capacity(texts.len());
        for batch in texts.chunks(self.max_batch) {
            let encodings = self
                .tokenizer
                .encode_batch(batch.to_vec(), true)
                .map_err(|e| AssessError::Embedding(format!("Tokenization failed: {e}")))?;
            if encodings.is_empty() {
                continue;
            }

            let seq_len = encodings[0].len();
            let mut ids = Vec::with_capacity(batch.len() * seq_len);
            let mut masks = Vec::with_capacity(batch.len() * seq_len);
            let mut type_ids = Vec::with_capacity(batch.len() * seq_len);
            let mut mask_rows: Vec<Vec<i64>> = Vec::with_capacity(batch.len());
            for encoding in &encodings {
                for idx in 0..seq_len {
                    ids.push(i64::from(*encoding.get_ids().get(idx).unwrap_or(&0)));
                    masks.push(i64::from(
                        *encoding.get_attention_mask().get(idx).unwrap_or(&0),
                    ));
                    type_ids.push(i64::from(*encoding.get_type_ids().get(idx).unwrap_or(&0)));
                }
                mask_rows.push(
                    encoding
                        .get_attention_mask()
                        .iter()
                        .take(seq_len)
                        .map(|v| i64::from(*v))
                        .collect(),
                );
            }

            let shape = (batch.len(), seq_len);
            let to_tensor = |data: Vec<i64>| -> Result<DynTensor> {
                let array = Array::from_shape_vec(shape, data)
                    .map_err(|e| AssessError::Embedding(format!("Tensor shape error: {e}")))?;
                Ok(Tensor::from_array(array.into_dyn())
                    .map_err(|e| AssessError::Embedding(format!("{e}")))?
                    .upcast())
            };

            let mut available: HashMap<String, DynTensor> = HashMap::new();
            available.insert("input_ids".to_string(), to_tensor(ids)?);
            available.insert("attention_mask".to_string(), to_tensor(masks)?);
            available.insert("token_type_ids".to_string(), to_tensor(type_ids)?);

            let array = {
                let mut session = self
                    .session
                    .lock()
                    .map_err(|_| AssessError::Embedding("Failed to lock ONNX session".into()))?;

                let mut feed: HashMap<String, DynTensor> = HashMap::new();
                for input in &session.inputs {
                    let key = input.name.clone();
                    let Some(value) = available.get(&key) else {
                        return Err(AssessError::Embedding(format!(
                            "Unsupported ONNX input '{key}'"
                        )));
                    };
                    feed.insert(key, value.clone());
                }

                let outputs = session
                    .run(SessionInputs::from(feed))
                    .map_err(|e| AssessError::Embedding(format!("ONNX forward failed: {e}")))?;
                if outputs.len() == 0 {
                    return Err(AssessError::Embedding("ONNX returned no outputs".into()));
                }
                outputs[0]
                    .try_extract_array::<f32>()
                    .map_err(|e| {
                        AssessError::Embedding(format!("Failed to decode ONNX output: {e}"))
                    })?
                    .to_owned()
            };

            results.extend(pool_output(array, &mask_rows, self.dimension)?);
        }
        Ok(results)
    }
}

fn pool_output(
    array: ndarray::ArrayD<f32>,
    mask_rows: &[Vec<i64>],
    expected_dimension: usize,
) -> Result<Vec<Vec<f32>>> {
    let mut out = Vec::new();
    match array.ndim() {
        // Already pooled: one row per input.
        2 => {
            let pooled = array
                .into_dimensionality::<Ix2>()
                .map_err(|e| AssessError::Embedding(format!("Bad output shape: {e}")))?;
            for row in pooled.outer_iter() {
                let mut emb = row.to_vec();
                ensure_dimension(&emb, expected_dimension)?;
                normalize(&mut emb);
                out.push(emb);
            }
        }
        // Token-level hidden states: mean-pool over the attention mask.
        3 => {
            let hidden = array
                .into_dimensionality::<Ix3>()
                .map_err(|e| AssessError::Embedding(format!("Bad output shape: {e}")))?;
            for (idx, sample) in hidden.axis_iter(Axis(0)).enumerate() {
                let mask = mask_rows.get(idx).map(Vec::as_slice).unwrap_or(&[]);
                let mut emb = mean_pool(sample, mask);
                ensure_dimension(&emb, expected_dimension)?;
                normalize(&mut emb);
                out.push(emb);
            }
        }
        other => {
            return Err(AssessError::Embedding(format!(
                "Unexpected ONNX output rank {other}"
            )));
        }
    }
    Ok(out)
}

fn ensure_dimension(vec: &[f32], expected: usize) -> Result<()> {
    if vec.len() != expected {
        return Err(AssessError::Embedding(format!(
            "Embedding dimension {} does not match expected {expected}",
            vec.len()
        )));
    }
    Ok(())
}

fn mean_pool(sample: ndarray::ArrayView2<'_, f32>, mask: &[i64]) -> Vec<f32> {
    if sample.is_empty() {
        return vec![];
    }

    let hidden = sample.len_of(Axis(1));
    let mut sum = vec![0.0f32; hidden];
    let mut count = 0.0f32;
    for (token_idx, token) in sample.outer_iter().enumerate() {
        if *mask.get(token_idx).unwrap_or(&0) == 0 {
            continue;
        }
        count += 1.0;
        for (dim, value) in token.iter().enumerate() {
            sum[dim] += value;
        }
    }

    if count > 0.0 {
        for value in &mut sum {
            *value /= count;
        }
    }
    sum
}

fn normalize(vec: &mut [f32]) {
    let norm = vec.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm == 0.0 {
        return;
    }
    for value in vec {
        *value /= norm;
    }
}

/// Deterministic pseudo-embedding: hash-seeded, unit-normalized. Same text
/// always embeds identically, distinct texts differ with overwhelming
/// probability, which is what the tests need.
fn stub_embed(text: &str, dimension: usize) -> Vec<f32> {
    let mut state =
        fnv1a_64(text.as_bytes()) ^ (dimension as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let mut vec = Vec::with_capacity(dimension);
    for _ in 0..dimension {
        let bits = splitmix64(&mut state);
        let high = (bits >> 32) as u32;
        let mantissa = high >> 9;
        let unit = f32::from_bits(0x3f80_0000 | mantissa) - 1.0;
        vec.push(unit.mul_add(2.0, -1.0));
    }
    normalize(&mut vec);
    vec
}

fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

const fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Process-wide registry of loaded ONNX sessions, keyed by model id.
static ENCODERS: OnceCell<Mutex<HashMap<String, Arc<OrtEncoder>>>> = OnceCell::new();

enum Backend {
    Ort(Arc<OrtEncoder>),
    Stub,
}

/// Handle to an embedding backend, cheap to clone across scorer instances.
pub struct EmbeddingHandle {
    backend: Backend,
    dimension: usize,
}

impl EmbeddingHandle {
    /// Open the default model for the current process environment.
    pub fn open() -> Result<Self> {
        Self::open_model(&model_id_from_env())
    }

    /// Open a specific model id, loading its session on first use and
    /// reusing the memoized session afterwards.
    pub fn open_model(model_id: &str) -> Result<Self> {
        if EmbeddingMode::from_env()? == EmbeddingMode::Stub {
            return Ok(Self::stub(STUB_DIMENSION));
        }

        let registry = ENCODERS.get_or_init(|| Mutex::new(HashMap::new()));
        let mut guard = registry
            .lock()
            .map_err(|_| AssessError::Embedding("Failed to lock encoder registry".into()))?;
        if let Some(encoder) = guard.get(model_id) {
            return Ok(Self {
                dimension: encoder.dimension,
                backend: Backend::Ort(encoder.clone()),
            });
        }

        let spec = load_spec(&model_dir(), model_id)?;
        let encoder = Arc::new(OrtEncoder::new(&spec)?);
        guard.insert(model_id.to_string(), encoder.clone());
        Ok(Self {
            dimension: encoder.dimension,
            backend: Backend::Ort(encoder),
        })
    }

    /// Deterministic stub backend, independent of model files.
    #[must_use]
    pub const fn stub(dimension: usize) -> Self {
        Self {
            backend: Backend::Stub,
            dimension,
        }
    }

    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut batch = self.embed_batch(&[text])?;
        batch
            .pop()
            .ok_or_else(|| AssessError::Embedding("Empty embedding result".to_string()))
    }

    pub fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }
        match &self.backend {
            Backend::Stub => Ok(texts
                .iter()
                .map(|text| stub_embed(text, self.dimension))
                .collect()),
            Backend::Ort(encoder) => {
                let owned: Vec<String> = texts.iter().map(ToString::to_string).collect();
                encoder.embed_batch(&owned)
            }
        }
    }
}

#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_embeddings_are_deterministic_and_normalized() {
        let handle = EmbeddingHandle::stub(64);
        let a = handle.embed("financial considerations").unwrap();
        let b = handle.embed("financial considerations").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);

        let norm: f32 = a.iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn distinct_texts_embed_differently() {
        let handle = EmbeddingHandle::stub(64);
        let a = handle.embed("alcohol consumption").unwrap();
        let b = handle.embed("foreign influence").unwrap();
        assert_ne!(a, b);
        assert!(cosine_similarity(&a, &b) < 0.99);
    }

    #[test]
    fn cosine_similarity_bounds() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![0.0, 1.0, 0.0];
        assert_eq!(cosine_similarity(&a, &a), 1.0);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_similarity(&a, &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn batch_embedding_preserves_order() {
        let handle = EmbeddingHandle::stub(32);
        let batch = handle.embed_batch(&["one", "two", "three"]).unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0], handle.embed("one").unwrap());
        assert_eq!(batch[2], handle.embed("three").unwrap());
    }

    #[test]
    fn missing_manifest_is_a_typed_error() {
        let err = load_spec(Path::new("/nonexistent-model-dir"), "some-model").unwrap_err();
        assert!(matches!(err, AssessError::Embedding(_)));
    }

    #[test]
    fn manifest_resolves_model_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("manifest.json"),
            r#"{
                "schema_version": 1,
                "models": [{
                    "id": "mini",
                    "dimension": 384,
                    "max_length": 256,
                    "onnx": "model.onnx",
                    "tokenizer": "tokenizer.json"
                }]
            }"#,
        )
        .unwrap();

        let spec = load_spec(dir.path(), "mini").unwrap();
        assert_eq!(spec.dimension, 384);
        assert_eq!(spec.max_batch, 16);
        assert!(spec.model_path.ends_with("mini/model.onnx"));
        assert!(spec.tokenizer_path.ends_with("mini/tokenizer.json"));

        let err = load_spec(dir.path(), "unlisted").unwrap_err();
        assert!(matches!(err, AssessError::Embedding(_)));
    }
}
