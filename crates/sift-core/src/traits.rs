use crate::errors::SiftResult;

/// Embedding backend for the semantic verifier.
///
/// Implementations must be deterministic for a fixed input so the semantic
/// path stays reproducible given a fixed backend.
pub trait ISimilarityBackend: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> SiftResult<Vec<f32>>;

    /// The dimensionality of embeddings produced by this backend.
    fn dimensions(&self) -> usize;

    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Whether this backend is currently available.
    fn is_available(&self) -> bool;
}

/// Cosine similarity between two embedding vectors.
///
/// Returns 0.0 for zero-norm or mismatched-length inputs rather than an
/// error: a degenerate embedding degrades to "no signal".
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a <= f32::EPSILON || norm_b <= f32::EPSILON {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
