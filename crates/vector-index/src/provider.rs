use crate::error::{IndexError, Result};
use async_trait::async_trait;

/// Capability boundary for embedding backends
///
/// Implementations are selected once at startup and passed by reference
/// into the retriever; the core never dispatches on provider names. A
/// provider must fail explicitly on bad input or backend errors — returning
/// a zero vector would silently poison the index.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text into a fixed-length vector
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embed a batch of texts in one provider invocation
    ///
    /// Batching guarantees all chunks of one ingestion share the same
    /// provider call, and thus the same dimension.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Fixed length of vectors produced by this provider
    fn dimension(&self) -> usize;
}

/// Offline, hash-based embedding provider
///
/// Maps each text to a reproducible pseudo-random unit vector: an FNV-1a
/// hash of the text seeds a splitmix64 stream that fills the vector, which
/// is then L2-normalized. No semantic signal, but fully deterministic —
/// identical text always yields an identical vector, so re-ingestion and
/// tests are stable without any model download.
#[derive(Debug, Clone)]
pub struct DeterministicEmbedder {
    dimension: usize,
}

impl DeterministicEmbedder {
    /// Create an embedder producing vectors of the given dimension
    #[must_use]
    pub const fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn embed_one(&self, text: &str) -> Result<Vec<f32>> {
        let cleaned = text.trim();
        if cleaned.is_empty() {
            return Err(IndexError::provider("cannot embed empty text"));
        }

        let mut state = fnv1a_64(cleaned.as_bytes()) ^ (self.dimension as u64).rotate_left(17);
        let mut vector = Vec::with_capacity(self.dimension);
        for _ in 0..self.dimension {
            let bits = splitmix64(&mut state);
            // Top 24 bits -> [0, 1), then shift to [-1, 1)
            let unit = (bits >> 40) as f32 / (1u32 << 24) as f32;
            vector.push(unit * 2.0 - 1.0);
        }
        normalize(&mut vector);
        Ok(vector)
    }
}

#[async_trait]
impl EmbeddingProvider for DeterministicEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.embed_one(text)
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        texts.iter().map(|text| self.embed_one(text)).collect()
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
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

fn normalize(vector: &mut [f32]) {
    let norm: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}
