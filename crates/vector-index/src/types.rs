use docqa_chunker::Chunk;
use serde::{Deserialize, Serialize};

/// A chunk paired with its embedding vector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddedChunk {
    pub chunk: Chunk,
    pub vector: Vec<f32>,
}

impl EmbeddedChunk {
    /// Pair a chunk with its vector
    #[must_use]
    pub const fn new(chunk: Chunk, vector: Vec<f32>) -> Self {
        Self { chunk, vector }
    }

    /// Length of the embedding vector
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.vector.len()
    }
}

/// A single nearest-neighbor match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Insertion-ordinal id of the matched entry
    pub id: usize,

    /// Squared Euclidean distance to the query (lower is better)
    pub distance: f32,
}
