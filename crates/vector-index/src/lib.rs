//! # DocQA Vector Index
//!
//! Vector storage and exact nearest-neighbor search for document chunks.
//!
//! ## Architecture
//!
//! ```text
//! Chunk[]
//!     │
//!     ├──> EmbeddingProvider (capability trait)
//!     │      └─> Vector[384/768/1536]
//!     │
//!     ├──> VectorIndex
//!     │      └─> Brute-force squared-L2 search, ordinal ids
//!     │
//!     └──> IndexPersistence
//!            └─> Atomic JSON file with dimension tag
//! ```
//!
//! The index is intentionally a brute-force scan: corpora are small, and
//! exact ranking with a deterministic id tie-break is what the retrieval
//! guardrail tests depend on.
//!
//! ## Example
//!
//! ```no_run
//! use docqa_vector_index::{DeterministicEmbedder, EmbeddingProvider, VectorIndex};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let embedder = DeterministicEmbedder::new(384);
//!     let mut index = VectorIndex::new(embedder.dimension());
//!
//!     // ... append embedded chunks, then:
//!     let query = embedder.embed("vacation policy").await?;
//!     for neighbor in index.search(&query, 3)? {
//!         println!("{}: {:.3}", neighbor.id, neighbor.distance);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod index;
mod persistence;
mod provider;
mod types;

pub use error::{IndexError, Result};
pub use index::VectorIndex;
pub use persistence::IndexPersistence;
pub use provider::{DeterministicEmbedder, EmbeddingProvider};
pub use types::{EmbeddedChunk, Neighbor};

// Re-export chunker types for convenience
pub use docqa_chunker::{Chunk, Document};
