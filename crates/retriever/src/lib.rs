//! # DocQA Retriever
//!
//! Retrieval orchestration for grounded question answering: ingestion
//! (chunk → embed → index → persist) and querying (embed → search →
//! score → guardrail).
//!
//! ## Data flow
//!
//! ```text
//! Ingestion: raw text ─> Chunker ─> EmbeddingProvider::embed_batch
//!                ─> VectorIndex::append ─> IndexPersistence::save
//!
//! Query:     question ─> EmbeddingProvider::embed ─> VectorIndex::search
//!                ─> confidence scoring ─> guardrail ─> GuardrailDecision
//! ```
//!
//! The guardrail resolves low-confidence and context-free queries into a
//! deterministic `Rejected` decision *before* any text generation runs;
//! the retriever itself never calls a generator.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use docqa_retriever::{
//!     format_context, DeterministicEmbedder, Document, GuardrailDecision,
//!     IndexPersistence, Retriever, RetrieverConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let retriever = Retriever::load_or_default(
//!         RetrieverConfig::default(),
//!         Arc::new(DeterministicEmbedder::new(384)),
//!         IndexPersistence::new("index.json"),
//!     )
//!     .await?;
//!
//!     retriever
//!         .ingest(Document::new("doc-1", "handbook.txt", "Leave accrues monthly."))
//!         .await?;
//!
//!     match retriever.query("how does leave accrue?", 3, 0.35).await? {
//!         GuardrailDecision::Accepted(results) => println!("{}", format_context(&results)),
//!         GuardrailDecision::Rejected(reason) => println!("not found: {reason}"),
//!     }
//!     Ok(())
//! }
//! ```

mod config;
mod context;
mod error;
mod retriever;
mod types;

pub use config::{RetrieverConfig, DEFAULT_CONFIDENCE_THRESHOLD};
pub use context::{format_context, unique_sources};
pub use error::{Result, RetrieverError};
pub use retriever::{confidence, Retriever};
pub use types::{GuardrailDecision, RejectReason, RetrievalResult};

// Re-export the building blocks callers wire together
pub use docqa_chunker::{Chunk, Chunker, ChunkerConfig, Document};
pub use docqa_vector_index::{
    DeterministicEmbedder, EmbeddedChunk, EmbeddingProvider, IndexError, IndexPersistence,
    Neighbor, VectorIndex,
};
