//! # DocQA Chunker
//!
//! Deterministic token-window chunking for document retrieval.
//!
//! ## Philosophy
//!
//! The chunker turns a document's raw text into overlapping fixed-size
//! token windows that:
//! - Keep each window small enough to embed well
//! - Share an overlap with the previous window so answers spanning a
//!   boundary are still retrievable
//! - Are byte-reproducible: the same text and config always yield the
//!   same chunk boundaries, which re-ingestion and test fixtures rely on
//!
//! ## Example
//!
//! ```rust
//! use docqa_chunker::{Chunker, ChunkerConfig, Document};
//!
//! let chunker = Chunker::new(ChunkerConfig::default()).unwrap();
//! let doc = Document::new("doc-1", "handbook.txt", "Employees accrue leave monthly.");
//! let chunks = chunker.chunk(&doc);
//! for chunk in chunks {
//!     println!("chunk {}: {} tokens", chunk.chunk_index, chunk.token_count);
//! }
//! ```

mod chunker;
mod config;
mod error;
mod types;

pub use chunker::Chunker;
pub use config::ChunkerConfig;
pub use error::{ChunkerError, Result};
pub use types::{Chunk, Document};
