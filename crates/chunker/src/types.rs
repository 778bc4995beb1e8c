use serde::{Deserialize, Serialize};

/// A document submitted for ingestion
///
/// Immutable once stored: re-ingesting changed content happens under a new
/// id, never by mutating an existing document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Stable document identifier
    pub id: String,

    /// Human-readable source name (typically the original filename)
    pub source_name: String,

    /// Full extracted text of the document
    pub raw_text: String,
}

impl Document {
    /// Create a new document
    pub fn new(
        id: impl Into<String>,
        source_name: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_name: source_name.into(),
            raw_text: raw_text.into(),
        }
    }
}

/// An overlapping token window cut from a document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    /// Id of the document this chunk was cut from
    pub document_id: String,

    /// Position of this chunk within its document (0-based, monotonic)
    pub chunk_index: usize,

    /// The chunk text (whitespace-normalized)
    pub text: String,

    /// Number of tokens in this chunk
    pub token_count: usize,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(
        document_id: impl Into<String>,
        chunk_index: usize,
        text: impl Into<String>,
        token_count: usize,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            chunk_index,
            text: text.into(),
            token_count,
        }
    }

    /// Check whether the chunk holds any tokens
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.token_count == 0
    }
}
