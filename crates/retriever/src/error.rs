use docqa_chunker::ChunkerError;
use docqa_vector_index::IndexError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RetrieverError>;

/// Errors surfaced by retrieval orchestration
///
/// Low-confidence and no-context outcomes are *not* errors — they are
/// [`GuardrailDecision::Rejected`](crate::GuardrailDecision) values, a
/// designed result the transport layer renders as "not found".
#[derive(Error, Debug)]
pub enum RetrieverError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Chunker error: {0}")]
    Chunker(#[from] ChunkerError),

    #[error("Index error: {0}")]
    Index(#[from] IndexError),
}
