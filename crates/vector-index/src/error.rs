use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The index holds zero entries. Recoverable: callers surface this as
    /// a "no context" decision, not a hard failure.
    #[error("Vector index is empty")]
    EmptyIndex,

    #[error("Invalid top-k {0}: must be at least 1")]
    InvalidTopK(usize),

    #[error("Embedding provider error: {0}")]
    Provider(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupt index file: {0}")]
    CorruptIndex(String),
}

impl IndexError {
    /// Create a provider error
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create a corrupt index error
    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::CorruptIndex(msg.into())
    }
}
