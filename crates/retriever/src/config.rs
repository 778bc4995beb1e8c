use docqa_chunker::ChunkerConfig;
use serde::{Deserialize, Serialize};

/// Default minimum best-match confidence for accepting a query
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.35;

/// Retrieval configuration consumed by the surrounding service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetrieverConfig {
    /// Chunk window and overlap sizes
    pub chunker: ChunkerConfig,

    /// Minimum best-match confidence below which queries are rejected
    pub confidence_threshold: f32,
}

impl Default for RetrieverConfig {
    fn default() -> Self {
        Self {
            chunker: ChunkerConfig::default(),
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

impl RetrieverConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        self.chunker.validate()?;

        if !(self.confidence_threshold > 0.0 && self.confidence_threshold <= 1.0) {
            return Err(format!(
                "confidence_threshold ({}) must be in (0, 1]",
                self.confidence_threshold
            ));
        }

        Ok(())
    }
}
