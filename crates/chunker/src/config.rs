use serde::{Deserialize, Serialize};

/// Default chunk size in tokens
pub const DEFAULT_CHUNK_SIZE: usize = 400;

/// Default overlap between consecutive chunks in tokens
pub const DEFAULT_OVERLAP_SIZE: usize = 50;

/// Configuration for token-window chunking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkerConfig {
    /// Window size in tokens (hard limit per chunk)
    pub chunk_size: usize,

    /// Tokens shared between consecutive windows
    pub overlap_size: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap_size: DEFAULT_OVERLAP_SIZE,
        }
    }
}

impl ChunkerConfig {
    /// Create a config with explicit window and overlap sizes
    #[must_use]
    pub const fn new(chunk_size: usize, overlap_size: usize) -> Self {
        Self {
            chunk_size,
            overlap_size,
        }
    }

    /// Validate configuration
    ///
    /// The overlap must be strictly smaller than the window, otherwise the
    /// window start would never advance. Violations are reported, never
    /// silently clamped.
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be > 0".to_string());
        }

        if self.overlap_size >= self.chunk_size {
            return Err(format!(
                "overlap_size ({}) must be smaller than chunk_size ({})",
                self.overlap_size, self.chunk_size
            ));
        }

        Ok(())
    }

    /// Window advance between consecutive chunks
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.chunk_size - self.overlap_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = ChunkerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chunk_size, 400);
        assert_eq!(config.overlap_size, 50);
    }

    #[test]
    fn test_config_validation() {
        // Invalid: zero window
        assert!(ChunkerConfig::new(0, 0).validate().is_err());

        // Invalid: overlap equals window
        assert!(ChunkerConfig::new(100, 100).validate().is_err());

        // Invalid: overlap exceeds window
        assert!(ChunkerConfig::new(100, 150).validate().is_err());

        // Valid: zero overlap is allowed
        assert!(ChunkerConfig::new(100, 0).validate().is_ok());
    }

    #[test]
    fn test_stride() {
        assert_eq!(ChunkerConfig::new(400, 50).stride(), 350);
        assert_eq!(ChunkerConfig::new(100, 0).stride(), 100);
    }
}
