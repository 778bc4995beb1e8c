use crate::config::ChunkerConfig;
use crate::error::{ChunkerError, Result};
use crate::types::{Chunk, Document};

/// Splits document text into overlapping fixed-size token windows
///
/// Tokens are whitespace-delimited words; chunk text is the window joined
/// with single spaces, so identical input always produces byte-identical
/// chunks.
#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a chunker, validating the configuration eagerly
    pub fn new(config: ChunkerConfig) -> Result<Self> {
        config.validate().map_err(ChunkerError::invalid_config)?;
        Ok(Self { config })
    }

    /// Get the active configuration
    #[must_use]
    pub const fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Chunk a document into overlapping token windows
    ///
    /// Empty or whitespace-only text produces zero chunks. The final chunk
    /// may be shorter than `chunk_size`; it is emitted as long as it holds
    /// at least one token.
    pub fn chunk(&self, document: &Document) -> Vec<Chunk> {
        let tokens: Vec<&str> = document.raw_text.split_whitespace().collect();
        if tokens.is_empty() {
            log::debug!("Document '{}' has no tokens, skipping", document.id);
            return Vec::new();
        }

        let chunk_size = self.config.chunk_size;
        let stride = self.config.stride();

        let mut chunks = Vec::new();
        let mut start = 0;
        loop {
            let end = (start + chunk_size).min(tokens.len());
            let window = &tokens[start..end];
            chunks.push(Chunk::new(
                document.id.clone(),
                chunks.len(),
                window.join(" "),
                window.len(),
            ));

            // The last window always reaches the end of the document; a
            // further window would repeat only overlap tokens.
            if end == tokens.len() {
                break;
            }
            start += stride;
        }

        log::debug!(
            "Chunked document '{}' into {} chunks ({} tokens, window {}, overlap {})",
            document.id,
            chunks.len(),
            tokens.len(),
            chunk_size,
            self.config.overlap_size
        );

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
    }

    fn chunker(chunk_size: usize, overlap: usize) -> Chunker {
        Chunker::new(ChunkerConfig::new(chunk_size, overlap)).unwrap()
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        let c = chunker(400, 50);
        assert!(c.chunk(&Document::new("d", "s", "")).is_empty());
        assert!(c.chunk(&Document::new("d", "s", "   \n\t  ")).is_empty());
    }

    #[test]
    fn test_short_text_single_chunk() {
        let c = chunker(400, 50);
        let chunks = c.chunk(&Document::new("d", "s", "hello world"));
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "hello world");
        assert_eq!(chunks[0].token_count, 2);
        assert_eq!(chunks[0].chunk_index, 0);
    }

    #[test]
    fn test_500_tokens_produces_two_chunks() {
        let c = chunker(400, 50);
        let chunks = c.chunk(&Document::new("d", "s", words(500)));
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].token_count, 400);
        assert_eq!(chunks[1].token_count, 150);
        assert_eq!(chunks[1].chunk_index, 1);
    }

    #[test]
    fn test_exact_window_has_no_trailing_overlap_chunk() {
        let c = chunker(400, 50);
        let chunks = c.chunk(&Document::new("d", "s", words(400)));
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].token_count, 400);
    }

    #[test]
    fn test_overlap_tokens_match() {
        let c = chunker(10, 3);
        let chunks = c.chunk(&Document::new("d", "s", words(25)));
        assert!(chunks.len() >= 2);
        for pair in chunks.windows(2) {
            let prev: Vec<&str> = pair[0].text.split_whitespace().collect();
            let next: Vec<&str> = pair[1].text.split_whitespace().collect();
            assert_eq!(prev[prev.len() - 3..], next[..3]);
        }
    }

    #[test]
    fn test_token_counts_never_exceed_window() {
        let c = chunker(7, 2);
        let chunks = c.chunk(&Document::new("d", "s", words(53)));
        for chunk in &chunks {
            assert!(chunk.token_count <= 7);
        }
        // Every chunk but the last is a full window
        for chunk in &chunks[..chunks.len() - 1] {
            assert_eq!(chunk.token_count, 7);
        }
    }

    #[test]
    fn test_deterministic_boundaries() {
        let c = chunker(12, 4);
        let doc = Document::new("d", "s", words(100));
        assert_eq!(c.chunk(&doc), c.chunk(&doc));
    }

    #[test]
    fn test_whitespace_normalization() {
        let c = chunker(400, 50);
        let chunks = c.chunk(&Document::new("d", "s", "one\n\ntwo   three\tfour"));
        assert_eq!(chunks[0].text, "one two three four");
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(Chunker::new(ChunkerConfig::new(50, 50)).is_err());
        assert!(Chunker::new(ChunkerConfig::new(0, 0)).is_err());
    }
}
