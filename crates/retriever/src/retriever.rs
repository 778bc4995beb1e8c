use crate::config::RetrieverConfig;
use crate::error::{Result, RetrieverError};
use crate::types::{GuardrailDecision, RejectReason, RetrievalResult};
use docqa_chunker::{Chunker, Document};
use docqa_vector_index::{
    EmbeddedChunk, EmbeddingProvider, IndexError, IndexPersistence, VectorIndex,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Map a nearest-neighbor distance to a confidence score in (0, 1]
///
/// Distance 0 maps to exactly 1.0 and the score decays monotonically
/// toward (never reaching) 0 as distance grows.
#[must_use]
pub fn confidence(distance: f32) -> f32 {
    1.0 / (1.0 + distance)
}

/// Mutable retrieval state: the active provider, the index it produced,
/// and the documents backing a future rebuild. Single writer, multiple
/// readers; a rebuild swaps the whole index under the write guard.
struct State {
    provider: Arc<dyn EmbeddingProvider>,
    index: VectorIndex,
    documents: Vec<Document>,
}

impl State {
    fn source_name_for(&self, document_id: &str) -> String {
        self.documents
            .iter()
            .find(|doc| doc.id == document_id)
            .map_or_else(|| document_id.to_string(), |doc| doc.source_name.clone())
    }
}

/// Orchestrates ingestion and retrieval against a single vector index
///
/// The retriever is the only component that talks to the embedding
/// provider. It never invokes generation itself — queries resolve to a
/// [`GuardrailDecision`] the caller acts on.
pub struct Retriever {
    chunker: Chunker,
    config: RetrieverConfig,
    persistence: IndexPersistence,
    state: RwLock<State>,
}

impl Retriever {
    /// Create a retriever with an empty index at the provider's dimension
    pub fn new(
        config: RetrieverConfig,
        provider: Arc<dyn EmbeddingProvider>,
        persistence: IndexPersistence,
    ) -> Result<Self> {
        let index = VectorIndex::new(provider.dimension());
        Self::with_index(config, provider, persistence, index)
    }

    /// Create a retriever, reloading a previously saved index when one
    /// exists
    ///
    /// A stored index whose dimension disagrees with the active provider
    /// is left on disk and ignored with a warning — the caller re-ingests
    /// (or rebuilds) under the new provider. Corrupt files still fail hard.
    pub async fn load_or_default(
        config: RetrieverConfig,
        provider: Arc<dyn EmbeddingProvider>,
        persistence: IndexPersistence,
    ) -> Result<Self> {
        let index = match persistence.load().await? {
            Some(index) if index.dimension() == provider.dimension() => {
                log::info!("Resuming from saved index ({} vectors)", index.len());
                index
            }
            Some(index) => {
                log::warn!(
                    "Saved index dimension {} disagrees with provider dimension {}; starting empty",
                    index.dimension(),
                    provider.dimension()
                );
                VectorIndex::new(provider.dimension())
            }
            None => VectorIndex::new(provider.dimension()),
        };
        Self::with_index(config, provider, persistence, index)
    }

    fn with_index(
        config: RetrieverConfig,
        provider: Arc<dyn EmbeddingProvider>,
        persistence: IndexPersistence,
        index: VectorIndex,
    ) -> Result<Self> {
        config.validate().map_err(RetrieverError::InvalidConfig)?;
        let chunker = Chunker::new(config.chunker.clone())?;
        Ok(Self {
            chunker,
            config,
            persistence,
            state: RwLock::new(State {
                provider,
                index,
                documents: Vec::new(),
            }),
        })
    }

    /// Get the active configuration
    #[must_use]
    pub const fn config(&self) -> &RetrieverConfig {
        &self.config
    }

    /// Ingest a document: chunk, embed, append, persist
    ///
    /// Returns the number of chunks added. An empty or whitespace-only
    /// document is skipped with `Ok(0)` and leaves the index untouched.
    /// A persistence failure after a successful append is returned as an
    /// error, but the in-memory index (and the stored document) remain
    /// valid.
    pub async fn ingest(&self, document: Document) -> Result<usize> {
        let chunks = self.chunker.chunk(&document);
        if chunks.is_empty() {
            log::info!("Skipped empty document '{}'", document.id);
            return Ok(0);
        }

        let mut state = self.state.write().await;

        // One provider call for the whole document: every chunk embeds
        // under the same invocation and therefore the same dimension.
        let texts: Vec<String> = chunks.iter().map(|chunk| chunk.text.clone()).collect();
        let vectors = state.provider.embed_batch(&texts).await?;
        if vectors.len() != texts.len() {
            return Err(IndexError::provider(format!(
                "embed_batch returned {} vectors for {} texts",
                vectors.len(),
                texts.len()
            ))
            .into());
        }

        let entries: Vec<EmbeddedChunk> = chunks
            .into_iter()
            .zip(vectors)
            .map(|(chunk, vector)| EmbeddedChunk::new(chunk, vector))
            .collect();
        let added = state.index.append(entries)?;
        state.documents.push(document);

        log::info!("Ingested {} chunks (index total {})", added, state.index.len());

        // Durability is best-effort per call: a failed save is reported,
        // the in-memory append stands.
        if let Err(err) = self.persistence.save(&state.index).await {
            log::warn!("Index save failed after append: {err}");
            return Err(err.into());
        }

        Ok(added)
    }

    /// Answer a retrieval query with a guardrail decision
    ///
    /// Pipeline: embed the question, search the index for `k` neighbors,
    /// score each by [`confidence`], then gate on the best match. Empty
    /// index resolves to `Rejected(NoContext)`; a best confidence below
    /// the threshold resolves to `Rejected(LowConfidence)`. Embedding and
    /// dimension failures abort with an error — they never degrade into a
    /// rejection.
    pub async fn query(
        &self,
        question: &str,
        k: usize,
        confidence_threshold: f32,
    ) -> Result<GuardrailDecision> {
        log::debug!("Query (k={k}, threshold={confidence_threshold:.3})");

        let state = self.state.read().await;
        let query_vector = state.provider.embed(question).await?;

        let neighbors = match state.index.search(&query_vector, k) {
            Ok(neighbors) => neighbors,
            Err(IndexError::EmptyIndex) => {
                log::info!("Query rejected: index holds no context");
                return Ok(GuardrailDecision::Rejected(RejectReason::NoContext));
            }
            Err(err) => return Err(err.into()),
        };

        let mut results = Vec::with_capacity(neighbors.len());
        for neighbor in neighbors {
            let Some(entry) = state.index.get(neighbor.id) else {
                continue;
            };
            let chunk = entry.chunk.clone();
            results.push(RetrievalResult {
                source_name: state.source_name_for(&chunk.document_id),
                chunk_index: chunk.chunk_index,
                distance: neighbor.distance,
                confidence: confidence(neighbor.distance),
                chunk,
            });
        }

        // Gate on the best match only; weaker results stay in the
        // accepted set so downstream can still log them.
        match results.first() {
            None => Ok(GuardrailDecision::Rejected(RejectReason::NoContext)),
            Some(best) if best.confidence < confidence_threshold => {
                log::info!(
                    "Query rejected: best confidence {:.3} below threshold {:.3}",
                    best.confidence,
                    confidence_threshold
                );
                Ok(GuardrailDecision::Rejected(RejectReason::LowConfidence))
            }
            Some(_) => Ok(GuardrailDecision::Accepted(results)),
        }
    }

    /// Rebuild the index from all stored documents under a new provider
    ///
    /// The replacement index is built in full before it is swapped in, so
    /// readers see either the old index or the new one, never a partially
    /// populated intermediate. Old vectors are discarded wholesale.
    /// Returns the number of chunks in the rebuilt index.
    pub async fn rebuild_index(&self, provider: Arc<dyn EmbeddingProvider>) -> Result<usize> {
        let mut state = self.state.write().await;

        log::info!(
            "Rebuilding index: {} documents, provider dimension {} -> {}",
            state.documents.len(),
            state.index.dimension(),
            provider.dimension()
        );

        let mut index = VectorIndex::new(provider.dimension());
        for document in &state.documents {
            let chunks = self.chunker.chunk(document);
            if chunks.is_empty() {
                continue;
            }
            let texts: Vec<String> = chunks.iter().map(|chunk| chunk.text.clone()).collect();
            let vectors = provider.embed_batch(&texts).await?;
            let entries: Vec<EmbeddedChunk> = chunks
                .into_iter()
                .zip(vectors)
                .map(|(chunk, vector)| EmbeddedChunk::new(chunk, vector))
                .collect();
            index.append(entries)?;
        }

        let total = index.len();
        state.index = index;
        state.provider = provider;

        if let Err(err) = self.persistence.save(&state.index).await {
            log::warn!("Index save failed after rebuild: {err}");
            return Err(err.into());
        }

        log::info!("Rebuild complete: {total} chunks");
        Ok(total)
    }

    /// Number of chunks currently indexed
    pub async fn chunk_count(&self) -> usize {
        self.state.read().await.index.len()
    }

    /// Number of documents retained for rebuilds
    pub async fn document_count(&self) -> usize {
        self.state.read().await.documents.len()
    }

    /// Dimension of the active index
    pub async fn dimension(&self) -> usize {
        self.state.read().await.index.dimension()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_of_zero_distance_is_one() {
        assert!((confidence(0.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_confidence_decreases_with_distance() {
        assert!(confidence(0.1) > confidence(0.5));
        assert!(confidence(0.5) > confidence(2.0));
        assert!(confidence(2.0) > confidence(100.0));
    }

    #[test]
    fn test_confidence_stays_in_unit_interval() {
        for distance in [0.0, 0.25, 1.0, 10.0, 1e6] {
            let c = confidence(distance);
            assert!(c > 0.0 && c <= 1.0, "confidence({distance}) = {c}");
        }
    }

    #[test]
    fn test_confidence_of_half_distance() {
        assert!((confidence(0.5) - 2.0 / 3.0).abs() < 1e-6);
    }
}
