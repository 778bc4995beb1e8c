use crate::error::{IndexError, Result};
use crate::types::{EmbeddedChunk, Neighbor};

/// In-memory vector index with exact brute-force search
///
/// Entries are keyed by insertion ordinal: the first appended entry has id
/// 0, the next id 1, and so on. Ids are never reused; the only way to drop
/// entries is to replace the whole index (the rebuild path).
#[derive(Debug, Clone)]
pub struct VectorIndex {
    dimension: usize,
    entries: Vec<EmbeddedChunk>,
}

impl VectorIndex {
    /// Create an empty index with a fixed vector dimension
    #[must_use]
    pub const fn new(dimension: usize) -> Self {
        Self {
            dimension,
            entries: Vec::new(),
        }
    }

    /// Reassemble an index from persisted parts, validating every entry
    pub fn from_parts(dimension: usize, entries: Vec<EmbeddedChunk>) -> Result<Self> {
        let mut index = Self::new(dimension);
        index.append(entries)?;
        Ok(index)
    }

    /// Append embedded chunks in order, assigning ordinal ids
    ///
    /// Every entry is validated against the index dimension before any is
    /// stored, so a failed append leaves the index untouched.
    pub fn append(&mut self, entries: Vec<EmbeddedChunk>) -> Result<usize> {
        for entry in &entries {
            if entry.dimension() != self.dimension {
                return Err(IndexError::DimensionMismatch {
                    expected: self.dimension,
                    actual: entry.dimension(),
                });
            }
        }

        let added = entries.len();
        self.entries.extend(entries);
        log::debug!("Appended {} vectors, total {}", added, self.entries.len());
        Ok(added)
    }

    /// Search for the `k` nearest entries by squared Euclidean distance
    ///
    /// Results are sorted ascending by distance; equal distances rank by
    /// ascending id. Brute-force scan: O(n), exact, deterministic.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>> {
        if k == 0 {
            return Err(IndexError::InvalidTopK(k));
        }
        if query.len() != self.dimension {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }
        if self.entries.is_empty() {
            return Err(IndexError::EmptyIndex);
        }

        let mut neighbors: Vec<Neighbor> = self
            .entries
            .iter()
            .enumerate()
            .map(|(id, entry)| Neighbor {
                id,
                distance: squared_l2(query, &entry.vector),
            })
            .collect();

        neighbors.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });
        neighbors.truncate(k);

        Ok(neighbors)
    }

    /// Get an entry by its ordinal id
    #[must_use]
    pub fn get(&self, id: usize) -> Option<&EmbeddedChunk> {
        self.entries.get(id)
    }

    /// All entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[EmbeddedChunk] {
        &self.entries
    }

    /// Number of stored vectors
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index holds no vectors
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fixed vector dimension of this index
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }
}

fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docqa_chunker::Chunk;

    fn entry(text: &str, vector: Vec<f32>) -> EmbeddedChunk {
        let count = text.split_whitespace().count();
        EmbeddedChunk::new(Chunk::new("doc", 0, text, count), vector)
    }

    #[test]
    fn test_append_and_search_ordering() {
        let mut index = VectorIndex::new(3);
        index
            .append(vec![
                entry("a", vec![1.0, 0.0, 0.0]),
                entry("b", vec![0.0, 1.0, 0.0]),
                entry("c", vec![0.9, 0.1, 0.0]),
            ])
            .unwrap();
        assert_eq!(index.len(), 3);

        let results = index.search(&[1.0, 0.0, 0.0], 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, 0);
        assert!(results[0].distance.abs() < 1e-6);
        assert_eq!(results[1].id, 2);
        assert!(results[0].distance <= results[1].distance);
    }

    #[test]
    fn test_ties_rank_by_insertion_id() {
        let mut index = VectorIndex::new(2);
        // Both entries sit at squared distance 1.0 from the origin query.
        index
            .append(vec![
                entry("first", vec![0.0, 1.0]),
                entry("second", vec![1.0, 0.0]),
            ])
            .unwrap();

        let results = index.search(&[0.0, 0.0], 2).unwrap();
        assert_eq!(results[0].id, 0);
        assert_eq!(results[1].id, 1);
    }

    #[test]
    fn test_k_larger_than_index() {
        let mut index = VectorIndex::new(2);
        index.append(vec![entry("only", vec![0.5, 0.5])]).unwrap();

        let results = index.search(&[0.0, 0.0], 10).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_append_dimension_mismatch_leaves_index_unchanged() {
        let mut index = VectorIndex::new(3);
        index.append(vec![entry("ok", vec![0.0; 3])]).unwrap();

        let err = index
            .append(vec![
                entry("also ok", vec![1.0; 3]),
                entry("bad", vec![1.0; 2]),
            ])
            .unwrap_err();
        assert!(matches!(
            err,
            IndexError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        ));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_search_dimension_mismatch() {
        let mut index = VectorIndex::new(3);
        index.append(vec![entry("ok", vec![0.0; 3])]).unwrap();
        let err = index.search(&[0.0; 4], 1).unwrap_err();
        assert!(matches!(err, IndexError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_empty_index_search() {
        let index = VectorIndex::new(3);
        let err = index.search(&[0.0; 3], 1).unwrap_err();
        assert!(matches!(err, IndexError::EmptyIndex));
    }

    #[test]
    fn test_zero_k_rejected() {
        let mut index = VectorIndex::new(2);
        index.append(vec![entry("ok", vec![0.0; 2])]).unwrap();
        let err = index.search(&[0.0; 2], 0).unwrap_err();
        assert!(matches!(err, IndexError::InvalidTopK(0)));
    }

    #[test]
    fn test_ids_are_insertion_ordinals() {
        let mut index = VectorIndex::new(1);
        index.append(vec![entry("zero", vec![0.0])]).unwrap();
        index
            .append(vec![entry("one", vec![1.0]), entry("two", vec![2.0])])
            .unwrap();

        assert_eq!(index.get(1).unwrap().chunk.text, "one");
        assert_eq!(index.get(2).unwrap().chunk.text, "two");
        assert!(index.get(3).is_none());
    }
}
