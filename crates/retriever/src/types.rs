use docqa_chunker::Chunk;
use serde::Serialize;

/// A single ranked retrieval match
///
/// Ephemeral: computed per query, handed to the caller, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RetrievalResult {
    /// The matched chunk
    pub chunk: Chunk,

    /// Source name of the document the chunk came from
    pub source_name: String,

    /// Position of the chunk within its document
    pub chunk_index: usize,

    /// Squared Euclidean distance to the query (lower is better)
    pub distance: f32,

    /// Normalized confidence in (0, 1], derived from `distance`
    pub confidence: f32,
}

/// Why a query was rejected by the guardrail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    /// The index holds no entries, or search produced no candidates
    NoContext,

    /// Candidates exist but the best match fell below the threshold
    LowConfidence,
}

impl RejectReason {
    /// Stable wire string for this reason
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoContext => "no-context",
            Self::LowConfidence => "low-confidence",
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the retrieval guardrail for one query
///
/// `Accepted` carries all requested results, including ones individually
/// below the threshold — the gate applies to the best match only, and
/// downstream consumers may still want to log the stragglers. The caller
/// must not forward any context to generation on `Rejected`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum GuardrailDecision {
    Accepted(Vec<RetrievalResult>),
    Rejected(RejectReason),
}

impl GuardrailDecision {
    /// Check whether retrieval produced usable context
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Accepted results, if any
    #[must_use]
    pub fn results(&self) -> Option<&[RetrievalResult]> {
        match self {
            Self::Accepted(results) => Some(results),
            Self::Rejected(_) => None,
        }
    }
}
