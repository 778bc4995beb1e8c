use crate::types::RetrievalResult;
use std::collections::HashSet;

/// Format accepted results into a grounding block for the generation
/// caller
///
/// Each result becomes a numbered `[Document N: source]` section; sections
/// are separated so the downstream prompt can keep them apart.
#[must_use]
pub fn format_context(results: &[RetrievalResult]) -> String {
    if results.is_empty() {
        return "No relevant documents found.".to_string();
    }

    results
        .iter()
        .enumerate()
        .map(|(i, result)| {
            format!(
                "[Document {}: {}]\n{}",
                i + 1,
                result.source_name,
                result.chunk.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}

/// Unique source names from ranked results, first-seen order
#[must_use]
pub fn unique_sources(results: &[RetrievalResult]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut sources = Vec::new();
    for result in results {
        if seen.insert(result.source_name.as_str()) {
            sources.push(result.source_name.clone());
        }
    }
    sources
}
