//! Exhaustive top-k ranking against the catalog
//!
//! Every catalog entry is scored against the query (O(N × 768)), sorted by
//! score descending, and cut to the top [`TOP_K`]. Ties break toward the
//! lower catalog index so the output order is deterministic.

use std::cmp::Ordering;

use thiserror::Error;

use crate::catalog::{Catalog, EMBEDDING_DIM};
use crate::similarity::cosine_similarity;

/// Maximum number of ranked results returned
pub const TOP_K: usize = 5;

/// One catalog entry with its similarity score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredEntry {
    pub index: usize,
    pub score: f64,
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Query vector is NULL")]
    NullQuery,

    #[error("Emoji database is empty")]
    EmptyCatalog,

    #[error("query vector has {actual} components, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("metadata table has {actual} rows, catalog has {expected} entries")]
    MetadataCountMismatch { expected: usize, actual: usize },

    #[error("cannot read {path}: {reason}")]
    SourceUnavailable { path: String, reason: String },
}

/// Rank all catalog entries by cosine similarity to the query
///
/// Returns the top min([`TOP_K`], N) entries, score descending, ties broken
/// by ascending catalog index. An empty catalog is an error, not an empty
/// result list, so callers can tell "nothing loaded" from "nothing matched".
pub fn rank(catalog: &Catalog, query: &[f64]) -> Result<Vec<ScoredEntry>, SearchError> {
    if catalog.is_empty() {
        return Err(SearchError::EmptyCatalog);
    }
    if query.len() != EMBEDDING_DIM {
        return Err(SearchError::DimensionMismatch {
            expected: EMBEDDING_DIM,
            actual: query.len(),
        });
    }

    let mut scored: Vec<ScoredEntry> = catalog
        .iter()
        .enumerate()
        .map(|(index, reference)| ScoredEntry {
            index,
            score: cosine_similarity(reference, query),
        })
        .collect();

    scored.sort_unstable_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });
    scored.truncate(TOP_K);

    Ok(scored)
}
