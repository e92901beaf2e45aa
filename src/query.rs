//! Query-vector file loader
//!
//! Reads whitespace-separated f64 values (spaces, tabs, and newlines all
//! delimit) and requires exactly [`EMBEDDING_DIM`] of them.

use std::path::Path;

use crate::catalog::EMBEDDING_DIM;
use crate::search::SearchError;

/// Load a 768-component query vector from a plain-text file
pub fn load_query_vector<P: AsRef<Path>>(path: P) -> Result<Vec<f64>, SearchError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| SearchError::SourceUnavailable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut values = Vec::with_capacity(EMBEDDING_DIM);
    for token in text.split_whitespace() {
        let value: f64 = token.parse().map_err(|e| SearchError::SourceUnavailable {
            path: path.display().to_string(),
            reason: format!("invalid value '{token}': {e}"),
        })?;
        values.push(value);
    }

    if values.len() != EMBEDDING_DIM {
        return Err(SearchError::DimensionMismatch {
            expected: EMBEDDING_DIM,
            actual: values.len(),
        });
    }

    Ok(values)
}
