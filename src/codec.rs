//! JSON payload encoding for search results
//!
//! The wire format is consumed by a host runtime across the C ABI:
//!
//! ```text
//! {"results":[{"index":120,"score":0.8123}, ...]}
//! {"time_ms":1.2500,"results":[...]}
//! {"error":"Emoji database is empty"}
//! ```
//!
//! Every float renders with exactly 4 digits after the decimal point,
//! locale-independent. Error payloads never carry a `results` field.

use serde::Serialize;
use serde_json::value::RawValue;

use crate::search::{ScoredEntry, SearchError};

/// Render a float with fixed 4-decimal precision as a raw JSON number
fn fixed4(value: f64) -> Box<RawValue> {
    // `{:.4}` of a non-finite value would not be valid JSON; the similarity
    // kernel never produces one, but a hostile query buffer could.
    let value = if value.is_finite() { value } else { 0.0 };
    RawValue::from_string(format!("{value:.4}")).expect("fixed-precision float is valid JSON")
}

#[derive(Serialize)]
struct ResultEntry {
    index: usize,
    score: Box<RawValue>,
}

#[derive(Serialize)]
struct SearchPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    time_ms: Option<Box<RawValue>>,
    results: Vec<ResultEntry>,
}

#[derive(Serialize)]
struct ErrorPayload {
    error: String,
}

/// Encode a ranked result list, optionally with elapsed computation time
pub fn encode_results(entries: &[ScoredEntry], elapsed_ms: Option<f64>) -> String {
    let payload = SearchPayload {
        time_ms: elapsed_ms.map(fixed4),
        results: entries
            .iter()
            .map(|e| ResultEntry {
                index: e.index,
                score: fixed4(e.score),
            })
            .collect(),
    };
    serde_json::to_string(&payload).expect("search payload serializes")
}

/// Encode an error as a `{"error": ...}` payload
pub fn encode_error(err: &SearchError) -> String {
    let payload = ErrorPayload {
        error: err.to_string(),
    };
    serde_json::to_string(&payload).expect("error payload serializes")
}
