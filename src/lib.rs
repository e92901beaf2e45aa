//! Emoji-Search: semantic nearest-neighbor lookup over a compiled-in emoji catalog
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │        C ABI (search_emojis / free_result) · CLI            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │          Ranking (exhaustive cosine scan, top-5 cut)        │
//! │                   JSON payload encoding                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │         Catalog (compiled-in 768-d f64 embeddings)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod codec;
pub mod metadata;
pub mod query;
pub mod search;
pub mod similarity;

pub use catalog::{Catalog, EMBEDDING_DIM};
pub use search::{rank, ScoredEntry, SearchError, TOP_K};
pub use similarity::cosine_similarity;
