//! Compiled-in embedding catalog
//!
//! The reference vectors are baked into the binary as raw little-endian f64
//! records (768 components per entry) and decoded exactly once per process.
//! The catalog is read-only for the lifetime of the process; concurrent
//! readers need no synchronization.

use std::sync::OnceLock;

use thiserror::Error;

/// Number of f64 components per embedding
pub const EMBEDDING_DIM: usize = 768;

/// Bytes per embedding record in the compiled-in asset
const RECORD_SIZE: usize = EMBEDDING_DIM * std::mem::size_of::<f64>();

static EMBEDDED: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/embeddings.f64le"
));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog data is {len} bytes, not a multiple of the {record}-byte record size")]
    Malformed { len: usize, record: usize },

    #[error("row {row} has {actual} components, expected {expected}")]
    RowDimension {
        row: usize,
        actual: usize,
        expected: usize,
    },

    #[error("Index out of bounds: {index} >= {count}")]
    IndexOutOfBounds { index: usize, count: usize },
}

/// Immutable collection of 768-dimensional reference embeddings
///
/// Entries are stored as one flat `Vec<f64>` in catalog order. An empty
/// catalog is a valid (degenerate) state; the search layer reports it as an
/// error instead of returning an empty result list.
pub struct Catalog {
    components: Vec<f64>,
    count: usize,
}

impl Catalog {
    /// Catalog with zero entries
    pub fn empty() -> Self {
        Self {
            components: Vec::new(),
            count: 0,
        }
    }

    /// Decode a catalog from raw little-endian f64 records
    pub fn from_le_bytes(data: &[u8]) -> Result<Self, CatalogError> {
        if data.len() % RECORD_SIZE != 0 {
            return Err(CatalogError::Malformed {
                len: data.len(),
                record: RECORD_SIZE,
            });
        }

        let mut components = Vec::with_capacity(data.len() / std::mem::size_of::<f64>());
        for chunk in data.chunks_exact(std::mem::size_of::<f64>()) {
            let bytes: [u8; 8] = chunk.try_into().expect("chunks_exact yields 8-byte chunks");
            components.push(f64::from_le_bytes(bytes));
        }

        Ok(Self {
            count: components.len() / EMBEDDING_DIM,
            components,
        })
    }

    /// Build a catalog from individual rows (synthetic catalogs for tests)
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, CatalogError> {
        let mut components = Vec::with_capacity(rows.len() * EMBEDDING_DIM);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != EMBEDDING_DIM {
                return Err(CatalogError::RowDimension {
                    row,
                    actual: values.len(),
                    expected: EMBEDDING_DIM,
                });
            }
            components.extend_from_slice(values);
        }

        Ok(Self {
            count: rows.len(),
            components,
        })
    }

    /// Number of embeddings in the catalog
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get an embedding by index
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds. Use `try_get` for a
    /// non-panicking version.
    #[inline]
    pub fn get(&self, index: usize) -> &[f64] {
        self.try_get(index).expect("catalog access failed")
    }

    /// Try to get an embedding by index
    pub fn try_get(&self, index: usize) -> Result<&[f64], CatalogError> {
        if index >= self.count {
            return Err(CatalogError::IndexOutOfBounds {
                index,
                count: self.count,
            });
        }

        let start = index * EMBEDDING_DIM;
        Ok(&self.components[start..start + EMBEDDING_DIM])
    }

    /// Iterate over all embeddings in catalog order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[f64]> {
        self.components.chunks_exact(EMBEDDING_DIM)
    }
}

/// The compiled-in catalog, decoded on first access
///
/// A malformed asset is a build defect; it is logged and degraded to the
/// empty catalog, which the search layer reports as an error payload.
pub fn builtin() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        Catalog::from_le_bytes(EMBEDDED).unwrap_or_else(|e| {
            tracing::error!("Compiled-in catalog is malformed: {e}");
            Catalog::empty()
        })
    })
}
