//! Cosine similarity over f64 embedding vectors
//!
//! Pure functions with no side effects. A zero-magnitude vector carries no
//! directional information, so its similarity to anything is defined as 0.0
//! rather than NaN or an error.

/// Euclidean magnitude of a vector
#[inline]
pub fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity between two vectors of the same dimension
///
/// Returns dot(a, b) / (|a| * |b|), in [-1.0, 1.0]. If either magnitude is
/// exactly zero the result is 0.0.
#[inline]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "Vector length mismatch");

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();

    let mag_a = magnitude(a);
    let mag_b = magnitude(b);
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    dot / (mag_a * mag_b)
}
