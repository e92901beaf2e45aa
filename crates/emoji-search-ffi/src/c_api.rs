//! C-compatible API for host-runtime integration
//!
//! The host supplies a pointer to 768 contiguous f64 values and receives an
//! owned, null-terminated JSON buffer (success or error payload). Every
//! return path, including every error, allocates through the same mechanism,
//! so the caller frees every returned buffer the same way: exactly one
//! `free_result` per `search_emojis` return value.
//!
//! All functions use `std::panic::catch_unwind` so a Rust panic cannot
//! unwind into the host.

use std::ffi::{c_char, CString};
use std::time::Instant;

use emoji_search::catalog::{self, EMBEDDING_DIM};
use emoji_search::codec::{encode_error, encode_results};
use emoji_search::search::{rank, SearchError};

/// Copy a serialized payload into an owned, null-terminated buffer
///
/// The single allocation point for everything handed to the host. JSON
/// payloads never contain interior NUL bytes; if one somehow appears, an
/// empty string is published rather than aborting.
fn publish(payload: String) -> *mut c_char {
    CString::new(payload).unwrap_or_default().into_raw()
}

/// Rank the compiled-in catalog against a query vector
///
/// Returns an owned JSON buffer: `{"time_ms":...,"results":[...]}` on
/// success, `{"error":...}` otherwise. Never returns NULL.
///
/// # Safety
///
/// `query_vector` must be NULL or point to 768 readable, contiguous f64
/// values. The returned buffer must be released with [`free_result`] exactly
/// once; it is owned by the caller from the moment this function returns.
#[no_mangle]
pub unsafe extern "C" fn search_emojis(query_vector: *const f64) -> *mut c_char {
    std::panic::catch_unwind(|| {
        if query_vector.is_null() {
            return publish(encode_error(&SearchError::NullQuery));
        }

        let query = unsafe { std::slice::from_raw_parts(query_vector, EMBEDDING_DIM) };

        let started = Instant::now();
        match rank(catalog::builtin(), query) {
            Ok(ranked) => {
                let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
                publish(encode_results(&ranked, Some(elapsed_ms)))
            }
            Err(err) => publish(encode_error(&err)),
        }
    })
    .unwrap_or_else(|_| publish("{\"error\":\"Panic in search_emojis\"}".to_string()))
}

/// Release a buffer returned by [`search_emojis`]
///
/// NULL is a no-op.
///
/// # Safety
///
/// `ptr` must be NULL or a pointer obtained from [`search_emojis`] that has
/// not already been released. Releasing a foreign pointer or releasing the
/// same pointer twice is undefined behavior.
#[no_mangle]
pub unsafe extern "C" fn free_result(ptr: *mut c_char) {
    let _ = std::panic::catch_unwind(|| {
        if !ptr.is_null() {
            unsafe { drop(CString::from_raw(ptr)) };
        }
    });
}
