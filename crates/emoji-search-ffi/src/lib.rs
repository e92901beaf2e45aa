//! Emoji-Search FFI – C ABI bindings
//!
//! All entry points wrap Rust calls in `std::panic::catch_unwind` to prevent
//! panics from unwinding into the host runtime, which would be undefined
//! behavior.

pub mod c_api;
