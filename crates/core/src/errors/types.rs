//! Core error type definitions

/// Result type alias for ffrun operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ffrun operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Arguments that cannot be encoded as C strings
    InvalidArgument { index: usize, message: String },

    /// Argument lists too long to describe with a native `argc`
    ArgumentCount { count: usize, max: usize },

    /// FFI errors from the native entry point boundary
    Ffi { operation: String, message: String },
}
