//! Builder methods for creating errors with context

use super::types::Error;

// Helper methods for creating errors with context
impl Error {
    /// Create an invalid argument error for the element at `index`
    #[must_use]
    pub fn invalid_argument(index: usize, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            index,
            message: message.into(),
        }
    }

    /// Create an argument count error
    #[must_use]
    pub fn argument_count(count: usize, max: usize) -> Self {
        Error::ArgumentCount { count, max }
    }

    /// Create an FFI error
    #[must_use]
    pub fn ffi(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Ffi {
            operation: operation.into(),
            message: message.into(),
        }
    }
}
