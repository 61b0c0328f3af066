//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { index, message } => {
                write!(f, "invalid argument at index {index}: {message}")
            }
            Error::ArgumentCount { count, max } => {
                write!(
                    f,
                    "cannot marshal {count} arguments: at most {max} fit in a native argc"
                )
            }
            Error::Ffi { operation, message } => {
                write!(f, "FFI operation '{operation}' failed: {message}")
            }
        }
    }
}
