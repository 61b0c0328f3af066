//! Core domain types, errors, and constants for the `ffrun` workspace.
//!
//! This module establishes the foundational data structures and error handling
//! mechanisms used throughout the entire codebase. It aims to provide clear,
//! type-safe, and consistent building blocks.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias,
//!   centralizing all possible failure modes for predictable error handling.
//! - **`constants`**: A collection of shared, static constants such as the
//!   fixed program-name token and the native entry point's symbol name.

pub mod constants;
pub mod errors;

// Re-export the most important items from the sub-modules so they can be
// conveniently accessed without needing to specify the sub-module name.
pub use self::{
    constants::*,
    errors::{Error, Result},
};
