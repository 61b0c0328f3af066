//! Error types for ffrun operations

mod builders;
mod display;
mod types;

pub use types::{Error, Result};
