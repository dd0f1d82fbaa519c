//! Execution-ready workflow representation.

pub mod types;

pub use types::*;
