//! Foundational data structures, error types, and decoding options.

pub mod error;
pub mod models;
pub mod options;
