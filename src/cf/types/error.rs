//! Custom error types for the cf-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum CfError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A read or a cursor jump went past the end of the container bytes.
    ///
    /// The format never legitimately points outside its own buffer, so this
    /// always means the input is corrupted.
    #[error("Position {position} is out of bounds for container of {len} bytes")]
    OutOfBounds { position: usize, len: usize },

    /// A page header (or a structure derived from one) is not valid.
    ///
    /// Covers non-hex size fields, sizes that contradict each other, and
    /// page chains that never reach the terminator.
    #[error("Malformed page header: {0}")]
    MalformedHeader(String),

    /// A row body could not be inflated.
    #[error("Decompression failed: {0}")]
    DecompressionFailure(String),

    /// A structural-text path addressed a sibling that does not exist, or
    /// tried to descend into a scalar.
    #[error("Path {path:?} is out of range at depth {depth}")]
    PathOutOfRange { path: Vec<usize>, depth: usize },

    /// Structural text ended inside a composite or a quoted scalar.
    #[error("Malformed structural text at byte {position}: {detail}")]
    MalformedText { position: usize, detail: &'static str },

    /// Nesting exceeded the configured recursion limit.
    #[error("Nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// A convenience `Result` type alias using the crate's `CfError` type.
pub type Result<T> = std::result::Result<T, CfError>;
