//! Core container reader module

pub mod codec;
pub mod directory;
pub mod format;
pub mod iter;
pub mod reader;
pub mod text;
pub mod types;
mod utils;

pub use directory::{Directory, Entry, Payload};
pub use reader::Container;
pub use text::StructuralIndex;
pub use types::error::{CfError, Result};

/// Decode a top-level container (compressed row bodies) into its directory.
pub fn open_container(bytes: &[u8]) -> Result<Directory> {
    Directory::open(bytes)
}

/// Index a payload's text for positional path queries.
pub fn build_structural_index(text: &str) -> Result<StructuralIndex<'_>> {
    StructuralIndex::build(text)
}
