//! Codec layer for pure byte transformations.
//!
//! # Submodules
//!
//! - [`compression`][]: Row body decompression (raw DEFLATE)

pub mod compression;
