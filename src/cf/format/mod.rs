//! File format parsing layer for paged containers.
//!
//! This module provides the mid-level parsing layer that bridges between
//! the raw container bytes and the high-level [`Container`](crate::cf::reader::Container).
//!
//! # Module Organization
//!
//! - [`page`]: Read cursor and page header decoding
//! - [`pointers`]: The row-pointer table at the top of a container
//! - [`row`]: Row identifiers and chained, optionally compressed row bodies
//!
//! # Architecture
//!
//! ```text
//! Container Structure:
//! ┌─────────────────┐
//! │  Image Header   │  16 bytes, first field is 0x7FFFFFFF
//! ├─────────────────┤
//! │  Pointer Table  │ ← pointers::read_row_pointers()
//! │  (paged)        │
//! ├─────────────────┤
//! │  Row Headers    │ ← row::read_row_identifier()
//! │  Row Bodies     │ ← row::read_row_body()
//! │  (paged,        │
//! │   chained)      │
//! └─────────────────┘
//! ```

pub mod page;
pub mod pointers;
pub mod row;
