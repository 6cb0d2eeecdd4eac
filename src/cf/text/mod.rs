//! Structural-text indexing.
//!
//! Payloads such as object headers hold nested lists in a brace/quote/comma
//! grammar:
//!
//! ```text
//! {1,{"name",{2,3}},"quoted, with comma"}
//! ```
//!
//! Instead of building a tree of nodes, the scanner records every element
//! in a flat arena in scan order. Each slot stores its byte span and the
//! index of its next sibling, which is enough for [`StructuralIndex`] to
//! answer positional path queries by hopping along sibling links.

mod index;
mod scanner;

pub use index::{Children, StructuralIndex};
