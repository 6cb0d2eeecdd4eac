//! Core data structures for container components.
//!
//! This module defines the fundamental types used throughout the library:
//! - Format constants (sentinels, fixed header sizes)
//! - Page headers and row records
//! - Container modes
//! - Structural-text index elements

/// Value of `next_page` meaning "no further page, the chain ends here".
pub const END_OF_CHAIN: u32 = 0x7FFF_FFFF;

/// Value whose little-endian encoding, as the first four bytes of a row body,
/// marks that body as a nested container.
///
/// Intentionally the same bit pattern as [`END_OF_CHAIN`]; the format reuses
/// one constant for both roles.
pub const NESTED_CONTAINER_MARKER: u32 = 0x7FFF_FFFF;

/// Size of the container image header that precedes the pointer table.
///
/// Four little-endian u32 fields: first free block, default page size,
/// revision, reserved.
pub const IMAGE_HEADER_LEN: usize = 4 + 4 + 4 + 4;

/// Size of the text-encoded page header.
///
/// ```text
/// CRLF  full_size  ' '  page_size  ' '  next_page  ' '  CRLF
///  2       8        1       8       1       8       1     2
/// ```
pub const PAGE_HEADER_LEN: usize = 2 + 9 + 9 + 9 + 2;

/// Size of the row metadata block: two timestamps plus one attribute word.
pub const ROW_METADATA_LEN: usize = 8 + 8 + 4;

/// Trailing bytes counted in a row header's `full_size` after the identifier.
pub const ROW_HEADER_TRAILER_LEN: usize = 4;

/// Byte-order marker some text payloads carry (or expect callers to prepend).
pub const UTF8_BOM: &[u8; 3] = b"\xEF\xBB\xBF";

/// Decoded page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHeader {
    /// Total logical size of the element that starts on this page.
    pub full_size: u32,
    /// Bytes physically stored on this page.
    pub page_size: u32,
    /// Offset of the next page, or [`END_OF_CHAIN`].
    pub next_page: u32,
}

impl PageHeader {
    /// Returns `true` if no page follows this one.
    pub fn is_last(&self) -> bool {
        self.next_page == END_OF_CHAIN
    }
}

/// How row bodies of a container are stored.
///
/// A container read from a file stores DEFLATE-compressed bodies; a container
/// recovered from a nested row body is already inflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerMode {
    #[default]
    Compressed,
    Raw,
}

impl std::fmt::Display for ContainerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ContainerMode::Compressed => write!(f, "compressed"),
            ContainerMode::Raw => write!(f, "raw"),
        }
    }
}

/// The fixed metadata block at the start of every row header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowMetadata {
    pub created: u64,
    pub modified: u64,
    pub attributes: u32,
}

/// Offsets of one row, taken from the pointer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPointer {
    pub header_offset: u32,
    pub body_offset: u32,
}

/// One logical row, reassembled from its pages.
///
/// `body` is already inflated when the owning container is compressed.
#[derive(Debug, Clone)]
pub struct Row {
    pub id: String,
    pub metadata: RowMetadata,
    pub body: Vec<u8>,
}

impl Row {
    /// Returns `true` if the body holds a nested container rather than a payload.
    pub fn is_nested_container(&self) -> bool {
        self.body.len() >= 4 && self.body[..4] == NESTED_CONTAINER_MARKER.to_le_bytes()
    }
}

/// Kind of a structural-text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// A braced list; its span includes both braces.
    Composite,
    /// A bare or quoted value; quotes are part of the span.
    Scalar,
}

/// One slot of the flat structural-text index.
///
/// `next` is the index of the following sibling. For the last child of a
/// composite it equals the composite's own `next`, which is one past the
/// composite's last descendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub begin: usize,
    pub end: usize,
    pub next: usize,
}

impl Element {
    pub fn is_composite(&self) -> bool {
        self.kind == ElementKind::Composite
    }
}
