//! # Page Reader
//!
//! A read cursor over the immutable container bytes. It knows how to decode a
//! page header and how to move around, but nothing about rows or directories.
//!
//! ## Page header layout
//! ```text
//! offset  0..2   CRLF line-start marker
//!         2..10  full_size  (8 hex digits)
//!        10      separator
//!        11..19  page_size  (8 hex digits)
//!        19      separator
//!        20..28  next_page  (8 hex digits)
//!        28      separator
//!        29..31  CRLF closing marker
//! ```

use log::{debug, trace};

use crate::cf::types::error::{CfError, Result};
use crate::cf::types::models::{PageHeader, PAGE_HEADER_LEN};
use crate::cf::utils;

const LINE_MARKER: &[u8; 2] = b"\r\n";

/// Cursor over a container's bytes.
#[derive(Debug, Clone)]
pub struct PageReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> PageReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total number of bytes under the cursor.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Jump to an absolute offset.
    ///
    /// # Errors
    /// [`CfError::OutOfBounds`] if `pos` is at or past the end; the format
    /// never points at the very end of its buffer.
    pub fn set_position(&mut self, pos: usize) -> Result<()> {
        if pos >= self.data.len() {
            return Err(self.out_of_bounds(pos));
        }
        self.pos = pos;
        Ok(())
    }

    /// Return the next `count` bytes and advance past them.
    ///
    /// # Errors
    /// [`CfError::OutOfBounds`] if fewer than `count` bytes remain.
    pub fn read(&mut self, count: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(count)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| self.out_of_bounds(self.pos.saturating_add(count)))?;
        let data = self.data;
        let bytes = &data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    /// Advance the cursor by `count` bytes.
    ///
    /// Something always follows a skipped region, so landing exactly on the
    /// end is an error too.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        let target = self.pos.saturating_add(count);
        self.set_position(target)
    }

    /// Decode the page header at the cursor and advance past it.
    ///
    /// # Errors
    /// - [`CfError::OutOfBounds`] if the header is truncated
    /// - [`CfError::MalformedHeader`] if a numeric field is not hex
    pub fn read_page_header(&mut self) -> Result<PageHeader> {
        let start = self.pos;
        let raw = self.read(PAGE_HEADER_LEN)?;

        if &raw[0..2] != LINE_MARKER || &raw[29..31] != LINE_MARKER {
            debug!("Page header at {} has unexpected line markers", start);
        }

        let header = PageHeader {
            full_size: utils::parse_hex_field(&raw[2..10])?,
            page_size: utils::parse_hex_field(&raw[11..19])?,
            next_page: utils::parse_hex_field(&raw[20..28])?,
        };

        trace!(
            "Page header at {}: full_size={}, page_size={}, next_page={:#010x}",
            start, header.full_size, header.page_size, header.next_page
        );
        Ok(header)
    }

    /// Upper bound on page hops any single chain in this buffer can make.
    ///
    /// Every page carries at least a header, so a chain longer than this must
    /// revisit a page.
    pub fn max_page_hops(&self) -> usize {
        (self.data.len() / PAGE_HEADER_LEN).max(1)
    }

    fn out_of_bounds(&self, position: usize) -> CfError {
        CfError::OutOfBounds {
            position,
            len: self.data.len(),
        }
    }
}
