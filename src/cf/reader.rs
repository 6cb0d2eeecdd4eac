//! Container handle over a borrowed byte buffer.

use log::{debug, info};

use super::format::{page::PageReader, pointers, row};
use super::iter::RowIterator;
use super::types::error::Result;
use super::types::models::*;

/// A container over a borrowed byte buffer.
///
/// Holds nothing but the bytes and the storage mode; every read creates its
/// own cursor, so a `Container` can be shared freely between readers.
#[derive(Debug, Clone, Copy)]
pub struct Container<'a> {
    data: &'a [u8],
    mode: ContainerMode,
}

impl<'a> Container<'a> {
    /// Wrap container bytes.
    ///
    /// # Arguments
    /// * `data` - The complete container, starting at its image header
    /// * `mode` - [`ContainerMode::Compressed`] for containers read from a
    ///   file, [`ContainerMode::Raw`] for containers found inside a row body
    pub fn new(data: &'a [u8], mode: ContainerMode) -> Self {
        Self { data, mode }
    }

    pub fn mode(&self) -> ContainerMode {
        self.mode
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Reads the pointer table and returns the per-row offsets in table order.
    pub fn row_pointers(&self) -> Result<Vec<RowPointer>> {
        let mut reader = PageReader::new(self.data);
        pointers::read_row_pointers(&mut reader)
    }

    /// Returns an iterator over all rows in pointer-table order.
    ///
    /// The pointer table is decoded up front; rows are read lazily, one per
    /// call to `next`.
    ///
    /// # Errors
    /// Returns an error if the pointer table is corrupted.
    pub fn rows(&self) -> Result<RowIterator<'a>> {
        let pointers = self.row_pointers()?;
        info!(
            "Opened {} container: {} bytes, {} rows",
            self.mode,
            self.data.len(),
            pointers.len()
        );
        Ok(RowIterator::new(*self, pointers))
    }

    /// Reads a single row given its pointer-table entry.
    ///
    /// The body is inflated when the container is compressed.
    pub fn read_row(&self, pointer: RowPointer) -> Result<Row> {
        let mut reader = PageReader::new(self.data);

        reader.set_position(pointer.header_offset as usize)?;
        let (id, metadata) = row::read_row_identifier(&mut reader)?;

        reader.set_position(pointer.body_offset as usize)?;
        let body = row::read_row_body(&mut reader, self.mode)?;

        debug!("Row {:?}: {} body bytes", id, body.len());
        Ok(Row { id, metadata, body })
    }
}
