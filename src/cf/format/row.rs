//! # Row Assembly
//!
//! A row is an identifier record plus a body, each starting with a page
//! header. Bodies may span several pages linked through `next_page`.
//!
//! ## Row header structure
//! ```text
//! [31 bytes] page header (full_size covers everything below)
//! [ 8 bytes] creation timestamp   (LE u64)
//! [ 8 bytes] modification timestamp (LE u64)
//! [ 4 bytes] attributes           (LE u32)
//! [ N bytes] identifier, UTF-16LE
//! [ 4 bytes] trailer
//! ```

use byteorder::{ByteOrder, LittleEndian};
use log::trace;

use super::page::PageReader;
use crate::cf::codec::compression;
use crate::cf::types::error::{CfError, Result};
use crate::cf::types::models::{
    ContainerMode, RowMetadata, ROW_HEADER_TRAILER_LEN, ROW_METADATA_LEN,
};
use crate::cf::utils;

/// Reads the row header at the cursor, returning its identifier and metadata.
///
/// Null bytes are dropped from the identifier, which turns the stored
/// UTF-16LE text into a plain string for ASCII identifiers.
pub fn read_row_identifier(reader: &mut PageReader<'_>) -> Result<(String, RowMetadata)> {
    let header = reader.read_page_header()?;
    let id_len = (header.full_size as usize)
        .checked_sub(ROW_METADATA_LEN + ROW_HEADER_TRAILER_LEN)
        .ok_or_else(|| {
            CfError::MalformedHeader(format!(
                "Row header full_size {} is smaller than its fixed part ({} bytes)",
                header.full_size,
                ROW_METADATA_LEN + ROW_HEADER_TRAILER_LEN
            ))
        })?;

    let raw_meta = reader.read(ROW_METADATA_LEN)?;
    let metadata = RowMetadata {
        created: LittleEndian::read_u64(&raw_meta[0..8]),
        modified: LittleEndian::read_u64(&raw_meta[8..16]),
        attributes: LittleEndian::read_u32(&raw_meta[16..20]),
    };

    let id = utils::strip_nulls(reader.read(id_len)?);
    trace!("Row identifier {:?} ({} bytes stored)", id, id_len);
    Ok((id, metadata))
}

/// Reads a row body exactly as stored, following its page chain.
///
/// The first page header's `full_size` is the body length. Each page
/// contributes at most `page_size` bytes; reading stops at the end-of-chain
/// marker or once `full_size` bytes have been collected.
///
/// # Errors
/// - [`CfError::OutOfBounds`] if a page or a jump leaves the buffer
/// - [`CfError::MalformedHeader`] if the chain ends short of `full_size` or
///   makes more hops than the buffer can hold pages (a cycle)
pub fn read_raw_body(reader: &mut PageReader<'_>) -> Result<Vec<u8>> {
    let first = reader.read_page_header()?;
    let full_size = first.full_size as usize;
    let max_hops = reader.max_page_hops();

    // `full_size` is untrusted until the pages have been read.
    let mut body = Vec::with_capacity(full_size.min(reader.len()));
    let mut remaining = full_size;
    let mut page = first;
    let mut hops = 0usize;

    loop {
        let take = remaining.min(page.page_size as usize);
        body.extend_from_slice(reader.read(take)?);
        remaining -= take;

        if page.is_last() || remaining == 0 {
            break;
        }

        hops += 1;
        if hops > max_hops {
            return Err(CfError::MalformedHeader(format!(
                "Page chain exceeds {} hops (possible cycle)",
                max_hops
            )));
        }
        reader.set_position(page.next_page as usize)?;
        page = reader.read_page_header()?;
    }

    if remaining != 0 {
        return Err(CfError::MalformedHeader(format!(
            "Page chain ended prematurely: got {} of {} bytes",
            full_size - remaining,
            full_size
        )));
    }

    trace!("Assembled row body of {} bytes over {} pages", body.len(), hops + 1);
    Ok(body)
}

/// Reads a row body and inflates it when the container is compressed.
pub fn read_row_body(reader: &mut PageReader<'_>, mode: ContainerMode) -> Result<Vec<u8>> {
    let raw = read_raw_body(reader)?;
    match mode {
        ContainerMode::Compressed => compression::inflate(&raw),
        ContainerMode::Raw => Ok(raw),
    }
}
