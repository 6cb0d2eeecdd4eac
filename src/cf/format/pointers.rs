//! # Row-Pointer Table
//!
//! The pointer table follows the image header at the start of every
//! container. It uses the same page chaining as row bodies, but its pages
//! hold little-endian u32 offsets, grouped in triples:
//!
//! ```text
//! [row header offset] [row body offset] [reserved]
//! ```

use log::{debug, trace};

use super::page::PageReader;
use crate::cf::types::error::{CfError, Result};
use crate::cf::types::models::{RowPointer, IMAGE_HEADER_LEN};
use crate::cf::utils;

/// Number of u32 values per pointer-table entry.
const POINTERS_PER_ROW: usize = 3;

/// Reads the flat pointer sequence of the container under `reader`.
///
/// Every page except the last contributes its whole `page_size`. The last
/// page contributes whatever `full_size` has left, read in place.
pub fn read_pointers(reader: &mut PageReader<'_>) -> Result<Vec<u32>> {
    reader.set_position(0)?;
    reader.skip(IMAGE_HEADER_LEN)?;

    let mut page = reader.read_page_header()?;
    let full_size = page.full_size as usize;
    let max_hops = reader.max_page_hops();

    // `full_size` is untrusted until the pages have been read.
    let mut pointers = Vec::with_capacity(full_size.min(reader.len()) / 4);
    let mut read_size = 0usize;
    let mut hops = 0usize;

    while !page.is_last() {
        let bytes = reader.read(page.page_size as usize)?;
        pointers.extend(utils::read_u32_le_list(bytes)?);
        read_size += page.page_size as usize;

        hops += 1;
        if hops > max_hops {
            return Err(CfError::MalformedHeader(format!(
                "Pointer table chain exceeds {} hops (possible cycle)",
                max_hops
            )));
        }
        reader.set_position(page.next_page as usize)?;
        page = reader.read_page_header()?;
    }

    let tail = full_size.checked_sub(read_size).ok_or_else(|| {
        CfError::MalformedHeader(format!(
            "Pointer table full_size {} is smaller than its chained pages ({} bytes)",
            full_size, read_size
        ))
    })?;
    pointers.extend(utils::read_u32_le_list(reader.read(tail)?)?);

    trace!("Pointer table: {} values over {} pages", pointers.len(), hops + 1);
    Ok(pointers)
}

/// Reads the pointer table and groups it into per-row offsets.
///
/// The reserved third value of each triple is dropped. A final group missing
/// only its reserved value is accepted.
pub fn read_row_pointers(reader: &mut PageReader<'_>) -> Result<Vec<RowPointer>> {
    let raw = read_pointers(reader)?;
    if raw.len() % POINTERS_PER_ROW == 1 {
        return Err(CfError::MalformedHeader(format!(
            "Pointer table holds {} values, leaving a row without a body offset",
            raw.len()
        )));
    }

    let rows: Vec<RowPointer> = raw
        .chunks(POINTERS_PER_ROW)
        .map(|group| RowPointer {
            header_offset: group[0],
            body_offset: group[1],
        })
        .collect();

    debug!("Pointer table lists {} rows", rows.len());
    Ok(rows)
}
