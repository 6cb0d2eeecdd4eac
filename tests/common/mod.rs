//! Synthetic container construction for integration tests.
#![allow(dead_code)]

use std::io::Write;

use flate2::write::DeflateEncoder;
use flate2::Compression;

pub const END: u32 = 0x7FFF_FFFF;
pub const IMAGE_HEADER_LEN: usize = 16;
pub const PAGE_HEADER_LEN: usize = 31;

pub const CREATED: u64 = 0x0000_4E2F_90A1_B2C3;
pub const MODIFIED: u64 = 0x0000_4E2F_90A1_FFFF;
pub const ATTRIBUTES: u32 = 0x0000_0001;

/// Text page header as stored on disk.
pub fn page_header(full_size: u32, page_size: u32, next_page: u32) -> Vec<u8> {
    let header = format!("\r\n{:08x} {:08x} {:08x} \r\n", full_size, page_size, next_page);
    assert_eq!(header.len(), PAGE_HEADER_LEN);
    header.into_bytes()
}

pub fn deflate(data: &[u8]) -> Vec<u8> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).expect("deflate write");
    encoder.finish().expect("deflate finish")
}

/// Deterministic filler bytes.
pub fn sample_bytes(len: usize) -> Vec<u8> {
    let mut state = 0x2545_F491u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state & 0xFF) as u8
        })
        .collect()
}

/// Appends `data` to `out` as a chain of pages of `capacity` bytes each and
/// returns the absolute offset of the first page.
///
/// Offsets are positions in `out`. With `reversed`, pages are laid out
/// back to front so every hop jumps backwards.
pub fn write_chain(out: &mut Vec<u8>, data: &[u8], capacity: usize, reversed: bool) -> usize {
    let chunks: Vec<&[u8]> = if data.is_empty() {
        vec![&[][..]]
    } else {
        data.chunks(capacity.max(1)).collect()
    };
    let capacity = capacity.max(chunks[0].len());
    let stride = PAGE_HEADER_LEN + capacity;
    let start = out.len();
    let count = chunks.len();
    let slot_of = |page: usize| if reversed { count - 1 - page } else { page };
    let offset_of = |page: usize| start + slot_of(page) * stride;

    out.resize(start + count * stride, 0);
    for (page, chunk) in chunks.iter().enumerate() {
        let full_size = if page == 0 { data.len() as u32 } else { 0 };
        let next = if page + 1 < count {
            offset_of(page + 1) as u32
        } else {
            END
        };
        let at = offset_of(page);
        out[at..at + PAGE_HEADER_LEN].copy_from_slice(&page_header(full_size, capacity as u32, next));
        out[at + PAGE_HEADER_LEN..at + PAGE_HEADER_LEN + chunk.len()].copy_from_slice(chunk);
    }
    offset_of(0)
}

/// Appends a row header page for `id` and returns its offset.
pub fn write_row_header(out: &mut Vec<u8>, id: &str) -> usize {
    let wide: Vec<u8> = id.encode_utf16().flat_map(|unit| unit.to_le_bytes()).collect();
    let full_size = (20 + wide.len() + 4) as u32;

    let offset = out.len();
    out.extend_from_slice(&page_header(full_size, full_size, END));
    out.extend_from_slice(&CREATED.to_le_bytes());
    out.extend_from_slice(&MODIFIED.to_le_bytes());
    out.extend_from_slice(&ATTRIBUTES.to_le_bytes());
    out.extend_from_slice(&wide);
    out.extend_from_slice(&[0u8; 4]);
    offset
}

enum Body {
    Plain(Vec<u8>),
    Stored(Vec<u8>),
}

/// Builds containers row by row.
pub struct ContainerBuilder {
    compress: bool,
    page_capacity: usize,
    pointer_page_capacity: Option<usize>,
    reversed_chains: bool,
    rows: Vec<(String, Body)>,
}

impl ContainerBuilder {
    /// A top-level container: bodies are deflated.
    pub fn compressed() -> Self {
        Self {
            compress: true,
            page_capacity: 512,
            pointer_page_capacity: None,
            reversed_chains: false,
            rows: Vec::new(),
        }
    }

    /// A nested container: bodies are stored as-is.
    pub fn raw() -> Self {
        Self {
            compress: false,
            ..Self::compressed()
        }
    }

    pub fn page_capacity(mut self, capacity: usize) -> Self {
        self.page_capacity = capacity;
        self
    }

    /// Spread the pointer table over pages of `capacity` bytes.
    pub fn pointer_page_capacity(mut self, capacity: usize) -> Self {
        assert_eq!(capacity % 4, 0);
        self.pointer_page_capacity = Some(capacity);
        self
    }

    pub fn reversed_chains(mut self) -> Self {
        self.reversed_chains = true;
        self
    }

    pub fn row(mut self, id: &str, body: impl Into<Vec<u8>>) -> Self {
        self.rows.push((id.to_string(), Body::Plain(body.into())));
        self
    }

    /// A row whose body bytes are stored verbatim, never deflated.
    pub fn stored_row(mut self, id: &str, stored: impl Into<Vec<u8>>) -> Self {
        self.rows.push((id.to_string(), Body::Stored(stored.into())));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let pointer_bytes_len = self.rows.len() * 12;
        let pointer_capacity = self
            .pointer_page_capacity
            .unwrap_or(pointer_bytes_len.max(4));
        let pointer_pages = pointer_bytes_len.div_ceil(pointer_capacity).max(1);
        let pointer_region = pointer_pages * (PAGE_HEADER_LEN + pointer_capacity);

        let mut out = vec![0u8; IMAGE_HEADER_LEN + pointer_region];
        out[0..4].copy_from_slice(&END.to_le_bytes());
        out[4..8].copy_from_slice(&512u32.to_le_bytes());

        let mut pointers = Vec::with_capacity(self.rows.len() * 3);
        for (id, body) in &self.rows {
            let header_offset = write_row_header(&mut out, id);
            let stored = match body {
                Body::Plain(bytes) if self.compress => deflate(bytes),
                Body::Plain(bytes) | Body::Stored(bytes) => bytes.clone(),
            };
            let body_offset = write_chain(&mut out, &stored, self.page_capacity, self.reversed_chains);
            pointers.extend_from_slice(&[header_offset as u32, body_offset as u32, END]);
        }

        let pointer_data: Vec<u8> = pointers.iter().flat_map(|p| p.to_le_bytes()).collect();
        let mut table = vec![0u8; IMAGE_HEADER_LEN];
        let first = write_chain(&mut table, &pointer_data, pointer_capacity, false);
        assert_eq!(first, IMAGE_HEADER_LEN);
        assert_eq!(table.len(), IMAGE_HEADER_LEN + pointer_region);
        out[IMAGE_HEADER_LEN..table.len()].copy_from_slice(&table[IMAGE_HEADER_LEN..]);

        // Trailing padding so no valid position ever sits on the last byte.
        out.extend_from_slice(&[0u8; 8]);
        out
    }
}

/// Overwrites one 8-digit field of the page header at `page_offset`.
///
/// `field` is 0 for full_size, 1 for page_size, 2 for next_page.
pub fn patch_header_field(bytes: &mut [u8], page_offset: usize, field: usize, text: &[u8; 8]) {
    let at = page_offset + 2 + field * 9;
    bytes[at..at + 8].copy_from_slice(text);
}

pub fn hex8(value: u32) -> [u8; 8] {
    let text = format!("{:08x}", value);
    let mut out = [0u8; 8];
    out.copy_from_slice(text.as_bytes());
    out
}
