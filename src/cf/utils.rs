//! Low-level byte reading utilities

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::cf::types::error::{CfError, Result};

/// Parse an 8-digit hexadecimal ASCII field into its numeric value.
///
/// Page headers store every size and offset as text, so a single non-hex
/// character means the header is corrupted.
pub fn parse_hex_field(field: &[u8]) -> Result<u32> {
    let mut raw = [0u8; 4];
    hex::decode_to_slice(field, &mut raw).map_err(|e| {
        CfError::MalformedHeader(format!(
            "Invalid hex field {:?}: {}",
            String::from_utf8_lossy(field),
            e
        ))
    })?;
    Ok(BigEndian::read_u32(&raw))
}

/// Decode a run of little-endian u32 values.
pub fn read_u32_le_list(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.len() % 4 != 0 {
        return Err(CfError::MalformedHeader(format!(
            "Pointer data of {} bytes is not a whole number of 32-bit values",
            bytes.len()
        )));
    }
    Ok(bytes.chunks_exact(4).map(LittleEndian::read_u32).collect())
}

/// Turn a wide-character identifier into a plain string by dropping every
/// null byte.
///
/// This only round-trips identifiers made of ASCII characters; anything
/// outside that range comes out mangled.
pub fn strip_nulls(bytes: &[u8]) -> String {
    let narrow: Vec<u8> = bytes.iter().copied().filter(|&b| b != 0).collect();
    String::from_utf8_lossy(&narrow).into_owned()
}
