//! Decompression of row bodies.
//!
//! Row bodies of a compressed container are raw DEFLATE streams (no zlib
//! or gzip framing).

use std::io::Read;

use flate2::read::DeflateDecoder;
use log::trace;

use crate::cf::types::error::{CfError, Result};

/// Inflates a raw DEFLATE payload.
///
/// # Errors
/// Returns [`CfError::DecompressionFailure`] if the stream is invalid or
/// truncated.
pub fn inflate(payload: &[u8]) -> Result<Vec<u8>> {
    trace!("Inflating {} bytes", payload.len());

    let mut output = Vec::with_capacity(payload.len().saturating_mul(4));
    let mut decoder = DeflateDecoder::new(payload);
    decoder
        .read_to_end(&mut output)
        .map_err(|e| CfError::DecompressionFailure(format!("Deflate stream rejected: {}", e)))?;

    trace!("Inflated {} bytes -> {} bytes", payload.len(), output.len());
    Ok(output)
}
