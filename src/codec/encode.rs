//! Matrix frame encoding.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::codec::{checksum, element_count, frame_len, FORMAT_V1, MAGIC};
use crate::error::CodecError;
use crate::matrix::Matrix;

/// Serializes a matrix.
///
/// Format (little-endian):
/// [4]   Magic "FXMT"
/// [u32] Format Version (1)
/// [u32] Rows
/// [u32] Cols
/// [i64...] Raw elements, row-major
/// [u64] CRC-64 of all preceding bytes
pub fn encode_matrix(m: &Matrix) -> Result<Vec<u8>, CodecError> {
    let (rows, cols) = m.dims();
    let count = element_count(rows, cols)?;

    let mut buf = Vec::with_capacity(frame_len(count));
    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&FORMAT_V1.to_le_bytes());
    buf.extend_from_slice(&(rows as u32).to_le_bytes());
    buf.extend_from_slice(&(cols as u32).to_le_bytes());
    for v in m.iter() {
        buf.extend_from_slice(&v.0.to_le_bytes());
    }
    let crc = checksum(&buf);
    buf.extend_from_slice(&crc.to_le_bytes());

    tracing::debug!(rows, cols, bytes = buf.len(), "encoded matrix");
    Ok(buf)
}
