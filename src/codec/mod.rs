// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Binary matrix frame.

use std::io::{Read, Write};

use crate::config::MAX_DECODE_ELEMENTS;
use crate::error::{CodecError, Result};
use crate::matrix::Matrix;

pub mod encode;
pub mod decode;
pub mod hash;

pub use decode::{decode_header, decode_matrix, read_matrix};
pub use encode::encode_matrix;
pub use hash::{checksum, fingerprint};

pub const MAGIC: &[u8; 4] = b"FXMT";
pub const FORMAT_V1: u32 = 1;

/// Magic + version + rows + cols.
pub const HEADER_LEN: usize = 4 + 4 + 4 + 4;
pub const ELEMENT_LEN: usize = 8;
pub const CHECKSUM_LEN: usize = 8;

/// Element count of a `rows x cols` frame, rejecting shapes the header
/// cannot carry or that exceed [`MAX_DECODE_ELEMENTS`].
pub(crate) fn element_count(rows: usize, cols: usize) -> core::result::Result<usize, CodecError> {
    let too_large = CodecError::TooLarge { rows, cols };
    if rows > u32::MAX as usize || cols > u32::MAX as usize {
        return Err(too_large);
    }
    match rows.checked_mul(cols) {
        Some(count) if count <= MAX_DECODE_ELEMENTS => Ok(count),
        _ => Err(too_large),
    }
}

/// Total frame size for `count` elements.
pub fn frame_len(count: usize) -> usize {
    HEADER_LEN + count * ELEMENT_LEN + CHECKSUM_LEN
}

impl Matrix {
    /// Encodes to an owned byte frame.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(encode_matrix(self)?)
    }

    /// Decodes a frame produced by [`Matrix::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Matrix> {
        Ok(decode_matrix(bytes)?)
    }

    /// Replaces `self` with the decoded matrix. On failure `self` is left
    /// exactly as it was.
    pub fn decode_into(&mut self, bytes: &[u8]) -> Result<()> {
        *self = decode_matrix(bytes)?;
        Ok(())
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let frame = encode_matrix(self)?;
        writer.write_all(&frame).map_err(CodecError::from)?;
        Ok(())
    }

    pub fn read_from<R: Read>(reader: R) -> Result<Matrix> {
        Ok(read_matrix(reader)?)
    }

    pub fn fingerprint(&self) -> [u8; 32] {
        fingerprint(self)
    }
}
