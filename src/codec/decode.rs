//! Matrix frame decoding.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::codec::{checksum, element_count, frame_len, CHECKSUM_LEN, FORMAT_V1, HEADER_LEN, MAGIC};
use crate::error::CodecError;
use crate::matrix::Matrix;
use crate::types::scalar::Fixed;

/// Validates magic and version, returning `(rows, cols)`.
pub fn decode_header(buf: &[u8]) -> Result<(usize, usize), CodecError> {
    if buf.len() < HEADER_LEN {
        return Err(CodecError::Truncated {
            expected: HEADER_LEN,
            found: buf.len(),
        });
    }
    let mut rdr = Cursor::new(buf);

    let mut magic = [0u8; 4];
    rdr.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(CodecError::BadMagic(magic));
    }

    let version = rdr.read_u32::<LittleEndian>()?;
    if version != FORMAT_V1 {
        return Err(CodecError::UnsupportedVersion {
            expected: FORMAT_V1,
            found: version,
        });
    }

    let rows = rdr.read_u32::<LittleEndian>()? as usize;
    let cols = rdr.read_u32::<LittleEndian>()? as usize;
    Ok((rows, cols))
}

/// Decodes one complete frame. The whole frame (length and checksum) is
/// validated before any element is materialized; nothing is returned on
/// failure.
pub fn decode_matrix(buf: &[u8]) -> Result<Matrix, CodecError> {
    let (rows, cols) = decode_header(buf)?;
    let count = element_count(rows, cols)?;

    let expected = frame_len(count);
    if buf.len() < expected {
        return Err(CodecError::Truncated {
            expected,
            found: buf.len(),
        });
    }
    if buf.len() > expected {
        return Err(CodecError::TrailingBytes(buf.len() - expected));
    }

    let body_end = expected - CHECKSUM_LEN;
    let mut trailer = Cursor::new(&buf[body_end..]);
    let stored = trailer.read_u64::<LittleEndian>()?;
    let computed = checksum(&buf[..body_end]);
    if stored != computed {
        return Err(CodecError::ChecksumMismatch {
            expected: stored,
            found: computed,
        });
    }

    let mut rdr = Cursor::new(&buf[HEADER_LEN..body_end]);
    let mut data = Vec::with_capacity(count);
    for _ in 0..count {
        data.push(Fixed(rdr.read_i64::<LittleEndian>()?));
    }

    tracing::debug!(rows, cols, "decoded matrix");
    Ok(Matrix::from_parts(rows, cols, data))
}

/// Reads exactly one frame from a stream.
pub fn read_matrix<R: Read>(mut reader: R) -> Result<Matrix, CodecError> {
    let mut frame = vec![0u8; HEADER_LEN];
    reader.read_exact(&mut frame)?;

    let (rows, cols) = decode_header(&frame)?;
    let count = element_count(rows, cols)?;
    frame.resize(frame_len(count), 0);
    reader.read_exact(&mut frame[HEADER_LEN..])?;

    decode_matrix(&frame)
}
