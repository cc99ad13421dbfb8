// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Content hashing.

use crc64fast::Digest;

use crate::matrix::Matrix;

/// CRC-64 over a byte slice, used as the frame trailer.
pub fn checksum(bytes: &[u8]) -> u64 {
    let mut digest = Digest::new();
    digest.write(bytes);
    digest.sum64()
}

/// BLAKE3 digest of a matrix: dimensions, then every raw element in
/// row-major order. Two matrices fingerprint equal iff they are bit-for-bit
/// identical, which makes it the cheap way to compare runs for determinism.
pub fn fingerprint(m: &Matrix) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    let (rows, cols) = m.dims();
    hasher.update(&(rows as u64).to_le_bytes());
    hasher.update(&(cols as u64).to_le_bytes());
    for v in m.iter() {
        hasher.update(&v.0.to_le_bytes());
    }
    *hasher.finalize().as_bytes()
}
