// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

/// Arithmetic kernel failures.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedError {
    #[error("fixed-point divide by zero")]
    DivideByZero,
}

/// Failures of the binary matrix frame.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Invalid magic bytes: {0:?}")]
    BadMagic([u8; 4]),

    #[error("Unsupported matrix format version: {found}, expected {expected}")]
    UnsupportedVersion { expected: u32, found: u32 },

    #[error("Truncated frame: expected {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("{0} trailing bytes after matrix frame")]
    TrailingBytes(usize),

    #[error("Checksum mismatch: expected {expected:016x}, found {found:016x}")]
    ChecksumMismatch { expected: u64, found: u64 },

    #[error("Matrix of {rows}x{cols} exceeds the codec limit")]
    TooLarge { rows: usize, cols: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Matrix engine failures. Raised before the receiver is touched.
#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Shape mismatch in {op}: {left:?} vs {right:?}")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Length mismatch: {rows}x{cols} matrix needs {expected} values, found {found}")]
    LengthMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },

    #[error("Index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Reduction over an empty matrix")]
    Empty,

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
