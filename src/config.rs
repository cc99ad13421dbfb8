// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

pub use crate::fxp::qformat::{FRAC_BITS, SCALE};

/// Maximum number of elements accepted from an encoded matrix frame, so a
/// corrupt header cannot request an unbounded allocation.
pub const MAX_DECODE_ELEMENTS: usize = 1 << 26;

/// Rows shown when previewing a matrix.
pub const DEFAULT_PREVIEW_ROWS: usize = 8;
