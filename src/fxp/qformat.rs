// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Q16.48 layout: 16 integer bits (sign included), 48 fractional bits.

/// Number of fractional bits.
pub const FRAC_BITS: u32 = 48;

/// Raw value of 1.0 (`1 << FRAC_BITS`).
pub const SCALE: i64 = 1 << FRAC_BITS;

/// Mask selecting the fractional bits.
pub const FRAC_MASK: i64 = SCALE - 1;

/// Split point used by the reference multiply and divide to keep
/// partial products inside 64 bits.
pub const HALF_FRAC_BITS: u32 = FRAC_BITS / 2;

/// Largest integer part representable.
pub const MAX_INT: i64 = i64::MAX >> FRAC_BITS;

/// Smallest integer part representable.
pub const MIN_INT: i64 = i64::MIN >> FRAC_BITS;
