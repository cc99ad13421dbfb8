// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Conversions between fixed-point, integers and IEEE doubles.

use crate::fxp::qformat::{FRAC_BITS, MAX_INT, MIN_INT, SCALE};
use crate::types::scalar::Fixed;

const F64_MANTISSA_BITS: u32 = 52;
const F64_MANTISSA_MASK: u64 = (1 << F64_MANTISSA_BITS) - 1;
const F64_EXPONENT_BIAS: i64 = 1023;

/// Smallest unbiased exponent whose values no longer fit (|v| >= 2^15).
const OVERFLOW_EXPONENT: i64 = 63 - FRAC_BITS as i64;

/// Converts an integer, saturating outside `[-32768, 32767]`.
pub fn from_int(x: i64) -> Fixed {
    if x > MAX_INT {
        Fixed::MAX
    } else if x < MIN_INT {
        Fixed::MIN
    } else {
        let magnitude = (x.unsigned_abs() << FRAC_BITS) as i64;
        Fixed(if x < 0 { magnitude.wrapping_neg() } else { magnitude })
    }
}

/// Integer part, truncated toward zero (`-2.75 -> -2`).
pub fn to_int(x: Fixed) -> i64 {
    let magnitude = (x.0.unsigned_abs() >> FRAC_BITS) as i64;
    if x.0 < 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Converts a double by decomposing its bits; no floating multiply.
///
/// The 53-bit mantissa (implicit bit restored) carries 52 fractional bits,
/// so it is shifted by `exponent - 4` to land on the 48-bit point. Bits below
/// 2^-48 are truncated toward zero. NaN maps to zero, magnitudes of 32768 and
/// above (infinities included) saturate.
pub fn from_f64(value: f64) -> Fixed {
    if value.is_nan() {
        return Fixed::ZERO;
    }
    let negative = value.is_sign_negative();
    let bits = value.abs().to_bits();

    let biased = (bits >> F64_MANTISSA_BITS) as i64;
    if biased == 0 {
        // zero and subnormals
        return Fixed::ZERO;
    }
    let exponent = biased - F64_EXPONENT_BIAS;
    if exponent >= OVERFLOW_EXPONENT {
        return if negative { Fixed::MIN } else { Fixed::MAX };
    }

    let mantissa = (bits & F64_MANTISSA_MASK) | (1 << F64_MANTISSA_BITS);
    let shift = exponent - (F64_MANTISSA_BITS - FRAC_BITS) as i64;
    let magnitude = if shift >= 0 {
        mantissa << shift as u32
    } else if shift > -64 {
        mantissa >> (-shift) as u32
    } else {
        0
    };

    let raw = magnitude as i64;
    Fixed(if negative { -raw } else { raw })
}

/// Plain integer-to-float division by 2^48.
pub fn to_f64(x: Fixed) -> f64 {
    x.0 as f64 / SCALE as f64
}

impl Fixed {
    pub fn from_int(x: i64) -> Fixed {
        from_int(x)
    }

    pub fn to_int(self) -> i64 {
        to_int(self)
    }

    pub fn from_f64(value: f64) -> Fixed {
        from_f64(value)
    }

    pub fn to_f64(self) -> f64 {
        to_f64(self)
    }
}

impl From<f64> for Fixed {
    fn from(value: f64) -> Self {
        from_f64(value)
    }
}

impl From<Fixed> for f64 {
    fn from(value: Fixed) -> Self {
        to_f64(value)
    }
}
