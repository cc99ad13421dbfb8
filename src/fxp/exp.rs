// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed-point exponential.
//!
//! Classic range reduction: `exp(x) = 2^k * exp(r)` with `r = x - k*ln2` in
//! `[-ln2/2, ln2/2]`, then a degree-5 minimax polynomial in `r^2` gives
//! `exp(r) = 1 - ((lo - r*c/(2 - c)) - hi)`.
//!
//! Every product and quotient here is exact (i128 intermediates); with the
//! split multiply the result steps downward next to the reduction boundaries.

use crate::fxp::convert::{from_int, to_int};
use crate::fxp::ops::{fxp_div_wide, fxp_mul_wide};
use crate::types::scalar::Fixed;

/// Calibration table. The raw values are part of the persisted-model
/// contract: changing any of them changes every activation bit-for-bit.
pub mod consts {
    use crate::types::scalar::Fixed;

    /// ln(2)
    pub const LN2: Fixed = Fixed(0xB172_17F7_D1CF);
    /// High part of ln(2) for the extended-precision reduction.
    pub const LN2_H: Fixed = Fixed(0xB172_17F7_D1CE);
    /// Low part of ln(2); `LN2_H + LN2_L == LN2`.
    pub const LN2_L: Fixed = Fixed(0x1);
    /// 1 / ln(2)
    pub const INV_LN2: Fixed = Fixed(0x1_7154_7652_B82F);

    pub const P1: Fixed = Fixed(0x2AAA_AAAA_AAAA);
    pub const P2: Fixed = Fixed(-0x00B6_0B60_B60B);
    pub const P3: Fixed = Fixed(0x0004_559A_AF00);
    pub const P4: Fixed = Fixed(-0x0000_1BBD_0000);
    pub const P5: Fixed = Fixed(0x0000_00B2_0000);

    /// Arguments with a raw magnitude below this return exactly 1.0.
    pub const NEAR_ZERO_RAW: i64 = 0x10;

    /// Below `-48 ln2` the result is under one raw unit.
    pub const MIN_ARG: Fixed = Fixed(-48 * LN2.0);
    /// Above `15 ln2` the result exceeds the representable range.
    pub const MAX_ARG: Fixed = Fixed(15 * LN2.0);
}

use consts::*;

/// `e^x` in fixed point. Never negative; saturates to `Fixed::MAX` above `MAX_ARG` and to zero below
/// `MIN_ARG`.
pub fn fxp_exp(x: Fixed) -> Fixed {
    if x < MIN_ARG {
        return Fixed::ZERO;
    }
    if x > MAX_ARG {
        return Fixed::MAX;
    }

    let t = x.abs();
    let (r, hi, lo, k) = if t > Fixed(LN2.0 / 2) {
        let (hi, lo, k) = if t < fxp_mul_wide(Fixed::ONE_HALF + Fixed::ONE, LN2) {
            (t - LN2_H, LN2_L, 1)
        } else {
            let k = to_int(fxp_mul_wide(INV_LN2, t) + Fixed::ONE_HALF);
            let k_fixed = from_int(k);
            (t - fxp_mul_wide(k_fixed, LN2_H), fxp_mul_wide(k_fixed, LN2_L), k)
        };
        let (hi, lo, k) = if x.is_negative() { (-hi, -lo, -k) } else { (hi, lo, k) };
        (hi - lo, hi, lo, k)
    } else if t.0 < NEAR_ZERO_RAW {
        return Fixed::ONE;
    } else {
        (x, Fixed::ZERO, Fixed::ZERO, 0)
    };

    // Horner in r^2
    let t = fxp_mul_wide(r, r);
    let mut p = P4 + fxp_mul_wide(t, P5);
    p = P3 + fxp_mul_wide(t, p);
    p = P2 + fxp_mul_wide(t, p);
    p = P1 + fxp_mul_wide(t, p);
    let c = r - fxp_mul_wide(t, p);
    let correction = fxp_div_wide(fxp_mul_wide(r, c), Fixed::TWO - c);

    if k == 0 {
        return Fixed::ONE - (lo - correction - r);
    }
    let y = Fixed::ONE - (lo - correction - hi);
    scale_pow2(y, k)
}

/// `y * 2^k` for non-negative `y`, saturating at `Fixed::MAX`.
fn scale_pow2(y: Fixed, k: i64) -> Fixed {
    let y = y.0.max(0);
    if k < 0 {
        let n = k.unsigned_abs();
        if n >= 63 {
            Fixed::ZERO
        } else {
            Fixed(y >> n)
        }
    } else {
        let n = k as u32;
        if y != 0 && y.leading_zeros() <= n {
            tracing::trace!(k, "exp result saturated");
            Fixed::MAX
        } else {
            Fixed(y << n)
        }
    }
}

impl Fixed {
    pub fn exp(self) -> Fixed {
        fxp_exp(self)
    }
}
