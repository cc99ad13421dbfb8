// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Wrapper for raw i64 representing Q16.48.

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::fxp::qformat::{FRAC_BITS, FRAC_MASK, SCALE};
use crate::fxp::ops::{fxp_add, fxp_div, fxp_mul, fxp_neg, fxp_sub};

/// A Q16.48 fixed-point number: the real value is `raw / 2^48`.
///
/// Values are plain `Copy` data; every operation returns a new value.
/// Addition and subtraction are exact (two's complement wrapping at the
/// 64-bit boundary). `*` and `/` use the reference split algorithms in
/// [`crate::fxp::ops`], which trade the lowest fractional bits for
/// staying inside 64-bit intermediates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Fixed(pub i64);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(SCALE);
    pub const ONE_HALF: Fixed = Fixed(SCALE >> 1);
    pub const TWO: Fixed = Fixed(SCALE << 1);
    pub const MAX: Fixed = Fixed(i64::MAX);
    pub const MIN: Fixed = Fixed(i64::MIN);
    /// Smallest positive step (one raw unit, 2^-48).
    pub const EPSILON: Fixed = Fixed(1);

    /// Sentinel returned by `/` when the divisor is zero: the most negative
    /// magnitude, `-(2^63 - 1)`. Callers that need to tell it apart from a
    /// genuine quotient should use [`Fixed::checked_div`].
    pub const DIV_ZERO: Fixed = Fixed(-i64::MAX);

    pub const fn from_raw(raw: i64) -> Self {
        Fixed(raw)
    }

    pub const fn raw(self) -> i64 {
        self.0
    }

    /// True when no fractional bit is set.
    pub const fn is_integer(self) -> bool {
        self.0 & FRAC_MASK == 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Absolute value. `MIN` has no positive counterpart and stays `MIN`.
    pub const fn abs(self) -> Self {
        Fixed(self.0.wrapping_abs())
    }
}

impl Add for Fixed {
    type Output = Fixed;

    fn add(self, rhs: Fixed) -> Fixed {
        fxp_add(self, rhs)
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    fn sub(self, rhs: Fixed) -> Fixed {
        fxp_sub(self, rhs)
    }
}

impl Mul for Fixed {
    type Output = Fixed;

    fn mul(self, rhs: Fixed) -> Fixed {
        fxp_mul(self, rhs)
    }
}

impl Div for Fixed {
    type Output = Fixed;

    /// Divides, logging and returning [`Fixed::DIV_ZERO`] when `rhs` is zero.
    fn div(self, rhs: Fixed) -> Fixed {
        fxp_div(self, rhs)
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    fn neg(self) -> Fixed {
        fxp_neg(self)
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, rhs: Fixed) {
        *self = fxp_add(*self, rhs);
    }
}

impl SubAssign for Fixed {
    fn sub_assign(&mut self, rhs: Fixed) {
        *self = fxp_sub(*self, rhs);
    }
}

/// Renders as a signed decimal: integer part followed by the shortest
/// decimal expansion of the fractional bits (`-3.5`, `2`, `0.25`).
impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            f.write_str("-")?;
        }
        let magnitude = self.0.unsigned_abs();
        let int_part = magnitude >> FRAC_BITS;
        let frac_bits = magnitude & (FRAC_MASK as u64);
        write!(f, "{}", int_part)?;
        if frac_bits != 0 {
            // Exact: 48 bits fit the f64 mantissa. Renders as "0.xxx".
            let frac = (frac_bits as f64 / SCALE as f64).to_string();
            f.write_str(&frac[1..])?;
        }
        Ok(())
    }
}
