//! Fixed-point operations.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::FixedError;
use crate::fxp::qformat::{FRAC_BITS, FRAC_MASK, HALF_FRAC_BITS};
use crate::types::scalar::Fixed;

/// Exact fixed-point addition (wraps at the 64-bit boundary).
pub fn fxp_add(a: Fixed, b: Fixed) -> Fixed {
    Fixed(a.0.wrapping_add(b.0))
}

/// Exact fixed-point subtraction (wraps at the 64-bit boundary).
pub fn fxp_sub(a: Fixed, b: Fixed) -> Fixed {
    Fixed(a.0.wrapping_sub(b.0))
}

pub fn fxp_neg(a: Fixed) -> Fixed {
    Fixed(a.0.wrapping_neg())
}

/// Splits off the signs: returns both magnitudes and whether the result
/// must be negative.
fn factor_sign(a: i64, b: i64) -> (i64, i64, bool) {
    let mut negative = false;
    let a = if a < 0 {
        negative = !negative;
        a.wrapping_neg()
    } else {
        a
    };
    let b = if b < 0 {
        negative = !negative;
        b.wrapping_neg()
    } else {
        b
    };
    (a, b, negative)
}

/// Forces `res` onto the expected sign, undoing a sign flip caused by
/// overflow in the magnitude arithmetic.
fn restore_sign(res: i64, negative: bool) -> i64 {
    if (negative && res >= 0) || (!negative && res < 0) {
        res.wrapping_neg()
    } else {
        res
    }
}

pub(crate) fn saturate_i128(value: i128) -> i64 {
    if value > i64::MAX as i128 {
        i64::MAX
    } else if value < i64::MIN as i128 {
        i64::MIN
    } else {
        value as i64
    }
}

/// Reference fixed-point multiplication.
///
/// Each magnitude is split into `A = x >> 48` and `B = x & (2^48 - 1)` and
/// recombined as `(A*C) << 48 + C*B + A*D + (B >> 24) * (D >> 24)`. The last
/// term only keeps the top 24 bits of each fractional part, so up to about
/// 2^-23 of absolute precision is lost in exchange for never needing a
/// 128-bit intermediate. Persisted models depend on these exact bits; use
/// [`fxp_mul_wide`] where that does not matter.
pub fn fxp_mul(a: Fixed, b: Fixed) -> Fixed {
    let (a, b, negative) = factor_sign(a.0, b.0);

    let hi_a = a >> FRAC_BITS;
    let hi_b = b >> FRAC_BITS;
    let lo_a = a & FRAC_MASK;
    let lo_b = b & FRAC_MASK;

    let mut res = hi_a.wrapping_mul(hi_b) << FRAC_BITS;
    res = res.wrapping_add(hi_b.wrapping_mul(lo_a));
    res = res.wrapping_add(hi_a.wrapping_mul(lo_b));
    res = res.wrapping_add((lo_a >> HALF_FRAC_BITS).wrapping_mul(lo_b >> HALF_FRAC_BITS));

    Fixed(restore_sign(res, negative))
}

/// Exact fixed-point multiplication through an i128 intermediate.
///
/// Truncates toward zero like [`fxp_mul`] and saturates instead of wrapping.
pub fn fxp_mul_wide(a: Fixed, b: Fixed) -> Fixed {
    let product = (a.0 as i128 * b.0 as i128) / (1i128 << FRAC_BITS);
    Fixed(saturate_i128(product))
}

/// Reference fixed-point division.
///
/// Integer divisors take the exact path `a / (b >> 48)`. Any other divisor is
/// approximated by `(a / (b >> 24)) << 24`, which keeps 24 bits of quotient
/// precision below the point. Divisors below 2^-24 leave no bits for that
/// approximation and are divided exactly through i128 (saturating).
pub fn fxp_checked_div(a: Fixed, b: Fixed) -> Result<Fixed, FixedError> {
    if b.0 == 0 {
        return Err(FixedError::DivideByZero);
    }
    let (a, b, negative) = factor_sign(a.0, b.0);

    let res = if b & FRAC_MASK == 0 {
        a.wrapping_div(b >> FRAC_BITS)
    } else {
        let divisor = b >> HALF_FRAC_BITS;
        if divisor == 0 {
            saturate_i128(((a as i128) << FRAC_BITS) / b as i128)
        } else {
            a.wrapping_div(divisor) << HALF_FRAC_BITS
        }
    };

    Ok(Fixed(restore_sign(res, negative)))
}

/// Division that reports a zero divisor and yields [`Fixed::DIV_ZERO`].
pub fn fxp_div(a: Fixed, b: Fixed) -> Fixed {
    match fxp_checked_div(a, b) {
        Ok(q) => q,
        Err(err) => {
            tracing::warn!(numerator = %a, "{}", err);
            Fixed::DIV_ZERO
        }
    }
}

/// Exact fixed-point division through an i128 intermediate: `(a << 48) / b`,
/// truncated toward zero and saturating. A zero divisor logs and yields
/// [`Fixed::DIV_ZERO`] like [`fxp_div`].
pub fn fxp_div_wide(a: Fixed, b: Fixed) -> Fixed {
    if b.0 == 0 {
        tracing::warn!(numerator = %a, "{}", FixedError::DivideByZero);
        return Fixed::DIV_ZERO;
    }
    Fixed(saturate_i128(((a.0 as i128) << FRAC_BITS) / b.0 as i128))
}

pub fn fxp_max(a: Fixed, b: Fixed) -> Fixed {
    if a >= b { a } else { b }
}

pub fn fxp_min(a: Fixed, b: Fixed) -> Fixed {
    if a <= b { a } else { b }
}

impl Fixed {
    /// Division that surfaces a zero divisor as an error instead of the
    /// [`Fixed::DIV_ZERO`] sentinel.
    pub fn checked_div(self, rhs: Fixed) -> Result<Fixed, FixedError> {
        fxp_checked_div(self, rhs)
    }

    /// Exact product, see [`fxp_mul_wide`].
    pub fn mul_wide(self, rhs: Fixed) -> Fixed {
        fxp_mul_wide(self, rhs)
    }

    /// Exact quotient, see [`fxp_div_wide`].
    pub fn div_wide(self, rhs: Fixed) -> Fixed {
        fxp_div_wide(self, rhs)
    }
}
