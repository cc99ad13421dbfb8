// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Rounding to integer units.

use crate::fxp::qformat::{FRAC_MASK, SCALE};
use crate::types::scalar::Fixed;

/// Largest integer not greater than `x`.
///
/// Clearing the fractional bits of a two's complement value already moves
/// negative non-integers one unit further down (`-0.5 -> -1`).
pub fn fxp_floor(x: Fixed) -> Fixed {
    Fixed(x.0 & !FRAC_MASK)
}

/// Smallest integer not less than `x`. Saturates at `Fixed::MAX`.
pub fn fxp_ceil(x: Fixed) -> Fixed {
    let floor = x.0 & !FRAC_MASK;
    if floor == x.0 {
        x
    } else {
        Fixed(floor.saturating_add(SCALE))
    }
}

/// Nearest integer, halves rounding up (`2.5 -> 3`, `-2.5 -> -2`).
pub fn fxp_round(x: Fixed) -> Fixed {
    if x.is_integer() {
        return x;
    }
    fxp_floor(Fixed(x.0.saturating_add(SCALE >> 1)))
}

impl Fixed {
    pub fn floor(self) -> Fixed {
        fxp_floor(self)
    }

    pub fn ceil(self) -> Fixed {
        fxp_ceil(self)
    }

    pub fn round(self) -> Fixed {
        fxp_round(self)
    }
}
