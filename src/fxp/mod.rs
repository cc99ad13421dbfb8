// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Q16.48 arithmetic kernel.

pub mod qformat;
pub mod ops;
pub mod round;
pub mod convert;
pub mod exp;

pub use convert::{from_f64, from_int, to_f64, to_int};
pub use exp::fxp_exp;
pub use ops::{fxp_add, fxp_checked_div, fxp_div, fxp_div_wide, fxp_mul, fxp_mul_wide, fxp_sub};
pub use round::{fxp_ceil, fxp_floor, fxp_round};
