// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Activation kernels for the feed-forward network.
//!
//! The matrix engine stays activation-agnostic; these are applied through
//! [`Matrix::apply`].

use crate::fxp::exp::fxp_exp;
use crate::fxp::ops::{fxp_div, fxp_mul, fxp_sub};
use crate::matrix::Matrix;
use crate::types::scalar::Fixed;

/// Inputs below -10.0 short-circuit the sigmoid to zero.
pub const SIGMOID_CUTOFF: Fixed = Fixed(-0xA_0000_0000_0000);

/// `1 / (1 + e^-x)`.
pub fn sigmoid(x: Fixed) -> Fixed {
    if x < SIGMOID_CUTOFF {
        return Fixed::ZERO;
    }
    fxp_div(Fixed::ONE, Fixed::ONE + fxp_exp(-x))
}

/// Sigmoid derivative expressed on an activation output `s`: `s * (1 - s)`.
pub fn sigmoid_slope(s: Fixed) -> Fixed {
    fxp_mul(s, fxp_sub(Fixed::ONE, s))
}

pub fn relu(x: Fixed) -> Fixed {
    if x > Fixed::ZERO {
        x
    } else {
        Fixed::ZERO
    }
}

/// 1.0 where the input is positive, else 0.
pub fn relu_slope(x: Fixed) -> Fixed {
    if x > Fixed::ZERO {
        Fixed::ONE
    } else {
        Fixed::ZERO
    }
}

/// Sigmoid of every cell.
pub fn sigmoid_matrix(m: &Matrix) -> Matrix {
    m.apply(|_, _, v| sigmoid(v))
}

/// Derivative mask `m * (1 - m)` for a matrix of sigmoid outputs.
pub fn sigmoid_prime(m: &Matrix) -> Matrix {
    m.apply(|_, _, v| sigmoid_slope(v))
}

pub fn relu_matrix(m: &Matrix) -> Matrix {
    m.apply(|_, _, v| relu(v))
}

/// Derivative mask of [`relu`].
pub fn relu_prime(m: &Matrix) -> Matrix {
    m.apply(|_, _, v| relu_slope(v))
}
