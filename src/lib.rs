// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! fxmat: a deterministic Q16.48 fixed-point kernel and the dense matrix
//! engine built on it.

pub mod config;
pub mod error;
pub mod fxp;
pub mod types;
pub mod matrix;
pub mod codec;
pub mod activation;

pub use error::{CodecError, FixedError, MatrixError, Result};
pub use matrix::Matrix;
pub use types::scalar::Fixed;

#[cfg(test)]
pub mod tests;
