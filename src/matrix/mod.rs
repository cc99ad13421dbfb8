// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Dense row-major matrix of fixed-point values.

use core::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result};
use crate::fxp::convert::{from_f64, to_f64};
use crate::types::scalar::Fixed;

pub mod ops;

/// A `rows x cols` grid stored row-major in one buffer; element `(r, c)`
/// lives at `r * cols + c`. `data.len() == rows * cols` always holds.
///
/// Matrices are exclusively owned. Operations that combine operands return
/// a fresh matrix, so a result can never alias one of its inputs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix", into = "RawMatrix")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Fixed>,
}

/// Unvalidated serde shadow of [`Matrix`].
#[derive(Clone, Serialize, Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Fixed>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Matrix::new(raw.rows, raw.cols, raw.data)
    }
}

impl From<Matrix> for RawMatrix {
    fn from(m: Matrix) -> Self {
        RawMatrix { rows: m.rows, cols: m.cols, data: m.data }
    }
}

/// `rows * cols`, panicking when the shape cannot be addressed.
pub(crate) fn cell_count(rows: usize, cols: usize) -> usize {
    match rows.checked_mul(cols) {
        Some(count) => count,
        None => panic!("matrix shape {}x{} overflows usize", rows, cols),
    }
}

impl Matrix {
    /// Zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, Fixed::ZERO)
    }

    /// Panics when `rows * cols` overflows.
    pub fn filled(rows: usize, cols: usize, value: Fixed) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; cell_count(rows, cols)],
        }
    }

    /// Builds a matrix from a flat row-major sequence of exactly
    /// `rows * cols` values.
    pub fn new(rows: usize, cols: usize, data: Vec<Fixed>) -> Result<Self> {
        let expected = rows.checked_mul(cols);
        if expected != Some(data.len()) {
            return Err(MatrixError::LengthMismatch {
                rows,
                cols,
                expected: expected.unwrap_or(usize::MAX),
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Like [`Matrix::new`], converting each double with [`from_f64`].
    pub fn from_f64(rows: usize, cols: usize, values: &[f64]) -> Result<Self> {
        Self::new(rows, cols, values.iter().map(|&v| from_f64(v)).collect())
    }

    /// Single-column matrix, the shape the network feeds its inputs and
    /// targets through.
    pub fn column(values: Vec<Fixed>) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values,
        }
    }

    /// Caller guarantees `data.len() == rows * cols`.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<Fixed>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Fixed> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: Fixed) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Row `r` as a slice. Panics when `r >= rows`.
    pub fn row(&self, r: usize) -> &[Fixed] {
        let start = r * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Row-major view of every element.
    pub fn as_slice(&self) -> &[Fixed] {
        &self.data
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Fixed> {
        self.data.iter()
    }

    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.data.iter().map(|&v| to_f64(v)).collect()
    }

    pub fn into_vec(self) -> Vec<Fixed> {
        self.data
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a Fixed;
    type IntoIter = core::slice::Iter<'a, Fixed>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Fixed;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &mut self.data[row * self.cols + col]
    }
}
