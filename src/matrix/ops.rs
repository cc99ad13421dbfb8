// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Shape-checked matrix algebra over the fixed-point kernel.

use crate::error::{MatrixError, Result};
use crate::fxp::ops::{fxp_add, fxp_max, fxp_min, fxp_mul, fxp_sub};
use crate::matrix::{cell_count, Matrix};
use crate::types::scalar::Fixed;

impl Matrix {
    fn check_same_shape(&self, rhs: &Matrix, op: &'static str) -> Result<()> {
        if self.dims() != rhs.dims() {
            return Err(MatrixError::ShapeMismatch {
                op,
                left: self.dims(),
                right: rhs.dims(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, rhs: &Matrix, op: &'static str, f: impl Fn(Fixed, Fixed) -> Fixed) -> Result<Matrix> {
        self.check_same_shape(rhs, op)?;
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix::from_parts(self.rows, self.cols, data))
    }

    /// `self + rhs`, exact.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "add", fxp_add)
    }

    /// `self - rhs`, exact.
    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "sub", fxp_sub)
    }

    /// Hadamard product.
    pub fn mul_elem(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "mul_elem", fxp_mul)
    }

    /// Element-wise maximum of two equally shaped matrices.
    pub fn max_elem(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "max_elem", fxp_max)
    }

    /// Element-wise minimum of two equally shaped matrices.
    pub fn min_elem(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "min_elem", fxp_min)
    }

    /// Matrix product `self (m x k) * rhs (k x n) -> (m x n)`.
    ///
    /// Each cell accumulates `k` reference multiplies in ascending `k`
    /// order; the order is part of the numeric result.
    pub fn product(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(MatrixError::ShapeMismatch {
                op: "product",
                left: self.dims(),
                right: rhs.dims(),
            });
        }

        let mut out = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            let lhs_row = self.row(i);
            for j in 0..rhs.cols {
                let mut sum = Fixed::ZERO;
                for (k, &a) in lhs_row.iter().enumerate() {
                    sum += fxp_mul(a, rhs.data[k * rhs.cols + j]);
                }
                out.data[i * rhs.cols + j] = sum;
            }
        }
        Ok(out)
    }

    /// Fresh `cols x rows` matrix.
    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self.data[r * self.cols + c]);
            }
        }
        Matrix::from_parts(self.cols, self.rows, data)
    }

    /// Multiplies every element by `c` in place.
    pub fn scale(&mut self, c: Fixed) {
        for v in self.data.iter_mut() {
            *v = fxp_mul(*v, c);
        }
    }

    /// Scaled copy.
    pub fn scaled(&self, c: Fixed) -> Matrix {
        let mut out = self.clone();
        out.scale(c);
        out
    }

    /// Adds `c` to every element.
    pub fn add_scalar(&self, c: Fixed) -> Matrix {
        self.apply(|_, _, v| fxp_add(v, c))
    }

    /// New matrix with `f(row, col, value)` evaluated for every cell.
    /// Activation functions and derivative masks plug in here.
    pub fn apply<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(usize, usize, Fixed) -> Fixed,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for r in 0..self.rows {
            for (c, &v) in self.row(r).iter().enumerate() {
                data.push(f(r, c, v));
            }
        }
        Matrix::from_parts(self.rows, self.cols, data)
    }

    /// In-place [`Matrix::apply`].
    pub fn apply_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, usize, Fixed) -> Fixed,
    {
        let cols = self.cols;
        for (i, v) in self.data.iter_mut().enumerate() {
            *v = f(i / cols, i % cols, *v);
        }
    }

    /// Smallest element. Empty matrices have no minimum.
    pub fn min(&self) -> Result<Fixed> {
        self.data.iter().copied().min().ok_or(MatrixError::Empty)
    }

    /// Largest element. Empty matrices have no maximum.
    pub fn max(&self) -> Result<Fixed> {
        self.data.iter().copied().max().ok_or(MatrixError::Empty)
    }

    /// Reshapes to `rows x cols`, keeping the overlapping top-left block and
    /// zero-filling every new cell. Panics when `rows * cols` overflows.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        let mut data = vec![Fixed::ZERO; cell_count(rows, cols)];
        let keep_rows = rows.min(self.rows);
        let keep_cols = cols.min(self.cols);
        for r in 0..keep_rows {
            let src = r * self.cols;
            let dst = r * cols;
            data[dst..dst + keep_cols].copy_from_slice(&self.data[src..src + keep_cols]);
        }
        self.rows = rows;
        self.cols = cols;
        self.data = data;
    }
}
