// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::Path;

use anyhow::Context;
use fxmat::Matrix;

use crate::store::{load_matrix, save_matrix};

/// Multiplies `a * b` and writes the result to `out`.
pub fn run(a: &Path, b: &Path, out: &Path) -> anyhow::Result<Matrix> {
    let lhs = load_matrix(a)?;
    let rhs = load_matrix(b)?;
    let result = lhs.product(&rhs).context("multiplying matrices")?;
    save_matrix(out, &result)?;
    println!("{}x{} written to {}", result.rows(), result.cols(), out.display());
    Ok(result)
}
