// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::Path;

use fxmat::Matrix;

use crate::store::{load_matrix, save_matrix};

pub fn run(input: &Path, out: &Path) -> anyhow::Result<Matrix> {
    let result = load_matrix(input)?.transpose();
    save_matrix(out, &result)?;
    println!("{}x{} written to {}", result.rows(), result.cols(), out.display());
    Ok(result)
}
