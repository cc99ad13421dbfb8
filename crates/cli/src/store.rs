// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Matrix files on disk: one encoded frame per file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context};
use fxmat::Matrix;
use memmap2::Mmap;

/// Maps the file and decodes the frame it holds.
pub fn load_matrix(path: &Path) -> anyhow::Result<Matrix> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    if file.metadata()?.len() == 0 {
        bail!("{} is empty", path.display());
    }
    // SAFETY: the map is read-only and dropped before returning.
    let mmap = unsafe { Mmap::map(&file)? };
    let m = Matrix::decode(&mmap).with_context(|| format!("decoding {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = m.rows(), cols = m.cols(), "loaded matrix");
    Ok(m)
}

pub fn save_matrix(path: &Path, m: &Matrix) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    m.write_to(&mut writer)?;
    writer.flush()?;
    tracing::info!(path = %path.display(), rows = m.rows(), cols = m.cols(), "wrote matrix");
    Ok(())
}
