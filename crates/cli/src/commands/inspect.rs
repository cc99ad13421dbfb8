// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::Path;

use fxmat::Matrix;

use super::new_table;
use crate::store::load_matrix;

pub fn run(path: &Path, preview_rows: usize, json: bool) -> anyhow::Result<()> {
    let m = load_matrix(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&m)?);
        return Ok(());
    }

    println!("\nMatrix Report: {}", path.display());
    println!("--------------------");

    let mut table = new_table(vec!["Property".into(), "Value".into()]);
    let (rows, cols) = m.dims();
    table.add_row(vec!["Dims".to_string(), format!("{}x{}", rows, cols)]);
    table.add_row(vec!["Elements".to_string(), m.len().to_string()]);
    table.add_row(vec!["Min".to_string(), m.min().map(|v| v.to_string()).unwrap_or_else(|_| "-".into())]);
    table.add_row(vec!["Max".to_string(), m.max().map(|v| v.to_string()).unwrap_or_else(|_| "-".into())]);
    table.add_row(vec!["Fingerprint".to_string(), fingerprint_hex(&m)]);
    println!("{table}\n");

    if !m.is_empty() && preview_rows > 0 {
        println!("{}\n", preview(&m, preview_rows));
    }
    Ok(())
}

fn fingerprint_hex(m: &Matrix) -> String {
    m.fingerprint().iter().map(|b| format!("{:02x}", b)).collect()
}

/// Table of the first `limit` rows.
pub fn preview(m: &Matrix, limit: usize) -> comfy_table::Table {
    let mut header = vec!["row".to_string()];
    header.extend((0..m.cols()).map(|c| c.to_string()));
    let mut table = new_table(header);

    for r in 0..m.rows().min(limit) {
        let mut cells = vec![r.to_string()];
        cells.extend(m.row(r).iter().map(|v| v.to_string()));
        table.add_row(cells);
    }
    if m.rows() > limit {
        tracing::debug!(shown = limit, total = m.rows(), "preview truncated");
    }
    table
}
