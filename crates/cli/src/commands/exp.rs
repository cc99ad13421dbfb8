// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use fxmat::Fixed;

use super::{hex, new_table};

pub fn run(x: f64) -> anyhow::Result<()> {
    let input = Fixed::from_f64(x);
    let got = input.exp();
    let reference = input.to_f64().exp();

    let mut table = new_table(vec!["".into(), "Raw".into(), "Value".into()]);
    table.add_row(vec!["x".to_string(), hex(input), input.to_string()]);
    table.add_row(vec!["exp(x)".to_string(), hex(got), got.to_string()]);
    table.add_row(vec!["f64 exp".to_string(), "-".to_string(), reference.to_string()]);
    table.add_row(vec![
        "error".to_string(),
        "-".to_string(),
        format!("{:e}", got.to_f64() - reference),
    ]);
    println!("{table}");
    Ok(())
}
