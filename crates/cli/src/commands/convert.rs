// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use fxmat::Fixed;

use super::{hex, new_table};

pub fn run(x: f64) -> anyhow::Result<()> {
    let v = Fixed::from_f64(x);

    let mut table = new_table(vec!["".into(), "Raw".into(), "Value".into()]);
    for (label, value) in [("fixed", v), ("floor", v.floor()), ("ceil", v.ceil()), ("round", v.round())] {
        table.add_row(vec![label.to_string(), hex(value), value.to_string()]);
    }
    table.add_row(vec!["as f64".to_string(), "-".to_string(), v.to_f64().to_string()]);
    table.add_row(vec!["as int".to_string(), "-".to_string(), v.to_int().to_string()]);
    println!("{table}");
    Ok(())
}
