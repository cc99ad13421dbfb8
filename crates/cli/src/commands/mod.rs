// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use fxmat::Fixed;

pub mod convert;
pub mod exp;
pub mod inspect;
pub mod product;
pub mod transpose;

fn new_table(header: Vec<String>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Two's-complement raw bits, e.g. `0x0001000000000000` for 1.0.
fn hex(v: Fixed) -> String {
    format!("{:#018x}", v.raw())
}
