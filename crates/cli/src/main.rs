// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use fxmat::config::DEFAULT_PREVIEW_ROWS;
use fxmat_cli::commands::{convert, exp, inspect, product, transpose};
use fxmat_cli::telemetry::init_tracing;

#[derive(Parser)]
#[command(name = "fxmat")]
#[command(about = "Inspect and transform Q16.48 fixed-point matrix files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a matrix file and show its shape, range and fingerprint
    Inspect {
        path: PathBuf,

        /// Number of rows to preview
        #[arg(long, short, default_value_t = DEFAULT_PREVIEW_ROWS)]
        rows: usize,

        /// Print the matrix as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Evaluate the fixed-point exponential against f64
    Exp {
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },
    /// Show the fixed-point representation of a number
    Convert {
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },
    /// Multiply two matrix files
    Product {
        a: PathBuf,
        b: PathBuf,

        #[arg(long, short)]
        out: PathBuf,
    },
    /// Transpose a matrix file
    Transpose {
        input: PathBuf,

        #[arg(long, short)]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { path, rows, json } => inspect::run(&path, rows, json),
        Commands::Exp { x } => exp::run(x),
        Commands::Convert { x } => convert::run(x),
        Commands::Product { a, b, out } => product::run(&a, &b, &out).map(|_| ()),
        Commands::Transpose { input, out } => transpose::run(&input, &out).map(|_| ()),
    }
}
