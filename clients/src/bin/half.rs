//! `lut-half` — Writes the half-precision activation tables.
//!
//! **Outputs:**
//! - `<out>/log2_lut_128.txt` — `log2(1+m)` as binary16
//! - `<out>/exp2_lut_128.txt` — `2^m` as binary16
//!
//! Codes are joined by newlines; neither file ends with one.
//!
//! **Usage:**
//! ```
//! lut-half [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use actlut_codegen::{generate, Generator};
use anyhow::Result;
use clap::Parser;

/// Generate the half-precision log2/exp2 lookup tables.
#[derive(Parser)]
#[command(
    name = "lut-half",
    about = "Generate the binary16 log2 and exp2 lookup tables"
)]
struct Args {
    /// Output directory for the table files.
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let report = generate(Generator::HalfPrecision, &args.out)?;
    for path in report.paths() {
        println!("  Written: {}", path.display());
    }

    println!("Half-precision tables complete.");
    Ok(())
}
