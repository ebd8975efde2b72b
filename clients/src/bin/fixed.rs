//! `lut-fixed` — Writes the fixed-point activation tables.
//!
//! **Outputs:**
//! - `<out>/log2_lut_128_new.txt` — `log2(1+m)` as Q10, 3 hex digits per line
//! - `<out>/exp2_lut_128_new.txt` — `2^m` as binary16, 4 hex digits per line
//!
//! **Usage:**
//! ```
//! lut-fixed [--out <path>]
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

/// Generate the fixed-point log2/exp2 lookup tables.
#[derive(Parser)]
#[command(
    name = "lut-fixed",
    about = "Generate the Q10 log2 and binary16 exp2 lookup tables"
)]
struct Args {
    /// Output directory for the table files.
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let report = generate(Generator::FixedPoint, &args.out)?;
    for path in report.paths() {
        println!("  Written: {}", path.display());
    }

    println!("Fixed-point tables complete.");
    Ok(())
}
