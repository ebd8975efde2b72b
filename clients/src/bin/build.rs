//! `lut-build` — Runs both activation table generators, or checks their output.
//!
//! **Outputs** (into `--out`):
//! - `log2_lut_128_new.txt`, `exp2_lut_128_new.txt` — fixed-point generator
//! - `log2_lut_128.txt`, `exp2_lut_128.txt` — half-precision generator
//!
//! With `--check` nothing is written; the files on disk are compared with what
//! would be generated and the process exits non-zero if any is missing or
//! stale. `--manifest` writes the run (or check) report as JSON.
//!
//! **Usage:**
//! ```
//! lut-build [--out <path>] [--only fixed|half] [--check] [--manifest <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::{Path, PathBuf};
use std::process;

use actlut_codegen::{check, emit, generate, DriftStatus, Generator};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

/// Build or verify the activation lookup tables.
#[derive(Parser)]
#[command(
    name = "lut-build",
    about = "Generate or verify the log2/exp2 activation lookup tables"
)]
struct Args {
    /// Output directory for the table files.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Run a single generator instead of both.
    #[arg(long, value_enum)]
    only: Option<Only>,

    /// Verify existing files instead of writing them.
    #[arg(long)]
    check: bool,

    /// Write the JSON report to this path.
    #[arg(long)]
    manifest: Option<PathBuf>,
}

/// Generator selection on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum Only {
    /// Fixed-point generator.
    Fixed,
    /// Half-precision generator.
    Half,
}

impl From<Only> for Generator {
    fn from(only: Only) -> Self {
        match only {
            Only::Fixed => Generator::FixedPoint,
            Only::Half => Generator::HalfPrecision,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let generators: Vec<Generator> = match args.only {
        Some(only) => vec![only.into()],
        None => Generator::ALL.to_vec(),
    };

    if args.check {
        run_check(&generators, &args.out, args.manifest.as_deref())
    } else {
        run_generate(&generators, &args.out, args.manifest.as_deref())
    }
}

fn run_generate(generators: &[Generator], out: &Path, manifest: Option<&Path>) -> Result<()> {
    let mut reports = Vec::new();
    for &generator in generators {
        println!("Generating {generator} tables into {}", out.display());
        let report = generate(generator, out)?;
        for table in &report.tables {
            println!(
                "  Written: {} ({} entries, {} hex digits)",
                out.join(&table.file_name).display(),
                table.entries,
                table.hex_digits
            );
        }
        reports.push(report);
    }

    if let Some(path) = manifest {
        let json = serde_json::to_string_pretty(&reports)
            .context("Failed to serialize generation report")?;
        emit::write_file(path, &json)?;
        println!("  Written: {}", path.display());
    }

    println!("Build complete.");
    Ok(())
}

fn run_check(generators: &[Generator], out: &Path, manifest: Option<&Path>) -> Result<()> {
    let mut reports = Vec::new();
    for &generator in generators {
        let report = check(generator, out)?;
        for table in &report.tables {
            let status = match table.status {
                DriftStatus::UpToDate => "OK".to_string(),
                DriftStatus::Missing => "MISSING".to_string(),
                DriftStatus::Stale { line } => format!("STALE at line {line}"),
            };
            println!("[{generator}] {} — {status}", table.file_name);
        }
        reports.push(report);
    }

    if let Some(path) = manifest {
        let json =
            serde_json::to_string_pretty(&reports).context("Failed to serialize check report")?;
        emit::write_file(path, &json)?;
    }

    let drifted: usize = reports.iter().map(|r| r.drift_count()).sum();
    if drifted > 0 {
        eprintln!("Check FAILED: {drifted} table file(s) out of date.");
        process::exit(1);
    }

    println!("All tables up to date.");
    Ok(())
}
