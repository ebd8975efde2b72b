//! Activation LUT generators.
//!
//! Builds the accelerator's `log2`/`exp2` tables with [`actlut`] and writes
//! them as hex text, one code per line. Two generators exist and share no
//! state:
//!
//! | Generator | Files | Layout |
//! |-----------|-------|--------|
//! | [`Generator::FixedPoint`] | `log2_lut_128_new.txt` (Q10), `exp2_lut_128_new.txt` (binary16) | every line ends in `\n` |
//! | [`Generator::HalfPrecision`] | `log2_lut_128.txt`, `exp2_lut_128.txt` (both binary16) | `\n`-joined, no trailing newline |
//!
//! ```no_run
//! use std::path::Path;
//! use actlut_codegen::{generate, Generator};
//!
//! let report = generate(Generator::FixedPoint, Path::new("rom")).expect("generation failed");
//! assert_eq!(report.tables.len(), 2);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod emit;
pub mod render;
pub mod report;

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use actlut::{Lut, TableSpec, FIXED_EXP2, FIXED_LOG2, HALF_EXP2, HALF_LOG2};
use anyhow::{Context, Result};
use serde::Serialize;

pub use render::{render, LineLayout};
pub use report::{DriftReport, DriftStatus, GenerationReport, TableDrift, TableReport};

/// One of the two table generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Generator {
    /// Q10 `log2` table plus binary16 `exp2` table, newline-terminated.
    FixedPoint,
    /// binary16 `log2` and `exp2` tables, newline-joined.
    HalfPrecision,
}

impl Generator {
    /// Both generators in run order.
    pub const ALL: [Generator; 2] = [Generator::FixedPoint, Generator::HalfPrecision];

    /// The tables this generator emits, `log2` first.
    pub const fn tables(self) -> [TableSpec; 2] {
        match self {
            Generator::FixedPoint => [FIXED_LOG2, FIXED_EXP2],
            Generator::HalfPrecision => [HALF_LOG2, HALF_EXP2],
        }
    }

    /// How this generator separates lines.
    pub const fn layout(self) -> LineLayout {
        match self {
            Generator::FixedPoint => LineLayout::Terminated,
            Generator::HalfPrecision => LineLayout::Joined,
        }
    }

    /// Short name, as accepted on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Generator::FixedPoint => "fixed",
            Generator::HalfPrecision => "half",
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builds and renders every table of `generator` without touching disk.
///
/// # Errors
///
/// Returns an error if a table value cannot be encoded.
pub fn render_all(generator: Generator) -> Result<Vec<(TableSpec, String)>> {
    generator
        .tables()
        .iter()
        .map(|spec| -> Result<(TableSpec, String)> {
            let lut = Lut::build(spec)
                .with_context(|| format!("Failed to build table {}", spec.name))?;
            Ok((*spec, render(&lut, generator.layout())))
        })
        .collect()
}

/// Generates the files of `generator` into `out_dir`, creating it if needed.
///
/// # Errors
///
/// Returns an error if a table cannot be built, the directory cannot be
/// created, or any file cannot be written.
pub fn generate(generator: Generator, out_dir: &Path) -> Result<GenerationReport> {
    let mut report = GenerationReport::new(generator, out_dir);

    for (spec, text) in render_all(generator)? {
        let path = out_dir.join(spec.file_name);
        emit::write_file(&path, &text)?;
        report.tables.push(TableReport::new(&spec, &text));
    }

    Ok(report)
}

/// Compares the files of `generator` in `out_dir` with what it would write.
///
/// # Errors
///
/// Returns an error if a table cannot be built or an existing file cannot be
/// read. A missing file is reported as [`DriftStatus::Missing`], not an error.
pub fn check(generator: Generator, out_dir: &Path) -> Result<DriftReport> {
    let mut report = DriftReport::new(generator, out_dir);

    for (spec, expected) in render_all(generator)? {
        let path = out_dir.join(spec.file_name);
        let status = match fs::read(&path) {
            Ok(actual) => DriftStatus::compare(expected.as_bytes(), &actual),
            Err(e) if e.kind() == io::ErrorKind::NotFound => DriftStatus::Missing,
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()))
            }
        };
        report.tables.push(TableDrift {
            file_name: spec.file_name.to_string(),
            status,
        });
    }

    Ok(report)
}
