//! Generation and drift reports.

use std::path::{Path, PathBuf};

use actlut::TableSpec;
use serde::Serialize;

use crate::Generator;

/// What one table wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableReport {
    /// Short table name.
    pub name: String,
    /// File name inside the output directory.
    pub file_name: String,
    /// Sampled function.
    pub function: String,
    /// Number of codes.
    pub entries: usize,
    /// Hex digits per code.
    pub hex_digits: usize,
    /// Bytes written.
    pub bytes: usize,
}

impl TableReport {
    /// Describes `text` rendered from `spec`.
    pub fn new(spec: &TableSpec, text: &str) -> Self {
        Self {
            name: spec.name.to_string(),
            file_name: spec.file_name.to_string(),
            function: spec.function.label().to_string(),
            entries: text.lines().count(),
            hex_digits: spec.encoding.hex_digits(),
            bytes: text.len(),
        }
    }
}

/// Report of one generator run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// Generator that ran.
    pub generator: Generator,
    /// Output directory.
    pub out_dir: PathBuf,
    /// Tables written, in order.
    pub tables: Vec<TableReport>,
}

impl GenerationReport {
    /// Creates an empty report.
    pub fn new(generator: Generator, out_dir: &Path) -> Self {
        Self {
            generator,
            out_dir: out_dir.to_path_buf(),
            tables: Vec::new(),
        }
    }

    /// Paths of the written files.
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.tables.iter().map(|t| self.out_dir.join(&t.file_name))
    }
}

/// State of one file on disk relative to what would be generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum DriftStatus {
    /// Byte-identical.
    UpToDate,
    /// Not present.
    Missing,
    /// Present but different.
    Stale {
        /// First differing line, 1-based.
        line: usize,
    },
}

impl DriftStatus {
    /// Classifies `actual` against `expected`.
    pub fn compare(expected: &[u8], actual: &[u8]) -> Self {
        if expected == actual {
            return DriftStatus::UpToDate;
        }
        let common = expected
            .iter()
            .zip(actual)
            .take_while(|(e, a)| e == a)
            .count();
        let line = 1 + expected[..common].iter().filter(|&&b| b == b'\n').count();
        DriftStatus::Stale { line }
    }

    /// True unless the file is byte-identical.
    pub fn is_drift(&self) -> bool {
        *self != DriftStatus::UpToDate
    }
}

/// Drift state of one table file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDrift {
    /// File name inside the output directory.
    pub file_name: String,
    /// Comparison outcome.
    #[serde(flatten)]
    pub status: DriftStatus,
}

/// Result of checking one generator's files.
#[derive(Debug, Clone, Serialize)]
pub struct DriftReport {
    /// Generator checked.
    pub generator: Generator,
    /// Directory checked.
    pub out_dir: PathBuf,
    /// Per-file outcome.
    pub tables: Vec<TableDrift>,
}

impl DriftReport {
    /// Creates an empty report.
    pub fn new(generator: Generator, out_dir: &Path) -> Self {
        Self {
            generator,
            out_dir: out_dir.to_path_buf(),
            tables: Vec::new(),
        }
    }

    /// Number of files that are missing or stale.
    pub fn drift_count(&self) -> usize {
        self.tables.iter().filter(|t| t.status.is_drift()).count()
    }

    /// True if every file is up to date.
    pub fn is_clean(&self) -> bool {
        self.drift_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_bytes_are_up_to_date() {
        assert_eq!(DriftStatus::compare(b"000\n00b\n", b"000\n00b\n"), DriftStatus::UpToDate);
    }

    #[test]
    fn stale_reports_first_differing_line() {
        assert_eq!(
            DriftStatus::compare(b"000\n00b\n017\n", b"000\n00b\n018\n"),
            DriftStatus::Stale { line: 3 }
        );
        assert_eq!(
            DriftStatus::compare(b"000\n00b", b"000\n00c"),
            DriftStatus::Stale { line: 2 }
        );
    }

    #[test]
    fn missing_trailing_newline_is_stale() {
        assert_eq!(
            DriftStatus::compare(b"3c00\n3c06\n", b"3c00\n3c06"),
            DriftStatus::Stale { line: 2 }
        );
    }

    #[test]
    fn drift_count_ignores_clean_files() {
        let mut report = DriftReport::new(Generator::HalfPrecision, Path::new("."));
        report.tables.push(TableDrift {
            file_name: "log2_lut_128.txt".into(),
            status: DriftStatus::UpToDate,
        });
        report.tables.push(TableDrift {
            file_name: "exp2_lut_128.txt".into(),
            status: DriftStatus::Missing,
        });
        assert_eq!(report.drift_count(), 1);
        assert!(!report.is_clean());
    }
}
