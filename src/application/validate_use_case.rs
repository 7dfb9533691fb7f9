// ============================================================
// Layer 2 — ValidateUseCase
// ============================================================
// Checks every sequence of every CSV in a directory against
// the DNA alphabet before anything is tokenised. Non-DNA
// characters would otherwise silently become [UNK] tokens.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::data::{error::DataError, loader::CsvSequenceLoader};
use crate::domain::kmer::is_dna_sequence;
use crate::domain::traits::SequenceSource;

/// One row that failed the alphabet check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSequence {
    pub source: String,
    /// Zero-based data row (header excluded)
    pub row:    usize,
    pub seq:    String,
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub files:     usize,
    pub sequences: usize,
    pub invalid:   Vec<InvalidSequence>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }
}

pub struct ValidateUseCase {
    data_dir: PathBuf,
}

impl ValidateUseCase {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn execute(&self) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        let entries = fs::read_dir(&self.data_dir)
            .map_err(|source| DataError::ReadDir { path: self.data_dir.clone(), source })?;

        for entry in entries {
            let path = entry
                .with_context(|| format!("Cannot list '{}'", self.data_dir.display()))?
                .path();
            if path.is_dir() {
                continue;
            }

            let source = path.display().to_string();
            let rows   = CsvSequenceLoader::new(&path).load_all()?;

            report.files     += 1;
            report.sequences += rows.len();
            report.invalid.extend(
                rows.into_iter()
                    .enumerate()
                    .filter(|(_, r)| !is_dna_sequence(&r.seq))
                    .map(|(row, r)| InvalidSequence { source: source.clone(), row, seq: r.seq }),
            );
        }

        tracing::info!(
            "Checked {} sequences in {} files, {} invalid",
            report.sequences,
            report.files,
            report.invalid.len()
        );
        Ok(report)
    }
}
