// ============================================================
// Layer 6 — Summary Logger
// ============================================================
// Records one row per prepared dataset to a CSV file.
//
// Columns:
//   - source:        CSV file the dataset was built from
//   - rows:          number of records (labels)
//   - seq_len:       padded length of every record
//   - mean_tokens:   average number of non-padding tokens
//   - truncated:     records whose mask has no padding at all
//   - classes:       number of distinct zero-indexed labels
//
// Output file: <report_dir>/summary.csv
//
// Example CSV output:
//   source,rows,seq_len,mean_tokens,truncated,classes
//   val_1.csv,1200,30000,4987.250000,0,2

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeSet,
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
};
use burn::data::dataset::Dataset;

use crate::data::dataset::KmerDataset;

/// One summary row for a single prepared dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub source:      String,
    pub rows:        usize,
    pub seq_len:     usize,
    pub mean_tokens: f64,
    pub truncated:   usize,
    pub classes:     usize,
}

impl DatasetSummary {
    /// Scan every record of `dataset` once
    pub fn from_dataset(dataset: &KmerDataset) -> Self {
        let mut seq_len     = 0;
        let mut real_tokens = 0usize;
        let mut truncated   = 0;

        for sample in dataset.iter() {
            seq_len = seq_len.max(sample.input_ids.len());
            let real = sample.real_tokens();
            real_tokens += real;
            // A full mask means the row hit max_length, most likely cut off
            if real > 0 && real == sample.attention_mask.len() {
                truncated += 1;
            }
        }

        let rows    = dataset.len();
        let classes = dataset.labels().iter().collect::<BTreeSet<_>>().len();

        Self {
            source:      dataset.source().unwrap_or("unknown").to_string(),
            rows,
            seq_len,
            mean_tokens: real_tokens as f64 / rows.max(1) as f64,
            truncated,
            classes,
        }
    }
}

/// Appends dataset summaries to a CSV file.
pub struct SummaryLogger {
    csv_path: PathBuf,
}

impl SummaryLogger {
    /// Create the report directory. The header is written with
    /// the first row so appending across runs stays valid CSV.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create report directory '{}'", dir.display()))?;

        Ok(Self { csv_path: dir.join("summary.csv") })
    }

    /// Append one summary as a new row.
    pub fn log(&self, summary: &DatasetSummary) -> Result<()> {
        let is_new = !self.csv_path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open '{}'", self.csv_path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);
        writer.serialize(summary)?;
        writer.flush()?;

        tracing::debug!(
            "Logged summary for '{}': {} rows, seq_len={}",
            summary.source,
            summary.rows,
            summary.seq_len,
        );

        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}
