// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer wires the data, domain and infra layers together
// to accomplish a specific goal.
//
// Rules for this layer:
//   - No tensor math here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::kmer::DEFAULT_KMER_SIZE;

// The per-directory dataset generator
pub mod val_dataset;

// Tokenise a directory and report on the resulting datasets
pub mod summarize_use_case;

// Check every sequence in a directory against the DNA alphabet
pub mod validate_use_case;

/// Default padding / truncation length for encoded sequences
pub const DEFAULT_MAX_LEN: usize = 30_000;

// ─── Preparation Configuration ───────────────────────────────────────────────
// Everything a summarize run needs. Serialisable so the exact
// settings can be stored next to the report they produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepConfig {
    pub data_dir:      String,
    pub tokenizer_dir: String,
    pub report_dir:    String,
    pub kmer_size:     usize,
    pub max_len:       usize,
    pub batch_size:    usize,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            data_dir:      "data/TestData".to_string(),
            tokenizer_dir: "tokenizer".to_string(),
            report_dir:    "reports".to_string(),
            kmer_size:     DEFAULT_KMER_SIZE,
            max_len:       DEFAULT_MAX_LEN,
            batch_size:    8,
        }
    }
}

impl PrepConfig {
    /// Write the config as pretty JSON to `dir/prep_config.json`
    pub fn save_json(&self, dir: impl AsRef<Path>) -> Result<()> {
        let path = dir.as_ref().join("prep_config.json");
        std::fs::write(&path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;
        Ok(())
    }

    /// Read a config previously written by save_json()
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid config in '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let cfg = PrepConfig::default();
        assert_eq!(cfg.kmer_size, 3);
        assert_eq!(cfg.max_len, 30_000);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = TempDir::new().unwrap();
        let cfg = PrepConfig { kmer_size: 6, ..PrepConfig::default() };

        cfg.save_json(dir.path()).unwrap();
        let loaded = PrepConfig::load_json(dir.path().join("prep_config.json")).unwrap();
        assert_eq!(loaded, cfg);
    }
}
