// ============================================================
// Layer 2 — SummarizeUseCase
// ============================================================
// Runs the full preparation pipeline over a directory and
// reports on what a trainer would receive:
//
//   Step 1: Load / build the k-mer tokenizer     (Layer 6 - infra)
//   Step 2: Save the config next to the report   (Layer 2)
//   Step 3: Generate one dataset per CSV         (Layer 2 + 4)
//   Step 4: Batch the first records into tensors (Layer 4)
//   Step 5: Append a summary row per dataset     (Layer 6 - infra)

use anyhow::Result;
use burn::{
    backend::NdArray,
    data::{dataloader::batcher::Batcher, dataset::Dataset},
};

use crate::application::{val_dataset::val_dataset_generator, PrepConfig};
use crate::data::batcher::SequenceBatcher;
use crate::infra::{
    summary::{DatasetSummary, SummaryLogger},
    tokenizer_store::TokenizerStore,
};

pub struct SummarizeUseCase {
    config: PrepConfig,
}

impl SummarizeUseCase {
    pub fn new(config: PrepConfig) -> Self {
        Self { config }
    }

    /// Prepare every dataset in `data_dir` and return one summary each
    pub fn execute(&self) -> Result<Vec<DatasetSummary>> {
        let cfg = &self.config;

        let tokenizer = TokenizerStore::new(&cfg.tokenizer_dir).load_or_build(cfg.kmer_size)?;

        let logger = SummaryLogger::new(&cfg.report_dir)?;
        cfg.save_json(&cfg.report_dir)?;

        // Batches are built on the CPU backend only to check shapes
        let batcher   = SequenceBatcher::<NdArray>::new(Default::default());
        let datasets  = val_dataset_generator(&tokenizer, cfg.kmer_size, &cfg.data_dir, cfg.max_len)?;
        let mut summaries = Vec::new();

        for dataset in datasets {
            let dataset = dataset?;
            let summary = DatasetSummary::from_dataset(&dataset);

            let first: Vec<_> = (0..cfg.batch_size.min(dataset.len()))
                .filter_map(|i| dataset.get(i))
                .collect();
            if !first.is_empty() {
                let batch = batcher.batch(first);
                tracing::info!(
                    "'{}': first batch input_ids {:?}, labels {:?}",
                    summary.source,
                    batch.input_ids.dims(),
                    batch.labels.dims(),
                );
            }

            if summary.truncated > 0 {
                tracing::warn!(
                    "'{}': {} of {} sequences filled max_len={} and were likely truncated",
                    summary.source,
                    summary.truncated,
                    summary.rows,
                    cfg.max_len,
                );
            }

            logger.log(&summary)?;
            summaries.push(summary);
        }

        tracing::info!(
            "Prepared {} datasets, summary written to '{}'",
            summaries.len(),
            logger.csv_path().display()
        );
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_summarize_directory() {
        let root = TempDir::new().unwrap();
        let data = root.path().join("data");
        fs::create_dir(&data).unwrap();
        fs::write(data.join("a.csv"), "SEQ,Class\nATCGATCG,2\nGGCCTTAA,1\n").unwrap();
        fs::write(data.join("b.csv"), "SEQ,CLASS\nACGTAC,1\n").unwrap();

        let config = PrepConfig {
            data_dir:      data.display().to_string(),
            tokenizer_dir: root.path().join("tok").display().to_string(),
            report_dir:    root.path().join("reports").display().to_string(),
            kmer_size:     3,
            max_len:       12,
            batch_size:    4,
        };

        let mut summaries = SummarizeUseCase::new(config).execute().unwrap();
        summaries.sort_by(|a, b| a.source.cmp(&b.source));

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].source, "a.csv");
        assert_eq!(summaries[0].rows, 2);
        assert_eq!(summaries[0].seq_len, 12);
        assert_eq!(summaries[1].rows, 1);

        assert!(root.path().join("reports/summary.csv").exists());
        assert!(root.path().join("reports/prep_config.json").exists());
        assert!(root.path().join("tok/tokenizer.json").exists());
    }
}
