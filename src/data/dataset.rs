use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::data::error::DataError;
use crate::domain::traits::EncodedBatch;

/// One tokenised and padded classification sample.
/// Sequence format: [CLS] k-mer k-mer ... [SEP] [PAD]...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceSample {
    pub input_ids:      Vec<u32>,
    pub attention_mask: Vec<u32>,
    /// Zero-indexed class label
    pub labels:         i64,
}

impl SequenceSample {
    /// Number of non-padding positions
    pub fn real_tokens(&self) -> usize {
        self.attention_mask.iter().filter(|&&m| m != 0).count()
    }
}

/// Read-only view over three parallel arrays: ids, masks and labels.
///
/// Alignment is the caller's responsibility. `len()` follows the
/// labels, and a row missing from any of the three arrays is
/// treated as out of range.
#[derive(Debug, Clone, Default)]
pub struct KmerDataset {
    input_ids:       Vec<Vec<u32>>,
    attention_masks: Vec<Vec<u32>>,
    labels:          Vec<i64>,
    source:          Option<String>,
}

impl KmerDataset {
    pub fn new(
        input_ids:       Vec<Vec<u32>>,
        attention_masks: Vec<Vec<u32>>,
        labels:          Vec<i64>,
    ) -> Self {
        Self { input_ids, attention_masks, labels, source: None }
    }

    /// Wrap a tokenizer result together with its labels
    pub fn from_encoded(encoded: EncodedBatch, labels: Vec<i64>) -> Self {
        Self::new(encoded.input_ids, encoded.attention_mask, labels)
    }

    /// Attach the name of the file these rows came from
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn labels(&self) -> &[i64] {
        &self.labels
    }

    /// Like `get`, but reports an out-of-range index as an error
    pub fn sample(&self, index: usize) -> Result<SequenceSample, DataError> {
        self.get(index).ok_or(DataError::IndexOutOfRange { index, len: self.len() })
    }
}

impl Dataset<SequenceSample> for KmerDataset {
    fn get(&self, index: usize) -> Option<SequenceSample> {
        Some(SequenceSample {
            input_ids:      self.input_ids.get(index)?.clone(),
            attention_mask: self.attention_masks.get(index)?.clone(),
            labels:         *self.labels.get(index)?,
        })
    }

    fn len(&self) -> usize {
        self.labels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rows() -> KmerDataset {
        KmerDataset::new(
            vec![vec![2, 10, 3, 0], vec![2, 11, 12, 3]],
            vec![vec![1, 1, 1, 0], vec![1, 1, 1, 1]],
            vec![1, 0],
        )
    }

    #[test]
    fn test_len_follows_labels() {
        assert_eq!(two_rows().len(), 2);
        assert!(KmerDataset::default().is_empty());
    }

    #[test]
    fn test_get_returns_aligned_row() {
        let ds     = two_rows();
        let sample = ds.get(1).unwrap();
        assert_eq!(sample.input_ids, vec![2, 11, 12, 3]);
        assert_eq!(sample.attention_mask, vec![1, 1, 1, 1]);
        assert_eq!(sample.labels, 0);
        assert_eq!(ds.get(0).unwrap().labels, 1);
    }

    #[test]
    fn test_out_of_range() {
        let ds = two_rows();
        assert!(ds.get(2).is_none());

        let err = ds.sample(5).unwrap_err();
        assert!(matches!(err, DataError::IndexOutOfRange { index: 5, len: 2 }));
    }

    #[test]
    fn test_misaligned_row_is_out_of_range() {
        // Two labels but only one encoded row
        let ds = KmerDataset::new(vec![vec![1]], vec![vec![1]], vec![0, 1]);
        assert_eq!(ds.len(), 2);
        assert!(ds.get(1).is_none());
    }

    #[test]
    fn test_real_tokens_and_source() {
        let ds = two_rows().with_source("val_1.csv");
        assert_eq!(ds.source(), Some("val_1.csv"));
        assert_eq!(ds.get(0).unwrap().real_tokens(), 3);
    }

    #[test]
    fn test_iter_visits_every_row() {
        let labels: Vec<i64> = two_rows().iter().map(|s| s.labels).collect();
        assert_eq!(labels, vec![1, 0]);
    }
}
