// ============================================================
// Layer 4 — Sequence Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec<SequenceSample>
// into Int tensors, the format the model consumes.
//
// How batching works here:
//   Input:  Vec of N SequenceSamples, each with sequences of length S
//   Output: SequenceBatch with tensors of shape [N, S] and [N]
//
//   We flatten all input_ids into one long Vec, then reshape:
//   [s1_t1, s1_t2, ..., s1_tS, s2_t1, ..., sN_tS] → [N, S]
//
// All sequences are already padded to max_length by the tokenizer,
// so no dynamic padding happens here.
//
// Reference: Burn Book §4 (Batcher)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::SequenceSample;

// ─── SequenceBatch ────────────────────────────────────────────────────────────
/// A batch of classification samples ready for the forward pass.
#[derive(Debug, Clone)]
pub struct SequenceBatch<B: Backend> {
    /// Token ID sequences — shape: [batch_size, seq_len]
    pub input_ids: Tensor<B, 2, Int>,

    /// Attention masks — shape: [batch_size, seq_len]
    /// 1 = real token, 0 = padding
    pub attention_mask: Tensor<B, 2, Int>,

    /// Zero-indexed class labels — shape: [batch_size]
    pub labels: Tensor<B, 1, Int>,
}

// ─── SequenceBatcher ──────────────────────────────────────────────────────────
/// Holds the target device so tensors are created on it.
#[derive(Clone, Debug)]
pub struct SequenceBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> SequenceBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<SequenceSample, SequenceBatch<B>> for SequenceBatcher<B> {
    fn batch(&self, items: Vec<SequenceSample>) -> SequenceBatch<B> {
        let batch_size = items.len();
        // Every row has the same length after fixed padding
        let seq_len    = items.first().map_or(0, |s| s.input_ids.len());

        // i64 holds every u32 id and every label without loss
        let input_flat: Vec<i64> = items
            .iter()
            .flat_map(|s| s.input_ids.iter().map(|&x| i64::from(x)))
            .collect();

        let mask_flat: Vec<i64> = items
            .iter()
            .flat_map(|s| s.attention_mask.iter().map(|&x| i64::from(x)))
            .collect();

        let labels: Vec<i64> = items
            .iter()
            .map(|s| s.labels)
            .collect();

        let input_ids = Tensor::<B, 1, Int>::from_ints(
            input_flat.as_slice(), &self.device
        ).reshape([batch_size, seq_len]);

        let attention_mask = Tensor::<B, 1, Int>::from_ints(
            mask_flat.as_slice(), &self.device
        ).reshape([batch_size, seq_len]);

        let labels = Tensor::<B, 1, Int>::from_ints(
            labels.as_slice(), &self.device
        );

        SequenceBatch { input_ids, attention_mask, labels }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use burn::data::dataset::Dataset;

    use crate::data::dataset::KmerDataset;

    type TestBackend = NdArray;

    #[test]
    fn test_batch_shapes_and_labels() {
        let ds = KmerDataset::new(
            vec![vec![2, 10, 3, 0], vec![2, 11, 12, 3], vec![2, 3, 0, 0]],
            vec![vec![1, 1, 1, 0], vec![1, 1, 1, 1], vec![1, 1, 0, 0]],
            vec![1, 0, 2],
        );
        let items: Vec<SequenceSample> = ds.iter().collect();

        let batcher = SequenceBatcher::<TestBackend>::new(Default::default());
        let batch   = batcher.batch(items);

        assert_eq!(batch.input_ids.dims(), [3, 4]);
        assert_eq!(batch.attention_mask.dims(), [3, 4]);
        assert_eq!(batch.labels.dims(), [3]);

        let labels: Vec<i64> = batch.labels.into_data().iter::<i64>().collect();
        assert_eq!(labels, vec![1, 0, 2]);

        let mask_total: i64 = batch.attention_mask.into_data().iter::<i64>().sum();
        assert_eq!(mask_total, 9);
    }

    #[test]
    fn test_large_ids_and_labels_are_not_truncated() {
        let big_label = i64::from(i32::MAX) + 7;
        let item      = SequenceSample {
            input_ids:      vec![2, u32::MAX, 3],
            attention_mask: vec![1, 1, 1],
            labels:         big_label,
        };

        let batcher = SequenceBatcher::<TestBackend>::new(Default::default());
        let batch   = batcher.batch(vec![item]);

        let ids: Vec<i64> = batch.input_ids.into_data().iter::<i64>().collect();
        assert_eq!(ids, vec![2, i64::from(u32::MAX), 3]);

        let labels: Vec<i64> = batch.labels.into_data().iter::<i64>().collect();
        assert_eq!(labels, vec![big_label]);
    }
}
