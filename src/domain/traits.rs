// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Two seams keep the pipeline independent of concrete formats:
//
//   SequenceSource → where labelled sequences come from
//                    (CsvSequenceLoader today)
//
//   BatchEncoder   → what turns k-mer strings into token ids
//                    (a HuggingFace tokenizers::Tokenizer, or
//                    a small fake in unit tests)
//
// The dataset generator only ever sees these traits, so it can
// be tested without any tokenizer file on disk.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::labelled_sequence::LabelledSequence;

// ─── SequenceSource ───────────────────────────────────────────────────────────
/// Any component that can load labelled DNA sequences.
pub trait SequenceSource {
    /// Load every row from this source, in source order.
    fn load_all(&self) -> Result<Vec<LabelledSequence>>;
}

// ─── EncodeOptions ────────────────────────────────────────────────────────────
/// Parameters for one batch-encode call.
///
/// The tensor format is not part of the options: records stay as
/// plain vectors until SequenceBatcher stacks them into tensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Target length for padding and truncation
    pub max_length: usize,

    /// Pad every row up to `max_length`
    pub pad_to_max_length: bool,

    /// Cut rows longer than `max_length`
    pub truncation: bool,

    /// Produce attention masks alongside the ids
    pub return_attention_mask: bool,
}

impl EncodeOptions {
    /// Pad and truncate to `max_length`, with attention masks.
    pub fn padded(max_length: usize) -> Self {
        Self {
            max_length,
            pad_to_max_length:     true,
            truncation:            true,
            return_attention_mask: true,
        }
    }
}

// ─── EncodedBatch ─────────────────────────────────────────────────────────────
/// Output of a batch-encode call: one id vector and one mask
/// vector per input string, aligned by index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedBatch {
    pub input_ids:      Vec<Vec<u32>>,
    pub attention_mask: Vec<Vec<u32>>,
}

impl EncodedBatch {
    /// Number of encoded rows
    pub fn len(&self) -> usize {
        self.input_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input_ids.is_empty()
    }
}

// ─── BatchEncoder ─────────────────────────────────────────────────────────────
/// Any tokenizer able to encode a whole batch of strings at once.
///
/// Implementations:
///   - tokenizers::Tokenizer (see infra::tokenizer_store)
pub trait BatchEncoder {
    /// Encode `texts` in one call. Errors are returned untouched
    /// to the caller; there is no retry.
    fn batch_encode(&self, texts: Vec<String>, options: &EncodeOptions) -> Result<EncodedBatch>;
}
