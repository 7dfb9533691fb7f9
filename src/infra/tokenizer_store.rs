// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Manages the k-mer tokenizer on disk.
//
// A pre-trained DNA model ships its own tokenizer.json and that
// file is always preferred. When the directory has none, a
// WordLevel tokenizer is written whose vocabulary is every
// possible k-mer over {A,C,G,T}, laid out the DNABERT way:
//
//   [PAD]=0  [UNK]=1  [CLS]=2  [SEP]=3  [MASK]=4
//   AAA=5    AAC=6    AAG=7    AAT=8    ACA=9   ...
//
// The JSON is written by hand and loaded back with
// Tokenizer::from_file(), which avoids the trainer/ModelWrapper
// type mismatch in tokenizers 0.15.
//
// Reference: Ji et al. (2021) DNABERT vocabulary layout

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tokenizers::{PaddingParams, PaddingStrategy, Tokenizer, TruncationParams};

use crate::domain::traits::{BatchEncoder, EncodeOptions, EncodedBatch};

/// Special tokens in id order
pub const SPECIAL_TOKENS: [&str; 5] = ["[PAD]", "[UNK]", "[CLS]", "[SEP]", "[MASK]"];

/// 4^8 = 65536 k-mers is the largest generated vocabulary
pub const MAX_GENERATED_KMER: usize = 8;

const TOKENIZER_FILE: &str = "tokenizer.json";

pub struct TokenizerStore {
    dir: PathBuf,
}

impl TokenizerStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    pub fn tokenizer_path(&self) -> PathBuf {
        self.dir.join(TOKENIZER_FILE)
    }

    /// Load an existing tokenizer or build the k-mer vocabulary
    pub fn load_or_build(&self, kmer_size: usize) -> Result<Tokenizer> {
        if self.tokenizer_path().exists() {
            tracing::info!("Loading existing tokenizer from '{}'", self.dir.display());
            self.load()
        } else {
            tracing::info!("Building new {}-mer tokenizer", kmer_size);
            self.build_and_save(kmer_size)
        }
    }

    /// Load a previously saved tokenizer from JSON file
    pub fn load(&self) -> Result<Tokenizer> {
        let path = self.tokenizer_path();
        Tokenizer::from_file(&path)
            .map_err(|e| anyhow::anyhow!(
                "Cannot load tokenizer from '{}': {}", path.display(), e
            ))
    }

    fn build_and_save(&self, kmer_size: usize) -> Result<Tokenizer> {
        if kmer_size == 0 || kmer_size > MAX_GENERATED_KMER {
            bail!(
                "Cannot generate a vocabulary for k={} (supported: 1..={})",
                kmer_size,
                MAX_GENERATED_KMER
            );
        }

        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        // ── Step 1: Vocabulary: special tokens, then every k-mer ──────────────
        let mut vocab = serde_json::Map::new();
        for (id, token) in SPECIAL_TOKENS.iter().enumerate() {
            vocab.insert(token.to_string(), serde_json::json!(id));
        }
        for (offset, kmer) in all_kmers(kmer_size).into_iter().enumerate() {
            vocab.insert(kmer, serde_json::json!(SPECIAL_TOKENS.len() + offset));
        }
        let vocab_size = vocab.len();

        let added_tokens: Vec<serde_json::Value> = SPECIAL_TOKENS
            .iter()
            .enumerate()
            .map(|(id, token)| serde_json::json!({
                "id": id, "content": token, "single_word": false, "lstrip": false,
                "rstrip": false, "normalized": false, "special": true
            }))
            .collect();

        // ── Step 2: Tokenizer JSON in HuggingFace format ──────────────────────
        // Whitespace pre-tokenizer: one k-mer per token.
        // BertProcessing wraps every sequence in [CLS] ... [SEP].
        let tokenizer_json = serde_json::json!({
            "version": "1.0",
            "truncation": null,
            "padding": null,
            "added_tokens": added_tokens,
            "normalizer": null,
            "pre_tokenizer": {
                "type": "Whitespace"
            },
            "post_processor": {
                "type": "BertProcessing",
                "sep": ["[SEP]", 3],
                "cls": ["[CLS]", 2]
            },
            "decoder": null,
            "model": {
                "type": "WordLevel",
                "vocab": vocab,
                "unk_token": "[UNK]"
            }
        });

        let tok_path = self.tokenizer_path();
        std::fs::write(
            &tok_path,
            serde_json::to_string_pretty(&tokenizer_json)?
        ).with_context(|| format!("Cannot write '{}'", tok_path.display()))?;

        tracing::info!(
            "Tokenizer built with {} tokens, saved to '{}'",
            vocab_size,
            tok_path.display()
        );

        self.load()
    }
}

/// Every string of length `k` over A, C, G, T in lexicographic order
fn all_kmers(k: usize) -> Vec<String> {
    (0..k).fold(vec![String::new()], |prefixes, _| {
        prefixes
            .iter()
            .flat_map(|p| ['A', 'C', 'G', 'T'].iter().map(move |b| format!("{p}{b}")))
            .collect()
    })
}

// ─── BatchEncoder for HuggingFace tokenizers ──────────────────────────────────
// Padding and truncation are configured on a copy so the caller's
// tokenizer keeps whatever settings it was loaded with.
impl BatchEncoder for Tokenizer {
    fn batch_encode(&self, texts: Vec<String>, options: &EncodeOptions) -> Result<EncodedBatch> {
        let mut tokenizer = self.clone();

        let padding = options.pad_to_max_length.then(|| PaddingParams {
            strategy: PaddingStrategy::Fixed(options.max_length),
            ..Default::default()
        });
        tokenizer.with_padding(padding);

        let truncation = options.truncation.then(|| TruncationParams {
            max_length: options.max_length,
            ..Default::default()
        });
        tokenizer
            .with_truncation(truncation)
            .map_err(|e| anyhow::anyhow!("Tokenizer truncation error: {e}"))?;

        let encodings = tokenizer
            .encode_batch(texts, true)
            .map_err(|e| anyhow::anyhow!("Tokenisation error: {e}"))?;

        let input_ids = encodings
            .iter()
            .map(|enc| enc.get_ids().to_vec())
            .collect();

        let attention_mask = encodings
            .iter()
            .map(|enc| {
                if options.return_attention_mask {
                    enc.get_attention_mask().to_vec()
                } else {
                    Vec::new()
                }
            })
            .collect();

        Ok(EncodedBatch { input_ids, attention_mask })
    }
}
