// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles the concerns that touch external files:
//
//   tokenizer_store.rs — Tokenizer persistence
//                        Loads a pre-trained tokenizer.json, or
//                        builds a DNABERT-style k-mer vocabulary
//                        if none exists. Also makes
//                        tokenizers::Tokenizer usable as the
//                        pipeline's BatchEncoder.
//
//   summary.rs         — Dataset summary logging
//                        Appends one row per prepared dataset
//                        to a CSV file for later inspection.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Tokenizer building, saving, loading and batch encoding
pub mod tokenizer_store;

/// Per-dataset summary CSV logger
pub mod summary;
