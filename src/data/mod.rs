// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from CSV files on disk
// all the way to tensor batches.
//
// The pipeline flows in this order:
//
//   *.csv files
//       │
//       ▼
//   CsvSequenceLoader → reads SEQ + CLASS/Class columns
//       │
//       ▼
//   return_kmer       → "ATCGA" becomes "ATC TCG CGA"
//       │
//       ▼
//   BatchEncoder      → converts k-mers to token ids + masks
//       │
//       ▼
//   KmerDataset       → implements Burn's Dataset trait
//       │
//       ▼
//   SequenceBatcher   → stacks samples into tensor batches
//
// Each module is responsible for exactly one step.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Typed errors raised while reading and indexing data
pub mod error;

/// Loads labelled sequences from a CSV file using the csv crate
pub mod loader;

/// Implements Burn's Dataset trait for tokenised sequences
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
