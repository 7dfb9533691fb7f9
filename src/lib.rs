//! K-mer tokenisation and Burn dataset adapters for DNA sequence
//! classification with pre-trained transformer models.

pub mod application;
pub mod data;
pub mod domain;
pub mod infra;

pub use application::val_dataset::{build_dataset, val_dataset_generator, ValDatasetGenerator};
pub use data::dataset::{KmerDataset, SequenceSample};
pub use domain::kmer::{is_dna_sequence, return_kmer, DEFAULT_KMER_SIZE};
