// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, functions and traits that define the
// core concepts of the system.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - NO tokenizer internals
//
// Everything here can be unit tested without a tokenizer
// file or a tensor backend.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The k-mer transform and the DNA alphabet check
pub mod kmer;

// One labelled row read from a CSV file
pub mod labelled_sequence;

// Core abstractions (traits) that other layers implement
pub mod traits;
