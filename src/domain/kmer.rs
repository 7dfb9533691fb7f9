// ============================================================
// Layer 3 — K-mer Transform and Sequence Validator
// ============================================================
// DNA language models such as DNABERT do not read raw bases.
// They read overlapping k-mers: every substring of length K,
// taken with a sliding window that advances one base at a time.
//
// Example with K=3:
//   Sequence: A T C G A T C G
//   Window 0: A T C            → "ATC"
//   Window 1:   T C G          → "TCG"
//   Window 2:     C G A        → "CGA"
//   ...
//   Output:   "ATC TCG CGA GAT ATC TCG"
//
// A sequence of length L therefore produces L - K + 1 k-mers.
// The k-mers are joined with single spaces so a whitespace
// pre-tokenizer turns each one into exactly one token.
//
// Reference: Ji et al. (2021) DNABERT
//            Rust Book §8 (Strings), §13 (Iterators)

/// Window length used when the caller has no preference.
pub const DEFAULT_KMER_SIZE: usize = 3;

/// The four valid nucleotide bases.
const DNA_BASES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Split `seq` into overlapping k-mers of length `k`, joined by spaces.
///
/// Returns an empty string when `k` is zero or longer than the sequence.
///
/// # Example
/// ```
/// use dna_kmer_prep::domain::kmer::return_kmer;
/// assert_eq!(return_kmer("ATCGATCG", 3), "ATC TCG CGA GAT ATC TCG");
/// ```
pub fn return_kmer(seq: &str, k: usize) -> String {
    // Work on chars so a stray multi-byte character can never
    // split a UTF-8 boundary
    let bases: Vec<char> = seq.chars().collect();

    if k == 0 || k > bases.len() {
        return String::new();
    }

    bases
        .windows(k)
        .map(|window| window.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// True if every character of `seq` is A, C, G or T (any case).
/// The empty string counts as a valid sequence.
pub fn is_dna_sequence(seq: &str) -> bool {
    seq.chars()
        .all(|base| DNA_BASES.contains(&base.to_ascii_uppercase()))
}
