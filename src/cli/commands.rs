// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands `kmer`, `validate` and `summarize`
// and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use dna_kmer_prep::application::{PrepConfig, DEFAULT_MAX_LEN};
use dna_kmer_prep::domain::kmer::DEFAULT_KMER_SIZE;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the k-mer string of a single sequence
    Kmer(KmerArgs),

    /// Check every sequence in a CSV directory against the DNA alphabet
    Validate(ValidateArgs),

    /// Tokenise every CSV in a directory and write a summary report
    Summarize(SummarizeArgs),
}

#[derive(Args, Debug)]
pub struct KmerArgs {
    /// The DNA sequence to split
    #[arg(long)]
    pub seq: String,

    /// Length of each k-mer
    #[arg(long, default_value_t = DEFAULT_KMER_SIZE)]
    pub kmer_size: usize,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Directory containing the CSV files
    #[arg(long, default_value = "data/TestData")]
    pub data_dir: String,
}

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Reuse a prep_config.json from an earlier run; the other
    /// summarize flags are ignored when this is given
    #[arg(long)]
    pub config: Option<String>,

    /// Directory containing the CSV files (SEQ + CLASS/Class columns)
    #[arg(long, default_value = "data/TestData")]
    pub data_dir: String,

    /// Directory holding tokenizer.json; a k-mer vocabulary is
    /// generated there if the file is missing
    #[arg(long, default_value = "tokenizer")]
    pub tokenizer_dir: String,

    /// Directory for summary.csv and prep_config.json
    #[arg(long, default_value = "reports")]
    pub report_dir: String,

    /// Length of each k-mer
    #[arg(long, default_value_t = DEFAULT_KMER_SIZE)]
    pub kmer_size: usize,

    /// Pad / truncate every encoded sequence to this many tokens
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    pub max_len: usize,

    /// Records per inspected tensor batch
    #[arg(long, default_value_t = 8)]
    pub batch_size: usize,
}

/// The application layer never sees clap types.
impl From<SummarizeArgs> for PrepConfig {
    fn from(a: SummarizeArgs) -> Self {
        PrepConfig {
            data_dir:      a.data_dir,
            tokenizer_dir: a.tokenizer_dir,
            report_dir:    a.report_dir,
            kmer_size:     a.kmer_size,
            max_len:       a.max_len,
            batch_size:    a.batch_size,
        }
    }
}
