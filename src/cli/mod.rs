// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses command line arguments with clap and delegates all
// work to Layer 2 (application).
//
//   1. `kmer`      — print the k-mers of one sequence
//   2. `validate`  — report non-DNA sequences in a directory
//   3. `summarize` — tokenise a directory and write a report
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{bail, Result};
use clap::Parser;
use commands::{Commands, KmerArgs, SummarizeArgs, ValidateArgs};

use dna_kmer_prep::domain::kmer::{is_dna_sequence, return_kmer};

#[derive(Parser, Debug)]
#[command(
    name = "dna-kmer-prep",
    version,
    about = "Turn labelled DNA CSV files into k-mer tokenised datasets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Route to the matching handler; no computation happens here.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Kmer(args)      => run_kmer(args),
            Commands::Validate(args)  => run_validate(args),
            Commands::Summarize(args) => run_summarize(args),
        }
    }
}

fn run_kmer(args: KmerArgs) -> Result<()> {
    if !is_dna_sequence(&args.seq) {
        tracing::warn!("Input contains characters outside A/C/G/T");
    }
    println!("{}", return_kmer(&args.seq, args.kmer_size));
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<()> {
    use dna_kmer_prep::application::validate_use_case::ValidateUseCase;

    let report = ValidateUseCase::new(&args.data_dir).execute()?;
    for bad in &report.invalid {
        println!("{}:{}\t{}", bad.source, bad.row, bad.seq);
    }

    if !report.is_clean() {
        bail!(
            "{} of {} sequences are not valid DNA",
            report.invalid.len(),
            report.sequences
        );
    }
    println!("All {} sequences in {} files are valid DNA.", report.sequences, report.files);
    Ok(())
}

fn run_summarize(mut args: SummarizeArgs) -> Result<()> {
    use dna_kmer_prep::application::{summarize_use_case::SummarizeUseCase, PrepConfig};

    let config = match args.config.take() {
        Some(path) => PrepConfig::load_json(path)?,
        None       => PrepConfig::from(args),
    };
    tracing::info!("Preparing datasets from: {}", config.data_dir);

    let summaries = SummarizeUseCase::new(config).execute()?;
    for s in &summaries {
        println!(
            "{}\trows={}\tseq_len={}\tmean_tokens={:.1}\tclasses={}",
            s.source, s.rows, s.seq_len, s.mean_tokens, s.classes
        );
    }
    Ok(())
}
