// ============================================================
// Layer 4 — Data Errors
// ============================================================
// Every failure the data layer can raise, each one carrying
// the file it happened in:
//
//   ReadDir            → directory missing or unreadable
//   Csv                → file missing, unreadable, or malformed
//   MissingColumn      → no SEQ column
//   MissingLabelColumn → neither CLASS nor Class
//   EmptySequence      → a blank SEQ cell
//   InvalidLabel       → a label cell that is not an integer
//   IndexOutOfRange    → dataset row lookup past the end
//
// None of these are recovered from. They convert into
// anyhow::Error at the application layer and can be
// recovered with downcast_ref::<DataError>() when needed.
//
// Reference: thiserror crate documentation
//            Rust Book §9 (Error Handling)

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("cannot read directory '{}': {source}", .path.display())]
    ReadDir {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read CSV '{}': {source}", .path.display())]
    Csv {
        path:   PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("CSV '{}' has no '{column}' column", .path.display())]
    MissingColumn {
        path:   PathBuf,
        column: &'static str,
    },

    #[error("CSV '{}' has no label column (expected one of {expected:?})", .path.display())]
    MissingLabelColumn {
        path:     PathBuf,
        expected: [&'static str; 2],
    },

    #[error("CSV '{}' row {row}: empty sequence", .path.display())]
    EmptySequence {
        path: PathBuf,
        row:  usize,
    },

    #[error("CSV '{}' row {row}: label '{value}' is not an integer", .path.display())]
    InvalidLabel {
        path:  PathBuf,
        row:   usize,
        value: String,
    },

    #[error("index {index} out of range for dataset of length {len}")]
    IndexOutOfRange {
        index: usize,
        len:   usize,
    },
}
