// ============================================================
// Layer 4 — CSV Sequence Loader
// ============================================================
// Loads labelled DNA sequences from a single CSV file.
//
// Expected layout (extra columns are ignored):
//
//   SEQ,CLASS
//   ATCGATCG,2
//   GGCCTTAA,1
//
// The label column is spelled "CLASS" in some exports and
// "Class" in others. Exactly these two spellings are looked up,
// "CLASS" first; anything else is a schema error.
//
// A blank SEQ cell is a schema error, not an empty k-mer string.
//
// The file handle lives only inside load_all() and is closed
// as soon as the rows are parsed.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::data::error::DataError;
use crate::domain::labelled_sequence::LabelledSequence;
use crate::domain::traits::SequenceSource;

/// Column holding the nucleotide sequence
pub const SEQ_COLUMN: &str = "SEQ";

/// Accepted spellings of the label column, in lookup order
pub const LABEL_COLUMNS: [&str; 2] = ["CLASS", "Class"];

/// Loads every row of one CSV file.
/// Implements the SequenceSource trait from Layer 3.
pub struct CsvSequenceLoader {
    /// Path to the CSV file
    path: PathBuf,
}

impl CsvSequenceLoader {
    /// Create a new loader pointed at a CSV file
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// Parse the file, returning typed errors.
    /// load_all() is the anyhow-flavoured wrapper around this.
    pub fn read(&self) -> std::result::Result<Vec<LabelledSequence>, DataError> {
        let csv_err = |source: csv::Error| DataError::Csv { path: self.path.clone(), source };

        let mut reader = csv::Reader::from_path(&self.path).map_err(csv_err)?;

        // ── Resolve column positions from the header row ──────────────────────
        let headers   = reader.headers().map_err(csv_err)?.clone();
        let seq_idx   = column_index(&headers, SEQ_COLUMN).ok_or_else(|| {
            DataError::MissingColumn { path: self.path.clone(), column: SEQ_COLUMN }
        })?;
        let label_idx = resolve_label_column(&headers).ok_or_else(|| {
            DataError::MissingLabelColumn { path: self.path.clone(), expected: LABEL_COLUMNS }
        })?;

        // ── Read rows ─────────────────────────────────────────────────────────
        let mut rows = Vec::new();

        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(csv_err)?;

            let seq   = record.get(seq_idx).unwrap_or_default();
            if seq.trim().is_empty() {
                return Err(DataError::EmptySequence { path: self.path.clone(), row });
            }
            let raw   = record.get(label_idx).unwrap_or_default();
            let label = raw.trim().parse::<i64>().map_err(|_| DataError::InvalidLabel {
                path:  self.path.clone(),
                row,
                value: raw.to_string(),
            })?;

            rows.push(LabelledSequence::new(seq, label));
        }

        tracing::debug!("Read {} rows from '{}'", rows.len(), self.path.display());
        Ok(rows)
    }
}

impl SequenceSource for CsvSequenceLoader {
    fn load_all(&self) -> Result<Vec<LabelledSequence>> {
        Ok(self.read()?)
    }
}

/// Position of an exact header match
fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

/// "CLASS" if present, otherwise "Class"
fn resolve_label_column(headers: &csv::StringRecord) -> Option<usize> {
    LABEL_COLUMNS
        .iter()
        .find_map(|name| column_index(headers, name))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_reads_class_spelling() {
        let dir  = TempDir::new().unwrap();
        let path = write_csv(&dir, "a.csv", "SEQ,Class\nATCGATCG,2\nGGCCTTAA,1\n");

        let rows = CsvSequenceLoader::new(&path).load_all().unwrap();
        assert_eq!(
            rows,
            vec![
                LabelledSequence::new("ATCGATCG", 2),
                LabelledSequence::new("GGCCTTAA", 1),
            ]
        );
    }

    #[test]
    fn test_reads_upper_case_spelling_and_extra_columns() {
        let dir  = TempDir::new().unwrap();
        let path = write_csv(&dir, "b.csv", "ID,CLASS,SEQ\nr1,3,ACGT\n");

        let rows = CsvSequenceLoader::new(&path).load_all().unwrap();
        assert_eq!(rows, vec![LabelledSequence::new("ACGT", 3)]);
    }

    #[test]
    fn test_upper_case_spelling_wins() {
        let dir  = TempDir::new().unwrap();
        let path = write_csv(&dir, "c.csv", "SEQ,Class,CLASS\nACGT,1,4\n");

        let rows = CsvSequenceLoader::new(&path).load_all().unwrap();
        assert_eq!(rows[0].label, 4);
    }

    #[test]
    fn test_missing_seq_column() {
        let dir  = TempDir::new().unwrap();
        let path = write_csv(&dir, "d.csv", "sequence,Class\nACGT,1\n");

        let err = CsvSequenceLoader::new(&path).read().unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { column: "SEQ", .. }));
    }

    #[test]
    fn test_missing_label_column() {
        let dir  = TempDir::new().unwrap();
        let path = write_csv(&dir, "e.csv", "SEQ,class\nACGT,1\n");

        let err = CsvSequenceLoader::new(&path).read().unwrap_err();
        assert!(matches!(err, DataError::MissingLabelColumn { .. }));
    }

    #[test]
    fn test_invalid_label() {
        let dir  = TempDir::new().unwrap();
        let path = write_csv(&dir, "f.csv", "SEQ,Class\nACGT,1\nACGT,two\n");

        let err = CsvSequenceLoader::new(&path).read().unwrap_err();
        assert!(matches!(err, DataError::InvalidLabel { row: 1, .. }));
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        let dir  = TempDir::new().unwrap();
        let path = write_csv(&dir, "h.csv", "SEQ,Class\nACGT,1\n,2\n");

        let err = CsvSequenceLoader::new(&path).read().unwrap_err();
        assert!(matches!(err, DataError::EmptySequence { row: 1, .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = CsvSequenceLoader::new(dir.path().join("nope.csv"))
            .read()
            .unwrap_err();
        assert!(matches!(err, DataError::Csv { .. }));
    }

    #[test]
    fn test_header_only_file_gives_no_rows() {
        let dir  = TempDir::new().unwrap();
        let path = write_csv(&dir, "g.csv", "SEQ,Class\n");

        let rows = CsvSequenceLoader::new(&path).load_all().unwrap();
        assert!(rows.is_empty());
    }
}
