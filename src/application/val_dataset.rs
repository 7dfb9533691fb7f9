// ============================================================
// Layer 2 — Validation Dataset Generator
// ============================================================
// Turns a directory of labelled CSV files into one KmerDataset
// per file, lazily:
//
//   val_dir/
//     a.csv  ──► load rows ─► k-mers ─► encode ─► KmerDataset
//     b.csv  ──► (only read when next() is called again)
//
// Files are visited in read_dir order, which is NOT sorted.
// Each file is tokenised with a single batch_encode call.
// The iterator is single-pass: calling val_dataset_generator()
// again re-lists and re-reads the directory.
//
// Reference: Rust Book §13 (Iterators)

use anyhow::Result;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::{dataset::KmerDataset, error::DataError, loader::CsvSequenceLoader};
use crate::domain::kmer::return_kmer;
use crate::domain::traits::{BatchEncoder, EncodeOptions, SequenceSource};

/// Build the dataset for a single CSV file.
///
/// Every sequence is k-merised, every label shifted to zero-indexed,
/// and the whole file encoded in one call padded to `max_len`.
pub fn build_dataset<E>(
    encoder:   &E,
    kmer_size: usize,
    path:      &Path,
    max_len:   usize,
) -> Result<KmerDataset>
where
    E: BatchEncoder + ?Sized,
{
    let rows = CsvSequenceLoader::new(path).load_all()?;

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();
    tracing::info!("Loaded '{}' ({} sequences)", name, rows.len());

    let (kmers, labels): (Vec<String>, Vec<i64>) = rows
        .iter()
        .map(|row| (return_kmer(&row.seq, kmer_size), row.zero_indexed_label()))
        .unzip();

    let encoded = encoder.batch_encode(kmers, &EncodeOptions::padded(max_len))?;

    Ok(KmerDataset::from_encoded(encoded, labels).with_source(name))
}

/// Lazily yields one dataset per file of `val_dir`.
///
/// Fails straight away if the directory cannot be listed.
pub fn val_dataset_generator<'a, E>(
    encoder:   &'a E,
    kmer_size: usize,
    val_dir:   impl AsRef<Path>,
    max_len:   usize,
) -> Result<ValDatasetGenerator<'a, E>>
where
    E: BatchEncoder + ?Sized,
{
    let dir     = val_dir.as_ref().to_path_buf();
    let entries = fs::read_dir(&dir)
        .map_err(|source| DataError::ReadDir { path: dir.clone(), source })?;

    tracing::debug!("Listing validation files in '{}'", dir.display());

    Ok(ValDatasetGenerator { encoder, kmer_size, max_len, dir, entries })
}

/// Iterator returned by [`val_dataset_generator`].
pub struct ValDatasetGenerator<'a, E: BatchEncoder + ?Sized> {
    encoder:   &'a E,
    kmer_size: usize,
    max_len:   usize,
    dir:       PathBuf,
    entries:   fs::ReadDir,
}

impl<E: BatchEncoder + ?Sized> ValDatasetGenerator<'_, E> {
    /// Next file path in listing order, skipping sub-directories
    fn next_file(&mut self) -> Option<Result<PathBuf>> {
        for entry in self.entries.by_ref() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let context = format!("Cannot list directory '{}'", self.dir.display());
                    return Some(Err(anyhow::Error::new(e).context(context)));
                }
            };

            let path = entry.path();
            if path.is_dir() {
                tracing::debug!("Skipping sub-directory '{}'", path.display());
                continue;
            }
            return Some(Ok(path));
        }
        None
    }
}

impl<E: BatchEncoder + ?Sized> Iterator for ValDatasetGenerator<'_, E> {
    type Item = Result<KmerDataset>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = match self.next_file()? {
            Ok(path) => path,
            Err(e) => return Some(Err(e)),
        };
        Some(build_dataset(self.encoder, self.kmer_size, &path, self.max_len))
    }
}
