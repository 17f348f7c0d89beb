use crate::error::GranaryError;
use csv::DeserializeRecordsIntoIter;
use serde::Deserialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// One CSV input record. Unknown columns are ignored; absent columns,
/// empty fields and missing trailing fields decode as `None`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawRecord {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// List the CSV files under `dir` to be processed, sorted by path.
///
/// Files whose name contains `validation` are dropped when
/// `exclude_validation` is set, or become the only files kept when
/// `only_validation` is set. Setting both is an error.
pub fn list_data_files(
    dir: &Path,
    exclude_validation: bool,
    only_validation: bool,
) -> Result<Vec<PathBuf>, GranaryError> {
    if exclude_validation && only_validation {
        return Err(GranaryError::FilterConflict);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !is_csv_file(&path) {
            continue;
        }
        if exclude_validation && is_validation_file(&path) {
            continue;
        }
        if only_validation && !is_validation_file(&path) {
            continue;
        }
        files.push(path);
    }
    files.sort();

    Ok(files)
}

fn is_csv_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        == Some(true)
}

fn is_validation_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.contains("validation"))
        == Some(true)
}

/// Open a CSV file as an iterator of micro-batches of at most `chunk_size`
/// records, in file order. The final batch may be short.
pub fn micro_batches(path: &Path, chunk_size: usize) -> Result<MicroBatches, GranaryError> {
    if chunk_size == 0 {
        return Err(GranaryError::InvalidChunkSize);
    }

    // Rows shorter than the header decode with None tails instead of
    // aborting on the length check.
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    Ok(MicroBatches {
        records: reader.into_deserialize(),
        chunk_size,
    })
}

pub struct MicroBatches {
    records: DeserializeRecordsIntoIter<File, RawRecord>,
    chunk_size: usize,
}

impl Iterator for MicroBatches {
    type Item = Result<Vec<RawRecord>, GranaryError>;

    /// A malformed record aborts iteration; the batch collected so far is
    /// dropped with it.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.chunk_size);

        for record in self.records.by_ref() {
            match record {
                Ok(rec) => {
                    batch.push(rec);
                    if batch.len() == self.chunk_size {
                        return Some(Ok(batch));
                    }
                }
                Err(e) => return Some(Err(e.into())),
            }
        }

        if batch.is_empty() { None } else { Some(Ok(batch)) }
    }
}
