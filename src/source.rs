//! Record loading from local data files.
//!
//! Files are read fully into memory before any request is sent, so a
//! malformed file fails the run before the first POST.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Result, SeedError};

const BOM: char = '\u{feff}';

/// Read a CSV file with a header row into typed records, in file order.
///
/// Headers must match the record's field names exactly. A leading UTF-8
/// byte-order mark is ignored.
pub fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = read_text(path)?;
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()
        .map_err(|source| SeedError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

/// Read a JSON file holding an array of records.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = read_text(path)?;

    serde_json::from_str(&text).map_err(|source| SeedError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn read_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match text.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    })
}
